use serde::{Deserialize, Serialize};

/// The payload of a cache entry: either a single opaque scalar or, for
/// container keys, the ordered child key/value pairs (host lists, subtrees).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryValue {
    Scalar(String),
    /// Order is the agent's insertion order. Preserved for display;
    /// correctness must not depend on it.
    Children(Vec<(String, String)>),
}

/// One versioned (path, value) record owned by the synchronization agent.
/// The client never mutates entries; the agent bumps `version` on rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub path: String,
    pub value: EntryValue,
    pub version: u64,
}

impl CacheEntry {
    pub fn scalar(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            value: EntryValue::Scalar(value.into()),
            version: 1,
        }
    }

    pub fn children(path: impl Into<String>, pairs: Vec<(String, String)>) -> Self {
        Self {
            path: path.into(),
            value: EntryValue::Children(pairs),
            version: 1,
        }
    }

    /// The scalar payload, if this entry holds one.
    pub fn as_scalar(&self) -> Option<&str> {
        match &self.value {
            EntryValue::Scalar(v) => Some(v),
            EntryValue::Children(_) => None,
        }
    }

    /// The ordered child pairs, if this entry is a container.
    pub fn as_children(&self) -> Option<&[(String, String)]> {
        match &self.value {
            EntryValue::Scalar(_) => None,
            EntryValue::Children(pairs) => Some(pairs),
        }
    }
}
