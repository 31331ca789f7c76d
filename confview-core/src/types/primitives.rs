use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A canonical physical cache path, as actually probed against the local
/// cache. Produced by the resolver, never built by hand: it is either the
/// idc-qualified form (`/{idc}{key}`) or the global form (`{key}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedPath(String);

impl ResolvedPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a query tolerates agent synchronization lag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// Poll the cache up to the wait budget before giving up
    Wait,
    /// Probe once, post a sync request, and return immediately
    NoWait,
}

/// Everything a query can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfError {
    /// Malformed or empty key supplied by the caller. Never retried.
    #[error("invalid key: {key:?}")]
    InvalidKey { key: String },

    /// The key was still absent after the sync-wait budget, or a host
    /// query resolved to a container with no children.
    #[error("key not found: {path}")]
    KeyNotFound { path: String },

    /// The entry exists but holds the wrong shape for the query
    /// (e.g. a scalar where children were expected).
    #[error("unexpected data shape at {path}")]
    DataFormat { path: String },

    /// The cache backend could not be attached at startup.
    #[error("failed to attach local cache: {reason}")]
    AttachFailed { reason: String },

    /// A query was issued before attach or after detach.
    #[error("client is not attached to the local cache")]
    NotAttached,
}
