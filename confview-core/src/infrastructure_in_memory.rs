use std::collections::HashMap;

use parking_lot::{Mutex, RwLock};

use crate::infrastructure::CacheStore;
use crate::types::{CacheEntry, ConfError, EntryValue, ResolvedPath};

/// In-process cache backend.
///
/// Read side implements [`CacheStore`]; the write side (`publish`,
/// `publish_children`, `remove`, `set_local_idc`) stands in for the
/// synchronization agent, which is why writes bump per-path versions the
/// same way the agent does. Used by the CLI snapshot loader and by tests
/// that need a scriptable agent.
pub struct InMemoryCacheStore {
    // Map of physical path -> entry
    entries: RwLock<HashMap<String, CacheEntry>>,
    local_idc: RwLock<Option<String>>,
    // Paths the waiter asked the agent to fetch, in arrival order
    sync_requests: Mutex<Vec<String>>,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            local_idc: RwLock::new(None),
            sync_requests: Mutex::new(Vec::new()),
        }
    }

    /// Agent-side write of a scalar entry. Overwriting bumps the version.
    pub fn publish(&self, path: impl Into<String>, value: impl Into<String>) {
        self.insert(path.into(), EntryValue::Scalar(value.into()));
    }

    /// Agent-side write of a container entry (host list or subtree).
    pub fn publish_children(&self, path: impl Into<String>, pairs: Vec<(String, String)>) {
        self.insert(path.into(), EntryValue::Children(pairs));
    }

    pub fn remove(&self, path: &str) {
        self.entries.write().remove(path);
    }

    pub fn set_local_idc(&self, idc: impl Into<String>) {
        *self.local_idc.write() = Some(idc.into());
    }

    /// Paths the client has asked the agent to synchronize.
    pub fn sync_requests(&self) -> Vec<String> {
        self.sync_requests.lock().clone()
    }

    fn insert(&self, path: String, value: EntryValue) {
        let mut entries = self.entries.write();
        let version = entries.get(&path).map_or(1, |e| e.version + 1);
        entries.insert(
            path.clone(),
            CacheEntry {
                path,
                value,
                version,
            },
        );
    }
}

impl Default for InMemoryCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore for InMemoryCacheStore {
    fn attach(&self) -> Result<(), ConfError> {
        Ok(())
    }

    fn read(&self, path: &ResolvedPath) -> Option<CacheEntry> {
        self.entries.read().get(path.as_str()).cloned()
    }

    fn local_idc(&self) -> Option<String> {
        self.local_idc.read().clone()
    }

    fn request_sync(&self, path: &ResolvedPath) {
        self.sync_requests.lock().push(path.as_str().to_string());
    }
}
