//! High-level ergonomic client over a pluggable cache backend. This is the
//! surface language bindings and in-process callers both delegate to.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::infrastructure::CacheStore;
use crate::resolver::KeyResolver;
use crate::selector::HostSelector;
use crate::types::{CacheEntry, ConfError, QueryMode};
use crate::waiter::{SyncWaiter, WaitPolicy};

/// The main entry point. Resolves logical keys against the agent-maintained
/// local cache, with idc-override-then-global-fallback semantics and a
/// bounded wait for keys the agent has not synchronized yet.
///
/// Cheap to share: all queries take `&self` and are safe from any number of
/// threads.
pub struct ConfClient {
    store: Arc<dyn CacheStore>,
    policy: WaitPolicy,
    attached: AtomicBool,
}

impl ConfClient {
    /// Attach to a cache backend with the standard wait budget
    /// (100 attempts x 5 ms).
    pub fn attach(store: Arc<dyn CacheStore>) -> Result<Self, ConfError> {
        Self::attach_with_policy(store, WaitPolicy::default())
    }

    /// Attach with a caller-chosen wait budget.
    pub fn attach_with_policy(
        store: Arc<dyn CacheStore>,
        policy: WaitPolicy,
    ) -> Result<Self, ConfError> {
        store.attach()?;
        Ok(Self {
            store,
            policy,
            attached: AtomicBool::new(true),
        })
    }

    /// Release the attachment. Queries issued afterwards fail with
    /// `NotAttached`; in-flight queries finish against the old state.
    /// The backend's teardown runs on the first call only.
    pub fn detach(&self) {
        if self.attached.swap(false, Ordering::SeqCst) {
            self.store.detach();
        }
    }

    /// Single scalar value for `key`, idc override first.
    pub fn get_conf(&self, key: &str, idc: Option<&str>) -> Result<String, ConfError> {
        self.conf(key, idc, QueryMode::Wait)
    }

    /// `get_conf` without the sync wait: probe once, nudge the agent,
    /// return immediately.
    pub fn try_get_conf(&self, key: &str, idc: Option<&str>) -> Result<String, ConfError> {
        self.conf(key, idc, QueryMode::NoWait)
    }

    /// One endpoint from the host list under `key`, picked uniformly at
    /// random. A single-host list is returned deterministically; an empty
    /// one is `KeyNotFound`.
    pub fn get_host(&self, key: &str, idc: Option<&str>) -> Result<String, ConfError> {
        self.host(key, idc, QueryMode::Wait)
    }

    pub fn try_get_host(&self, key: &str, idc: Option<&str>) -> Result<String, ConfError> {
        self.host(key, idc, QueryMode::NoWait)
    }

    /// Every endpoint under `key`, in cache order. "No hosts" is
    /// indistinguishable from "not found" for callers that must not proceed
    /// with zero endpoints, so both surface as `KeyNotFound`.
    pub fn get_all_host(&self, key: &str, idc: Option<&str>) -> Result<Vec<String>, ConfError> {
        self.all_host(key, idc, QueryMode::Wait)
    }

    pub fn try_get_all_host(
        &self,
        key: &str,
        idc: Option<&str>,
    ) -> Result<Vec<String>, ConfError> {
        self.all_host(key, idc, QueryMode::NoWait)
    }

    /// Full child-key -> value mapping of the subtree rooted at `key`.
    /// All or nothing; an empty container is an empty map.
    pub fn get_batch_conf(
        &self,
        key: &str,
        idc: Option<&str>,
    ) -> Result<HashMap<String, String>, ConfError> {
        self.batch_conf(key, idc, QueryMode::Wait)
    }

    pub fn try_get_batch_conf(
        &self,
        key: &str,
        idc: Option<&str>,
    ) -> Result<HashMap<String, String>, ConfError> {
        self.batch_conf(key, idc, QueryMode::NoWait)
    }

    /// Just the child keys under `key`, in cache order.
    pub fn get_batch_keys(&self, key: &str, idc: Option<&str>) -> Result<Vec<String>, ConfError> {
        self.batch_keys(key, idc, QueryMode::Wait)
    }

    pub fn try_get_batch_keys(
        &self,
        key: &str,
        idc: Option<&str>,
    ) -> Result<Vec<String>, ConfError> {
        self.batch_keys(key, idc, QueryMode::NoWait)
    }

    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Common resolution primitive every query shape goes through:
    /// attachment check, key normalization, candidate construction, then
    /// the bounded sync wait.
    fn entry(
        &self,
        key: &str,
        idc: Option<&str>,
        mode: QueryMode,
    ) -> Result<CacheEntry, ConfError> {
        if !self.attached.load(Ordering::SeqCst) {
            return Err(ConfError::NotAttached);
        }

        let key = KeyResolver::normalize(key)?;
        let idc = KeyResolver::qualifier(idc);
        let local_idc = if idc.is_none() {
            self.store.local_idc()
        } else {
            None
        };
        let candidates = KeyResolver::candidates(&key, idc, local_idc.as_deref());

        SyncWaiter::resolve(self.store.as_ref(), &candidates, mode, &self.policy)
    }

    fn conf(&self, key: &str, idc: Option<&str>, mode: QueryMode) -> Result<String, ConfError> {
        let entry = self.entry(key, idc, mode)?;
        match entry.as_scalar() {
            Some(value) => Ok(value.to_string()),
            None => Err(ConfError::DataFormat { path: entry.path }),
        }
    }

    fn host(&self, key: &str, idc: Option<&str>, mode: QueryMode) -> Result<String, ConfError> {
        let hosts = self.all_host(key, idc, mode)?;
        Ok(HostSelector::pick(&mut rand::thread_rng(), &hosts).to_string())
    }

    fn all_host(
        &self,
        key: &str,
        idc: Option<&str>,
        mode: QueryMode,
    ) -> Result<Vec<String>, ConfError> {
        let entry = self.entry(key, idc, mode)?;
        let Some(children) = entry.as_children() else {
            return Err(ConfError::DataFormat { path: entry.path });
        };
        if children.is_empty() {
            return Err(ConfError::KeyNotFound { path: entry.path });
        }
        Ok(children.iter().map(|(_, value)| value.clone()).collect())
    }

    fn batch_conf(
        &self,
        key: &str,
        idc: Option<&str>,
        mode: QueryMode,
    ) -> Result<HashMap<String, String>, ConfError> {
        let entry = self.entry(key, idc, mode)?;
        match entry.as_children() {
            Some(children) => Ok(children.iter().cloned().collect()),
            None => Err(ConfError::DataFormat { path: entry.path }),
        }
    }

    fn batch_keys(
        &self,
        key: &str,
        idc: Option<&str>,
        mode: QueryMode,
    ) -> Result<Vec<String>, ConfError> {
        let entry = self.entry(key, idc, mode)?;
        match entry.as_children() {
            Some(children) => Ok(children.iter().map(|(name, _)| name.clone()).collect()),
            None => Err(ConfError::DataFormat { path: entry.path }),
        }
    }
}

// ─── Process-wide client ────────────────────────────────────────────────────

static GLOBAL: OnceLock<ConfClient> = OnceLock::new();
static GLOBAL_INIT: Mutex<()> = Mutex::new(());

/// Attach the process-wide client exactly once. Racing callers serialize on
/// the init guard; every later call returns the already-attached client and
/// ignores its `store` argument.
pub fn init_global(store: Arc<dyn CacheStore>) -> Result<&'static ConfClient, ConfError> {
    let _guard = GLOBAL_INIT.lock();
    if let Some(client) = GLOBAL.get() {
        return Ok(client);
    }
    let client = ConfClient::attach(store)?;
    // Cannot race: the init guard is held and GLOBAL is still empty.
    Ok(GLOBAL.get_or_init(move || client))
}

/// The process-wide client, if `init_global` has succeeded.
pub fn global() -> Result<&'static ConfClient, ConfError> {
    GLOBAL.get().ok_or(ConfError::NotAttached)
}
