use std::time::Duration;

use crate::infrastructure::CacheStore;
use crate::types::{CacheEntry, ConfError, QueryMode, ResolvedPath};

/// Bounds the synchronization wait. The defaults are the contract callers
/// depend on: at most 100 attempts, 5 ms apart, ~500 ms worst case.
#[derive(Debug, Clone)]
pub struct WaitPolicy {
    pub max_attempts: u32,
    pub retry_interval: Duration,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 100,
            retry_interval: Duration::from_millis(5),
        }
    }
}

/// Drives cache reads until a candidate path appears or the retry budget
/// runs out. Each call owns its attempt counter; nothing is shared between
/// concurrent invocations.
pub struct SyncWaiter;

impl SyncWaiter {
    /// Probe the candidates in priority order; first existing entry wins.
    ///
    /// On a total miss the agent is asked once to fetch the most-specific
    /// candidate, then the probes repeat with a fixed sleep in between.
    /// Exhaustion surfaces a terminal `KeyNotFound` for the candidate that
    /// was requested.
    pub fn resolve(
        store: &dyn CacheStore,
        candidates: &[ResolvedPath],
        mode: QueryMode,
        policy: &WaitPolicy,
    ) -> Result<CacheEntry, ConfError> {
        debug_assert!(!candidates.is_empty());

        if let Some(entry) = Self::probe(store, candidates) {
            return Ok(entry);
        }

        // The qualified candidate is what the agent should go fetch.
        let wanted = &candidates[0];
        store.request_sync(wanted);

        if mode == QueryMode::NoWait {
            return Err(ConfError::KeyNotFound {
                path: wanted.to_string(),
            });
        }

        let mut count = 0;
        while count < policy.max_attempts {
            std::thread::sleep(policy.retry_interval);
            count += 1;

            if let Some(entry) = Self::probe(store, candidates) {
                tracing::debug!(
                    path = %entry.path,
                    attempts = count,
                    "key appeared after sync wait"
                );
                return Ok(entry);
            }
        }

        tracing::warn!(
            path = %wanted,
            attempts = count,
            "sync wait budget exhausted"
        );
        Err(ConfError::KeyNotFound {
            path: wanted.to_string(),
        })
    }

    fn probe(store: &dyn CacheStore, candidates: &[ResolvedPath]) -> Option<CacheEntry> {
        candidates.iter().find_map(|path| store.read(path))
    }
}
