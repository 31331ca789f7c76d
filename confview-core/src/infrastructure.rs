use crate::types::{CacheEntry, ConfError, ResolvedPath};

/// Defines the contract for local cache backends.
///
/// The backing store is owned and written by the external synchronization
/// agent; this side only reads it. Implementations must be safe to share
/// across arbitrary query threads, and a path's observed version must never
/// regress for a given reader.
pub trait CacheStore: Send + Sync {
    /// Validate and establish the attachment to the agent-owned cache.
    /// Called once when a client is constructed.
    fn attach(&self) -> Result<(), ConfError>;

    /// Non-blocking point-in-time read of one physical path.
    fn read(&self, path: &ResolvedPath) -> Option<CacheEntry>;

    /// The locality qualifier of the machine this process runs on.
    /// The agent maintains it as a reserved entry in the cache itself.
    fn local_idc(&self) -> Option<String>;

    /// Tell the agent that a key is wanted but missing, so it can pull it
    /// from the central store. Fire-and-forget.
    fn request_sync(&self, path: &ResolvedPath);

    /// Release resources tied to the attachment (shared-memory mapping,
    /// IPC channel). Invoked at most once, when the owning client detaches.
    /// Backends without teardown keep the default no-op.
    fn detach(&self) {}
}
