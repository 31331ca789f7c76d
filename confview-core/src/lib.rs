//! # confview-core
//!
//! Client-side resolution engine for configuration data that an external
//! agent continuously synchronizes into a local cache. Resolves hierarchical
//! keys with locality (idc) overrides, waits a bounded time for keys the
//! agent has not written yet, and exposes scalar, host-selection, host-list,
//! and batch-subtree query shapes over one resolution primitive.

pub mod client;
pub mod infrastructure;
pub mod infrastructure_in_memory;
pub mod resolver;
pub mod selector;
pub mod types;
pub mod waiter;

#[cfg(test)]
mod infrastructure_test;
#[cfg(test)]
mod resolver_test;
