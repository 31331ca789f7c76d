mod entry;
mod primitives;

pub use entry::*;
pub use primitives::*;
