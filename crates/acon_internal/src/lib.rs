//! This module is separated into its own crate to enable simple dynamic linking for `acon-rs`, and should not be used directly.

/// `use acon_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export acon_types for convenience
pub use acon_types;

// Re-export commonly used types at crate root
pub use acon_types::file::{AniError, AniFile, ChunkTree, ParseConfig};
