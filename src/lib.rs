#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `acon-rs` decodes Windows animated cursors (`.ani`) into an immutable model of
//! frames, timing and metadata.
//!
//! ```no_run
//! use acon_rs::prelude::*;
//!
//! # fn main() -> Result<(), AniError> {
//! let cursor = AniFile::open("stopwtch.ani")?;
//! println!("{cursor}");
//! # Ok(())
//! # }
//! ```
pub use acon_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use acon_dylib;
