//! This crate provides core data types and file format support for the `acon-rs` project.
//!
//! # File Formats
//!
//! - **ANI**: Windows animated cursors, a RIFF container of form type `ACON` holding an
//!   animation header, one embedded `.ICO`/`.CUR` image per frame, optional per-step
//!   rates and playback order, and optional title/artist text
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use acon_types::prelude::*;
//!
//! # fn main() -> Result<(), AniError> {
//! let cursor = AniFile::open("stopwtch.ani")?;
//! for step in cursor.steps() {
//!     println!("{step}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use acon_types::file::{AniFile, ParseConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("stopwtch.ani")?;
//! let cursor = AniFile::from_bytes_with_config(&data, &ParseConfig::strict())?;
//! # Ok(())
//! # }
//! ```

pub mod file;

/// `use acon_types::prelude::*;` to import commonly used items.
pub mod prelude;
