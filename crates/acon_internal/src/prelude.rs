//! Prelude module for `acon_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use acon_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let config = ParseConfig::strict().with_pad_odd_chunks(true);
//! let err = AniFile::from_bytes_with_config(b"RIFF", &config).unwrap_err();
//! assert!(matches!(err, AniError::EmptyData { actual: 4, .. }));
//! ```

// Re-export everything from acon_types::prelude
#[doc(inline)]
pub use acon_types::prelude::*;

// Re-export the entire acon_types module for advanced usage
#[doc(inline)]
pub use acon_types;
