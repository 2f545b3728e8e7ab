//! Prelude module for `acon_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use acon_types::prelude::*;
//!
//! let cursor = AniFile::open_with_config("busy.ani", &ParseConfig::lenient());
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// Header types
	AnimationFlags,
	AnimationHeader,

	// Errors
	AniError,

	// ANI types
	AniFile,
	AniFrame,
	AniInfo,
	AniStep,
	AniSteps,

	// Chunk types
	ChunkId,
	ChunkTree,
	FourCC,

	// Frame decoding
	FrameDecoder,
	ImageInfo,

	ParseConfig,
	ResourceKind,
};

// Constants
#[doc(inline)]
pub use crate::file::ani::constants::JIFFIES_PER_SECOND;

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
