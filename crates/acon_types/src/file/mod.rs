//! File type support for `acon-rs` project.

mod error;

pub mod ani;

// Re-export unified error type
pub use error::AniError;

// Re-export main file types
pub use ani::{
	AnimationFlags, AnimationHeader, Chunk as AniChunk, ChunkId, ChunkTree, File as AniFile,
	FourCC, Frame as AniFrame, FrameDecoder, ImageInfo, Info as AniInfo, ParseConfig,
	ResourceKind, Step as AniStep, Steps as AniSteps,
};
