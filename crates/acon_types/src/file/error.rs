//! Error types for animated cursor parsing.

use thiserror::Error;

use super::ani::FourCC;

/// Errors that can occur when parsing an `.ANI` animated cursor
///
/// Every variant aborts the whole parse; there is no partially built model.
#[derive(Debug, Error)]
pub enum AniError {
	/// No buffer was supplied at all
	#[error("Cursor data is nil")]
	NoCursorData,

	/// Buffer too short to contain the 12-byte RIFF header
	#[error("Cursor data is empty: expected at least {expected} bytes, got {actual} bytes")]
	EmptyData {
		/// Minimum number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// Container tag is not `RIFF`
	#[error("Unexpected format: expected \"RIFF\", got \"{0}\"")]
	NoRiffFormat(FourCC),

	/// RIFF form type is not `ACON`
	#[error("Unexpected format: expected \"ACON\", got \"{0}\"")]
	NoAconFormat(FourCC),

	/// Chunk stream is empty
	#[error("No chunks in file")]
	NoChunksData,

	/// Animation header chunk is missing
	#[error("No anih chunk found")]
	NoAnihChunk,

	/// Frame list is missing
	#[error("No fram chunk in file")]
	NoFramChunk,

	/// A child of the frame list is not an `icon` chunk
	#[error("Unexpected chunk type in fram: \"{0}\"")]
	NoIconChunk(FourCC),

	/// A read would run past the buffer or the enclosing chunk
	#[error("Read of {len} bytes at offset {offset} exceeds boundary {boundary}")]
	OutOfBounds {
		/// Offset of the attempted read
		offset: usize,
		/// Width of the attempted read
		len: usize,
		/// Exclusive upper bound that was violated
		boundary: usize,
	},

	/// A `LIST` chunk is too small to hold its format tag
	#[error("LIST chunk at offset {offset} declares {size} bytes, too small for a format tag")]
	ListTooShort {
		/// Offset of the chunk header
		offset: usize,
		/// Declared payload size
		size: usize,
	},

	/// An integer array payload is not a multiple of 4 bytes
	#[error("Chunk \"{id}\" holds {len} bytes, which is not a multiple of 4")]
	MisalignedArray {
		/// Chunk id
		id: FourCC,
		/// Payload length in bytes
		len: usize,
	},

	/// The buffer exceeds the configured size limit
	#[error("File too large: {size} bytes exceeds the limit of {limit} bytes")]
	FileTooLarge {
		/// Buffer size in bytes
		size: usize,
		/// Configured limit
		limit: usize,
	},

	/// `LIST` chunks are nested deeper than allowed
	#[error("LIST nesting at offset {offset} exceeds the depth limit of {limit}")]
	NestingTooDeep {
		/// Offset of the offending `LIST` header
		offset: usize,
		/// Configured limit
		limit: usize,
	},

	/// The chunk tree holds more nodes than allowed
	#[error("Chunk count exceeds the limit of {limit}")]
	TooManyChunks {
		/// Configured limit
		limit: usize,
	},

	/// An embedded icon/cursor image does not start with a valid directory
	#[error("Invalid icon directory: {0}")]
	InvalidImageDirectory(&'static str),

	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl AniError {
	/// Creates an [`AniError::OutOfBounds`] error.
	pub fn out_of_bounds(offset: usize, len: usize, boundary: usize) -> Self {
		Self::OutOfBounds {
			offset,
			len,
			boundary,
		}
	}

	/// Returns `true` when the error describes malformed structure rather
	/// than a missing required chunk or a caller-side problem.
	pub fn is_structural(&self) -> bool {
		matches!(
			self,
			Self::OutOfBounds { .. }
				| Self::ListTooShort { .. }
				| Self::MisalignedArray { .. }
				| Self::NoIconChunk(_)
				| Self::InvalidImageDirectory(_)
		)
	}
}
