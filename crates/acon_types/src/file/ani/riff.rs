//! RIFF container and chunk headers.

use std::fmt::Display;

use crate::file::AniError;

use super::{
	constants,
	fourcc::FourCC,
	reader::{ByteReader, FixedLayout},
};

/// The 12-byte header opening every `.ANI` file
///
/// ```text
/// Offset  Size  Field   Description
/// ------  ----  ------  ---------------------------------------
/// 0x00    4     tag     "RIFF"
/// 0x04    4     size    bytes following this field (u32, LE)
/// 0x08    4     format  "ACON"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RiffHeader {
	/// Container tag
	pub tag: FourCC,
	/// Declared size of everything after the size field
	pub size: u32,
	/// Form type
	pub format: FourCC,
}

impl RiffHeader {
	/// Decodes the header without validating the tags.
	///
	/// Fails with [`AniError::EmptyData`] when fewer than 12 bytes are given.
	pub fn from_bytes(data: &[u8]) -> Result<Self, AniError> {
		if data.len() < constants::RIFF_HEADER_SIZE {
			return Err(AniError::EmptyData {
				expected: constants::RIFF_HEADER_SIZE,
				actual: data.len(),
			});
		}
		ByteReader::new(data).read_struct(0)
	}

	/// Checks the `RIFF` tag and the `ACON` form type
	pub fn validate(&self) -> Result<(), AniError> {
		if self.tag != constants::RIFF {
			return Err(AniError::NoRiffFormat(self.tag));
		}
		if self.format != constants::ACON {
			return Err(AniError::NoAconFormat(self.format));
		}
		Ok(())
	}

	/// Exclusive end of the chunk stream as declared by the header
	pub fn declared_end(&self) -> usize {
		(self.size as usize).saturating_add(constants::CHUNK_HEADER_SIZE)
	}
}

impl FixedLayout for RiffHeader {
	const SIZE: usize = constants::RIFF_HEADER_SIZE;

	fn decode(reader: &ByteReader<'_>, offset: usize) -> Result<Self, AniError> {
		Ok(Self {
			tag: reader.read_tag(offset)?,
			size: reader.read_u32_le(offset + 4)?,
			format: reader.read_tag(offset + 8)?,
		})
	}
}

impl Display for RiffHeader {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} {{ size: {}, format: {} }}", self.tag, self.size, self.format)
	}
}

/// The 8-byte header preceding every chunk payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkHeader {
	/// Chunk type
	pub id: FourCC,
	/// Payload length, excluding this header
	pub size: u32,
}

impl ChunkHeader {
	/// Returns `true` for `LIST` chunks
	pub fn is_list(&self) -> bool {
		self.id == constants::LIST
	}
}

impl FixedLayout for ChunkHeader {
	const SIZE: usize = constants::CHUNK_HEADER_SIZE;

	fn decode(reader: &ByteReader<'_>, offset: usize) -> Result<Self, AniError> {
		Ok(Self {
			id: reader.read_tag(offset)?,
			size: reader.read_u32_le(offset + 4)?,
		})
	}
}
