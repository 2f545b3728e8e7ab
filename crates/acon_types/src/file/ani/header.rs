//! The `anih` animation header.

use std::fmt::Display;

use bitflags::bitflags;
use serde::Serialize;

use crate::file::AniError;

use super::{
	chunk::ChunkTree,
	constants,
	fourcc::ChunkId,
	reader::{ByteReader, FixedLayout},
};

bitflags! {
	/// Attribute bits of the `anih` header.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
	pub struct AnimationFlags: u32 {
		/// Frames are Windows icon/cursor resources rather than raw bitmaps
		const ICON = 0x01;
		/// The file carries a `seq ` chunk
		const SEQUENCE = 0x02;
	}
}

/// Animation header structure (36 bytes, 9 × u32, little-endian)
///
/// ```text
/// Offset  Field          Description
/// ------  -------------  ---------------------------------------------
/// 0x00    cb_size        Structure size in bytes (36)
/// 0x04    frames         Number of images stored in the `fram` list
/// 0x08    steps          Frames shown before the animation repeats
/// 0x0C    width          Frame width in pixels (raw bitmaps only)
/// 0x10    height         Frame height in pixels (raw bitmaps only)
/// 0x14    bit_count      Bits per pixel (raw bitmaps only)
/// 0x18    planes         Color planes (raw bitmaps only)
/// 0x1C    display_rate   Default frame duration in jiffies (1/60 s)
/// 0x20    attributes     See [`AnimationFlags`]
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct AnimationHeader {
	/// Data structure size in bytes
	pub cb_size: u32,
	/// Number of frames stored in the file
	pub frames: u32,
	/// Number of steps before the animation repeats
	pub steps: u32,
	/// Frame width in pixels
	pub width: u32,
	/// Frame height in pixels
	pub height: u32,
	/// Bits per pixel
	pub bit_count: u32,
	/// Number of color planes
	pub planes: u32,
	/// Default frame display rate in jiffies
	pub display_rate: u32,
	/// Attribute bit flags
	pub attributes: u32,
}

impl AnimationHeader {
	/// Size of the header in bytes
	pub const SIZE: usize = constants::ANIH_SIZE;

	/// Decodes the header from the start of `data`.
	///
	/// There is no size negotiation: fewer than 36 bytes is a bounds error,
	/// extra bytes are ignored.
	pub fn from_bytes(data: &[u8]) -> Result<Self, AniError> {
		ByteReader::new(data).read_struct(0)
	}

	/// Finds the top-level `anih` chunk and decodes its payload
	pub fn from_tree(tree: &ChunkTree, data: &[u8]) -> Result<Self, AniError> {
		let chunk = tree.find(ChunkId::Anih).ok_or(AniError::NoAnihChunk)?;
		let payload = ByteReader::new(data).sub(chunk.range())?;
		payload.read_struct(0)
	}

	/// Attribute bits; unknown bits are retained
	pub fn flags(&self) -> AnimationFlags {
		AnimationFlags::from_bits_retain(self.attributes)
	}

	/// Returns `true` when frames are icon/cursor resources
	pub fn is_icon(&self) -> bool {
		self.flags().contains(AnimationFlags::ICON)
	}

	/// Returns `true` when the header announces a `seq ` chunk
	pub fn has_sequence(&self) -> bool {
		self.flags().contains(AnimationFlags::SEQUENCE)
	}
}

impl FixedLayout for AnimationHeader {
	const SIZE: usize = constants::ANIH_SIZE;

	fn decode(reader: &ByteReader<'_>, offset: usize) -> Result<Self, AniError> {
		let field = |index: usize| reader.read_u32_le(offset + index * 4);
		Ok(Self {
			cb_size: field(0)?,
			frames: field(1)?,
			steps: field(2)?,
			width: field(3)?,
			height: field(4)?,
			bit_count: field(5)?,
			planes: field(6)?,
			display_rate: field(7)?,
			attributes: field(8)?,
		})
	}
}

impl Display for AnimationHeader {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"ANI Header:\n\
			- Struct Size: {} bytes\n\
			- Frames: {}\n\
			- Steps: {}\n\
			- Size: {}x{}\n\
			- Bit Count: {}\n\
			- Planes: {}\n\
			- Display Rate: {} jiffies\n\
			- Attributes: 0x{:08X}",
			self.cb_size,
			self.frames,
			self.steps,
			self.width,
			self.height,
			self.bit_count,
			self.planes,
			self.display_rate,
			self.attributes,
		)
	}
}
