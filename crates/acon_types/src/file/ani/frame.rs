//! Frame extraction from the `fram` list.

use std::{fmt::Display, ops::Range};

use crate::file::AniError;

use super::{
	chunk::{Chunk, ChunkTree},
	fourcc::ChunkId,
	icon::ImageInfo,
	reader::ByteReader,
};

/// One animation frame: an embedded icon/cursor image.
///
/// The frame owns a copy of its payload so it stays usable after the
/// source buffer is dropped; [`Frame::range`] records where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
	range: Range<usize>,
	data: Vec<u8>,
}

impl Frame {
	/// Creates a frame from its source range and payload bytes
	pub fn new(range: Range<usize>, data: Vec<u8>) -> Self {
		Self {
			range,
			data,
		}
	}

	/// Absolute payload range within the source file
	pub fn range(&self) -> Range<usize> {
		self.range.clone()
	}

	/// Raw image bytes, a complete `.ICO`/`.CUR` file
	pub fn data(&self) -> &[u8] {
		&self.data
	}

	/// Payload length in bytes
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Returns `true` if the payload is empty
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Reads dimensions and hotspot from the embedded image directory
	pub fn image_info(&self) -> Result<ImageInfo, AniError> {
		ImageInfo::from_bytes(&self.data)
	}

	/// Consumes the frame, returning its bytes
	pub fn into_data(self) -> Vec<u8> {
		self.data
	}
}

impl Display for Frame {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Frame: 0x{:08X}..0x{:08X} ({} bytes)",
			self.range.start,
			self.range.end,
			self.len()
		)
	}
}

impl AsRef<[u8]> for Frame {
	fn as_ref(&self) -> &[u8] {
		&self.data
	}
}

/// Turns an embedded frame image into a displayable one.
///
/// Implemented by whatever owns image decoding; the parser only hands over
/// each frame's bytes, in frame order.
pub trait FrameDecoder {
	/// Decoded image, typically a bitmap plus hotspot
	type Image;
	/// Decoding failure
	type Error;

	/// Decodes one frame's bytes
	fn decode(&self, data: &[u8]) -> Result<Self::Image, Self::Error>;
}

impl<F, I, E> FrameDecoder for F
where
	F: Fn(&[u8]) -> Result<I, E>,
{
	type Image = I;
	type Error = E;

	fn decode(&self, data: &[u8]) -> Result<I, E> {
		self(data)
	}
}

/// Collects the frames of the top-level `fram` list in on-disk order.
///
/// Fails with [`AniError::NoFramChunk`] if there is no `fram` list and with
/// [`AniError::NoIconChunk`] on the first child that is not an `icon` chunk.
pub fn extract_frames(tree: &ChunkTree, data: &[u8]) -> Result<Vec<Frame>, AniError> {
	let children = tree
		.find(ChunkId::Fram)
		.and_then(Chunk::children)
		.ok_or(AniError::NoFramChunk)?;
	let reader = ByteReader::new(data);

	children
		.iter()
		.map(|child| {
			if child.id() != ChunkId::Icon {
				return Err(AniError::NoIconChunk(child.tag()));
			}
			let bytes = reader.slice(child.range())?;
			Ok(Frame::new(child.range(), bytes.to_vec()))
		})
		.collect()
}
