//! Chunk tree construction.
//!
//! The chunk stream after the RIFF header is walked into a tree of [`Chunk`]
//! nodes. `LIST` chunks become inner nodes named after their format tag; every
//! other chunk becomes a leaf. Nodes store byte ranges into the source buffer,
//! never slices, so the tree can outlive the borrow used to build it.
//!
//! # Walk
//!
//! ```text
//! offset = start
//! while offset < boundary:
//!     id, size = chunk header at offset
//!     LIST -> format tag at offset+8, children over [offset+12, offset+8+size)
//!     leaf -> payload [offset+8, offset+8+size)
//!     offset += 8 + size        (+1 if padding is enabled and size is odd)
//! ```
//!
//! A chunk whose declared size reaches past the enclosing boundary is an
//! error; the walker never clamps a chunk to fit.

use std::ops::Range;

use log::{debug, trace, warn};

use crate::file::AniError;

use super::{
	constants,
	fourcc::{ChunkId, FourCC},
	parse_config::ParseConfig,
	reader::ByteReader,
	riff::{ChunkHeader, RiffHeader},
};

/// A node of the chunk tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chunk {
	id: ChunkId,
	tag: FourCC,
	offset: usize,
	declared_size: usize,
	range: Range<usize>,
	children: Option<Vec<Chunk>>,
}

impl Chunk {
	/// Effective id: the chunk type, or the format tag for `LIST` chunks
	pub fn id(&self) -> ChunkId {
		self.id
	}

	/// Raw 4-byte form of [`Chunk::id`]
	pub fn tag(&self) -> FourCC {
		self.tag
	}

	/// Absolute offset of the chunk header
	pub fn offset(&self) -> usize {
		self.offset
	}

	/// Payload size from the chunk header; for `LIST` chunks this includes the format tag
	pub fn declared_size(&self) -> usize {
		self.declared_size
	}

	/// Absolute payload range; for `LIST` chunks it starts after the format tag
	pub fn range(&self) -> Range<usize> {
		self.range.clone()
	}

	/// Payload length in bytes
	pub fn len(&self) -> usize {
		self.range.len()
	}

	/// Returns `true` if the payload is empty
	pub fn is_empty(&self) -> bool {
		self.range.is_empty()
	}

	/// Returns `true` for `LIST` chunks
	pub fn is_list(&self) -> bool {
		self.children.is_some()
	}

	/// Child chunks of a `LIST`, `None` for leaves
	pub fn children(&self) -> Option<&[Chunk]> {
		self.children.as_deref()
	}

	/// First direct child with the given id
	pub fn find_child(&self, id: ChunkId) -> Option<&Chunk> {
		self.children()?.iter().find(|child| child.id == id)
	}

	/// Borrows this chunk's payload out of the buffer it was parsed from
	pub fn payload<'a>(&self, data: &'a [u8]) -> Result<&'a [u8], AniError> {
		ByteReader::new(data).slice(self.range())
	}
}

/// The top-level chunks of an `.ANI` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ChunkTree {
	chunks: Vec<Chunk>,
}

impl ChunkTree {
	/// Validates the RIFF header and walks the chunk stream of `data`.
	///
	/// The stream ends at the size declared in the RIFF header, clamped to
	/// the buffer length. Fails with [`AniError::NoChunksData`] if the stream
	/// holds no chunk.
	///
	/// A header that declares more bytes than the buffer holds is not an
	/// error by itself: the walk logs a warning and stops at the end of the
	/// buffer. Only a chunk that crosses that end fails, with
	/// [`AniError::OutOfBounds`].
	pub fn from_bytes(data: &[u8], config: &ParseConfig) -> Result<Self, AniError> {
		let header = RiffHeader::from_bytes(data)?;
		header.validate()?;

		let declared_end = header.declared_end();
		if declared_end > data.len() {
			warn!(
				"RIFF header declares {} bytes but only {} are available",
				declared_end,
				data.len()
			);
		} else if declared_end < data.len() {
			debug!("Ignoring {} trailing bytes after RIFF chunk", data.len() - declared_end);
		}

		let boundary = declared_end.min(data.len());
		let tree = Self::build(data, constants::RIFF_HEADER_SIZE, boundary, config)?;
		if tree.is_empty() {
			return Err(AniError::NoChunksData);
		}
		Ok(tree)
	}

	/// Walks the chunk stream in `[start, boundary)` without any header checks.
	pub fn build(
		data: &[u8],
		start: usize,
		boundary: usize,
		config: &ParseConfig,
	) -> Result<Self, AniError> {
		if boundary > data.len() {
			return Err(AniError::out_of_bounds(start, boundary.saturating_sub(start), data.len()));
		}

		let mut walker = Walker {
			reader: ByteReader::new(data),
			config,
			count: 0,
		};
		let chunks = walker.walk(start, boundary, 0)?;
		debug!("Parsed {} top-level chunks ({} total)", chunks.len(), walker.count);

		Ok(Self {
			chunks,
		})
	}

	/// Top-level chunks in file order
	pub fn chunks(&self) -> &[Chunk] {
		&self.chunks
	}

	/// Number of top-level chunks
	pub fn len(&self) -> usize {
		self.chunks.len()
	}

	/// Returns `true` if there are no top-level chunks
	pub fn is_empty(&self) -> bool {
		self.chunks.is_empty()
	}

	/// Total number of nodes at every depth
	pub fn node_count(&self) -> usize {
		self.descendants().count()
	}

	/// First top-level chunk with the given id
	pub fn find(&self, id: ChunkId) -> Option<&Chunk> {
		self.chunks.iter().find(|chunk| chunk.id == id)
	}

	/// Iterates top-level chunks
	pub fn iter(&self) -> std::slice::Iter<'_, Chunk> {
		self.chunks.iter()
	}

	/// Depth-first, pre-order iteration over every node with its depth
	pub fn descendants(&self) -> Descendants<'_> {
		Descendants {
			stack: self.chunks.iter().rev().map(|chunk| (0, chunk)).collect(),
		}
	}
}

impl<'a> IntoIterator for &'a ChunkTree {
	type Item = &'a Chunk;
	type IntoIter = std::slice::Iter<'a, Chunk>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Pre-order iterator returned by [`ChunkTree::descendants`]
pub struct Descendants<'a> {
	stack: Vec<(usize, &'a Chunk)>,
}

impl<'a> Iterator for Descendants<'a> {
	type Item = (usize, &'a Chunk);

	fn next(&mut self) -> Option<Self::Item> {
		let (depth, chunk) = self.stack.pop()?;
		if let Some(children) = chunk.children() {
			self.stack.extend(children.iter().rev().map(|child| (depth + 1, child)));
		}
		Some((depth, chunk))
	}
}

struct Walker<'a> {
	reader: ByteReader<'a>,
	config: &'a ParseConfig,
	count: usize,
}

impl Walker<'_> {
	fn walk(&mut self, start: usize, boundary: usize, depth: usize) -> Result<Vec<Chunk>, AniError> {
		let mut chunks = Vec::new();
		let mut offset = start;

		while offset < boundary {
			if boundary - offset < constants::CHUNK_HEADER_SIZE {
				return Err(AniError::out_of_bounds(
					offset,
					constants::CHUNK_HEADER_SIZE,
					boundary,
				));
			}
			let header: ChunkHeader = self.reader.read_struct(offset)?;

			self.count += 1;
			if self.count > self.config.max_chunks {
				return Err(AniError::TooManyChunks {
					limit: self.config.max_chunks,
				});
			}

			let size = header.size as usize;
			let payload_start = offset + constants::CHUNK_HEADER_SIZE;
			let end = payload_start
				.checked_add(size)
				.filter(|&end| end <= boundary)
				.ok_or_else(|| AniError::out_of_bounds(payload_start, size, boundary))?;

			let chunk = if header.is_list() {
				self.list(offset, size, payload_start..end, depth)?
			} else {
				trace!("{:indent$}Chunk ID: {} ({} bytes)", "", header.id, size, indent = depth * 2);
				Chunk {
					id: ChunkId::from(header.id),
					tag: header.id,
					offset,
					declared_size: size,
					range: payload_start..end,
					children: None,
				}
			};
			chunks.push(chunk);

			offset = end;
			if self.config.pad_odd_chunks && size % 2 == 1 && offset < boundary {
				offset += 1;
			}
		}

		Ok(chunks)
	}

	fn list(
		&mut self,
		offset: usize,
		size: usize,
		payload: Range<usize>,
		depth: usize,
	) -> Result<Chunk, AniError> {
		if size < constants::LIST_FORMAT_SIZE {
			return Err(AniError::ListTooShort {
				offset,
				size,
			});
		}
		if depth >= self.config.max_depth {
			return Err(AniError::NestingTooDeep {
				offset,
				limit: self.config.max_depth,
			});
		}

		let format = self.reader.read_tag(payload.start)?;
		trace!("{:indent$}Chunk ID: LIST/{} ({} bytes)", "", format, size, indent = depth * 2);

		let children_start = payload.start + constants::LIST_FORMAT_SIZE;
		let children = self.walk(children_start, payload.end, depth + 1)?;

		Ok(Chunk {
			id: ChunkId::from(format),
			tag: format,
			offset,
			declared_size: size,
			range: children_start..payload.end,
			children: Some(children),
		})
	}
}
