//! Title and artist metadata from the `INFO` list.

use encoding_rs::Encoding;
use serde::Serialize;

use crate::file::AniError;

use super::{chunk::ChunkTree, fourcc::ChunkId, reader::ByteReader};

/// Text metadata of an animated cursor.
///
/// A missing `INFO` list, or a missing `INAM`/`IART` inside it, yields
/// `None` for that field rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Info {
	/// `INAM` text
	pub title: Option<String>,
	/// `IART` text
	pub artist: Option<String>,
}

impl Info {
	/// Reads `INAM` and `IART` from the top-level `INFO` list.
	///
	/// Text is decoded with `encoding`, a legacy single-byte code page, and
	/// trailing NUL bytes are dropped.
	pub fn from_tree(
		tree: &ChunkTree,
		data: &[u8],
		encoding: &'static Encoding,
	) -> Result<Self, AniError> {
		let Some(info) = tree.find(ChunkId::Info) else {
			return Ok(Self::default());
		};

		let reader = ByteReader::new(data);
		let text = |id: ChunkId| -> Result<Option<String>, AniError> {
			info.find_child(id)
				.map(|chunk| reader.slice(chunk.range()).map(|bytes| decode_text(bytes, encoding)))
				.transpose()
		};

		Ok(Self {
			title: text(ChunkId::Inam)?,
			artist: text(ChunkId::Iart)?,
		})
	}

	/// Returns `true` when neither field is present
	pub fn is_empty(&self) -> bool {
		self.title.is_none() && self.artist.is_none()
	}
}

/// Decodes legacy text, stripping trailing NUL bytes
pub fn decode_text(bytes: &[u8], encoding: &'static Encoding) -> String {
	let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |pos| pos + 1);
	let (text, _encoding_used, _had_errors) = encoding.decode(&bytes[..end]);
	text.into_owned()
}
