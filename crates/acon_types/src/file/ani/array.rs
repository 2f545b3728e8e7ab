//! Integer array chunks (`rate`, `seq `).

use crate::file::AniError;

use super::{chunk::ChunkTree, constants, fourcc::ChunkId, reader::ByteReader};

/// Decodes the top-level chunk `id` as a sequence of little-endian `u32`.
///
/// Returns `Ok(None)` when the chunk is absent. A payload whose length is not
/// a multiple of 4 fails with [`AniError::MisalignedArray`].
pub fn read_array(
	tree: &ChunkTree,
	data: &[u8],
	id: ChunkId,
) -> Result<Option<Vec<u32>>, AniError> {
	let Some(chunk) = tree.find(id) else {
		return Ok(None);
	};

	let payload = ByteReader::new(data).slice(chunk.range())?;
	decode_u32_array(payload).map(Some).ok_or(AniError::MisalignedArray {
		id: chunk.tag(),
		len: payload.len(),
	})
}

/// Splits `payload` into little-endian `u32` values, `None` if misaligned
pub fn decode_u32_array(payload: &[u8]) -> Option<Vec<u32>> {
	let entries = payload.chunks_exact(constants::ARRAY_ENTRY_SIZE);
	if !entries.remainder().is_empty() {
		return None;
	}
	Some(entries.map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]])).collect())
}
