//! Bounds-checked little-endian field reads over a byte buffer.

use std::ops::Range;

use crate::file::AniError;

use super::fourcc::FourCC;

/// A structure with a fixed little-endian layout.
///
/// Implementors decode themselves field by field at known offsets;
/// [`ByteReader::read_struct`] has already checked that `SIZE` bytes
/// are available at `offset`.
pub trait FixedLayout: Sized {
	/// Encoded size in bytes
	const SIZE: usize;

	/// Decodes the structure starting at `offset`
	fn decode(reader: &ByteReader<'_>, offset: usize) -> Result<Self, AniError>;
}

/// Read-only view over a byte buffer with checked field access.
///
/// All offsets are relative to the start of the view. Reads never panic;
/// anything crossing the end of the view fails with [`AniError::OutOfBounds`].
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
	data: &'a [u8],
}

impl<'a> ByteReader<'a> {
	/// Creates a reader over `data`
	pub fn new(data: &'a [u8]) -> Self {
		Self {
			data,
		}
	}

	/// Number of bytes in the view
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Returns `true` if the view is empty
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Returns the `len` bytes at `offset`
	pub fn bytes(&self, offset: usize, len: usize) -> Result<&'a [u8], AniError> {
		let end = offset
			.checked_add(len)
			.filter(|&end| end <= self.data.len())
			.ok_or_else(|| AniError::out_of_bounds(offset, len, self.data.len()))?;
		Ok(&self.data[offset..end])
	}

	/// Returns the bytes covered by `range`
	pub fn slice(&self, range: Range<usize>) -> Result<&'a [u8], AniError> {
		let len = range.end.checked_sub(range.start).ok_or_else(|| {
			AniError::out_of_bounds(range.start, 0, range.end.min(self.data.len()))
		})?;
		self.bytes(range.start, len)
	}

	/// Returns a reader restricted to `range`
	pub fn sub(&self, range: Range<usize>) -> Result<ByteReader<'a>, AniError> {
		self.slice(range).map(ByteReader::new)
	}

	/// Reads a 4-byte tag
	pub fn read_tag(&self, offset: usize) -> Result<FourCC, AniError> {
		self.read_array::<4>(offset).map(FourCC)
	}

	/// Reads a little-endian `u16`
	pub fn read_u16_le(&self, offset: usize) -> Result<u16, AniError> {
		self.read_array::<2>(offset).map(u16::from_le_bytes)
	}

	/// Reads a little-endian `u32`
	pub fn read_u32_le(&self, offset: usize) -> Result<u32, AniError> {
		self.read_array::<4>(offset).map(u32::from_le_bytes)
	}

	/// Reads a single byte
	pub fn read_u8(&self, offset: usize) -> Result<u8, AniError> {
		self.read_array::<1>(offset).map(|[b]| b)
	}

	/// Decodes a fixed-layout structure at `offset`
	pub fn read_struct<T: FixedLayout>(&self, offset: usize) -> Result<T, AniError> {
		self.bytes(offset, T::SIZE)?;
		T::decode(self, offset)
	}

	fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N], AniError> {
		let mut out = [0u8; N];
		out.copy_from_slice(self.bytes(offset, N)?);
		Ok(out)
	}
}

impl<'a> From<&'a [u8]> for ByteReader<'a> {
	fn from(data: &'a [u8]) -> Self {
		Self::new(data)
	}
}
