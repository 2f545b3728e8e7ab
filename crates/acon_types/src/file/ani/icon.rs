//! Directory peek for embedded icon/cursor images.
//!
//! Each `icon` chunk holds a complete `.ICO` or `.CUR` file. Only the
//! directory is read here; pixel data is left to an image decoder.
//!
//! ```text
//! ICONDIR (6 bytes)
//! 0x00  u16  reserved (0)
//! 0x02  u16  resource type (1 = icon, 2 = cursor)
//! 0x04  u16  image count
//!
//! ICONDIRENTRY (16 bytes, first entry at 0x06)
//! 0x00  u8   width  (0 means 256)
//! 0x01  u8   height (0 means 256)
//! 0x02  u8   palette size
//! 0x03  u8   reserved
//! 0x04  u16  planes      | hotspot x (cursor)
//! 0x06  u16  bit count   | hotspot y (cursor)
//! 0x08  u32  image data size
//! 0x0C  u32  image data offset
//! ```

use std::fmt::Display;

use serde::Serialize;

use crate::file::AniError;

use super::reader::{ByteReader, FixedLayout};

/// Kind of resource stored in an embedded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResourceKind {
	/// Plain icon, no hotspot
	Icon,
	/// Cursor with a hotspot
	Cursor,
}

impl ResourceKind {
	/// File extension conventionally used for this kind
	pub fn extension(&self) -> &'static str {
		match self {
			Self::Icon => "ico",
			Self::Cursor => "cur",
		}
	}
}

/// Summary of an embedded image taken from its first directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ImageInfo {
	/// Icon or cursor
	pub kind: ResourceKind,
	/// Number of images in the directory
	pub image_count: u16,
	/// Width of the first image in pixels
	pub width: u32,
	/// Height of the first image in pixels
	pub height: u32,
	/// Pointer position for cursors
	pub hotspot: Option<(u16, u16)>,
	/// Size of the first image's data in bytes
	pub data_size: u32,
	/// Offset of the first image's data within the embedded file
	pub data_offset: u32,
}

impl ImageInfo {
	/// Reads the directory at the start of an embedded `.ICO`/`.CUR` file
	pub fn from_bytes(data: &[u8]) -> Result<Self, AniError> {
		ByteReader::new(data).read_struct(0)
	}
}

impl FixedLayout for ImageInfo {
	const SIZE: usize = 6 + 16;

	fn decode(reader: &ByteReader<'_>, offset: usize) -> Result<Self, AniError> {
		if reader.read_u16_le(offset)? != 0 {
			return Err(AniError::InvalidImageDirectory("reserved field is not zero"));
		}
		let kind = match reader.read_u16_le(offset + 2)? {
			1 => ResourceKind::Icon,
			2 => ResourceKind::Cursor,
			_ => return Err(AniError::InvalidImageDirectory("unknown resource type")),
		};
		let image_count = reader.read_u16_le(offset + 4)?;
		if image_count == 0 {
			return Err(AniError::InvalidImageDirectory("directory has no images"));
		}

		let entry = offset + 6;
		let dimension = |raw: u8| {
			if raw == 0 {
				256
			} else {
				u32::from(raw)
			}
		};
		let width = dimension(reader.read_u8(entry)?);
		let height = dimension(reader.read_u8(entry + 1)?);
		let hotspot = match kind {
			ResourceKind::Cursor => {
				Some((reader.read_u16_le(entry + 4)?, reader.read_u16_le(entry + 6)?))
			}
			ResourceKind::Icon => None,
		};

		Ok(Self {
			kind,
			image_count,
			width,
			height,
			hotspot,
			data_size: reader.read_u32_le(entry + 8)?,
			data_offset: reader.read_u32_le(entry + 12)?,
		})
	}
}

impl Display for ImageInfo {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} {}x{}", self.kind.extension(), self.width, self.height)?;
		if let Some((x, y)) = self.hotspot {
			write!(f, " hotspot=({x},{y})")?;
		}
		if self.image_count > 1 {
			write!(f, " (+{} more)", self.image_count - 1)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn directory(kind: u16, width: u8, x: u16, y: u16) -> Vec<u8> {
		let mut data = Vec::new();
		data.extend_from_slice(&0u16.to_le_bytes());
		data.extend_from_slice(&kind.to_le_bytes());
		data.extend_from_slice(&1u16.to_le_bytes());
		data.extend_from_slice(&[width, width, 0, 0]);
		data.extend_from_slice(&x.to_le_bytes());
		data.extend_from_slice(&y.to_le_bytes());
		data.extend_from_slice(&0x130u32.to_le_bytes());
		data.extend_from_slice(&22u32.to_le_bytes());
		data
	}

	#[test]
	fn test_cursor_hotspot() {
		let info = ImageInfo::from_bytes(&directory(2, 32, 15, 3)).unwrap();
		assert_eq!(info.kind, ResourceKind::Cursor);
		assert_eq!((info.width, info.height), (32, 32));
		assert_eq!(info.hotspot, Some((15, 3)));
		assert_eq!(info.data_offset, 22);
	}

	#[test]
	fn test_icon_has_no_hotspot_and_zero_means_256() {
		let info = ImageInfo::from_bytes(&directory(1, 0, 1, 32)).unwrap();
		assert_eq!(info.kind, ResourceKind::Icon);
		assert_eq!(info.width, 256);
		assert_eq!(info.hotspot, None);
	}

	#[test]
	fn test_rejects_non_directory() {
		assert!(matches!(
			ImageInfo::from_bytes(&directory(7, 32, 0, 0)),
			Err(AniError::InvalidImageDirectory(_))
		));
		assert!(matches!(ImageInfo::from_bytes(&[0u8; 10]), Err(AniError::OutOfBounds { .. })));
	}
}
