//! Four-character codes and the closed set of chunk ids.

use std::fmt::Display;

use serde::{Serialize, Serializer};

use super::constants;

/// A raw 4-byte RIFF tag.
///
/// Tags are compared as bytes. The text form strips NUL and `0x01` bytes,
/// which some writers use to pad short ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
	/// Creates a tag from its raw bytes
	pub const fn new(bytes: [u8; 4]) -> Self {
		Self(bytes)
	}

	/// Returns the raw bytes
	pub const fn bytes(&self) -> [u8; 4] {
		self.0
	}

	/// Returns the tag as text with padding bytes removed
	pub fn as_string(&self) -> String {
		self.0
			.iter()
			.filter(|&&b| b != 0x00 && b != 0x01)
			.map(|&b| {
				if b.is_ascii_graphic() || b == b' ' {
					b as char
				} else {
					char::REPLACEMENT_CHARACTER
				}
			})
			.collect()
	}
}

impl Display for FourCC {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_string())
	}
}

impl From<[u8; 4]> for FourCC {
	fn from(value: [u8; 4]) -> Self {
		Self(value)
	}
}

impl From<&[u8; 4]> for FourCC {
	fn from(value: &[u8; 4]) -> Self {
		Self(*value)
	}
}

impl PartialEq<[u8; 4]> for FourCC {
	fn eq(&self, other: &[u8; 4]) -> bool {
		&self.0 == other
	}
}

impl Serialize for FourCC {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.as_string())
	}
}

/// Chunk ids this decoder understands, plus an opaque fallback.
///
/// `LIST` chunks are identified by their format tag (`INFO`, `fram`), so
/// [`ChunkId::List`] only appears for a `LIST` whose format is itself `LIST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkId {
	/// `RIFF`
	Riff,
	/// `LIST`
	List,
	/// `ACON`
	Acon,
	/// `INFO` list
	Info,
	/// `INAM` title text
	Inam,
	/// `IART` artist text
	Iart,
	/// `rate` array
	Rate,
	/// `seq ` array
	Seq,
	/// `anih` animation header
	Anih,
	/// `fram` list
	Fram,
	/// `icon` frame image
	Icon,
	/// Anything else, kept as an opaque leaf
	Unknown(FourCC),
}

impl ChunkId {
	/// Returns the 4-byte tag this id is stored as
	pub fn fourcc(&self) -> FourCC {
		let bytes = match self {
			Self::Riff => constants::RIFF,
			Self::List => constants::LIST,
			Self::Acon => constants::ACON,
			Self::Info => constants::INFO,
			Self::Inam => constants::INAM,
			Self::Iart => constants::IART,
			Self::Rate => constants::RATE,
			Self::Seq => constants::SEQ,
			Self::Anih => constants::ANIH,
			Self::Fram => constants::FRAM,
			Self::Icon => constants::ICON,
			Self::Unknown(tag) => return *tag,
		};
		FourCC(bytes)
	}

	/// Returns `true` for ids outside the known set
	pub fn is_unknown(&self) -> bool {
		matches!(self, Self::Unknown(_))
	}
}

impl From<FourCC> for ChunkId {
	fn from(tag: FourCC) -> Self {
		match tag.0 {
			constants::RIFF => Self::Riff,
			constants::LIST => Self::List,
			constants::ACON => Self::Acon,
			constants::INFO => Self::Info,
			constants::INAM => Self::Inam,
			constants::IART => Self::Iart,
			constants::RATE => Self::Rate,
			constants::SEQ => Self::Seq,
			constants::ANIH => Self::Anih,
			constants::FRAM => Self::Fram,
			constants::ICON => Self::Icon,
			_ => Self::Unknown(tag),
		}
	}
}

impl From<ChunkId> for FourCC {
	fn from(id: ChunkId) -> Self {
		id.fourcc()
	}
}

impl Display for ChunkId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.fourcc())
	}
}
