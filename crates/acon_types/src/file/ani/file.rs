//! ANI file structure and loading.
//!
//! This module defines the main `File` struct, the decoded and immutable
//! model of an animated cursor.

use std::io::Read;

use log::debug;

use crate::file::AniError;

use super::{
	array::read_array,
	chunk::ChunkTree,
	fourcc::ChunkId,
	frame::{Frame, FrameDecoder, extract_frames},
	header::AnimationHeader,
	info::Info,
	parse_config::ParseConfig,
	playback::Steps,
};

/// A decoded animated cursor.
///
/// Built in a single pass over a caller-supplied buffer. The result owns
/// all of its data, so the buffer can be dropped once parsing returns.
///
/// # Build Stages
///
/// 1. RIFF header: at least 12 bytes, tag `RIFF`, form type `ACON`
/// 2. Chunk tree over the declared RIFF size; empty trees are rejected
/// 3. `anih` header and `fram` frames (both required)
/// 4. `INFO` text, `rate` and `seq ` arrays (all optional)
///
/// Any failure aborts the build.
///
/// # Examples
///
/// ```no_run
/// use acon_types::file::ani::File;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let cursor = File::open("stopwtch.ani")?;
///
/// println!("Title: {}", cursor.title().unwrap_or("<none>"));
/// for step in cursor.steps() {
///     // `seq ` entries are not checked against the frame list
///     if let Some(frame) = cursor.frame(step.frame) {
///         println!("{} -> {} bytes for {:?}", step.index, frame.len(), step.duration());
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct File {
	header: AnimationHeader,
	frames: Vec<Frame>,
	info: Info,
	rate: Option<Vec<u32>>,
	seq: Option<Vec<u32>>,
}

impl File {
	/// Opens and parses an `.ANI` file with the default configuration
	pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, AniError> {
		Self::open_with_config(path, &ParseConfig::default())
	}

	/// Opens and parses an `.ANI` file
	pub fn open_with_config(
		path: impl AsRef<std::path::Path>,
		config: &ParseConfig,
	) -> Result<Self, AniError> {
		let data = std::fs::read(path)?;
		Self::from_bytes_with_config(&data, config)
	}

	/// Parses a cursor from any reader with the default configuration
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, AniError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(&data)
	}

	/// Parses a cursor from a byte slice with the default configuration
	pub fn from_bytes(data: &[u8]) -> Result<Self, AniError> {
		Self::from_bytes_with_config(data, &ParseConfig::default())
	}

	/// Parses a cursor from a byte slice
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - The buffer is shorter than the RIFF header or larger than `config` allows
	/// - The header tags are not `RIFF`/`ACON`
	/// - A chunk extends past its enclosing boundary
	/// - The `anih` chunk or the `fram` list is missing
	/// - The `fram` list holds anything but `icon` chunks
	/// - A `rate`/`seq ` payload is not a multiple of 4 bytes
	pub fn from_bytes_with_config(data: &[u8], config: &ParseConfig) -> Result<Self, AniError> {
		if data.len() > config.max_file_size {
			return Err(AniError::FileTooLarge {
				size: data.len(),
				limit: config.max_file_size,
			});
		}

		let tree = ChunkTree::from_bytes(data, config)?;
		Self::from_tree(&tree, data, config)
	}

	/// Assembles the model from an already built chunk tree over `data`
	pub fn from_tree(
		tree: &ChunkTree,
		data: &[u8],
		config: &ParseConfig,
	) -> Result<Self, AniError> {
		let header = AnimationHeader::from_tree(tree, data)?;
		let frames = extract_frames(tree, data)?;
		let info = Info::from_tree(tree, data, config.text_encoding)?;
		let rate = read_array(tree, data, ChunkId::Rate)?;
		let seq = read_array(tree, data, ChunkId::Seq)?;

		if header.frames as usize != frames.len() {
			debug!("anih declares {} frames, fram holds {}", header.frames, frames.len());
		}
		debug!(
			"Parsed ANI: {} frames, {} rate entries, {} seq entries",
			frames.len(),
			rate.as_ref().map_or(0, Vec::len),
			seq.as_ref().map_or(0, Vec::len)
		);

		Ok(Self {
			header,
			frames,
			info,
			rate,
			seq,
		})
	}

	/// Returns the animation header
	pub fn header(&self) -> &AnimationHeader {
		&self.header
	}

	/// Returns all frames in on-disk order
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Returns a frame by index
	pub fn frame(&self, index: usize) -> Option<&Frame> {
		self.frames.get(index)
	}

	/// Returns the number of frames
	pub fn frame_count(&self) -> usize {
		self.frames.len()
	}

	/// Returns `true` when there is more than one frame to cycle through
	pub fn is_animated(&self) -> bool {
		self.frames.len() > 1
	}

	/// Returns the title and artist metadata
	pub fn info(&self) -> &Info {
		&self.info
	}

	/// Returns the `INAM` title
	pub fn title(&self) -> Option<&str> {
		self.info.title.as_deref()
	}

	/// Returns the `IART` artist
	pub fn artist(&self) -> Option<&str> {
		self.info.artist.as_deref()
	}

	/// Returns the per-step display rates in jiffies
	pub fn rate(&self) -> Option<&[u32]> {
		self.rate.as_deref()
	}

	/// Returns the playback order as frame indices
	pub fn seq(&self) -> Option<&[u32]> {
		self.seq.as_deref()
	}

	/// Returns the default display rate in jiffies
	pub fn display_rate(&self) -> u32 {
		self.header.display_rate
	}

	/// Returns the playback schedule of one animation loop
	pub fn steps(&self) -> Steps<'_> {
		Steps::new(
			self.frames.len(),
			self.header.steps,
			self.header.display_rate,
			self.rate(),
			self.seq(),
		)
	}

	/// Returns `seq ` entries that point past the frame list
	pub fn dangling_sequence_entries(&self) -> Vec<u32> {
		self.seq()
			.unwrap_or_default()
			.iter()
			.copied()
			.filter(|&index| index as usize >= self.frames.len())
			.collect()
	}

	/// Decodes every frame in order, stopping at the first failure
	pub fn decode_frames<D>(&self, decoder: &D) -> Result<Vec<D::Image>, D::Error>
	where
		D: FrameDecoder,
	{
		self.frames.iter().map(|frame| decoder.decode(frame.data())).collect()
	}

	/// Returns an iterator over all frames
	pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
		self.frames.iter()
	}
}

impl std::fmt::Display for File {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "ANI File: {} frames", self.frames.len())?;
		if let Some(title) = self.title() {
			write!(f, ", \"{}\"", title)?;
		}
		if let Some(artist) = self.artist() {
			write!(f, " by {}", artist)?;
		}
		Ok(())
	}
}

impl<'a> IntoIterator for &'a File {
	type Item = &'a Frame;
	type IntoIter = std::slice::Iter<'a, Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl TryFrom<&[u8]> for File {
	type Error = AniError;

	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		Self::from_bytes(value)
	}
}

impl TryFrom<Vec<u8>> for File {
	type Error = AniError;

	fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
		Self::from_bytes(&value)
	}
}

impl TryFrom<&Vec<u8>> for File {
	type Error = AniError;

	fn try_from(value: &Vec<u8>) -> Result<Self, Self::Error> {
		Self::from_bytes(value)
	}
}

impl TryFrom<Option<&[u8]>> for File {
	type Error = AniError;

	fn try_from(value: Option<&[u8]>) -> Result<Self, Self::Error> {
		value.ok_or(AniError::NoCursorData).and_then(Self::from_bytes)
	}
}
