//! Parse configuration for `.ANI` decoding.
//!
//! The chunk walker itself places no limit on recursion depth or chunk count.
//! Callers handling untrusted files bound the work through these settings.

use encoding_rs::{Encoding, WINDOWS_1251};

/// Configuration for decoding animated cursors.
///
/// # Presets
///
/// - `default()`: 16 MiB files, 16 nesting levels, 65536 chunks
/// - `lenient()`: 256 MiB files, 64 nesting levels, 1048576 chunks
/// - `strict()`: 1 MiB files, 4 nesting levels, 4096 chunks
///
/// # Chunk Padding
///
/// The RIFF specification pads odd-sized chunks to an even offset. Cursors
/// written by the original tooling are read without that pad byte, so
/// `pad_odd_chunks` is off by default. Enable it for files that follow the
/// RIFF alignment rule.
///
/// # Examples
///
/// ```
/// use acon_types::file::ani::ParseConfig;
///
/// let config = ParseConfig::default();
/// assert!(!config.pad_odd_chunks);
///
/// let config = ParseConfig::strict().with_pad_odd_chunks(true);
/// assert_eq!(config.max_depth, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
	/// Largest accepted buffer in bytes
	pub max_file_size: usize,
	/// Maximum `LIST` nesting depth (top level is depth 0)
	pub max_depth: usize,
	/// Maximum number of chunk nodes in the tree
	pub max_chunks: usize,
	/// Skip a pad byte after odd-sized chunks
	pub pad_odd_chunks: bool,
	/// Code page for `INAM`/`IART` text
	pub text_encoding: &'static Encoding,
}

impl Default for ParseConfig {
	fn default() -> Self {
		Self {
			max_file_size: 16 * 1024 * 1024,
			max_depth: 16,
			max_chunks: 65536,
			pad_odd_chunks: false,
			text_encoding: WINDOWS_1251,
		}
	}
}

impl ParseConfig {
	/// Create a new parse configuration with custom limits.
	///
	/// # Arguments
	/// * `max_file_size` - Largest accepted buffer in bytes
	/// * `max_depth` - `LIST` nesting limit
	/// * `max_chunks` - Chunk node limit
	pub fn new(max_file_size: usize, max_depth: usize, max_chunks: usize) -> Self {
		Self {
			max_file_size,
			max_depth,
			max_chunks,
			..Self::default()
		}
	}

	/// Create a lenient configuration with higher limits.
	pub fn lenient() -> Self {
		Self::new(256 * 1024 * 1024, 64, 1 << 20)
	}

	/// Create a strict configuration with lower limits.
	///
	/// Real cursors nest at most one level (`INFO`, `fram`), so 4 levels
	/// leave headroom while rejecting pathological files early.
	pub fn strict() -> Self {
		Self::new(1024 * 1024, 4, 4096)
	}

	/// Sets whether odd-sized chunks are followed by a pad byte
	pub fn with_pad_odd_chunks(mut self, pad: bool) -> Self {
		self.pad_odd_chunks = pad;
		self
	}

	/// Sets the code page used for text metadata
	pub fn with_text_encoding(mut self, encoding: &'static Encoding) -> Self {
		self.text_encoding = encoding;
		self
	}

	/// Looks up a code page by its WHATWG label, e.g. `"windows-1252"`
	pub fn encoding_for_label(label: &str) -> Option<&'static Encoding> {
		Encoding::for_label(label.as_bytes())
	}
}
