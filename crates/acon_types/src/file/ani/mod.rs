//! `.ANI` animated cursor support for `acon-rs` project.
//!
//! This module decodes Windows animated cursors into an immutable [`File`]:
//! the animation header, the frame images, optional per-step rates and
//! playback order, and optional title/artist text.
//!
//! # File Structure Overview
//!
//! An `.ANI` file is a RIFF container with form type `ACON`. All integers are
//! little-endian.
//!
//! ```text
//! Offset  Size  Field
//! ------  ----  ------------------------------------------
//! 0x00    4     "RIFF"
//! 0x04    4     size of everything after this field (u32)
//! 0x08    4     "ACON"
//! 0x0C    ...   chunk stream
//! ```
//!
//! Every chunk is a 4-byte id, a u32 payload size and the payload:
//!
//! ```text
//! "anih"        36-byte animation header (see AnimationHeader)
//! "LIST"        4-byte format tag followed by nested chunks
//!   "INFO"        "INAM" title text, "IART" artist text
//!   "fram"        one "icon" chunk per frame, each a complete .ICO/.CUR file
//! "rate"        u32 per step: display time in jiffies (1/60 s)
//! "seq "        u32 per step: frame index (note the trailing space)
//! ```
//!
//! Unknown chunks are kept in the [`ChunkTree`] as opaque leaves.
//!
//! ## Chunk Padding
//!
//! RIFF pads odd-sized chunks to an even offset. The original cursor tooling
//! reads chunks back to back without that pad byte and so does this decoder
//! by default; see [`ParseConfig::pad_odd_chunks`].
//!
//! # Examples
//!
//! ## Loading a cursor
//!
//! ```no_run
//! use acon_types::file::ani::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cursor = File::open("stopwtch.ani")?;
//!
//! println!("Frames: {}", cursor.frame_count());
//! println!("Default rate: {} jiffies", cursor.display_rate());
//! if let Some(title) = cursor.title() {
//!     println!("Title: {title}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Inspecting frames and the chunk tree
//!
//! ```no_run
//! use acon_types::file::ani::{ChunkTree, File, ParseConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("stopwtch.ani")?;
//! let config = ParseConfig::strict();
//!
//! let tree = ChunkTree::from_bytes(&data, &config)?;
//! for (depth, chunk) in tree.descendants() {
//!     println!("{:indent$}{} ({} bytes)", "", chunk.tag(), chunk.len(), indent = depth * 2);
//! }
//!
//! let cursor = File::from_tree(&tree, &data, &config)?;
//! for frame in &cursor {
//!     let info = frame.image_info()?;
//!     println!("{frame}: {info}");
//! }
//! # Ok(())
//! # }
//! ```

mod array;
mod chunk;
mod file;
mod fourcc;
mod frame;
mod header;
mod icon;
mod info;
mod parse_config;
mod playback;
mod reader;
mod riff;

/// Constants used in `.ANI` files
pub mod constants;

pub use self::array::{decode_u32_array, read_array};
pub use self::chunk::{Chunk, ChunkTree, Descendants};
pub use self::file::File;
pub use self::fourcc::{ChunkId, FourCC};
pub use self::frame::{Frame, FrameDecoder, extract_frames};
pub use self::header::{AnimationFlags, AnimationHeader};
pub use self::icon::{ImageInfo, ResourceKind};
pub use self::info::{Info, decode_text};
pub use self::parse_config::ParseConfig;
pub use self::playback::{Step, Steps, jiffies_to_duration};
pub use self::reader::{ByteReader, FixedLayout};
pub use self::riff::{ChunkHeader, RiffHeader};
