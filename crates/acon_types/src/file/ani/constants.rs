//! Constants used in `.ANI` files

/// Container tag at offset 0
pub const RIFF: [u8; 4] = *b"RIFF";

/// RIFF form type identifying an animated cursor
pub const ACON: [u8; 4] = *b"ACON";

/// Chunk type of nested chunk lists
pub const LIST: [u8; 4] = *b"LIST";

/// `LIST` format holding text metadata
pub const INFO: [u8; 4] = *b"INFO";

/// Title text chunk inside `INFO`
pub const INAM: [u8; 4] = *b"INAM";

/// Artist text chunk inside `INFO`
pub const IART: [u8; 4] = *b"IART";

/// Per-step display rate array
pub const RATE: [u8; 4] = *b"rate";

/// Playback sequence array; chunk ids are always four bytes, hence the trailing space
pub const SEQ: [u8; 4] = *b"seq ";

/// Animation header chunk
pub const ANIH: [u8; 4] = *b"anih";

/// `LIST` format holding the frames
pub const FRAM: [u8; 4] = *b"fram";

/// Frame image chunk inside `fram`
pub const ICON: [u8; 4] = *b"icon";

/// Size of the RIFF header (tag + size + form type)
pub const RIFF_HEADER_SIZE: usize = 12;

/// Size of a chunk header (id + size)
pub const CHUNK_HEADER_SIZE: usize = 8;

/// Size of the format tag opening a `LIST` payload
pub const LIST_FORMAT_SIZE: usize = 4;

/// Size of the `anih` structure (9 × u32)
pub const ANIH_SIZE: usize = 36;

/// Width of one `rate`/`seq ` entry
pub const ARRAY_ENTRY_SIZE: usize = 4;

/// Display rates are measured in jiffies, 1/60th of a second
pub const JIFFIES_PER_SECOND: u32 = 60;
