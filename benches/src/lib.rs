//! Benchmark helper utilities for acon-rs
//!
//! This module provides utilities for generating synthetic `.ANI` files and
//! common benchmark sizes. Every generated file is a valid `RIFF`/`ACON`
//! container, so benchmarks measure the success path of the decoder.

/// Appends one chunk (`id`, little-endian size, payload) to `out`
fn push_chunk(out: &mut Vec<u8>, id: &[u8; 4], payload: &[u8]) {
	out.extend_from_slice(id);
	out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
	out.extend_from_slice(payload);
}

/// Builds a `LIST` chunk holding `format` followed by `children`
fn list_chunk(format: &[u8; 4], children: &[u8]) -> Vec<u8> {
	let mut payload = Vec::with_capacity(4 + children.len());
	payload.extend_from_slice(format);
	payload.extend_from_slice(children);

	let mut out = Vec::with_capacity(8 + payload.len());
	push_chunk(&mut out, b"LIST", &payload);
	out
}

/// Generates a `.CUR` image of `icon_size` bytes with a valid directory
pub fn generate_cursor_image(icon_size: usize, hotspot: (u16, u16)) -> Vec<u8> {
	let icon_size = icon_size.max(22);
	let mut data = Vec::with_capacity(icon_size);

	// ICONDIR: reserved, type 2 (cursor), one image
	data.extend_from_slice(&[0x00, 0x00, 0x02, 0x00, 0x01, 0x00]);

	// ICONDIRENTRY: 32x32, no palette
	data.extend_from_slice(&[32, 32, 0, 0]);
	data.extend_from_slice(&hotspot.0.to_le_bytes());
	data.extend_from_slice(&hotspot.1.to_le_bytes());
	data.extend_from_slice(&((icon_size - 22) as u32).to_le_bytes());
	data.extend_from_slice(&22u32.to_le_bytes());

	// Pixel payload pattern
	data.extend((0..icon_size - 22).map(|i| (i % 251) as u8));
	data
}

/// Generates an animated cursor with `frame_count` frames of `icon_size` bytes
///
/// With `with_timing`, `rate` and `seq ` chunks are added that play the frames
/// forward and then backward.
pub fn generate_test_ani_data(frame_count: u32, icon_size: usize, with_timing: bool) -> Vec<u8> {
	let mut body = Vec::new();
	body.extend_from_slice(b"ACON");

	// INFO list
	let mut info = Vec::new();
	push_chunk(&mut info, b"INAM", b"Benchmark\0");
	push_chunk(&mut info, b"IART", b"acon-rs\0");
	body.extend_from_slice(&list_chunk(b"INFO", &info));

	// anih
	let seq: Vec<u32> = (0..frame_count).chain((0..frame_count).rev()).collect();
	let steps = if with_timing {
		seq.len() as u32
	} else {
		frame_count
	};
	let flags = if with_timing {
		0x03u32
	} else {
		0x01
	};
	let anih: Vec<u8> = [36, frame_count, steps, 32, 32, 32, 1, 6, flags]
		.iter()
		.flat_map(|v: &u32| v.to_le_bytes())
		.collect();
	push_chunk(&mut body, b"anih", &anih);

	if with_timing {
		let rate: Vec<u8> = seq.iter().map(|&i| 4 + i % 8).flat_map(u32::to_le_bytes).collect();
		push_chunk(&mut body, b"rate", &rate);
		let seq: Vec<u8> = seq.iter().copied().flat_map(u32::to_le_bytes).collect();
		push_chunk(&mut body, b"seq ", &seq);
	}

	// fram list
	let mut frames = Vec::new();
	for i in 0..frame_count {
		let image = generate_cursor_image(icon_size, (i as u16 % 32, 16));
		push_chunk(&mut frames, b"icon", &image);
	}
	body.extend_from_slice(&list_chunk(b"fram", &frames));

	let mut data = Vec::with_capacity(8 + body.len());
	push_chunk(&mut data, b"RIFF", &body);
	data
}

/// Common benchmark sizes for synthetic test data, as `(frame_count, icon_size)`
pub mod sizes {
	/// Single 32x32 cursor (1 frame, 766 bytes)
	pub const STATIC: (u32, usize) = (1, 766);
	/// Classic system cursor: 8 frames of 814 bytes, like `stopwtch.ani`
	pub const CLASSIC: (u32, usize) = (8, 814);
	/// Busy cursor with many frames: 36 frames of 4286 bytes (32x32, 32bpp)
	pub const BUSY: (u32, usize) = (36, 4286);
	/// Large themed cursor: 60 frames of 16958 bytes (64x64, 32bpp)
	pub const LARGE: (u32, usize) = (60, 16958);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_test_ani_data() {
		let data = generate_test_ani_data(8, 814, false);

		// Check container tags
		assert_eq!(&data[0..4], b"RIFF");
		assert_eq!(&data[8..12], b"ACON");

		// Declared size covers the rest of the buffer
		let size = u32::from_le_bytes([data[4], data[5], data[6], data[7]]) as usize;
		assert_eq!(size + 8, data.len());
	}

	#[test]
	fn test_generated_data_parses() {
		let data = generate_test_ani_data(4, 300, true);
		let cursor = acon_types::file::AniFile::from_bytes(&data).unwrap();

		assert_eq!(cursor.frame_count(), 4);
		assert_eq!(cursor.seq(), Some(&[0, 1, 2, 3, 3, 2, 1, 0][..]));
		assert_eq!(cursor.title(), Some("Benchmark"));
		assert_eq!(cursor.frames()[3].image_info().unwrap().hotspot, Some((3, 16)));
	}

	#[test]
	fn test_sizes_constants() {
		assert_eq!(sizes::STATIC, (1, 766));
		assert_eq!(sizes::CLASSIC, (8, 814));
	}
}
