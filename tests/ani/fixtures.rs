//! In-memory cursor builders

pub const ICON_SIZE: usize = 814;

pub fn chunk(id: &[u8; 4], payload: &[u8]) -> Vec<u8> {
	let mut data = Vec::with_capacity(8 + payload.len());
	data.extend_from_slice(id);
	data.extend_from_slice(&(payload.len() as u32).to_le_bytes());
	data.extend_from_slice(payload);
	data
}

pub fn list(format: &[u8; 4], children: &[Vec<u8>]) -> Vec<u8> {
	let mut payload = format.to_vec();
	children.iter().for_each(|child| payload.extend_from_slice(child));
	chunk(b"LIST", &payload)
}

pub fn riff(chunks: &[Vec<u8>]) -> Vec<u8> {
	let mut payload = b"ACON".to_vec();
	chunks.iter().for_each(|c| payload.extend_from_slice(c));
	chunk(b"RIFF", &payload)
}

pub fn u32_payload(values: &[u32]) -> Vec<u8> {
	values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

pub fn anih(frames: u32, steps: u32, rate: u32, flags: u32) -> Vec<u8> {
	chunk(b"anih", &u32_payload(&[36, frames, steps, 0, 0, 0, 0, rate, flags]))
}

/// `kind` 1 is an icon, 2 a cursor
pub fn image(kind: u16, hotspot: (u16, u16), len: usize) -> Vec<u8> {
	let mut data = vec![0, 0];
	data.extend_from_slice(&kind.to_le_bytes());
	data.extend_from_slice(&1u16.to_le_bytes());
	data.extend_from_slice(&[0, 0, 0, 0]);
	data.extend_from_slice(&hotspot.0.to_le_bytes());
	data.extend_from_slice(&hotspot.1.to_le_bytes());
	data.extend_from_slice(&((len - 22) as u32).to_le_bytes());
	data.extend_from_slice(&22u32.to_le_bytes());
	data.resize(len, 0xAA);
	data
}

pub fn fram(count: u16) -> Vec<u8> {
	let icons: Vec<_> =
		(0..count).map(|i| chunk(b"icon", &image(2, (i, i * 2), ICON_SIZE))).collect();
	list(b"fram", &icons)
}

pub fn stopwatch() -> Vec<u8> {
	riff(&[
		list(
			b"INFO",
			&[
				chunk(b"INAM", b"Stopwatch\0"),
				chunk(b"IART", b"Microsoft Corporation, Copyright 1993\0"),
			],
		),
		anih(8, 8, 8, 1),
		fram(8),
	])
}
