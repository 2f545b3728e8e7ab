//! End-to-end decoding tests for `acon-rs`

mod fixtures;

use std::time::Duration;

use acon_rs::prelude::*;

use crate::fixtures::*;

struct HotspotDecoder;

impl FrameDecoder for HotspotDecoder {
	type Image = (u16, u16);
	type Error = AniError;

	fn decode(&self, data: &[u8]) -> Result<Self::Image, Self::Error> {
		ImageInfo::from_bytes(data)?
			.hotspot
			.ok_or(AniError::InvalidImageDirectory("not a cursor"))
	}
}

#[test_log::test]
fn test_stopwatch_from_reader() {
	let data = stopwatch();
	let cursor = AniFile::from_reader(&mut data.as_slice()).unwrap();

	assert_eq!(cursor.frame_count(), 8);
	assert_eq!(cursor.title(), Some("Stopwatch"));
	assert_eq!(cursor.artist(), Some("Microsoft Corporation, Copyright 1993"));
	assert!(cursor.header().is_icon());
	assert!(!cursor.header().has_sequence());
	assert_eq!(cursor.header().flags(), AnimationFlags::ICON);
}

#[test]
fn test_open_from_disk() {
	let path = std::env::temp_dir().join(format!("acon-rs-{}-stopwtch.ani", std::process::id()));
	std::fs::write(&path, stopwatch()).unwrap();

	let opened = AniFile::open(&path);
	std::fs::remove_file(&path).unwrap();

	assert_eq!(opened.unwrap(), AniFile::from_bytes(&stopwatch()).unwrap());
}

#[test]
fn test_open_missing_file() {
	let result = AniFile::open("this/path/does/not/exist.ani");
	assert!(matches!(result, Err(AniError::Io(_))));
}

#[test]
fn test_default_schedule() {
	let cursor = AniFile::from_bytes(&stopwatch()).unwrap();
	let steps = cursor.steps();

	assert_eq!(steps.len(), 8);
	// 8 steps of 8 jiffies
	assert_eq!(steps.total_duration(), Duration::from_millis(1066) + Duration::from_nanos(666_664));

	let frames: Vec<_> = cursor.steps().map(|step| step.frame).collect();
	assert_eq!(frames, (0..8).collect::<Vec<_>>());
}

#[test]
fn test_sequenced_schedule() {
	let data = riff(&[
		anih(3, 5, 10, 3),
		chunk(b"rate", &u32_payload(&[6, 12, 6, 12, 60])),
		chunk(b"seq ", &u32_payload(&[0, 1, 2, 1, 0])),
		fram(3),
	]);
	let cursor = AniFile::from_bytes(&data).unwrap();

	assert!(cursor.header().has_sequence());
	let steps: Vec<_> = cursor.steps().collect();
	assert_eq!(steps.iter().map(|s| s.frame).collect::<Vec<_>>(), vec![0, 1, 2, 1, 0]);
	assert_eq!(steps[0].duration(), Duration::from_millis(100));
	assert_eq!(steps[4].duration(), Duration::from_secs(1));
	assert_eq!(cursor.steps().total_duration(), Duration::from_millis(1600));
}

#[test]
fn test_custom_frame_decoder() {
	let cursor = AniFile::from_bytes(&stopwatch()).unwrap();
	let hotspots = cursor.decode_frames(&HotspotDecoder).unwrap();

	assert_eq!(hotspots.len(), 8);
	assert_eq!(hotspots[5], (5, 10));
}

#[test]
fn test_custom_frame_decoder_error() {
	let icons = list(b"fram", &[chunk(b"icon", &image(1, (0, 0), 64))]);
	let cursor = AniFile::from_bytes(&riff(&[anih(1, 0, 1, 1), icons])).unwrap();

	let result = cursor.decode_frames(&HotspotDecoder);
	assert!(matches!(result, Err(AniError::InvalidImageDirectory(_))));
	assert_eq!(cursor.frames()[0].image_info().unwrap().kind, ResourceKind::Icon);
}

#[test]
fn test_error_messages() {
	let mut data = stopwatch();
	data[0..4].copy_from_slice(b"RIFX");
	let err = AniFile::from_bytes(&data).unwrap_err();
	assert_eq!(err.to_string(), "Unexpected format: expected \"RIFF\", got \"RIFX\"");
	assert!(!err.is_structural());

	let err = AniFile::from_bytes(&stopwatch()[..6000]).unwrap_err();
	assert!(err.is_structural());
}

#[test]
fn test_presets() {
	let data = stopwatch();
	for config in [ParseConfig::default(), ParseConfig::strict(), ParseConfig::lenient()] {
		let cursor = AniFile::from_bytes_with_config(&data, &config).unwrap();
		assert_eq!(cursor.frame_count(), 8);
	}

	let tiny = ParseConfig::new(100, 16, 100);
	assert!(matches!(
		AniFile::from_bytes_with_config(&data, &tiny),
		Err(AniError::FileTooLarge { .. })
	));
}

#[test]
fn test_chunk_tree_then_model() {
	let data = stopwatch();
	let config = ParseConfig::default();
	let tree = ChunkTree::from_bytes(&data, &config).unwrap();

	let info = tree.find(ChunkId::Info).unwrap();
	assert_eq!(info.find_child(ChunkId::Inam).unwrap().payload(&data).unwrap(), b"Stopwatch\0");

	let cursor = AniFile::from_tree(&tree, &data, &config).unwrap();
	assert_eq!(cursor, AniFile::from_bytes(&data).unwrap());
}

#[test]
fn test_json_output() {
	let cursor = AniFile::from_bytes(&stopwatch()).unwrap();

	let header = serde_json::to_value(cursor.header()).unwrap();
	assert_eq!(header["frames"], 8);
	assert_eq!(header["display_rate"], 8);

	let info = serde_json::to_value(cursor.info()).unwrap();
	assert_eq!(info["title"], "Stopwatch");

	let image = serde_json::to_value(cursor.frames()[1].image_info().unwrap()).unwrap();
	assert_eq!(image["kind"], "Cursor");
	assert_eq!(image["hotspot"], serde_json::json!([1, 2]));
}

#[test]
fn test_try_from_conversions() {
	let data = stopwatch();

	assert!(AniFile::try_from(data.as_slice()).is_ok());
	assert!(AniFile::try_from(&data).is_ok());
	assert!(AniFile::try_from(Some(data.as_slice())).is_ok());
	assert!(matches!(AniFile::try_from(None::<&[u8]>), Err(AniError::NoCursorData)));
	assert!(AniFile::try_from(data).is_ok());
}
