//! Benchmark suite for ANI cursor parsing
//!
//! This benchmark measures the chunk walk, the full model build and the
//! playback schedule on synthetic cursors of increasing size.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use acon_benches::{generate_test_ani_data, sizes};
use acon_types::file::{AniFile, ChunkTree, ParseConfig, ani::decode_text};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Benchmark full parsing across cursor sizes
fn bench_parse(c: &mut Criterion) {
	let mut group = c.benchmark_group("ani_parse");

	let cases = [
		("static", sizes::STATIC),
		("classic", sizes::CLASSIC),
		("busy", sizes::BUSY),
		("large", sizes::LARGE),
	];

	for (name, (frames, icon_size)) in cases {
		let data = generate_test_ani_data(frames, icon_size, true);
		group.throughput(Throughput::Bytes(data.len() as u64));
		group.bench_with_input(BenchmarkId::new("from_bytes", name), &data, |b, data| {
			b.iter(|| {
				let result = AniFile::from_bytes(black_box(data));
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark the chunk walk separately from frame copies
fn bench_chunk_tree(c: &mut Criterion) {
	let mut group = c.benchmark_group("ani_chunk_tree");
	let config = ParseConfig::default();

	for frames in [8u32, 64, 512] {
		let data = generate_test_ani_data(frames, 64, true);
		group.throughput(Throughput::Elements(u64::from(frames)));
		group.bench_with_input(BenchmarkId::new("walk", frames), &data, |b, data| {
			b.iter(|| {
				let tree = ChunkTree::from_bytes(black_box(data), &config);
				black_box(tree)
			});
		});
	}

	group.finish();
}

/// Benchmark playback schedule iteration
fn bench_steps(c: &mut Criterion) {
	let mut group = c.benchmark_group("ani_steps");

	let data = generate_test_ani_data(sizes::BUSY.0, 64, true);
	let Ok(cursor) = AniFile::from_bytes(&data) else {
		eprintln!("Warning: Could not parse synthetic cursor");
		return;
	};

	group.bench_function("total_duration", |b| {
		b.iter(|| black_box(cursor.steps().total_duration()));
	});

	group.finish();
}

/// Benchmark metadata text decoding
fn bench_text(c: &mut Criterion) {
	let mut group = c.benchmark_group("ani_text");
	let config = ParseConfig::default();
	let text = b"Microsoft Corporation, Copyright 1993\0";

	group.bench_function("decode_text", |b| {
		b.iter(|| black_box(decode_text(black_box(text), config.text_encoding)));
	});

	group.finish();
}

criterion_group!(benches, bench_parse, bench_chunk_tree, bench_steps, bench_text);

criterion_main!(benches);
