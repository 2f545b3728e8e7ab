//! ANI cursor utility.
//!
//! Provides three subcommands:
//! - `inspect`: print the header, metadata, frames and playback schedule of
//!   one cursor, optionally as JSON.
//! - `validate`: scan a directory and parse every `.ani` file, reporting
//!   failures and suspicious timing data.
//! - `extract`: write each frame of a cursor out as a standalone `.ico`/`.cur`.

use std::{
	fs,
	path::{Path, PathBuf},
};

use acon_rs::prelude::{
	AniError, AniFile, ChunkTree, ParseConfig,
	file::ani::{ImageInfo, Info},
};
use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::{debug, info, warn};
use serde::Serialize;
use walkdir::WalkDir;

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let config = cli.config.build()?;
	debug!("Using {:?}", config);

	match cli.command {
		Command::Inspect(opts) => run_inspect(opts, &config),
		Command::Validate(opts) => run_validate(opts, &config),
		Command::Extract(opts) => run_extract(opts, &config),
	}
}

#[derive(Parser)]
#[command(name = "ani_utils")]
#[command(author = "acon-rs project")]
#[command(version)]
#[command(about = "Inspect, validate and extract animated cursor (.ani) files", long_about = None)]
struct Cli {
	#[command(flatten)]
	config: ConfigArgs,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Inspect a single .ani file
	Inspect(InspectArgs),
	/// Validate every .ani file under a directory
	Validate(ValidateArgs),
	/// Write every frame of a .ani file to a directory
	Extract(ExtractArgs),
}

#[derive(Args)]
struct ConfigArgs {
	/// Use the strict limit preset (1 MiB files, 4 nesting levels)
	#[arg(long, global = true, conflicts_with = "lenient")]
	strict: bool,

	/// Use the lenient limit preset (256 MiB files, 64 nesting levels)
	#[arg(long, global = true)]
	lenient: bool,

	/// Skip a pad byte after odd-sized chunks
	#[arg(long, global = true, default_value_t = false)]
	pad_odd_chunks: bool,

	/// Code page used for title and artist text
	#[arg(long, global = true, value_name = "LABEL", default_value = "windows-1251")]
	encoding: String,
}

impl ConfigArgs {
	fn build(&self) -> Result<ParseConfig> {
		let preset = if self.strict {
			ParseConfig::strict()
		} else if self.lenient {
			ParseConfig::lenient()
		} else {
			ParseConfig::default()
		};

		let Some(encoding) = ParseConfig::encoding_for_label(&self.encoding) else {
			bail!("Unknown text encoding '{}'", self.encoding);
		};

		Ok(preset.with_pad_odd_chunks(self.pad_odd_chunks).with_text_encoding(encoding))
	}
}

#[derive(Args)]
struct InspectArgs {
	/// Path to a single .ani file
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Print a JSON report instead of text
	#[arg(long, default_value_t = false)]
	json: bool,

	/// Also print the raw chunk tree
	#[arg(short, long, default_value_t = false)]
	tree: bool,
}

#[derive(Args)]
struct ValidateArgs {
	/// Directory containing .ani files
	#[arg(value_name = "DIR", default_value = ".")]
	root: PathBuf,

	/// Recurse into sub-directories while scanning
	#[arg(short, long, default_value_t = false)]
	recursive: bool,

	/// Exit with an error when warnings are encountered
	#[arg(long, default_value_t = false)]
	fail_on_warning: bool,
}

#[derive(Args)]
struct ExtractArgs {
	/// Path to a single .ani file
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Output directory
	#[arg(short, long, value_name = "DIR")]
	output: PathBuf,
}

#[derive(Serialize)]
struct CursorReport<'a> {
	file: String,
	size: usize,
	header: &'a acon_rs::prelude::AnimationHeader,
	info: &'a Info,
	frames: Vec<FrameReport>,
	rate: Option<&'a [u32]>,
	seq: Option<&'a [u32]>,
	loop_millis: u128,
	warnings: Vec<String>,
}

#[derive(Serialize)]
struct FrameReport {
	index: usize,
	offset: usize,
	size: usize,
	image: Option<ImageInfo>,
}

fn load(path: &Path, config: &ParseConfig) -> Result<(Vec<u8>, ChunkTree, AniFile)> {
	let data = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
	let tree = ChunkTree::from_bytes(&data, config)
		.with_context(|| format!("Failed to walk chunks of {}", path.display()))?;
	let cursor = AniFile::from_tree(&tree, &data, config)
		.with_context(|| format!("Failed to decode {}", path.display()))?;
	Ok((data, tree, cursor))
}

fn collect_warnings(cursor: &AniFile) -> Vec<String> {
	let mut warnings = Vec::new();
	let header = cursor.header();

	if header.frames as usize != cursor.frame_count() {
		warnings.push(format!(
			"anih declares {} frames, fram holds {}",
			header.frames,
			cursor.frame_count()
		));
	}
	let steps = cursor.steps().len();
	if cursor.seq().is_none() && header.steps as usize > steps {
		warnings.push(format!("anih declares {} steps, schedule uses {}", header.steps, steps));
	}
	let dangling = cursor.dangling_sequence_entries();
	if !dangling.is_empty() {
		warnings.push(format!("seq references missing frames {:?}", dangling));
	}
	if let (Some(rate), Some(seq)) = (cursor.rate(), cursor.seq()) {
		if rate.len() != seq.len() {
			warnings.push(format!("rate has {} entries, seq has {}", rate.len(), seq.len()));
		}
	}
	if cursor.seq().is_some() != header.has_sequence() {
		warnings.push("SEQUENCE flag does not match presence of seq chunk".to_string());
	}
	for (index, frame) in cursor.iter().enumerate() {
		if let Err(err) = frame.image_info() {
			warnings.push(format!("frame {}: {}", index, err));
		}
	}

	warnings
}

fn run_inspect(args: InspectArgs, config: &ParseConfig) -> Result<()> {
	let (data, tree, cursor) = load(&args.file, config)?;
	let warnings = collect_warnings(&cursor);

	if args.json {
		let report = CursorReport {
			file: args.file.display().to_string(),
			size: data.len(),
			header: cursor.header(),
			info: cursor.info(),
			frames: cursor
				.iter()
				.enumerate()
				.map(|(index, frame)| FrameReport {
					index,
					offset: frame.range().start,
					size: frame.len(),
					image: frame.image_info().ok(),
				})
				.collect(),
			rate: cursor.rate(),
			seq: cursor.seq(),
			loop_millis: cursor.steps().total_duration().as_millis(),
			warnings,
		};
		println!("{}", serde_json::to_string_pretty(&report)?);
		return Ok(());
	}

	println!("File: {} (size: {} bytes)", args.file.display(), data.len());
	println!("{}", cursor);
	println!("{}", cursor.header());

	if args.tree {
		println!("Chunks ({} nodes):", tree.node_count());
		for (depth, chunk) in tree.descendants() {
			println!(
				"  {:indent$}{} @ 0x{:06X} ({} bytes)",
				"",
				chunk.tag(),
				chunk.offset(),
				chunk.len(),
				indent = depth * 2
			);
		}
	}

	println!("Frames:");
	for frame in &cursor {
		match frame.image_info() {
			Ok(image) => println!("  {} {}", frame, image),
			Err(err) => println!("  {} <{}>", frame, err),
		}
	}

	let steps = cursor.steps();
	println!("Schedule: {} steps, {:?} per loop", steps.len(), steps.total_duration());
	for step in steps {
		println!("  {} ({:?})", step, step.duration());
	}

	for warning in &warnings {
		warn!("{}", warning);
	}

	Ok(())
}

fn run_validate(args: ValidateArgs, config: &ParseConfig) -> Result<()> {
	if !args.root.is_dir() {
		bail!("{} is not a directory", args.root.display());
	}

	let files = collect_ani_files(&args.root, args.recursive);
	if files.is_empty() {
		println!("No .ani files found under {}", args.root.display());
		return Ok(());
	}

	let mut ok = 0usize;
	let mut warned = 0usize;
	let mut failed = 0usize;

	for path in &files {
		match load(path, config) {
			Ok((_, _, cursor)) => {
				let warnings = collect_warnings(&cursor);
				if warnings.is_empty() {
					ok += 1;
					println!("✓ {} - {} frames", path.display(), cursor.frame_count());
				} else {
					warned += 1;
					println!("⚠ {} - {}", path.display(), warnings.join("; "));
				}
			}
			Err(err) => {
				failed += 1;
				let structural = err.downcast_ref::<AniError>().is_some_and(AniError::is_structural);
				let kind = if structural {
					"malformed"
				} else {
					"rejected"
				};
				println!("✗ {} - {} ({:#})", path.display(), kind, err);
			}
		}
	}

	println!();
	println!("Files: {} | ok: {} | warnings: {} | errors: {}", files.len(), ok, warned, failed);

	if failed > 0 {
		bail!("Validation finished with errors (see summary)");
	}
	if args.fail_on_warning && warned > 0 {
		bail!("Validation finished with warnings (see summary)");
	}

	Ok(())
}

fn run_extract(args: ExtractArgs, config: &ParseConfig) -> Result<()> {
	let (_, _, cursor) = load(&args.file, config)?;

	fs::create_dir_all(&args.output)
		.with_context(|| format!("Failed to create {}", args.output.display()))?;

	let stem = args.file.file_stem().and_then(|s| s.to_str()).unwrap_or("frame").to_string();

	for (index, frame) in cursor.iter().enumerate() {
		let extension = frame.image_info().map_or("ico", |image| image.kind.extension());
		let path = args.output.join(format!("{}_{:03}.{}", stem, index, extension));
		fs::write(&path, frame.data())
			.with_context(|| format!("Failed to write {}", path.display()))?;
		debug!("Wrote {} ({} bytes)", path.display(), frame.len());
	}

	info!("Extracted {} frames to {}", cursor.frame_count(), args.output.display());
	Ok(())
}

fn collect_ani_files(root: &Path, recursive: bool) -> Vec<PathBuf> {
	let max_depth = if recursive {
		usize::MAX
	} else {
		1
	};
	let mut files = Vec::new();

	for entry in WalkDir::new(root).max_depth(max_depth).follow_links(false) {
		let entry = match entry {
			Ok(entry) => entry,
			Err(err) => {
				warn!("{}", err);
				continue;
			}
		};

		let is_ani = entry
			.path()
			.extension()
			.and_then(|ext| ext.to_str())
			.is_some_and(|ext| ext.eq_ignore_ascii_case("ani"));
		if entry.file_type().is_file() && is_ani {
			files.push(entry.into_path());
		}
	}

	files.sort();
	files
}
