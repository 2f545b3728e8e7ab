//! Playback schedule derived from the header, `rate` and `seq `.
//!
//! This only computes which frame is shown for how long at each step of one
//! animation loop. Timers and cursor display belong to the caller, which
//! owns its own position in the schedule.

use std::{fmt::Display, iter::FusedIterator, time::Duration};

use super::constants::JIFFIES_PER_SECOND;

/// One step of the animation loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
	/// Position within the loop
	pub index: usize,
	/// Index into the frame list; taken verbatim from `seq ` when present
	pub frame: usize,
	/// Display time in jiffies (1/60 s)
	pub jiffies: u32,
}

impl Step {
	/// Display time as a [`Duration`]
	pub fn duration(&self) -> Duration {
		jiffies_to_duration(self.jiffies)
	}
}

impl Display for Step {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "step {}: frame {} for {} jiffies", self.index, self.frame, self.jiffies)
	}
}

/// Converts jiffies to a [`Duration`]
pub fn jiffies_to_duration(jiffies: u32) -> Duration {
	Duration::from_nanos(u64::from(jiffies) * 1_000_000_000 / u64::from(JIFFIES_PER_SECOND))
}

/// Iterator over the steps of one animation loop.
///
/// The loop length is the `seq ` length when present, otherwise the header
/// step count, otherwise the `rate` length, otherwise the frame count.
/// The header step count is capped at the larger of the frame count and the
/// `rate` length, so the schedule never outgrows the data in the file.
/// Without `seq `, step `i` shows frame `i % frames`. Without `rate`, every
/// step uses the header's default display rate.
#[derive(Debug, Clone)]
pub struct Steps<'a> {
	frame_count: usize,
	default_rate: u32,
	rate: Option<&'a [u32]>,
	seq: Option<&'a [u32]>,
	index: usize,
	len: usize,
}

impl<'a> Steps<'a> {
	/// Creates the schedule for `frame_count` frames
	pub fn new(
		frame_count: usize,
		header_steps: u32,
		default_rate: u32,
		rate: Option<&'a [u32]>,
		seq: Option<&'a [u32]>,
	) -> Self {
		let rate = rate.filter(|r| !r.is_empty());
		let seq = seq.filter(|s| !s.is_empty());

		let len = if frame_count == 0 {
			0
		} else if let Some(seq) = seq {
			seq.len()
		} else if header_steps > 0 {
			let limit = frame_count.max(rate.map_or(0, <[u32]>::len));
			(header_steps as usize).min(limit)
		} else if let Some(rate) = rate {
			rate.len()
		} else {
			frame_count
		};

		Self {
			frame_count,
			default_rate,
			rate,
			seq,
			index: 0,
			len,
		}
	}

	/// Total display time of one loop
	pub fn total_duration(&self) -> Duration {
		self.clone().map(|step| step.duration()).sum()
	}
}

impl Iterator for Steps<'_> {
	type Item = Step;

	fn next(&mut self) -> Option<Self::Item> {
		if self.index >= self.len {
			return None;
		}
		let index = self.index;
		self.index += 1;

		let frame = match self.seq {
			Some(seq) => seq[index] as usize,
			None => index % self.frame_count,
		};
		let jiffies =
			self.rate.and_then(|rate| rate.get(index).copied()).unwrap_or(self.default_rate);

		Some(Step {
			index,
			frame,
			jiffies,
		})
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.len - self.index;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for Steps<'_> {}

impl FusedIterator for Steps<'_> {}
