//! Voiced segment extraction

use serde::{Deserialize, Serialize};

/// A maximal contiguous run of voiced frames, `[start, end)`
///
/// Segments never overlap, are listed in ascending start order, and never
/// include a frame whose pitch is zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// First frame index of the run (inclusive)
    pub start: usize,
    /// One past the last frame index of the run (exclusive)
    pub end: usize,
}

impl Segment {
    /// Number of frames in the segment
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the segment contains no frames
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Find all maximal runs of voiced (positive-pitch) frames
///
/// # Arguments
///
/// * `pitch` - Pitch sequence in Hz, 0 meaning unvoiced
///
/// # Returns
///
/// Segments in ascending start order
pub fn voiced_segments(pitch: &[f32]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut segment_start: Option<usize> = None;

    for (i, &p) in pitch.iter().enumerate() {
        match (p > 0.0, segment_start) {
            (true, None) => segment_start = Some(i),
            (false, Some(start)) => {
                segments.push(Segment { start, end: i });
                segment_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = segment_start {
        segments.push(Segment {
            start,
            end: pitch.len(),
        });
    }

    segments
}
