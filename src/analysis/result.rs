//! Tracking result types

use serde::{Deserialize, Serialize};

use crate::tracking::segment::{voiced_segments, Segment};

/// Complete vocal pitch tracking result
///
/// Three parallel arrays of equal length, one entry per analysis frame.
/// `pitches[i] == 0` signals "no reliable pitch at this frame"; consumers
/// drawing connected lines must treat zero frames as gaps and never draw a
/// line segment across one.
///
/// Serializes to a JSON object with `times`, `pitches`, and `confidences`
/// keys (plus an additive `metadata` block), the format used by the
/// companion plotting and comparison tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitchTrack {
    /// Frame times in seconds, monotonically increasing
    pub times: Vec<f32>,

    /// Stabilized pitch in Hz (0 = unvoiced)
    pub pitches: Vec<f32>,

    /// Per-frame confidence in [0, 1]
    pub confidences: Vec<f32>,

    /// Tracking metadata
    pub metadata: TrackMetadata,
}

impl PitchTrack {
    /// Number of analysis frames
    pub fn num_frames(&self) -> usize {
        self.pitches.len()
    }

    /// Maximal runs of voiced frames, for gap-aware rendering
    pub fn voiced_segments(&self) -> Vec<Segment> {
        voiced_segments(&self.pitches)
    }

    /// Fraction of frames with a reliable pitch
    pub fn voiced_ratio(&self) -> f32 {
        if self.pitches.is_empty() {
            return 0.0;
        }
        let voiced = self.pitches.iter().filter(|&&p| p > 0.0).count();
        voiced as f32 / self.pitches.len() as f32
    }
}

/// Tracking metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackMetadata {
    /// Audio duration in seconds
    pub duration_seconds: f32,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Hop length in samples
    pub hop_length: usize,

    /// Number of analysis frames
    pub num_frames: usize,

    /// Number of frames that kept a reliable pitch
    pub voiced_frames: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_track() -> PitchTrack {
        PitchTrack {
            times: vec![0.0, 0.0116, 0.0232, 0.0348],
            pitches: vec![0.0, 440.0, 442.0, 0.0],
            confidences: vec![0.0, 0.9, 0.85, 0.0],
            metadata: TrackMetadata {
                duration_seconds: 0.046,
                sample_rate: 44100,
                hop_length: 512,
                num_frames: 4,
                voiced_frames: 2,
                processing_time_ms: 1.0,
            },
        }
    }

    #[test]
    fn test_voiced_ratio() {
        let track = sample_track();
        assert!((track.voiced_ratio() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_voiced_segments_accessor() {
        let track = sample_track();
        let segments = track.voiced_segments();
        assert_eq!(segments.len(), 1);
        assert_eq!((segments[0].start, segments[0].end), (1, 3));
    }

    #[test]
    fn test_json_uses_contract_keys() {
        let track = sample_track();
        let json = serde_json::to_value(&track).unwrap();
        assert!(json.get("times").is_some());
        assert!(json.get("pitches").is_some());
        assert!(json.get("confidences").is_some());
        assert_eq!(json["pitches"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_json_roundtrip() {
        let track = sample_track();
        let json = serde_json::to_string(&track).unwrap();
        let back: PitchTrack = serde_json::from_str(&json).unwrap();
        assert_eq!(back.pitches, track.pitches);
        assert_eq!(back.metadata.sample_rate, 44100);
    }
}
