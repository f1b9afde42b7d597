//! Octave-jump correction
//!
//! Autocorrelation-family estimators occasionally report a pitch exactly one
//! octave away from the true fundamental on an isolated frame. This pass
//! detects those frames and folds them back toward the preceding pitch.
//!
//! The correction is a strictly local, single forward pass: each frame is
//! compared against the previous frame's *corrected* value, so a correction
//! propagates into the next comparison, and frame i-1 is never revisited
//! after frame i is decided. Ascending evaluation order is part of the
//! contract. Large jumps that are not close to an octave ratio are left
//! untouched.

/// How close to exactly 1.0 octave a jump must be to count as an octave error
const OCTAVE_WINDOW: f32 = 0.1;

/// Correct single-frame octave errors in a confidence-gated pitch sequence
///
/// For each frame i with a voiced predecessor:
/// - `octave_diff = |log2(pitch[i] / prev)|` where `prev` is the corrected
///   value of frame i-1
/// - steps within `continuity_tolerance` octaves are natural vocal movement
/// - steps with `|octave_diff - 1.0| < 0.1` are folded (halved when the
///   current frame is the higher of the pair, doubled when lower), but only
///   when `confidence[i] < confidence[i-1] * (1 + octave_cost)` — a frame
///   whose confidence overwhelms its predecessor keeps its value
/// - anything else passes through unmodified
///
/// The confidence curve itself is never altered.
///
/// # Arguments
///
/// * `pitch` - Confidence-gated pitch sequence (0 = unvoiced)
/// * `confidence` - Per-frame confidence, aligned 1:1 with `pitch`
/// * `continuity_tolerance` - Largest natural step in octaves
/// * `octave_cost` - Confidence headroom multiplier
///
/// # Returns
///
/// A new pitch sequence with octave errors folded back
pub fn correct_octave_jumps(
    pitch: &[f32],
    confidence: &[f32],
    continuity_tolerance: f32,
    octave_cost: f32,
) -> Vec<f32> {
    debug_assert_eq!(pitch.len(), confidence.len());

    let mut corrected: Vec<f32> = Vec::with_capacity(pitch.len());
    let mut corrections = 0usize;

    for (i, &p) in pitch.iter().enumerate() {
        if i == 0 {
            corrected.push(p);
            continue;
        }

        // Accumulator state of the fold: the previous corrected pitch.
        let prev = corrected[i - 1];
        if p <= 0.0 || prev <= 0.0 {
            // No comparison across a silence boundary.
            corrected.push(p);
            continue;
        }

        let octave_diff = (p / prev).log2().abs();
        if octave_diff <= continuity_tolerance {
            corrected.push(p);
            continue;
        }

        if (octave_diff - 1.0).abs() < OCTAVE_WINDOW
            && confidence[i] < confidence[i - 1] * (1.0 + octave_cost)
        {
            corrections += 1;
            corrected.push(if p > prev { p / 2.0 } else { p * 2.0 });
        } else {
            // Known-imprecise edge case: large non-octave jumps are not
            // corrected or suppressed.
            corrected.push(p);
        }
    }

    if corrections > 0 {
        log::debug!("Octave correction folded {} frames", corrections);
    }

    corrected
}
