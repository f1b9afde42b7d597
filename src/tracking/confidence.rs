//! Confidence synthesis and threshold gating
//!
//! Combines the estimator's voicing probability with the frame energy
//! curve into a single per-frame confidence score, then gates the pitch:
//! frames whose confidence does not clear the threshold are zeroed and
//! treated as unvoiced by everything downstream.
//!
//! Each frame is processed independently; iteration stays in ascending
//! index order so floating point rounding is reproducible run to run.

use crate::estimator::FrameEstimate;

/// Synthesize per-frame confidence from voicing probability and energy
///
/// `confidence[i] = voiced_prob[i] * (0.5 + 0.5 * energy[i])` for frames the
/// estimator marked voiced with a positive frequency, else 0. With energy in
/// `[0, 1]` the result is bounded by the voicing probability, so scores stay
/// in `[0, 1]`.
///
/// # Arguments
///
/// * `estimates` - Raw frame-wise estimates
/// * `energy` - Max-normalized frame energy, aligned 1:1 with `estimates`
///
/// # Returns
///
/// One confidence score per frame, in `[0, 1]`
pub fn confidence_curve(estimates: &[FrameEstimate], energy: &[f32]) -> Vec<f32> {
    debug_assert_eq!(estimates.len(), energy.len());

    estimates
        .iter()
        .zip(energy.iter())
        .map(|(est, &e)| {
            if est.voiced && est.f0 > 0.0 {
                (est.voiced_prob * (0.5 + 0.5 * e)).clamp(0.0, 1.0)
            } else {
                0.0
            }
        })
        .collect()
}

/// Gate the raw pitch sequence on the confidence threshold
///
/// Produces `f0[i]` where `confidence[i] > energy_threshold` and the raw
/// frequency is positive, and `0.0` everywhere else.
pub fn gate_pitch(
    estimates: &[FrameEstimate],
    confidence: &[f32],
    energy_threshold: f32,
) -> Vec<f32> {
    debug_assert_eq!(estimates.len(), confidence.len());

    let gated: Vec<f32> = estimates
        .iter()
        .zip(confidence.iter())
        .map(|(est, &c)| {
            if c > energy_threshold && est.f0 > 0.0 {
                est.f0
            } else {
                0.0
            }
        })
        .collect();

    let kept = gated.iter().filter(|&&p| p > 0.0).count();
    log::debug!(
        "Confidence gate: kept {}/{} frames above threshold {}",
        kept,
        gated.len(),
        energy_threshold
    );

    gated
}
