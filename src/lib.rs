//! # PitchTrack DSP
//!
//! A vocal pitch tracking engine for karaoke trainer applications, turning a
//! raw recording into a clean, octave-stable pitch contour suitable for
//! piano-roll visualization and scoring.
//!
//! ## Features
//!
//! - **f0 Estimation**: Frame-wise YIN estimation behind a pluggable trait
//! - **Confidence Gating**: Voicing probability blended with frame energy
//! - **Octave Correction**: Single-pass repair of isolated octave errors
//! - **Segment-Aware Smoothing**: Per-segment median filtering that never
//!   blurs pitch across silence gaps
//!
//! ## Quick Start
//!
//! ```no_run
//! use pitchtrack_dsp::{track_vocal_pitch, TrackingConfig};
//!
//! // Load audio samples (mono, f32, normalized)
//! let samples: Vec<f32> = vec![]; // Your audio data
//! let sample_rate = 44100;
//!
//! let track = track_vocal_pitch(&samples, sample_rate, TrackingConfig::default())?;
//!
//! for segment in track.voiced_segments() {
//!     println!("voiced run: frames {}..{}", segment.start, segment.end);
//! }
//! # Ok::<(), pitchtrack_dsp::TrackingError>(())
//! ```
//!
//! ## Architecture
//!
//! The tracking pipeline follows this flow:
//!
//! ```text
//! Audio Input → Frame Energy → f0 Estimation → Confidence Gating
//!             → Octave Correction → Segment Smoothing → Output
//! ```
//!
//! One complete recording is processed per call; the pipeline holds no state
//! between invocations.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod estimator;
pub mod io;
pub mod preprocessing;
pub mod tracking;

// Re-export main types
pub use analysis::result::{PitchTrack, TrackMetadata};
pub use config::TrackingConfig;
pub use error::TrackingError;
pub use estimator::{FrameEstimate, PitchEstimator};
pub use tracking::segment::Segment;

use estimator::yin::YinEstimator;

/// Pipeline stage just completed, reported to progress observers
///
/// The pipeline itself is a synchronous batch computation; stage reports
/// exist so a caller running it on a worker thread can surface coarse
/// progress. There is no cancellation or partial-result protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingStage {
    /// Frame energy curve computed
    EnergyComputed,
    /// Raw f0 estimation finished
    PitchEstimated,
    /// Confidence synthesized and low-confidence frames zeroed
    ConfidenceGated,
    /// Octave-jump correction pass finished
    OctaveCorrected,
    /// Segment-aware median smoothing finished
    Smoothed,
}

/// Track the vocal pitch contour of a recording
///
/// Runs the full pipeline with the default YIN estimator: frame energy,
/// f0 estimation, confidence gating, octave-jump correction, and
/// segment-aware median smoothing.
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz (typically 44100 or 48000)
/// * `config` - Tracking configuration parameters
///
/// # Returns
///
/// A [`PitchTrack`] with same-length `times`, `pitches`, and `confidences`
/// arrays. `pitches[i] == 0` marks a frame with no reliable pitch.
///
/// # Errors
///
/// Returns `TrackingError` on empty input, invalid parameters, or estimator
/// failure. Degenerate-but-valid inputs (e.g. pure silence) succeed and
/// produce an all-zero contour.
///
/// # Example
///
/// ```no_run
/// use pitchtrack_dsp::{track_vocal_pitch, TrackingConfig};
///
/// let samples = vec![0.1f32; 44100 * 5]; // 5 seconds
/// let track = track_vocal_pitch(&samples, 44100, TrackingConfig::default())?;
/// println!("{:.0}% voiced", track.voiced_ratio() * 100.0);
/// # Ok::<(), pitchtrack_dsp::TrackingError>(())
/// ```
pub fn track_vocal_pitch(
    samples: &[f32],
    sample_rate: u32,
    config: TrackingConfig,
) -> Result<PitchTrack, TrackingError> {
    let estimator = YinEstimator::new(
        config.frame_length,
        config.hop_length,
        config.fmin,
        config.fmax,
    );
    track_vocal_pitch_with_observer(samples, sample_rate, config, &estimator, |_| {})
}

/// Track the vocal pitch contour using a caller-supplied estimator
///
/// Identical to [`track_vocal_pitch`] but with the f0 estimator injected,
/// for callers bringing their own frame-wise algorithm. The estimator must
/// produce one estimate per frame of the centered hop grid; a mismatch of
/// more than one frame returns `TrackingError::Processing`.
pub fn track_vocal_pitch_with_estimator<E: PitchEstimator>(
    samples: &[f32],
    sample_rate: u32,
    config: TrackingConfig,
    estimator: &E,
) -> Result<PitchTrack, TrackingError> {
    track_vocal_pitch_with_observer(samples, sample_rate, config, estimator, |_| {})
}

/// Track the vocal pitch contour, reporting progress after each stage
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz
/// * `config` - Tracking configuration parameters
/// * `estimator` - Frame-wise f0 estimator
/// * `on_stage` - Invoked once after each completed [`TrackingStage`]
///
/// # Errors
///
/// Returns `TrackingError` if validation, estimation, or decoding fails;
/// no partially-populated result is ever returned.
pub fn track_vocal_pitch_with_observer<E, F>(
    samples: &[f32],
    sample_rate: u32,
    config: TrackingConfig,
    estimator: &E,
    mut on_stage: F,
) -> Result<PitchTrack, TrackingError>
where
    E: PitchEstimator,
    F: FnMut(TrackingStage),
{
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Starting vocal pitch tracking: {} samples at {} Hz",
        samples.len(),
        sample_rate
    );

    if samples.is_empty() {
        return Err(TrackingError::InvalidInput(
            "Empty audio samples".to_string(),
        ));
    }
    if sample_rate == 0 {
        return Err(TrackingError::InvalidInput(
            "Invalid sample rate".to_string(),
        ));
    }
    config.validate()?;

    // Stage 1: frame energy for voice-activity gating
    let energy = preprocessing::energy::frame_energy(samples, config.hop_length)?;
    on_stage(TrackingStage::EnergyComputed);

    // Stage 2: raw frame-wise f0 estimation
    let estimates = estimator.estimate(samples, sample_rate)?;
    on_stage(TrackingStage::PitchEstimated);

    // Both stages use the centered hop grid, so the lengths agree unless a
    // custom estimator frames differently. One frame of tail disagreement is
    // tolerated by trimming; anything more violates the estimator contract.
    let n = if estimates.len() == energy.len() {
        energy.len()
    } else if estimates.len().abs_diff(energy.len()) == 1 {
        log::warn!(
            "Estimator produced {} frames but energy grid has {}; truncating",
            estimates.len(),
            energy.len()
        );
        estimates.len().min(energy.len())
    } else {
        return Err(TrackingError::Processing(format!(
            "Estimator produced {} frames but the hop grid has {}",
            estimates.len(),
            energy.len()
        )));
    };
    let energy = &energy[..n];
    let estimates = &estimates[..n];

    // Stage 3: confidence synthesis and threshold gating
    let confidences = tracking::confidence::confidence_curve(estimates, energy);
    let gated = tracking::confidence::gate_pitch(estimates, &confidences, config.energy_threshold);
    on_stage(TrackingStage::ConfidenceGated);

    // Stage 4: single-pass octave-jump correction
    let corrected = tracking::octave::correct_octave_jumps(
        &gated,
        &confidences,
        config.continuity_tolerance,
        config.octave_cost,
    );
    on_stage(TrackingStage::OctaveCorrected);

    // Stage 5: segment-aware median smoothing
    let pitches = tracking::smoothing::smooth_segments(&corrected, config.median_filter_size);
    on_stage(TrackingStage::Smoothed);

    let times: Vec<f32> = (0..n)
        .map(|i| (i * config.hop_length) as f32 / sample_rate as f32)
        .collect();
    let voiced_frames = pitches.iter().filter(|&&p| p > 0.0).count();
    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

    log::debug!(
        "Tracking finished: {}/{} voiced frames in {:.2} ms",
        voiced_frames,
        n,
        processing_time_ms
    );

    Ok(PitchTrack {
        times,
        pitches,
        confidences,
        metadata: TrackMetadata {
            duration_seconds: samples.len() as f32 / sample_rate as f32,
            sample_rate,
            hop_length: config.hop_length,
            num_frames: n,
            voiced_frames,
            processing_time_ms,
        },
    })
}
