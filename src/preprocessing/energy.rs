//! Frame energy estimation
//!
//! Computes a normalized per-frame loudness (RMS) curve used for
//! voice-activity gating and confidence shaping.
//!
//! Algorithm:
//! 1. Divide audio into centered frames of `2 * hop_length` samples on the hop grid
//! 2. Compute RMS energy per frame (samples past the signal edges count as zero)
//! 3. Normalize by the sequence maximum; a silent file stays all-zero
//!
//! # Example
//!
//! ```no_run
//! use pitchtrack_dsp::preprocessing::energy::frame_energy;
//!
//! let samples = vec![0.0f32; 44100 * 5]; // 5 seconds of audio
//! let energy = frame_energy(&samples, 512)?;
//! println!("{} energy frames", energy.len());
//! # Ok::<(), pitchtrack_dsp::TrackingError>(())
//! ```

use crate::error::TrackingError;

/// Numerical stability epsilon
const EPSILON: f32 = 1e-10;

/// Number of analysis frames for a signal under the centered hop-grid convention
///
/// Frame `i` is centered on sample `i * hop_length`, so a signal of `len`
/// samples yields `len / hop_length + 1` frames. The f0 estimator uses the
/// same convention, which keeps the two frame grids aligned by construction.
pub fn num_frames(len: usize, hop_length: usize) -> usize {
    len / hop_length + 1
}

/// Compute max-normalized per-frame RMS energy
///
/// Each frame spans `2 * hop_length` samples centered on `i * hop_length`.
/// Samples outside the signal contribute zero and the divisor is always the
/// full frame length, matching a centered, zero-padded framing convention.
///
/// The result is divided by its maximum so values land in `[0, 1]`. If the
/// maximum is exactly zero (silent input), the all-zero curve is returned
/// as-is rather than dividing by zero.
///
/// # Arguments
///
/// * `samples` - Audio samples (mono, normalized to [-1.0, 1.0])
/// * `hop_length` - Hop between frames in samples (typically 512)
///
/// # Returns
///
/// One RMS value per analysis frame, in `[0, 1]`
///
/// # Errors
///
/// Returns `TrackingError::InvalidInput` if `hop_length` is zero.
pub fn frame_energy(samples: &[f32], hop_length: usize) -> Result<Vec<f32>, TrackingError> {
    if hop_length == 0 {
        return Err(TrackingError::InvalidInput(
            "hop_length must be > 0".to_string(),
        ));
    }

    if samples.is_empty() {
        return Ok(Vec::new());
    }

    let frame_length = 2 * hop_length;
    let half = hop_length as isize;
    let n_frames = num_frames(samples.len(), hop_length);

    log::debug!(
        "Computing frame energy: {} samples, hop={}, {} frames",
        samples.len(),
        hop_length,
        n_frames
    );

    let mut energy = Vec::with_capacity(n_frames);
    for i in 0..n_frames {
        let center = (i * hop_length) as isize;
        let start = (center - half).max(0) as usize;
        let end = ((center + half) as usize).min(samples.len());

        let sum_sq: f32 = samples[start..end].iter().map(|&x| x * x).sum();

        // Divisor is the full frame length: out-of-range samples are zeros.
        let rms = (sum_sq / frame_length as f32).sqrt();
        energy.push(rms);
    }

    let max_energy = energy.iter().copied().fold(0.0f32, f32::max);
    if max_energy > EPSILON {
        for value in energy.iter_mut() {
            *value /= max_energy;
        }
    } else {
        log::debug!("Silent input: leaving energy curve unnormalized (all zero)");
    }

    Ok(energy)
}
