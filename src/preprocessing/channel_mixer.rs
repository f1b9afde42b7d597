//! Channel mixing utilities (multi-channel to mono conversion)

use crate::error::TrackingError;

/// Downmix interleaved multi-channel samples to mono by channel averaging
///
/// # Arguments
///
/// * `interleaved` - Interleaved samples (frame-major: c0, c1, ..., c0, c1, ...)
/// * `channels` - Number of channels in the stream
///
/// # Returns
///
/// Mono samples, one per input frame
///
/// # Errors
///
/// Returns `TrackingError::InvalidInput` if `channels` is zero.
pub fn downmix_to_mono(
    interleaved: &[f32],
    channels: usize,
) -> Result<Vec<f32>, TrackingError> {
    if channels == 0 {
        return Err(TrackingError::InvalidInput(
            "channel count must be > 0".to_string(),
        ));
    }

    if channels == 1 {
        return Ok(interleaved.to_vec());
    }

    log::debug!(
        "Downmixing {} interleaved samples from {} channels",
        interleaved.len(),
        channels
    );

    let mono = interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect();

    Ok(mono)
}
