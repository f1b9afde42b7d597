//! Frame-wise fundamental frequency estimation
//!
//! The tracking pipeline treats the f0 estimator as a black box: any
//! algorithm that supplies a per-frame frequency, voiced flag, and voicing
//! probability on the hop grid can drive it. [`yin::YinEstimator`] is the
//! default implementation.

pub mod yin;

use crate::error::TrackingError;

/// Raw per-frame estimate produced by a [`PitchEstimator`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameEstimate {
    /// Estimated fundamental frequency in Hz (0.0 when unvoiced)
    pub f0: f32,

    /// Whether the frame is considered voiced
    pub voiced: bool,

    /// Voicing probability in [0, 1]
    pub voiced_prob: f32,
}

impl FrameEstimate {
    /// An unvoiced frame with the given residual voicing probability
    pub fn unvoiced(voiced_prob: f32) -> Self {
        Self {
            f0: 0.0,
            voiced: false,
            voiced_prob,
        }
    }
}

/// Frame-wise fundamental frequency estimator
///
/// Implementations must produce one estimate per frame of the centered hop
/// grid (`samples.len() / hop_length + 1` frames) so the output lines up 1:1
/// with the energy curve computed over the same grid.
pub trait PitchEstimator {
    /// Estimate f0, voicing, and voicing probability for every frame
    ///
    /// # Errors
    ///
    /// Returns `TrackingError::Estimation` if the estimator cannot run with
    /// the configured parameters.
    fn estimate(
        &self,
        samples: &[f32],
        sample_rate: u32,
    ) -> Result<Vec<FrameEstimate>, TrackingError>;
}
