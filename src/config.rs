//! Configuration parameters for vocal pitch tracking

use crate::error::TrackingError;

/// Tracking configuration parameters
///
/// All parameters have defaults tuned for solo vocal recordings and can be
/// set independently.
#[derive(Debug, Clone)]
pub struct TrackingConfig {
    // Frame grid
    /// Hop length between analysis frames in samples (default: 512)
    pub hop_length: usize,

    /// Analysis window for the f0 estimator in samples (default: 2048)
    pub frame_length: usize,

    // Estimator search range
    /// Minimum fundamental frequency in Hz (default: 80.0, roughly E2)
    pub fmin: f32,

    /// Maximum fundamental frequency in Hz (default: 800.0)
    /// Tuned for vocal fundamentals; raise for whistle-register material.
    pub fmax: f32,

    // Confidence gating
    /// Confidence threshold below which a frame is treated as unvoiced (default: 0.05)
    /// Valid range is (0, 1) exclusive.
    pub energy_threshold: f32,

    // Stabilization
    /// Median filter window in frames (default: 11)
    /// Even values are coerced up to the next odd number; segments no longer
    /// than the window pass through unsmoothed.
    pub median_filter_size: usize,

    /// Largest pitch step, in octaves, considered natural vocal movement (default: 0.2)
    pub continuity_tolerance: f32,

    /// Confidence headroom required to keep a suspected octave error (default: 0.9)
    /// A frame one octave away from its predecessor is only corrected when its
    /// confidence is below `previous * (1 + octave_cost)`.
    pub octave_cost: f32,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            hop_length: 512,
            frame_length: 2048,
            fmin: 80.0,
            fmax: 800.0,
            energy_threshold: 0.05,
            median_filter_size: 11,
            continuity_tolerance: 0.2,
            octave_cost: 0.9,
        }
    }
}

impl TrackingConfig {
    /// Validate parameter ranges
    ///
    /// Out-of-range thresholds are rejected up front rather than producing a
    /// silently degenerate contour. An even `median_filter_size` is not an
    /// error; the smoother coerces it to the next odd number.
    ///
    /// # Errors
    ///
    /// Returns `TrackingError::InvalidInput` naming the offending parameter.
    pub fn validate(&self) -> Result<(), TrackingError> {
        if self.hop_length == 0 {
            return Err(TrackingError::InvalidInput(
                "hop_length must be > 0".to_string(),
            ));
        }
        if self.frame_length == 0 {
            return Err(TrackingError::InvalidInput(
                "frame_length must be > 0".to_string(),
            ));
        }
        if !(self.fmin > 0.0 && self.fmin < self.fmax) {
            return Err(TrackingError::InvalidInput(format!(
                "require 0 < fmin < fmax, got fmin={}, fmax={}",
                self.fmin, self.fmax
            )));
        }
        if !(self.energy_threshold > 0.0 && self.energy_threshold < 1.0) {
            return Err(TrackingError::InvalidInput(format!(
                "energy_threshold must be in (0, 1), got {}",
                self.energy_threshold
            )));
        }
        if self.median_filter_size == 0 {
            return Err(TrackingError::InvalidInput(
                "median_filter_size must be >= 1".to_string(),
            ));
        }
        if self.continuity_tolerance <= 0.0 {
            return Err(TrackingError::InvalidInput(format!(
                "continuity_tolerance must be > 0, got {}",
                self.continuity_tolerance
            )));
        }
        if self.octave_cost < 0.0 {
            return Err(TrackingError::InvalidInput(format!(
                "octave_cost must be >= 0, got {}",
                self.octave_cost
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TrackingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.hop_length, 512);
        assert_eq!(config.fmin, 80.0);
        assert_eq!(config.fmax, 800.0);
        assert_eq!(config.energy_threshold, 0.05);
        assert_eq!(config.median_filter_size, 11);
        assert_eq!(config.continuity_tolerance, 0.2);
        assert_eq!(config.octave_cost, 0.9);
    }

    #[test]
    fn test_rejects_negative_energy_threshold() {
        let config = TrackingConfig {
            energy_threshold: -0.1,
            ..TrackingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_frequency_range() {
        let config = TrackingConfig {
            fmin: 900.0,
            fmax: 800.0,
            ..TrackingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_hop() {
        let config = TrackingConfig {
            hop_length: 0,
            ..TrackingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_even_median_filter_size_is_accepted() {
        // Even sizes are coerced by the smoother, not rejected here.
        let config = TrackingConfig {
            median_filter_size: 12,
            ..TrackingConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
