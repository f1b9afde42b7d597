//! Error types for the vocal pitch tracking engine

use std::fmt;

/// Errors that can occur during vocal pitch tracking
#[derive(Debug, Clone)]
pub enum TrackingError {
    /// Invalid input parameters
    InvalidInput(String),

    /// Audio decoding error
    Decoding(String),

    /// Upstream f0 estimator failure
    Estimation(String),

    /// Processing error inside the tracking pipeline
    Processing(String),
}

impl fmt::Display for TrackingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            TrackingError::Decoding(msg) => write!(f, "Decoding error: {}", msg),
            TrackingError::Estimation(msg) => write!(f, "Estimation error: {}", msg),
            TrackingError::Processing(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

impl std::error::Error for TrackingError {}
