//! Pitch contour stabilization stages
//!
//! This module contains the post-processing passes applied to the raw
//! frame-wise estimates, in pipeline order:
//! - Confidence synthesis and threshold gating
//! - Octave-jump correction
//! - Voiced segment extraction
//! - Segment-aware median smoothing
//!
//! Every stage takes an immutable input slice and returns a freshly
//! allocated output, so the data flow between passes is explicit.

pub mod confidence;
pub mod octave;
pub mod segment;
pub mod smoothing;
