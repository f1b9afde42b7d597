//! Result aggregation and music-notation helpers
//!
//! - Result types packaging the `(times, pitches, confidences)` triple
//! - Frequency/MIDI conversion and note naming for display layers

pub mod note;
pub mod result;
