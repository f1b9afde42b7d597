//! Audio I/O modules
//!
//! Audio file decoding to mono f32 using Symphonia.

pub mod decoder;
