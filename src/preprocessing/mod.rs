//! Audio preprocessing modules
//!
//! This module contains utilities for preparing audio for tracking:
//! - Frame energy estimation (normalized per-frame RMS)
//! - Channel mixing (multi-channel to mono)

pub mod channel_mixer;
pub mod energy;
