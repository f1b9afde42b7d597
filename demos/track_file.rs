//! Example: track the vocal pitch contour of a single audio file
//!
//! Usage: cargo run --example track_file -- <audio-file>

use pitchtrack_dsp::io::decoder::decode_audio;
use pitchtrack_dsp::{track_vocal_pitch, TrackingConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: track_file <audio-file>")?;

    let (samples, sample_rate) = decode_audio(&path)?;

    let config = TrackingConfig::default();
    let track = track_vocal_pitch(&samples, sample_rate, config)?;

    println!("Tracking results for {}:", path);
    println!("  Duration: {:.2} s", track.metadata.duration_seconds);
    println!("  Frames: {}", track.num_frames());
    println!("  Voiced: {:.0}%", track.voiced_ratio() * 100.0);
    println!("  Voiced runs: {}", track.voiced_segments().len());
    println!("  Processing time: {:.2} ms", track.metadata.processing_time_ms);

    if let Some(segment) = track.voiced_segments().first() {
        let mid = (segment.start + segment.end) / 2;
        println!(
            "  First run starts at {:.2} s, mid-run pitch {:.1} Hz",
            track.times[segment.start], track.pitches[mid]
        );
    }

    Ok(())
}
