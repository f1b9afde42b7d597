//! Example: track an audio file and persist the contour as JSON
//!
//! The output is a single object with `times`, `pitches`, and `confidences`
//! arrays, the format consumed by the comparison and plotting tooling.
//!
//! Usage: cargo run --example export_json -- <audio-file> <output.json>

use std::fs::File;
use std::io::BufWriter;

use pitchtrack_dsp::io::decoder::decode_audio;
use pitchtrack_dsp::{track_vocal_pitch, TrackingConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = args.next().ok_or("usage: export_json <audio-file> <output.json>")?;
    let output = args.next().ok_or("usage: export_json <audio-file> <output.json>")?;

    let (samples, sample_rate) = decode_audio(&input)?;
    let track = track_vocal_pitch(&samples, sample_rate, TrackingConfig::default())?;

    let writer = BufWriter::new(File::create(&output)?);
    serde_json::to_writer(writer, &track)?;

    println!(
        "Wrote {} frames ({:.0}% voiced) to {}",
        track.num_frames(),
        track.voiced_ratio() * 100.0,
        output
    );

    Ok(())
}
