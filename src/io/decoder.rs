//! Audio decoding using Symphonia

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::TrackingError;
use crate::preprocessing::channel_mixer::downmix_to_mono;

/// Decode an audio file to mono PCM samples
///
/// Multi-channel streams are downmixed by channel averaging. Unreadable or
/// malformed sources fail fast here, before any pipeline stage runs.
///
/// # Arguments
///
/// * `path` - Path to the audio file (WAV, MP3, OGG/Vorbis, FLAC, AIFF)
///
/// # Returns
///
/// Tuple of (mono samples in [-1.0, 1.0], sample rate in Hz)
///
/// # Errors
///
/// Returns `TrackingError::Decoding` if the file cannot be opened, probed,
/// or decoded.
pub fn decode_audio<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, u32), TrackingError> {
    let path = path.as_ref();
    log::debug!("Decoding audio file: {}", path.display());

    let file = File::open(path)
        .map_err(|e| TrackingError::Decoding(format!("failed to open {}: {}", path.display(), e)))?;

    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let fmt_opts = FormatOptions::default();
    let meta_opts = MetadataOptions::default();

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &fmt_opts, &meta_opts)
        .map_err(|e| TrackingError::Decoding(format!("failed to probe format: {}", e)))?;

    let mut format = probed.format;
    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| TrackingError::Decoding("no supported audio track found".to_string()))?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| TrackingError::Decoding("stream reports no sample rate".to_string()))?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| TrackingError::Decoding(format!("failed to create decoder: {}", e)))?;

    let mut samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::ResetRequired) => continue,
            // Symphonia signals a clean end of stream as UnexpectedEof.
            Err(SymphoniaError::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                return Err(TrackingError::Decoding(format!(
                    "failed to read packet: {}",
                    e
                )));
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let spec = *decoded.spec();
                let duration = decoded.capacity() as u64;
                if duration == 0 {
                    continue;
                }

                let channels = spec.channels.count();
                let mut sample_buf = SampleBuffer::<f32>::new(duration, spec);
                sample_buf.copy_interleaved_ref(decoded);

                let mono = downmix_to_mono(sample_buf.samples(), channels)
                    .map_err(|e| TrackingError::Decoding(e.to_string()))?;
                samples.extend_from_slice(&mono);
            }
            Err(SymphoniaError::DecodeError(e)) => {
                log::warn!("Skipping undecodable packet: {}", e);
                continue;
            }
            Err(SymphoniaError::ResetRequired) => continue,
            Err(e) => {
                return Err(TrackingError::Decoding(format!("decode failed: {}", e)));
            }
        }
    }

    if samples.is_empty() {
        return Err(TrackingError::Decoding(format!(
            "no audio samples decoded from {}",
            path.display()
        )));
    }

    log::debug!("Decoded {} mono samples at {} Hz", samples.len(), sample_rate);
    Ok((samples, sample_rate))
}
