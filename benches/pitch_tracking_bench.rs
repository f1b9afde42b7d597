//! Performance benchmarks for vocal pitch tracking

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pitchtrack_dsp::preprocessing::energy::frame_energy;
use pitchtrack_dsp::tracking::smoothing::smooth_segments;
use pitchtrack_dsp::{track_vocal_pitch, TrackingConfig};

/// Synthetic vocal phrase: 440 Hz carrier with 5 Hz vibrato
fn vocal_signal(duration_seconds: f32) -> Vec<f32> {
    let sample_rate = 44100.0;
    let num_samples = (duration_seconds * sample_rate) as usize;
    (0..num_samples)
        .map(|i| {
            let t = i as f32 / sample_rate;
            let freq = 440.0 + 8.0 * (2.0 * std::f32::consts::PI * 5.0 * t).sin();
            (2.0 * std::f32::consts::PI * freq * t).sin() * 0.5
        })
        .collect()
}

fn bench_track_vocal_pitch(c: &mut Criterion) {
    let samples = vocal_signal(10.0);
    let config = TrackingConfig::default();

    c.bench_function("track_vocal_pitch_10s", |b| {
        b.iter(|| {
            let _ = track_vocal_pitch(
                black_box(&samples),
                black_box(44100),
                black_box(config.clone()),
            );
        });
    });
}

fn bench_frame_energy(c: &mut Criterion) {
    let samples = vocal_signal(30.0);

    c.bench_function("frame_energy_30s", |b| {
        b.iter(|| {
            let _ = frame_energy(black_box(&samples), black_box(512));
        });
    });
}

fn bench_smoothing(c: &mut Criterion) {
    // A long voiced run with periodic outliers.
    let mut pitch = vec![440.0f32; 10_000];
    for i in (0..pitch.len()).step_by(97) {
        pitch[i] = 880.0;
    }

    c.bench_function("smooth_segments_10k_frames", |b| {
        b.iter(|| {
            let _ = smooth_segments(black_box(&pitch), black_box(11));
        });
    });
}

criterion_group!(
    benches,
    bench_track_vocal_pitch,
    bench_frame_energy,
    bench_smoothing
);
criterion_main!(benches);
