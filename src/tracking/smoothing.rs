//! Segment-aware median smoothing
//!
//! Suppresses single-frame outliers in the pitch curve without blurring
//! pitch across silence gaps: segments are filtered independently, and a
//! segment's smoothing never reads or writes frames outside its own range.
//!
//! Edge rule: the median filter zero-pads outside the segment and takes the
//! k/2-th order statistic of each window (`scipy.signal.medfilt` semantics).
//! This is pinned so output is numerically comparable with runs of the
//! original tracker.

use crate::tracking::segment::voiced_segments;

/// Apply a symmetric median filter to every voiced segment
///
/// Segments are recomputed from `pitch` and each segment longer than the
/// window is filtered within its own `[start, end)` range. Segments no
/// longer than the window pass through unsmoothed, so short legitimate
/// notes are not smoothed away. An even `window_size` is coerced up to the
/// next odd number; symmetric windowing is undefined for even sizes.
///
/// # Arguments
///
/// * `pitch` - Octave-corrected pitch sequence (0 = unvoiced)
/// * `window_size` - Median filter window in frames
///
/// # Returns
///
/// A new pitch sequence with each long segment median-filtered
pub fn smooth_segments(pitch: &[f32], window_size: usize) -> Vec<f32> {
    let window_size = coerce_odd(window_size);
    let mut smoothed = pitch.to_vec();

    let segments = voiced_segments(pitch);
    log::debug!(
        "Smoothing {} voiced segments with window size {}",
        segments.len(),
        window_size
    );

    for segment in segments {
        if segment.len() > window_size {
            let filtered = median_filter(&pitch[segment.start..segment.end], window_size);
            smoothed[segment.start..segment.end].copy_from_slice(&filtered);
        }
    }

    smoothed
}

/// Coerce a window size to odd by incrementing even values
pub fn coerce_odd(window_size: usize) -> usize {
    if window_size % 2 == 0 {
        window_size + 1
    } else {
        window_size
    }
}

/// Symmetric median filter with zero padding at the edges
///
/// For each index, the window of `window_size` values centered there is
/// collected, positions outside the input counting as zero, and the
/// `window_size / 2`-th order statistic is taken. `window_size` must be odd.
fn median_filter(values: &[f32], window_size: usize) -> Vec<f32> {
    debug_assert!(window_size % 2 == 1, "window size must be odd");

    let half = window_size / 2;
    let mut window = vec![0.0f32; window_size];
    let mut output = Vec::with_capacity(values.len());

    for i in 0..values.len() {
        for (j, slot) in window.iter_mut().enumerate() {
            let idx = i as isize - half as isize + j as isize;
            *slot = if idx >= 0 && (idx as usize) < values.len() {
                values[idx as usize]
            } else {
                0.0
            };
        }
        window.sort_unstable_by(f32::total_cmp);
        output.push(window[half]);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_segment_passes_through() {
        // Length 5 with window 11: 5 <= 11, filter skipped entirely.
        let pitch = [0.0, 200.0, 400.0, 200.0, 200.0, 200.0, 0.0];
        let smoothed = smooth_segments(&pitch, 11);
        assert_eq!(smoothed, pitch.to_vec());
    }

    #[test]
    fn test_single_frame_outlier_is_removed() {
        let mut pitch = vec![220.0f32; 20];
        pitch[10] = 440.0;
        let smoothed = smooth_segments(&pitch, 5);
        assert_eq!(smoothed[10], 220.0);
    }

    #[test]
    fn test_idempotent_on_constant_segment() {
        let pitch = vec![330.0f32; 30];
        let once = smooth_segments(&pitch, 11);
        let twice = smooth_segments(&once, 11);
        assert_eq!(once, twice);
        assert_eq!(once, pitch);
    }

    #[test]
    fn test_segments_are_filtered_independently() {
        // Two constant segments either side of a gap. Zero padding applies
        // at each segment's own edges, so neither segment sees the other.
        let mut pitch = vec![0.0f32; 45];
        for p in pitch[0..20].iter_mut() {
            *p = 220.0;
        }
        for p in pitch[25..45].iter_mut() {
            *p = 440.0;
        }
        let smoothed = smooth_segments(&pitch, 5);
        assert!(smoothed[0..20].iter().all(|&p| p == 220.0));
        assert!(smoothed[20..25].iter().all(|&p| p == 0.0));
        assert!(smoothed[25..45].iter().all(|&p| p == 440.0));
    }

    #[test]
    fn test_even_window_is_coerced_odd() {
        assert_eq!(coerce_odd(10), 11);
        assert_eq!(coerce_odd(11), 11);

        let mut pitch = vec![220.0f32; 20];
        pitch[10] = 440.0;
        // 4 behaves as 5.
        assert_eq!(smooth_segments(&pitch, 4), smooth_segments(&pitch, 5));
    }

    #[test]
    fn test_zero_padded_edges_survive_on_long_constant_run() {
        // With window 11, edge windows hold at most 5 zeros, which is less
        // than half the window, so the order statistic still lands on the
        // constant value.
        let pitch = vec![300.0f32; 40];
        let smoothed = smooth_segments(&pitch, 11);
        assert_eq!(smoothed, pitch);
    }

    #[test]
    fn test_median_filter_matches_reference_window() {
        // medfilt([1, 2, 3, 4, 5], 3) == [1, 2, 3, 4, 4] under zero padding.
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let filtered = median_filter(&values, 3);
        assert_eq!(filtered, vec![1.0, 2.0, 3.0, 4.0, 4.0]);
    }

    #[test]
    fn test_unvoiced_frames_are_untouched() {
        let mut pitch = vec![0.0f32; 10];
        pitch.extend(vec![250.0f32; 15]);
        pitch.extend(vec![0.0f32; 10]);
        let smoothed = smooth_segments(&pitch, 5);
        assert!(smoothed[0..10].iter().all(|&p| p == 0.0));
        assert!(smoothed[25..35].iter().all(|&p| p == 0.0));
    }
}
