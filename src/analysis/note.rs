//! Frequency/MIDI conversion and note naming
//!
//! Display layers (piano rolls, key highlights) work in MIDI note numbers
//! rather than raw Hz. A4 = 440 Hz = MIDI 69.

/// Reference tuning frequency for A4
pub const A4_FREQ: f32 = 440.0;

/// MIDI note number for A4
pub const A4_MIDI: f32 = 69.0;

/// Convert a frequency in Hz to a (fractional) MIDI note number
///
/// Returns 0.0 for non-positive frequencies, matching the unvoiced sentinel
/// in pitch sequences.
pub fn freq_to_midi(frequency: f32) -> f32 {
    if frequency <= 0.0 {
        return 0.0;
    }
    12.0 * (frequency / A4_FREQ).log2() + A4_MIDI
}

/// Convert a MIDI note number to a frequency in Hz
pub fn midi_to_freq(midi_note: f32) -> f32 {
    A4_FREQ * 2.0f32.powf((midi_note - A4_MIDI) / 12.0)
}

/// Name of a MIDI note in scientific pitch notation (e.g. "A4", "C#5")
pub fn note_name(midi_note: u32) -> String {
    let notes = [
        "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
    ];
    let octave = midi_note as i32 / 12 - 1;
    format!("{}{}", notes[midi_note as usize % 12], octave)
}
