//! Pitch-class arithmetic
//!
//! A pitch class is a note name with the octave thrown away: an integer in
//! 0..12 where 0 = C and 9 = A. Every raw integer entering the engine is
//! reduced here first, so negative and out-of-range inputs are always safe.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::defaults::{A4_FREQUENCY_HZ, A_PITCH_CLASS, REFERENCE_OCTAVE, SEMITONES};

/// Note names indexed by pitch class
///
/// Spelling follows common chord-chart usage (C#, Eb, F#, Ab, Bb).
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B",
];

/// Alternate spellings not present in `NOTE_NAMES`
pub const ENHARMONIC_NAMES: [(&str, u8); 9] = [
    ("Db", 1),
    ("D#", 3),
    ("E#", 5),
    ("Fb", 4),
    ("Gb", 6),
    ("G#", 8),
    ("A#", 10),
    ("B#", 0),
    ("Cb", 11),
];

/// Reduce `n` into `[0, base)`, mapping negative inputs correctly (-1 → base-1)
///
/// # Panics
///
/// Panics if `base` is not positive.
pub fn reduce(n: i32, base: i32) -> i32 {
    assert!(base > 0, "reduce: base must be positive, got {base}");
    n.rem_euclid(base)
}

/// Reduce every note mod 12 and sort ascending
///
/// Duplicates that coincide after reduction are kept; use `Chord` for the
/// duplicate-free canonical form.
pub fn normalize(notes: &[i32]) -> Vec<PitchClass> {
    let mut out: Vec<PitchClass> = notes.iter().map(|&n| PitchClass::new(n)).collect();
    out.sort();
    out
}

/// Note name for any integer
pub fn label_of(n: i32) -> &'static str {
    PitchClass::new(n).name()
}

/// Frequency in Hz of a pitch class placed in `octave` (A4 = 440 Hz)
pub fn frequency_of(pitch_class: i32, octave: i32) -> f64 {
    PitchClass::new(pitch_class).frequency(octave)
}

/// Resolve a spelled note name ("C", "Eb", "D#", "Cb") to a pitch class
///
/// Looks in the primary table first, then in the enharmonic table.
pub fn lookup_name(name: &str) -> Option<PitchClass> {
    NOTE_NAMES
        .iter()
        .position(|&n| n == name)
        .map(|i| PitchClass(i as u8))
        .or_else(|| {
            ENHARMONIC_NAMES
                .iter()
                .find(|(n, _)| *n == name)
                .map(|&(_, pc)| PitchClass(pc))
        })
}

/// A note modulo 12 semitones, always in 0..12
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// Build from any integer, reducing mod 12
    pub fn new(n: i32) -> Self {
        PitchClass(reduce(n, SEMITONES) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_i32(self) -> i32 {
        self.0 as i32
    }

    /// Move by `semitones` (either direction), wrapping around the octave
    pub fn transpose(self, semitones: i32) -> Self {
        PitchClass::new(self.as_i32() + reduce(semitones, SEMITONES))
    }

    /// Ascending distance from `self` up to `other`, in 0..12
    pub fn interval_to(self, other: PitchClass) -> u8 {
        reduce(other.as_i32() - self.as_i32(), SEMITONES) as u8
    }

    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.0 as usize]
    }

    /// Equal-tempered frequency with A4 = 440 Hz
    pub fn frequency(self, octave: i32) -> f64 {
        // f64 throughout: octave is unbounded and the i32 product overflows
        let semitones_from_a4 = f64::from(self.as_i32() - A_PITCH_CLASS)
            + (f64::from(octave) - f64::from(REFERENCE_OCTAVE)) * f64::from(SEMITONES);
        A4_FREQUENCY_HZ * 2.0_f64.powf(semitones_from_a4 / f64::from(SEMITONES))
    }
}

impl From<PitchClass> for i32 {
    fn from(pc: PitchClass) -> i32 {
        pc.as_i32()
    }
}

impl From<i32> for PitchClass {
    fn from(n: i32) -> Self {
        PitchClass::new(n)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
