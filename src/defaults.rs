//! Default values for tuning and Tonnetz layout
//!
//! The engine has no runtime configuration; callers that need other values
//! pass them explicitly (e.g. the `distance` argument of `displacement`).

/// Reference frequency of A4 in Hz
pub const A4_FREQUENCY_HZ: f64 = 440.0;

/// Pitch class of the reference note (A)
pub const A_PITCH_CLASS: i32 = 9;

/// Octave of the reference note
pub const REFERENCE_OCTAVE: i32 = 4;

/// Semitones per octave
pub const SEMITONES: i32 = 12;

/// Default edge length between adjacent nodes of a Tonnetz traversal graph
pub const DEFAULT_EDGE_LENGTH: f64 = 60.0;
