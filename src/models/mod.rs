//! Models module for the harmony engine
//!
//! Pitch classes and the chord value type every other module works with.

pub mod chord;
pub mod pitch_class;

// Re-export commonly used types
pub use chord::{Chord, ChordFamily};
pub use pitch_class::{frequency_of, label_of, lookup_name, normalize, reduce, PitchClass};
