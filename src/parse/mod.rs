//! Parsing module for the harmony engine
//!
//! Converts chord symbols and chord progressions typed by the user into
//! pitch-class collections.

pub mod chord_symbol;
pub mod progression;

// Re-export commonly used types
pub use chord_symbol::{parse_chord_string, ChordSymbolParser, ParsedChord};
pub use progression::{parse_progression, tokenize_progression, ProgressionEntry};
