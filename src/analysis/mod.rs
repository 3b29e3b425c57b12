//! Chord analysis: catalog identification and trichord signatures

pub mod identify;
pub mod trichord;

pub use identify::{identify_chord, ChordIdentifier, ChordInfo};
pub use trichord::{analyze_trichord, TrichordAnalyzer, TrichordStructure};
