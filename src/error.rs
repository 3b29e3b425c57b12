//! Error types for the harmony engine
//!
//! None of these are fatal. Identification and transformation never fail;
//! only parsing and catalog construction report errors, and the WASM layer
//! turns them into `null` or a JS string.

use thiserror::Error;

/// Chord-symbol parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordParseError {
    /// Input was empty or whitespace only
    #[error("Empty chord symbol")]
    Empty,

    /// Input does not start with a root letter A-G
    #[error("Missing root letter in chord symbol '{0}'")]
    MissingRoot(String),

    /// Root letter plus accidental is not a known spelling
    #[error("Unknown root '{0}'")]
    UnknownRoot(String),
}

/// Rejected chord definitions when building a custom catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Chord definition '{0}' has no intervals")]
    EmptyIntervals(String),

    #[error("Chord definition '{0}' does not start at interval 0")]
    NotRootedAtZero(String),

    #[error("Chord definition '{0}' intervals are not strictly ascending")]
    NotAscending(String),

    #[error("Chord definition '{name}' has interval {interval} outside 0-11")]
    IntervalOutOfRange { name: String, interval: u8 },
}

/// Transformation sequence parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformParseError {
    #[error("Unknown transformation '{0}'. Expected one of: P, L, R")]
    UnknownTransform(char),
}
