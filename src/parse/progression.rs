//! Chord-progression tokenizer
//!
//! Splits free text such as `"C | Am F, G7"` on whitespace, commas and bar
//! lines and parses each token on its own. A bad token is kept with its error
//! so the rest of the progression still comes through.

use serde::{Serialize, Serializer};

use super::chord_symbol::{ChordSymbolParser, ParsedChord};
use crate::error::ChordParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressionEntry {
    /// Token as it appeared in the input
    pub symbol: String,
    pub parsed: Result<ParsedChord, ChordParseError>,
}

impl ProgressionEntry {
    pub fn is_ok(&self) -> bool {
        self.parsed.is_ok()
    }
}

// Serialized as {symbol, parsed: ParsedChord | null, error: string | null}
impl Serialize for ProgressionEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ProgressionEntry", 3)?;
        state.serialize_field("symbol", &self.symbol)?;
        state.serialize_field("parsed", &self.parsed.as_ref().ok())?;
        state.serialize_field("error", &self.parsed.as_ref().err().map(|e| e.to_string()))?;
        state.end()
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == '|'
}

/// Split progression text into chord-symbol tokens
pub fn tokenize_progression(text: &str) -> Vec<&str> {
    text.split(is_separator).filter(|t| !t.is_empty()).collect()
}

impl<'a> ChordSymbolParser<'a> {
    pub fn parse_progression(&self, text: &str) -> Vec<ProgressionEntry> {
        tokenize_progression(text)
            .into_iter()
            .map(|token| ProgressionEntry {
                symbol: token.to_string(),
                parsed: self.parse(token),
            })
            .collect()
    }
}

/// Parse a progression against the standard catalog
pub fn parse_progression(text: &str) -> Vec<ProgressionEntry> {
    ChordSymbolParser::default().parse_progression(text)
}
