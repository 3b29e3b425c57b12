//! Chord-symbol parsing ("Cmaj7", "F#m", "Bbdim7")
//!
//! Grammar: root letter A-G (any case), an optional single accidental
//! (`#`/`b`, or the Unicode `♯`/`♭`), then a free-form quality suffix.
//!
//! An unresolvable root is a parse failure. An unrecognized quality is not:
//! it falls back to the major triad and `ParsedChord::quality_recognized`
//! is cleared so callers can tell.

use serde::{Deserialize, Serialize};

use crate::catalog::ChordCatalog;
use crate::error::ChordParseError;
use crate::models::{lookup_name, Chord, ChordFamily, PitchClass};

/// Used when the catalog has no major entry to fall back on
const MAJOR_TRIAD: [u8; 3] = [0, 4, 7];

/// Quality spellings accepted besides the catalog suffixes (matched lower-cased)
const QUALITY_ALIASES: [(&str, ChordFamily); 6] = [
    ("", ChordFamily::Major),
    ("maj", ChordFamily::Major),
    ("min", ChordFamily::Minor),
    ("-", ChordFamily::Minor),
    ("+", ChordFamily::Aug),
    ("o", ChordFamily::Dim),
];

/// A successfully parsed chord symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedChord {
    pub root: PitchClass,
    /// Catalog name of the resolved quality
    pub quality: String,
    pub intervals: Vec<u8>,
    /// `root + interval` for each interval, in catalog order (not sorted)
    pub notes: Vec<PitchClass>,
    /// False when the suffix was not understood and major was assumed
    pub quality_recognized: bool,
}

impl ParsedChord {
    pub fn chord(&self) -> Chord {
        Chord::new(self.notes.iter().copied())
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.notes.iter().map(|pc| pc.as_i32()).collect()
    }
}

/// Split "F#m7" into ("F#", "m7"); the root letter is upper-cased
fn split_symbol(text: &str) -> Result<(String, &str), ChordParseError> {
    let mut chars = text.char_indices();
    let letter = match chars.next() {
        Some((_, c)) if matches!(c.to_ascii_uppercase(), 'A'..='G') => c.to_ascii_uppercase(),
        _ => return Err(ChordParseError::MissingRoot(text.to_string())),
    };

    let mut root = letter.to_string();
    let mut rest_start = letter.len_utf8();
    if let Some((i, c)) = chars.next() {
        let accidental = match c {
            '#' | '♯' => Some('#'),
            'b' | '♭' => Some('b'),
            _ => None,
        };
        if let Some(acc) = accidental {
            root.push(acc);
            rest_start = i + c.len_utf8();
        }
    }

    Ok((root, &text[rest_start..]))
}

/// Parses chord symbols against a catalog
#[derive(Debug, Clone, Copy)]
pub struct ChordSymbolParser<'a> {
    catalog: &'a ChordCatalog,
}

impl<'a> ChordSymbolParser<'a> {
    pub fn new(catalog: &'a ChordCatalog) -> Self {
        ChordSymbolParser { catalog }
    }

    pub fn parse(&self, text: &str) -> Result<ParsedChord, ChordParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChordParseError::Empty);
        }

        let (root_name, quality) = split_symbol(text)?;
        let root = lookup_name(&root_name).ok_or(ChordParseError::UnknownRoot(root_name))?;

        let (name, intervals, quality_recognized) = match self.resolve_quality(quality) {
            Some((name, intervals)) => (name, intervals, true),
            None => {
                log::warn!("Unrecognized chord quality '{}' in '{}', assuming major", quality, text);
                let (name, intervals) = self.major_triad();
                (name, intervals, false)
            }
        };

        let notes = intervals.iter().map(|&i| root.transpose(i as i32)).collect();
        Ok(ParsedChord {
            root,
            quality: name,
            intervals,
            notes,
            quality_recognized,
        })
    }

    fn resolve_quality(&self, quality: &str) -> Option<(String, Vec<u8>)> {
        // Upper-case M is major; lower-casing would turn it into minor
        if quality == "M" {
            return Some(self.major_triad());
        }

        let lower = quality.to_lowercase();
        if let Some(def) = self
            .catalog
            .by_suffix_length()
            .into_iter()
            .find(|d| d.suffix.to_lowercase() == lower)
        {
            return Some((def.name.clone(), def.intervals.clone()));
        }

        let (_, family) = QUALITY_ALIASES.iter().find(|(alias, _)| *alias == lower)?;
        match family {
            ChordFamily::Major => Some(self.major_triad()),
            family => self
                .catalog
                .first_of_family(*family)
                .map(|def| (def.name.clone(), def.intervals.clone())),
        }
    }

    fn major_triad(&self) -> (String, Vec<u8>) {
        match self.catalog.first_of_family(ChordFamily::Major) {
            Some(def) => (def.name.clone(), def.intervals.clone()),
            None => ("Major".to_string(), MAJOR_TRIAD.to_vec()),
        }
    }
}

impl Default for ChordSymbolParser<'static> {
    fn default() -> Self {
        ChordSymbolParser::new(ChordCatalog::standard())
    }
}

/// Parse a chord symbol against the standard catalog; `None` on failure
pub fn parse_chord_string(text: &str) -> Option<Vec<PitchClass>> {
    ChordSymbolParser::default().parse(text).ok().map(|parsed| parsed.notes)
}
