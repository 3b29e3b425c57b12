//! Neo-Riemannian transformations (P, L, R)
//!
//! Each move works on the trichord signature `(root, x, y)` and changes one
//! note. For major/minor triads these are the textbook involutions:
//!
//! - P: C ↔ Cm
//! - L: C → Em, Am → F
//! - R: C → Am, Am → C
//!
//! Symmetric chords have no distinct image under some moves. A result with
//! `is_self_map = true` holds exactly the input notes, and callers must not
//! record it as a new state. Diminished triads are routed towards augmented
//! space by L and R instead of being left in place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::analysis::{TrichordAnalyzer, TrichordStructure};
use crate::error::TransformParseError;
use crate::models::{Chord, ChordFamily};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transformation {
    /// Parallel
    P,
    /// Leading-tone exchange
    L,
    /// Relative
    R,
}

impl Transformation {
    pub const ALL: [Transformation; 3] = [Transformation::P, Transformation::L, Transformation::R];

    pub fn from_char(c: char) -> Result<Self, TransformParseError> {
        match c {
            'P' => Ok(Transformation::P),
            'L' => Ok(Transformation::L),
            'R' => Ok(Transformation::R),
            other => Err(TransformParseError::UnknownTransform(other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Transformation::P => "P",
            Transformation::L => "L",
            Transformation::R => "R",
        }
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Transformation {
    type Err = TransformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Transformation::from_char(c),
            (Some(c), Some(_)) => Err(TransformParseError::UnknownTransform(c)),
            (None, _) => Err(TransformParseError::UnknownTransform(' ')),
        }
    }
}

/// Parse a compact sequence such as "PLR" or "P L R"; whitespace is ignored
pub fn parse_transform_sequence(text: &str) -> Result<Vec<Transformation>, TransformParseError> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(Transformation::from_char)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationResult {
    pub notes: Chord,
    pub is_self_map: bool,
    #[serde(rename = "type")]
    pub family: ChordFamily,
}

#[derive(Debug, Clone, Copy)]
pub struct NeoRiemannianTransformer<'a> {
    analyzer: TrichordAnalyzer<'a>,
}

impl<'a> NeoRiemannianTransformer<'a> {
    pub fn new(analyzer: TrichordAnalyzer<'a>) -> Self {
        NeoRiemannianTransformer { analyzer }
    }

    /// Swap `x` and `y`: the middle note moves, root and top stay
    pub fn parallel(&self, chord: &Chord) -> TransformationResult {
        let s = self.analyzer.analyze(chord);
        if s.is_symmetric {
            return self_map(chord, &s, Transformation::P);
        }
        let swapped = s.root.transpose(s.y as i32);
        self.moved(chord, chord.replace(s.middle(), swapped))
    }

    pub fn leading_tone(&self, chord: &Chord) -> TransformationResult {
        let s = self.analyzer.analyze(chord);
        match s.family {
            ChordFamily::Aug => self_map(chord, &s, Transformation::L),
            ChordFamily::Dim => routed_to_aug(chord, chord.replace(s.top(), s.top().transpose(3))),
            _ if s.is_major_shaped() => {
                self.moved(chord, chord.replace(s.root, s.root.transpose(-1)))
            }
            _ => self.moved(chord, chord.replace(s.top(), s.top().transpose(1))),
        }
    }

    pub fn relative(&self, chord: &Chord) -> TransformationResult {
        let s = self.analyzer.analyze(chord);
        match s.family {
            ChordFamily::Aug => self_map(chord, &s, Transformation::R),
            ChordFamily::Dim => {
                let shift = 2 * s.x as i32 + s.y as i32;
                routed_to_aug(chord, chord.replace(s.root, s.root.transpose(shift)))
            }
            _ if s.is_major_shaped() => {
                self.moved(chord, chord.replace(s.top(), s.top().transpose(2)))
            }
            _ => self.moved(chord, chord.replace(s.root, s.root.transpose(-2))),
        }
    }

    pub fn apply(&self, chord: &Chord, transformation: Transformation) -> TransformationResult {
        match transformation {
            Transformation::P => self.parallel(chord),
            Transformation::L => self.leading_tone(chord),
            Transformation::R => self.relative(chord),
        }
    }

    /// Dispatch on a textual tag; an unknown tag returns the input untouched
    /// with `is_self_map = false`
    pub fn apply_tag(&self, chord: &Chord, tag: &str) -> TransformationResult {
        match tag.parse::<Transformation>() {
            Ok(t) => self.apply(chord, t),
            Err(_) => {
                log::debug!("Ignoring unknown transformation tag '{}'", tag);
                TransformationResult {
                    notes: chord.clone(),
                    is_self_map: false,
                    family: self.analyzer.analyze(chord).family,
                }
            }
        }
    }

    fn moved(&self, input: &Chord, output: Chord) -> TransformationResult {
        if output == *input {
            return TransformationResult {
                family: self.analyzer.analyze(input).family,
                notes: output,
                is_self_map: true,
            };
        }
        TransformationResult {
            family: self.analyzer.analyze(&output).family,
            notes: output,
            is_self_map: false,
        }
    }
}

impl Default for NeoRiemannianTransformer<'static> {
    fn default() -> Self {
        NeoRiemannianTransformer::new(TrichordAnalyzer::default())
    }
}

fn self_map(chord: &Chord, s: &TrichordStructure, t: Transformation) -> TransformationResult {
    log::debug!("{} is a fixed point of {}", chord, t);
    TransformationResult {
        notes: chord.clone(),
        is_self_map: true,
        family: s.family,
    }
}

// Reported as augmented whatever the resulting pitch classes spell
fn routed_to_aug(input: &Chord, output: Chord) -> TransformationResult {
    TransformationResult {
        is_self_map: output == *input,
        notes: output,
        family: ChordFamily::Aug,
    }
}

/// Apply a transformation to raw integers using the standard catalog
pub fn apply_transform(notes: &[i32], transformation: Transformation) -> TransformationResult {
    NeoRiemannianTransformer::default().apply(&Chord::from_notes(notes), transformation)
}

/// Apply a transformation named by `tag` ("P", "L" or "R")
pub fn apply_transform_tag(notes: &[i32], tag: &str) -> TransformationResult {
    NeoRiemannianTransformer::default().apply_tag(&Chord::from_notes(notes), tag)
}
