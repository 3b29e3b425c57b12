//! Trichord analysis
//!
//! Reduces a three-note chord to `(root, x, y)`: `x` is the interval from the
//! root to the middle note and `y` the interval from the middle note to the
//! top. The Neo-Riemannian transforms work entirely on this signature.
//!
//! Chords of any other size are approximated as major-shaped (`x = 4, y = 3`)
//! on the root the identifier reports, so the transforms still have something
//! to act on.

use serde::{Deserialize, Serialize};

use super::identify::ChordIdentifier;
use crate::models::{Chord, ChordFamily, PitchClass};

/// Recognized trichord shapes, checked in order as exact `(x, y)` pairs
const TRICHORD_SHAPES: [(u8, u8, ChordFamily); 6] = [
    (4, 3, ChordFamily::Major),
    (3, 4, ChordFamily::Minor),
    (3, 3, ChordFamily::Dim),
    (4, 4, ChordFamily::Aug),
    (5, 2, ChordFamily::Sus),
    (2, 5, ChordFamily::Sus),
];

/// Shape used for anything that is not exactly three notes
const FALLBACK_SHAPE: (u8, u8) = (4, 3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrichordStructure {
    pub root: PitchClass,
    pub x: u8,
    pub y: u8,
    #[serde(rename = "type")]
    pub family: ChordFamily,
    pub is_symmetric: bool,
}

impl TrichordStructure {
    /// Note `x` semitones above the root
    pub fn middle(&self) -> PitchClass {
        self.root.transpose(self.x as i32)
    }

    /// Note `x + y` semitones above the root
    pub fn top(&self) -> PitchClass {
        self.root.transpose((self.x + self.y) as i32)
    }

    /// `x >= y`: major-shaped (or symmetric) rather than minor-shaped
    pub fn is_major_shaped(&self) -> bool {
        self.x >= self.y
    }
}

fn shape_family(x: u8, y: u8) -> Option<ChordFamily> {
    TRICHORD_SHAPES
        .iter()
        .find(|&&(sx, sy, _)| sx == x && sy == y)
        .map(|&(_, _, family)| family)
}

fn signature(chord: &Chord, root: PitchClass) -> (u8, u8) {
    let intervals = chord.intervals_from(root);
    (intervals[1], intervals[2] - intervals[1])
}

#[derive(Debug, Clone, Copy)]
pub struct TrichordAnalyzer<'a> {
    identifier: ChordIdentifier<'a>,
}

impl<'a> TrichordAnalyzer<'a> {
    pub fn new(identifier: ChordIdentifier<'a>) -> Self {
        TrichordAnalyzer { identifier }
    }

    pub fn analyze(&self, chord: &Chord) -> TrichordStructure {
        if chord.len() != 3 {
            let info = self.identifier.identify(chord);
            let (x, y) = FALLBACK_SHAPE;
            return TrichordStructure {
                root: info.root,
                x,
                y,
                family: info.family,
                is_symmetric: false,
            };
        }

        for &root in chord.notes() {
            let (x, y) = signature(chord, root);
            if let Some(family) = shape_family(x, y) {
                return TrichordStructure {
                    root,
                    x,
                    y,
                    family,
                    is_symmetric: x == y,
                };
            }
        }

        // Three notes, no recognized shape from any root
        let root = chord.notes()[0];
        let (x, y) = signature(chord, root);
        TrichordStructure {
            root,
            x,
            y,
            family: ChordFamily::Unknown,
            is_symmetric: x == y,
        }
    }
}

impl Default for TrichordAnalyzer<'static> {
    fn default() -> Self {
        TrichordAnalyzer::new(ChordIdentifier::default())
    }
}

/// Analyze raw integers using the standard catalog
pub fn analyze_trichord(notes: &[i32]) -> TrichordStructure {
    TrichordAnalyzer::default().analyze(&Chord::from_notes(notes))
}
