//! Chord value type and family tags
//!
//! A `Chord` is a set of pitch classes. Its only representation is the
//! canonical one (ascending, duplicate-free, every member reduced mod 12), so
//! two chords compare equal exactly when they contain the same pitch classes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::pitch_class::PitchClass;

/// Closed set of chord families reported by identification and analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordFamily {
    Major,
    Minor,
    Dim,
    Aug,
    Sus,
    Seventh,
    Other,
    Unknown,
}

impl ChordFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChordFamily::Major => "Major",
            ChordFamily::Minor => "Minor",
            ChordFamily::Dim => "Dim",
            ChordFamily::Aug => "Aug",
            ChordFamily::Sus => "Sus",
            ChordFamily::Seventh => "Seventh",
            ChordFamily::Other => "Other",
            ChordFamily::Unknown => "Unknown",
        }
    }

    /// Parse a family tag; anything unrecognized becomes `Unknown`
    /// Case-insensitive; surrounding whitespace is ignored
    pub fn from_tag(tag: &str) -> Self {
        const KNOWN: [ChordFamily; 7] = [
            ChordFamily::Major,
            ChordFamily::Minor,
            ChordFamily::Dim,
            ChordFamily::Aug,
            ChordFamily::Sus,
            ChordFamily::Seventh,
            ChordFamily::Other,
        ];
        let tag = tag.trim();
        KNOWN
            .into_iter()
            .find(|family| family.as_str().eq_ignore_ascii_case(tag))
            .unwrap_or(ChordFamily::Unknown)
    }
}

impl fmt::Display for ChordFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unordered collection of pitch classes in canonical form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<i32>", into = "Vec<i32>")]
pub struct Chord {
    notes: Vec<PitchClass>,
}

impl Chord {
    pub fn new(notes: impl IntoIterator<Item = PitchClass>) -> Self {
        let mut notes: Vec<PitchClass> = notes.into_iter().collect();
        notes.sort();
        notes.dedup();
        Chord { notes }
    }

    /// Build from raw integers of any magnitude or sign
    pub fn from_notes(notes: &[i32]) -> Self {
        Chord::new(notes.iter().map(|&n| PitchClass::new(n)))
    }

    /// Stack `intervals` (semitones above the root) on `root`
    pub fn from_intervals(root: PitchClass, intervals: &[u8]) -> Self {
        Chord::new(intervals.iter().map(|&i| root.transpose(i as i32)))
    }

    pub fn notes(&self) -> &[PitchClass] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn contains(&self, pc: PitchClass) -> bool {
        self.notes.binary_search(&pc).is_ok()
    }

    /// Smallest member in pitch-class order
    pub fn lowest(&self) -> Option<PitchClass> {
        self.notes.first().copied()
    }

    /// Ascending intervals of every member measured up from `root`
    pub fn intervals_from(&self, root: PitchClass) -> Vec<u8> {
        let mut intervals: Vec<u8> = self.notes.iter().map(|&n| root.interval_to(n)).collect();
        intervals.sort_unstable();
        intervals
    }

    /// Copy of this chord with `from` swapped for `to` (no-op if `from` is absent)
    pub fn replace(&self, from: PitchClass, to: PitchClass) -> Chord {
        Chord::new(self.notes.iter().map(|&n| if n == from { to } else { n }))
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.notes.iter().map(|pc| pc.as_i32()).collect()
    }
}

impl From<Vec<i32>> for Chord {
    fn from(notes: Vec<i32>) -> Self {
        Chord::from_notes(&notes)
    }
}

impl From<Chord> for Vec<i32> {
    fn from(chord: Chord) -> Self {
        chord.to_vec()
    }
}

impl FromIterator<PitchClass> for Chord {
    fn from_iter<I: IntoIterator<Item = PitchClass>>(iter: I) -> Self {
        Chord::new(iter)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.notes.iter().map(|pc| pc.name()).collect();
        write!(f, "[{}]", names.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_form() {
        let chord = Chord::from_notes(&[7, 16, -12, 12, 4]);
        assert_eq!(chord.to_vec(), vec![0, 4, 7]);
        assert_eq!(chord.len(), 3);
    }

    #[test]
    fn test_pitch_class_equivalence() {
        assert_eq!(Chord::from_notes(&[9, 0, 4]), Chord::from_notes(&[0, 4, 9]));
        assert_eq!(Chord::from_notes(&[-3, 12, 16]), Chord::from_notes(&[0, 4, 9]));
        assert_ne!(Chord::from_notes(&[0, 4, 7]), Chord::from_notes(&[0, 3, 7]));
    }

    #[test]
    fn test_from_intervals() {
        let a_minor = Chord::from_intervals(PitchClass::new(9), &[0, 3, 7]);
        assert_eq!(a_minor.to_vec(), vec![0, 4, 9]);
    }

    #[test]
    fn test_intervals_from_root() {
        let chord = Chord::from_notes(&[0, 4, 9]);
        assert_eq!(chord.intervals_from(PitchClass::new(9)), vec![0, 3, 7]);
        assert_eq!(chord.intervals_from(PitchClass::new(0)), vec![0, 4, 9]);
    }

    #[test]
    fn test_replace() {
        let chord = Chord::from_notes(&[0, 4, 7]);
        assert_eq!(chord.replace(PitchClass::new(4), PitchClass::new(3)).to_vec(), vec![0, 3, 7]);
        assert_eq!(chord.replace(PitchClass::new(5), PitchClass::new(6)), chord);
    }

    #[test]
    fn test_contains_and_lowest() {
        let chord = Chord::from_notes(&[11, 2, 5]);
        assert!(chord.contains(PitchClass::new(11)));
        assert!(!chord.contains(PitchClass::new(0)));
        assert_eq!(chord.lowest(), Some(PitchClass::new(2)));
        assert_eq!(Chord::default().lowest(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Chord::from_notes(&[0, 3, 7]).to_string(), "[C Eb G]");
    }

    #[test]
    fn test_family_tag_roundtrip() {
        for family in [
            ChordFamily::Major,
            ChordFamily::Minor,
            ChordFamily::Dim,
            ChordFamily::Aug,
            ChordFamily::Sus,
            ChordFamily::Seventh,
            ChordFamily::Other,
        ] {
            assert_eq!(ChordFamily::from_tag(family.as_str()), family);
        }
        assert_eq!(ChordFamily::from_tag("Lydian"), ChordFamily::Unknown);
    }

    #[test]
    fn test_family_tag_ignores_case() {
        assert_eq!(ChordFamily::from_tag("major"), ChordFamily::Major);
        assert_eq!(ChordFamily::from_tag("MINOR"), ChordFamily::Minor);
        assert_eq!(ChordFamily::from_tag(" dim "), ChordFamily::Dim);
        assert_eq!(ChordFamily::from_tag("seventh"), ChordFamily::Seventh);
        assert_eq!(ChordFamily::from_tag(""), ChordFamily::Unknown);
    }

    #[test]
    fn test_serde() {
        let chord: Chord = serde_json::from_str("[16, 7, 0, 12]").unwrap();
        assert_eq!(serde_json::to_string(&chord).unwrap(), "[0,4,7]");
        assert_eq!(serde_json::to_string(&ChordFamily::Dim).unwrap(), "\"Dim\"");
    }
}
