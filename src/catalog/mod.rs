//! Chord catalog
//!
//! Named chord qualities as ascending interval sets above a root. The
//! identifier and the chord-symbol parser both take a `&ChordCatalog`, so a
//! caller (or a test) can hand them a smaller or extended table.
//!
//! Scan order matters: identification accepts the first matching entry in
//! declared order, so earlier entries win ties between inversions.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::models::{Chord, ChordFamily, PitchClass};

/// One named chord quality
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordDefinition {
    pub name: String,
    pub suffix: String,
    /// Ascending semitones above the root, starting at 0
    pub intervals: Vec<u8>,
    pub family: ChordFamily,
}

impl ChordDefinition {
    pub fn new(name: &str, suffix: &str, intervals: &[u8], family: ChordFamily) -> Self {
        ChordDefinition {
            name: name.to_string(),
            suffix: suffix.to_string(),
            intervals: intervals.to_vec(),
            family,
        }
    }

    /// Chord symbol for this quality on `root`, e.g. "F#m7"
    pub fn label(&self, root: PitchClass) -> String {
        format!("{}{}", root.name(), self.suffix)
    }

    /// Realize this quality on `root`
    pub fn build(&self, root: PitchClass) -> Chord {
        Chord::from_intervals(root, &self.intervals)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let first = self
            .intervals
            .first()
            .ok_or_else(|| CatalogError::EmptyIntervals(self.name.clone()))?;
        if *first != 0 {
            return Err(CatalogError::NotRootedAtZero(self.name.clone()));
        }
        if self.intervals.windows(2).any(|w| w[0] >= w[1]) {
            return Err(CatalogError::NotAscending(self.name.clone()));
        }
        if let Some(&interval) = self.intervals.iter().find(|&&i| i > 11) {
            return Err(CatalogError::IntervalOutOfRange {
                name: self.name.clone(),
                interval,
            });
        }
        Ok(())
    }
}

/// Build a chord from a root and an interval set
pub fn build_chord(root: i32, intervals: &[u8]) -> Chord {
    Chord::from_intervals(PitchClass::new(root), intervals)
}

static STANDARD: Lazy<ChordCatalog> = Lazy::new(|| ChordCatalog {
    definitions: vec![
        ChordDefinition::new("Major", "", &[0, 4, 7], ChordFamily::Major),
        ChordDefinition::new("Minor", "m", &[0, 3, 7], ChordFamily::Minor),
        ChordDefinition::new("Diminished", "dim", &[0, 3, 6], ChordFamily::Dim),
        ChordDefinition::new("Augmented", "aug", &[0, 4, 8], ChordFamily::Aug),
        ChordDefinition::new("Major 7", "maj7", &[0, 4, 7, 11], ChordFamily::Seventh),
        ChordDefinition::new("Minor 7", "m7", &[0, 3, 7, 10], ChordFamily::Seventh),
        ChordDefinition::new("Dominant 7", "7", &[0, 4, 7, 10], ChordFamily::Seventh),
        ChordDefinition::new("Diminished 7", "dim7", &[0, 3, 6, 9], ChordFamily::Seventh),
        ChordDefinition::new("Half-Diminished 7", "m7b5", &[0, 3, 6, 10], ChordFamily::Seventh),
        ChordDefinition::new("Sus4", "sus4", &[0, 5, 7], ChordFamily::Sus),
        ChordDefinition::new("Sus2", "sus2", &[0, 2, 7], ChordFamily::Sus),
        // 9ths folded into one octave: the 9 sits at 2
        ChordDefinition::new("Add9", "add9", &[0, 2, 4, 7], ChordFamily::Seventh),
        ChordDefinition::new("Minor 9", "m9", &[0, 2, 3, 7, 10], ChordFamily::Seventh),
        ChordDefinition::new("Major 9", "maj9", &[0, 2, 4, 7, 11], ChordFamily::Seventh),
        ChordDefinition::new("Dominant 9", "9", &[0, 2, 4, 7, 10], ChordFamily::Seventh),
    ],
});

/// Immutable, ordered table of chord definitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordCatalog {
    definitions: Vec<ChordDefinition>,
}

impl ChordCatalog {
    /// Build a custom catalog, validating every definition
    pub fn new(definitions: Vec<ChordDefinition>) -> Result<Self, CatalogError> {
        for def in &definitions {
            def.validate()?;
        }
        Ok(ChordCatalog { definitions })
    }

    /// The 15-entry reference catalog
    pub fn standard() -> &'static ChordCatalog {
        &STANDARD
    }

    pub fn definitions(&self) -> &[ChordDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ChordDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    /// First definition (in declared order) whose intervals equal `intervals`
    pub fn match_intervals(&self, intervals: &[u8]) -> Option<&ChordDefinition> {
        self.definitions.iter().find(|d| d.intervals == intervals)
    }

    /// First definition tagged with `family`
    pub fn first_of_family(&self, family: ChordFamily) -> Option<&ChordDefinition> {
        self.definitions.iter().find(|d| d.family == family)
    }

    /// Definitions ordered longest suffix first (stable for equal lengths)
    pub fn by_suffix_length(&self) -> Vec<&ChordDefinition> {
        let mut defs: Vec<&ChordDefinition> = self.definitions.iter().collect();
        defs.sort_by(|a, b| b.suffix.len().cmp(&a.suffix.len()));
        defs
    }
}

impl Default for ChordCatalog {
    fn default() -> Self {
        ChordCatalog::standard().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_shape() {
        let catalog = ChordCatalog::standard();
        assert_eq!(catalog.len(), 15);
        for def in catalog.definitions() {
            assert!(def.validate().is_ok(), "{} is malformed", def.name);
        }
    }

    #[test]
    fn test_standard_catalog_order() {
        let names: Vec<&str> = ChordCatalog::standard()
            .definitions()
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(&names[..4], &["Major", "Minor", "Diminished", "Augmented"]);
        assert_eq!(names[14], "Dominant 9");
    }

    #[test]
    fn test_new_rejects_bad_definitions() {
        let not_zero = ChordDefinition::new("Bad", "x", &[1, 4, 7], ChordFamily::Other);
        assert_eq!(
            ChordCatalog::new(vec![not_zero]),
            Err(CatalogError::NotRootedAtZero("Bad".to_string()))
        );

        let descending = ChordDefinition::new("Bad", "x", &[0, 7, 4], ChordFamily::Other);
        assert_eq!(
            ChordCatalog::new(vec![descending]),
            Err(CatalogError::NotAscending("Bad".to_string()))
        );

        let empty = ChordDefinition::new("Bad", "x", &[], ChordFamily::Other);
        assert!(matches!(ChordCatalog::new(vec![empty]), Err(CatalogError::EmptyIntervals(_))));

        let wide = ChordDefinition::new("Bad", "x", &[0, 4, 14], ChordFamily::Other);
        assert!(matches!(
            ChordCatalog::new(vec![wide]),
            Err(CatalogError::IntervalOutOfRange { interval: 14, .. })
        ));
    }

    #[test]
    fn test_match_intervals_first_wins() {
        let catalog = ChordCatalog::new(vec![
            ChordDefinition::new("First", "a", &[0, 4, 7], ChordFamily::Major),
            ChordDefinition::new("Second", "b", &[0, 4, 7], ChordFamily::Other),
        ])
        .unwrap();
        assert_eq!(catalog.match_intervals(&[0, 4, 7]).unwrap().name, "First");
        assert!(catalog.match_intervals(&[0, 3, 7]).is_none());
    }

    #[test]
    fn test_by_suffix_length() {
        let defs = ChordCatalog::standard().by_suffix_length();
        assert_eq!(defs.last().unwrap().suffix, "");
        assert!(defs[0].suffix.len() >= defs[1].suffix.len());
    }

    #[test]
    fn test_label_and_build() {
        let minor7 = ChordCatalog::standard().get("Minor 7").unwrap();
        assert_eq!(minor7.label(PitchClass::new(6)), "F#m7");
        assert_eq!(minor7.build(PitchClass::new(6)).to_vec(), vec![1, 4, 6, 9]);
        assert_eq!(build_chord(-3, &[0, 3, 7]).to_vec(), vec![0, 4, 9]);
    }
}
