//! Chord identification
//!
//! Tries every member of the chord as a root (ascending) and, for each root,
//! scans the catalog in declared order. The first `(root, definition)` pair
//! whose interval set matches exactly wins; there is no best-fit scoring.

use serde::{Deserialize, Serialize};

use crate::catalog::ChordCatalog;
use crate::models::{Chord, ChordFamily, PitchClass};

/// Result of identifying a chord
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordInfo {
    pub root: PitchClass,
    #[serde(rename = "type")]
    pub family: ChordFamily,
    /// Chord symbol, e.g. "Am" (or "?" when unknown)
    pub label: String,
    /// Catalog name, e.g. "Minor" (or "Unknown")
    pub name: String,
}

impl ChordInfo {
    /// Sentinel returned when nothing in the catalog matches
    pub fn unknown(root: PitchClass) -> Self {
        ChordInfo {
            root,
            family: ChordFamily::Unknown,
            label: "?".to_string(),
            name: "Unknown".to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.family == ChordFamily::Unknown
    }
}

/// Matches note collections against a chord catalog
#[derive(Debug, Clone, Copy)]
pub struct ChordIdentifier<'a> {
    catalog: &'a ChordCatalog,
}

impl<'a> ChordIdentifier<'a> {
    pub fn new(catalog: &'a ChordCatalog) -> Self {
        ChordIdentifier { catalog }
    }

    pub fn catalog(&self) -> &'a ChordCatalog {
        self.catalog
    }

    pub fn identify(&self, chord: &Chord) -> ChordInfo {
        for &root in chord.notes() {
            let intervals = chord.intervals_from(root);
            if let Some(def) = self.catalog.match_intervals(&intervals) {
                return ChordInfo {
                    root,
                    family: def.family,
                    label: def.label(root),
                    name: def.name.clone(),
                };
            }
        }

        log::debug!("No catalog match for {}", chord);
        ChordInfo::unknown(chord.lowest().unwrap_or(PitchClass::C))
    }
}

impl Default for ChordIdentifier<'static> {
    fn default() -> Self {
        ChordIdentifier::new(ChordCatalog::standard())
    }
}

/// Identify raw integers against the standard catalog
pub fn identify_chord(notes: &[i32]) -> ChordInfo {
    ChordIdentifier::default().identify(&Chord::from_notes(notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ChordDefinition;

    #[test]
    fn test_identify_c_major() {
        let info = identify_chord(&[0, 4, 7]);
        assert_eq!(info.root, PitchClass::new(0));
        assert_eq!(info.family, ChordFamily::Major);
        assert_eq!(info.label, "C");
        assert_eq!(info.name, "Major");
    }

    #[test]
    fn test_identify_a_minor_any_order() {
        let info = identify_chord(&[9, 0, 4]);
        assert_eq!(info.label, "Am");
        assert_eq!(info.family, ChordFamily::Minor);
        assert_eq!(info.root, PitchClass::new(9));
        assert_eq!(identify_chord(&[-3, 12, 28]), info);
    }

    #[test]
    fn test_identify_sevenths() {
        assert_eq!(identify_chord(&[7, 11, 2, 5]).label, "G7");
        assert_eq!(identify_chord(&[2, 5, 9, 0]).label, "Dm7");
        assert_eq!(identify_chord(&[11, 2, 5, 9]).label, "Bm7b5");
        assert_eq!(identify_chord(&[0, 4, 7, 11]).family, ChordFamily::Seventh);
    }

    #[test]
    fn test_symmetric_chords_take_lowest_root() {
        // Augmented and dim7 match from every member; the lowest wins
        assert_eq!(identify_chord(&[4, 8, 0]).label, "Caug");
        assert_eq!(identify_chord(&[3, 6, 9, 0]).label, "Cdim7");
    }

    #[test]
    fn test_sus_inversion_resolves_to_first_root() {
        // F sus2 = {F, G, C} is C sus4 read from C
        let info = identify_chord(&[5, 7, 0]);
        assert_eq!(info.label, "Csus4");
        assert_eq!(info.family, ChordFamily::Sus);
    }

    #[test]
    fn test_unknown_sentinel() {
        let info = identify_chord(&[0, 1, 2]);
        assert_eq!(info, ChordInfo::unknown(PitchClass::new(0)));
        assert_eq!(info.label, "?");
        assert!(info.is_unknown());

        let empty = identify_chord(&[]);
        assert_eq!(empty.name, "Unknown");
    }

    #[test]
    fn test_duplicates_collapse_before_matching() {
        assert_eq!(identify_chord(&[0, 4, 7, 12, 19]).label, "C");
    }

    #[test]
    fn test_injected_catalog() {
        let catalog = ChordCatalog::new(vec![ChordDefinition::new(
            "Power",
            "5",
            &[0, 7],
            ChordFamily::Other,
        )])
        .unwrap();
        let identifier = ChordIdentifier::new(&catalog);

        let info = identifier.identify(&Chord::from_notes(&[2, 9]));
        assert_eq!(info.label, "D5");
        assert_eq!(info.family, ChordFamily::Other);

        assert!(identifier.identify(&Chord::from_notes(&[0, 4, 7])).is_unknown());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(identify_chord(&[9, 0, 4])).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"root": 9, "type": "Minor", "label": "Am", "name": "Minor"})
        );
    }
}
