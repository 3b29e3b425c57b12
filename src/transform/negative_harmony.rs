//! Negative harmony
//!
//! Reflects notes around the tonic-dominant axis of a key. For key root `k`
//! the axis sum is `k + (k + 7)`, and a note `n` maps to `axis - n` (mod 12),
//! which swaps tonic with dominant, major third with minor third, and so on.
//! Reflecting twice with the same key returns the original pitch class.

use serde::{Deserialize, Serialize};

use crate::analysis::ChordIdentifier;
use crate::defaults::SEMITONES;
use crate::models::{reduce, Chord, PitchClass};
use crate::parse::ChordSymbolParser;

pub fn axis_sum(key_root: i32) -> i32 {
    // Inputs are reduced before any addition so extreme keys cannot overflow
    let k = reduce(key_root, SEMITONES);
    reduce(k + reduce(k + 7, SEMITONES), SEMITONES)
}

pub fn reflect_note(note: i32, key_root: i32) -> PitchClass {
    PitchClass::new(axis_sum(key_root) - reduce(note, SEMITONES))
}

/// Reflect every note, keeping the input order
pub fn reflect_chord(notes: &[i32], key_root: i32) -> Vec<PitchClass> {
    let axis = axis_sum(key_root);
    notes
        .iter()
        .map(|&n| PitchClass::new(axis - reduce(n, SEMITONES)))
        .collect()
}

/// Melody mirror: same reflection, applied to a note sequence
pub fn mirror_melody(melody: &[i32], key_root: i32) -> Vec<PitchClass> {
    reflect_chord(melody, key_root)
}

/// One chord of a progression and its negative-harmony counterpart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegativeChord {
    pub symbol: String,
    pub source: Option<Vec<PitchClass>>,
    pub reflected: Option<Vec<PitchClass>>,
    /// Identified symbol of the reflection ("?" when unparsed or unknown)
    pub label: String,
}

/// Convert a progression to negative harmony in `key_root`, using the
/// standard parser and catalog
pub fn negative_progression(text: &str, key_root: i32) -> Vec<NegativeChord> {
    convert_progression(
        &ChordSymbolParser::default(),
        &ChordIdentifier::default(),
        text,
        key_root,
    )
}

/// `negative_progression` with an injected parser and identifier
pub fn convert_progression(
    parser: &ChordSymbolParser<'_>,
    identifier: &ChordIdentifier<'_>,
    text: &str,
    key_root: i32,
) -> Vec<NegativeChord> {
    parser
        .parse_progression(text)
        .into_iter()
        .map(|entry| match entry.parsed {
            Ok(parsed) => {
                let reflected = reflect_chord(&parsed.to_vec(), key_root);
                let label = identifier.identify(&Chord::new(reflected.iter().copied())).label;
                NegativeChord {
                    symbol: entry.symbol,
                    source: Some(parsed.notes),
                    reflected: Some(reflected),
                    label,
                }
            }
            Err(err) => {
                log::debug!("Skipping '{}' in negative progression: {}", entry.symbol, err);
                NegativeChord {
                    symbol: entry.symbol,
                    source: None,
                    reflected: None,
                    label: "?".to_string(),
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(notes: &[PitchClass]) -> Vec<i32> {
        notes.iter().map(|pc| pc.as_i32()).collect()
    }

    #[test]
    fn test_axis_sum() {
        assert_eq!(axis_sum(0), 7);
        assert_eq!(axis_sum(7), 9);
        assert_eq!(axis_sum(5), 5);
        assert_eq!(axis_sum(-12), 7);
    }

    #[test]
    fn test_reflect_note_in_c() {
        // C ↔ G, E ↔ Eb
        assert_eq!(reflect_note(0, 0).as_i32(), 7);
        assert_eq!(reflect_note(7, 0).as_i32(), 0);
        assert_eq!(reflect_note(4, 0).as_i32(), 3);
        assert_eq!(reflect_note(-8, 0).as_i32(), 3);
    }

    #[test]
    fn test_reflection_extreme_inputs() {
        assert_eq!(axis_sum(i32::MIN), 3);
        assert_eq!(axis_sum(i32::MAX), 9);
        assert_eq!(reflect_note(i32::MIN, 0).as_i32(), 3);
        assert_eq!(reflect_note(i32::MAX, 0).as_i32(), 0);
        assert_eq!(reflect_note(0, i32::MIN).as_i32(), 3);
        assert_eq!(reflect_note(0, i32::MAX).as_i32(), 9);
        assert_eq!(values(&reflect_chord(&[i32::MIN, i32::MAX], i32::MAX)), vec![5, 2]);

        for &key in &[i32::MIN, i32::MAX] {
            for &note in &[i32::MIN, i32::MAX, i32::MIN + 1, i32::MAX - 1] {
                let once = reflect_note(note, key);
                assert_eq!(reflect_note(once.as_i32(), key), PitchClass::new(note));
            }
        }
    }

    #[test]
    fn test_reflection_is_involution() {
        for key in -12..24 {
            for note in -24..24 {
                let once = reflect_note(note, key);
                assert_eq!(reflect_note(once.as_i32(), key), PitchClass::new(note));
            }
        }
    }

    #[test]
    fn test_reflect_chord_preserves_order() {
        let reflected = reflect_chord(&[0, 4, 7], 0);
        assert_eq!(values(&reflected), vec![7, 3, 0]);
        assert_eq!(mirror_melody(&[0, 2, 4, 5], 0), reflect_chord(&[0, 2, 4, 5], 0));
    }

    #[test]
    fn test_negative_progression() {
        let result = negative_progression("C G7 Xm", 0);

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].label, "Cm");
        assert_eq!(result[1].label, "Dm7b5");
        assert_eq!(values(result[1].reflected.as_ref().unwrap()), vec![0, 8, 5, 2]);

        assert_eq!(result[2].symbol, "Xm");
        assert!(result[2].reflected.is_none());
        assert_eq!(result[2].label, "?");
    }

    #[test]
    fn test_convert_progression_with_injected_parts() {
        let parser = ChordSymbolParser::default();
        let identifier = ChordIdentifier::default();
        assert_eq!(
            convert_progression(&parser, &identifier, "F G", 0),
            negative_progression("F G", 0)
        );
    }
}
