//! Harmony engine functions exposed to JavaScript
//!
//! Every function here is a thin wrapper: convert arguments, call into the
//! engine with the standard catalog, serialize the result. Parse failures of
//! a chord symbol come back as `null`, never as a thrown error.

use wasm_bindgen::prelude::*;

use super::helpers::{js_error, serialize, to_json};
use crate::analysis;
use crate::catalog::ChordCatalog;
use crate::defaults::DEFAULT_EDGE_LENGTH;
use crate::models::{self, ChordFamily};
use crate::parse;
use crate::tonnetz;
use crate::transform::{self, parse_transform_sequence};

/// Identify a chord from pitch classes (any integers)
///
/// Returns `{root, type, label, name}`; unmatched chords get label "?".
#[wasm_bindgen(js_name = identifyChord)]
pub fn identify_chord(notes: Vec<i32>) -> Result<JsValue, JsValue> {
    serialize(&analysis::identify_chord(&notes), "Failed to serialize chord info")
}

/// Parse a chord symbol such as "F#m7" into pitch classes (catalog order)
///
/// Returns `null` when the root cannot be resolved.
#[wasm_bindgen(js_name = parseChordString)]
pub fn parse_chord_string(text: &str) -> Result<JsValue, JsValue> {
    match parse::parse_chord_string(text) {
        Some(notes) => serialize(&notes, "Failed to serialize parsed chord"),
        None => {
            log::debug!("Could not parse chord symbol '{}'", text);
            Ok(JsValue::NULL)
        }
    }
}

/// Apply "P", "L" or "R"; any other tag returns the input unchanged
///
/// Returns `{notes, isSelfMap, type}`.
#[wasm_bindgen(js_name = applyTransform)]
pub fn apply_transform(notes: Vec<i32>, tag: &str) -> Result<JsValue, JsValue> {
    serialize(
        &transform::apply_transform_tag(&notes, tag),
        "Failed to serialize transformation result",
    )
}

#[wasm_bindgen(js_name = reflectNote)]
pub fn reflect_note(note: i32, key_root: i32) -> i32 {
    transform::reflect_note(note, key_root).as_i32()
}

/// Reflect a chord (or melody) around the key's axis, keeping note order
#[wasm_bindgen(js_name = reflectChord)]
pub fn reflect_chord(notes: Vec<i32>, key_root: i32) -> Vec<i32> {
    transform::reflect_chord(&notes, key_root)
        .into_iter()
        .map(|pc| pc.as_i32())
        .collect()
}

/// Layout step `{dx, dy}` for a transformation from a chord of `family`
#[wasm_bindgen]
pub fn displacement(tag: &str, family: &str, distance: f64) -> Result<JsValue, JsValue> {
    let step = tonnetz::displacement_for_tag(tag, ChordFamily::from_tag(family), distance);
    serialize(&step, "Failed to serialize displacement")
}

/// Frequency in Hz of a pitch class in an octave (A4 = 440 Hz)
#[wasm_bindgen(js_name = frequencyOf)]
pub fn frequency_of(pitch_class: i32, octave: i32) -> f64 {
    models::frequency_of(pitch_class, octave)
}

/// Convert a whole progression ("C Am F G7") to negative harmony
#[wasm_bindgen(js_name = negativeProgression)]
pub fn negative_progression(text: &str, key_root: i32) -> Result<JsValue, JsValue> {
    let converted = transform::negative_progression(text, key_root);
    serialize(&converted, "Failed to serialize negative progression")
}

/// Parse every token of a progression
#[wasm_bindgen(js_name = parseProgression)]
pub fn parse_progression(text: &str) -> Result<JsValue, JsValue> {
    serialize(&parse::parse_progression(text), "Failed to serialize progression")
}

/// Walk a transformation sequence ("PLR") from a start chord
///
/// Self-maps produce no node; `distance` defaults to the standard edge length.
#[wasm_bindgen(js_name = walkTransforms)]
pub fn walk_transforms(
    notes: Vec<i32>,
    sequence: &str,
    distance: Option<f64>,
) -> Result<JsValue, JsValue> {
    let path = build_path(&notes, sequence, distance)?;
    serialize(&path, "Failed to serialize Tonnetz path")
}

/// Same walk as `walkTransforms`, as pretty-printed JSON for saving
#[wasm_bindgen(js_name = exportPathJson)]
pub fn export_path_json(
    notes: Vec<i32>,
    sequence: &str,
    distance: Option<f64>,
) -> Result<String, JsValue> {
    let path = build_path(&notes, sequence, distance)?;
    to_json(&path, "Failed to export Tonnetz path")
}

/// The reference chord catalog, in scan order
#[wasm_bindgen(js_name = chordCatalog)]
pub fn chord_catalog() -> Result<JsValue, JsValue> {
    serialize(ChordCatalog::standard().definitions(), "Failed to serialize chord catalog")
}

fn build_path(
    notes: &[i32],
    sequence: &str,
    distance: Option<f64>,
) -> Result<tonnetz::TonnetzPath, JsValue> {
    let ops = parse_transform_sequence(sequence)
        .map_err(|e| js_error("Invalid transformation sequence", e))?;
    Ok(tonnetz::walk_transforms(
        notes,
        &ops,
        distance.unwrap_or(DEFAULT_EDGE_LENGTH),
    ))
}
