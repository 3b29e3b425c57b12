//! Tonnetz Harmony Engine WASM Module
//!
//! Symbolic music-theory core for the Tonnetz explorer: chord identification,
//! chord-symbol parsing, Neo-Riemannian P/L/R transformations, negative
//! harmony and Tonnetz layout geometry. Everything works on octave-free pitch
//! classes and is pure; rendering, history and audio stay in JavaScript.

pub mod analysis;
pub mod api;
pub mod catalog;
pub mod defaults;
pub mod error;
pub mod models;
pub mod parse;
pub mod tonnetz;
pub mod transform;

// Re-export commonly used types
pub use analysis::{identify_chord, ChordIdentifier, ChordInfo, TrichordAnalyzer, TrichordStructure};
pub use catalog::{build_chord, ChordCatalog, ChordDefinition};
pub use error::{CatalogError, ChordParseError, TransformParseError};
pub use models::{frequency_of, label_of, normalize, reduce, Chord, ChordFamily, PitchClass};
pub use parse::{parse_chord_string, ChordSymbolParser, ParsedChord};
pub use tonnetz::{displacement, Displacement};
pub use transform::{
    apply_transform, apply_transform_tag, reflect_chord, reflect_note, NeoRiemannianTransformer,
    Transformation, TransformationResult,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            // Logger already installed by an earlier start call
            return;
        }
    }

    log::info!("Tonnetz harmony engine WASM module initialized");
}
