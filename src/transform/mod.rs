//! Chord transformations: Neo-Riemannian moves and negative-harmony reflection

pub mod negative_harmony;
pub mod neo_riemannian;

pub use negative_harmony::{
    axis_sum, convert_progression, mirror_melody, negative_progression, reflect_chord,
    reflect_note, NegativeChord,
};
pub use neo_riemannian::{
    apply_transform, apply_transform_tag, parse_transform_sequence, NeoRiemannianTransformer,
    Transformation, TransformationResult,
};
