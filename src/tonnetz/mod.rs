//! Tonnetz layout helpers for callers that draw a traversal graph

pub mod geometry;
pub mod path;

pub use geometry::{displacement, displacement_for_tag, step_angle, Displacement};
pub use path::{walk, walk_transforms, PathEdge, PathNode, TonnetzPath};
