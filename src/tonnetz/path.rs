//! Tonnetz path walk
//!
//! Folds a sequence of P/L/R moves over a start chord and lays the visited
//! chords out on the plane. A move that maps a chord onto itself adds no
//! node and no edge; it only bumps `self_maps`.

use serde::{Deserialize, Serialize};

use super::geometry::displacement;
use crate::analysis::ChordIdentifier;
use crate::models::{Chord, ChordFamily};
use crate::transform::{NeoRiemannianTransformer, Transformation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathNode {
    pub notes: Chord,
    pub label: String,
    #[serde(rename = "type")]
    pub family: ChordFamily,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEdge {
    pub from: usize,
    pub to: usize,
    pub transformation: Transformation,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TonnetzPath {
    pub nodes: Vec<PathNode>,
    pub edges: Vec<PathEdge>,
    pub self_maps: usize,
}

impl TonnetzPath {
    pub fn last(&self) -> Option<&PathNode> {
        self.nodes.last()
    }
}

pub fn walk(
    transformer: &NeoRiemannianTransformer<'_>,
    identifier: &ChordIdentifier<'_>,
    start: &Chord,
    transformations: &[Transformation],
    distance: f64,
) -> TonnetzPath {
    let info = identifier.identify(start);
    let mut path = TonnetzPath {
        nodes: vec![PathNode {
            notes: start.clone(),
            label: info.label,
            family: info.family,
            x: 0.0,
            y: 0.0,
        }],
        ..TonnetzPath::default()
    };

    for &t in transformations {
        let from = path.nodes.len() - 1;
        let current = &path.nodes[from];
        let result = transformer.apply(&current.notes, t);
        if result.is_self_map {
            path.self_maps += 1;
            continue;
        }

        let step = displacement(t, current.family, distance);
        let info = identifier.identify(&result.notes);
        let node = PathNode {
            x: current.x + step.dx,
            y: current.y + step.dy,
            notes: result.notes,
            label: info.label,
            family: info.family,
        };
        path.nodes.push(node);
        path.edges.push(PathEdge {
            from,
            to: from + 1,
            transformation: t,
        });
    }

    path
}

/// Walk from raw integers using the standard catalog
pub fn walk_transforms(start: &[i32], transformations: &[Transformation], distance: f64) -> TonnetzPath {
    walk(
        &NeoRiemannianTransformer::default(),
        &ChordIdentifier::default(),
        &Chord::from_notes(start),
        transformations,
        distance,
    )
}
