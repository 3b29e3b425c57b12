//! Tonnetz displacement vectors
//!
//! Maps a transformation and the current chord's family to a 2-D step for
//! laying out a traversal graph. Angles start straight up and increase
//! clockwise; the y axis points down, as on a canvas. Only "Major or not"
//! matters for the family: non-major chords step in the opposite direction.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::models::ChordFamily;
use crate::transform::Transformation;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Displacement {
    pub dx: f64,
    pub dy: f64,
}

impl Displacement {
    pub const ZERO: Displacement = Displacement { dx: 0.0, dy: 0.0 };
}

/// Direction of a step, in radians clockwise from straight up
pub fn step_angle(transformation: Transformation, family: ChordFamily) -> f64 {
    let base = match transformation {
        Transformation::P => 0.0,
        Transformation::R => 2.0 * PI / 3.0,
        Transformation::L => 4.0 * PI / 3.0,
    };
    if family == ChordFamily::Major {
        base
    } else {
        base + PI
    }
}

pub fn displacement(transformation: Transformation, family: ChordFamily, distance: f64) -> Displacement {
    let angle = step_angle(transformation, family);
    Displacement {
        dx: distance * angle.sin(),
        dy: -distance * angle.cos(),
    }
}

/// Same as `displacement`, but an unknown tag yields no movement
pub fn displacement_for_tag(tag: &str, family: ChordFamily, distance: f64) -> Displacement {
    match tag.parse::<Transformation>() {
        Ok(t) => displacement(t, family, distance),
        Err(_) => Displacement::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Displacement, dx: f64, dy: f64) {
        assert!(
            (actual.dx - dx).abs() < 1e-9 && (actual.dy - dy).abs() < 1e-9,
            "expected ({}, {}), got ({}, {})",
            dx,
            dy,
            actual.dx,
            actual.dy
        );
    }

    #[test]
    fn test_parallel_major_points_up() {
        assert_close(displacement(Transformation::P, ChordFamily::Major, 60.0), 0.0, -60.0);
    }

    #[test]
    fn test_parallel_minor_points_down() {
        assert_close(displacement(Transformation::P, ChordFamily::Minor, 60.0), 0.0, 60.0);
    }

    #[test]
    fn test_lowercase_family_tag_steps_like_major() {
        let family = ChordFamily::from_tag("major");
        assert_close(displacement_for_tag("P", family, 60.0), 0.0, -60.0);
        let family = ChordFamily::from_tag("MINOR");
        assert_close(displacement_for_tag("P", family, 60.0), 0.0, 60.0);
    }

    #[test]
    fn test_relative_and_leading_tone() {
        let h = 3.0_f64.sqrt() / 2.0;
        assert_close(displacement(Transformation::R, ChordFamily::Major, 1.0), h, 0.5);
        assert_close(displacement(Transformation::L, ChordFamily::Major, 1.0), -h, 0.5);
        assert_close(displacement(Transformation::R, ChordFamily::Minor, 1.0), -h, -0.5);
        assert_close(displacement(Transformation::L, ChordFamily::Dim, 1.0), h, -0.5);
    }

    #[test]
    fn test_non_major_families_share_direction() {
        for family in [ChordFamily::Minor, ChordFamily::Aug, ChordFamily::Unknown] {
            assert_eq!(
                displacement(Transformation::R, family, 10.0),
                displacement(Transformation::R, ChordFamily::Minor, 10.0)
            );
        }
    }

    #[test]
    fn test_opposite_families_cancel() {
        for t in Transformation::ALL {
            let there = displacement(t, ChordFamily::Major, 60.0);
            let back = displacement(t, ChordFamily::Minor, 60.0);
            assert_close(
                Displacement { dx: there.dx + back.dx, dy: there.dy + back.dy },
                0.0,
                0.0,
            );
        }
    }

    #[test]
    fn test_unknown_tag_is_zero() {
        assert_eq!(displacement_for_tag("Q", ChordFamily::Major, 60.0), Displacement::ZERO);
        assert_close(displacement_for_tag("P", ChordFamily::Major, 60.0), 0.0, -60.0);
    }
}
