// Copyright 2026 the Bezel Swipe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display collaborator: panel dimensions and the orientation transform.
//!
//! The recognizer reasons in a logical, unrotated coordinate frame. The
//! host supplies the raw panel dimensions and a mapping that rotates a
//! point — re-centered on the panel's middle — into that logical frame.
//! [`RotatedDisplay`] is a ready-made implementation for fixed-size panels
//! mounted at a quarter-turn rotation; hosts with richer display stacks
//! implement [`HostDisplay`] themselves.

use kurbo::Point;

/// Display access the recognizer depends on.
///
/// Implementations must apply [`map_to_orientation`](Self::map_to_orientation)
/// consistently: the recognizer feeds it both touch positions and the
/// panel's half-extent point, and the geometry only holds if all three go
/// through the same transform.
pub trait HostDisplay {
    /// Raw panel width in device pixels.
    fn width(&self) -> f64;

    /// Raw panel height in device pixels.
    fn height(&self) -> f64;

    /// Rotate a point, re-centered on the panel's middle, into the logical
    /// orientation frame.
    fn map_to_orientation(&self, point: Point) -> Point;
}

/// Quarter-turn panel rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    /// Panel is mounted upright.
    #[default]
    Deg0,
    /// Rotated 90° counterclockwise.
    Deg90,
    /// Upside down.
    Deg180,
    /// Rotated 270° counterclockwise.
    Deg270,
}

impl Rotation {
    /// Rotate a point about the origin.
    pub fn apply(self, p: Point) -> Point {
        match self {
            Self::Deg0 => p,
            Self::Deg90 => Point::new(p.y, -p.x),
            Self::Deg180 => Point::new(-p.x, -p.y),
            Self::Deg270 => Point::new(-p.y, p.x),
        }
    }
}

/// Fixed-size panel mounted at a quarter-turn rotation.
///
/// `width` and `height` are the raw (unrotated) panel dimensions; the
/// logical frame the recognizer sees swaps them under `Deg90`/`Deg270`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedDisplay {
    /// Raw panel width in device pixels.
    pub width: f64,
    /// Raw panel height in device pixels.
    pub height: f64,
    /// Current mounting rotation.
    pub rotation: Rotation,
}

impl RotatedDisplay {
    /// An upright panel of the given raw dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            rotation: Rotation::Deg0,
        }
    }

    /// A panel mounted at the given rotation.
    pub fn rotated(width: f64, height: f64, rotation: Rotation) -> Self {
        Self {
            width,
            height,
            rotation,
        }
    }
}

impl HostDisplay for RotatedDisplay {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn map_to_orientation(&self, point: Point) -> Point {
        self.rotation.apply(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upright_mapping_is_identity() {
        let d = RotatedDisplay::new(1000.0, 2000.0);
        let p = Point::new(-12.0, 34.0);
        assert_eq!(d.map_to_orientation(p), p);
    }

    #[test]
    fn quarter_turns_cycle_back_to_identity() {
        let p = Point::new(3.0, -7.0);
        let once = Rotation::Deg90.apply(p);
        let twice = Rotation::Deg90.apply(once);
        let thrice = Rotation::Deg90.apply(twice);
        assert_eq!(twice, Rotation::Deg180.apply(p));
        assert_eq!(thrice, Rotation::Deg270.apply(p));
        assert_eq!(Rotation::Deg90.apply(thrice), p);
    }

    #[test]
    fn half_turn_negates_both_components() {
        assert_eq!(
            Rotation::Deg180.apply(Point::new(5.0, -2.0)),
            Point::new(-5.0, 2.0)
        );
    }
}
