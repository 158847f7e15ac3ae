// Copyright 2026 the Bezel Swipe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture state record: the mutable output of recognition.

use kurbo::{Point, Vec2};

/// Display edge a swipe was recognized from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Edge {
    /// No direction has triggered yet.
    #[default]
    None,
    /// Inward swipe from the left bezel.
    Left,
    /// Inward swipe from the right bezel.
    Right,
    /// Inward swipe from the bottom bezel.
    Bottom,
}

/// Flick classification along the triggered edge's axis.
///
/// Only meaningful once [`SwipeState::edge`] is non-[`None`](Edge::None):
/// the recognizer classifies the per-event displacement along the x axis
/// for left/right swipes and the y axis for bottom swipes. Displacements
/// that fall between the classification bands leave the previous value in
/// place, so a flick reading persists across slow frames until the finger
/// either comes to rest (dead band) or flicks the other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flick {
    /// No flick: the finger is at rest or nothing has been classified yet.
    #[default]
    None,
    /// Fast movement in the positive direction along the axis (rightward
    /// or downward).
    Positive,
    /// Fast movement in the negative direction along the axis (leftward
    /// or upward).
    Negative,
}

/// Per-gesture recognition state.
///
/// A behavior-free record: the event-dispatch framework owns one instance
/// per tracked gesture and lends it to
/// [`SwipeRecognizer`](crate::recognizer::SwipeRecognizer) by mutable
/// borrow on every touch event. All positions are in logical (rotated)
/// display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeState {
    /// Current recognized position.
    pub position: Point,
    /// Position as of the previous processed event.
    pub last_position: Point,
    /// Total displacement since the touch began.
    pub delta: Vec2,
    /// Displacement since the previous event; an instantaneous velocity
    /// proxy.
    pub diff: Vec2,
    /// Edge the gesture triggered from, retained until reset.
    pub edge: Edge,
    /// Flick classification; see [`Flick`].
    pub flick: Flick,
}

impl SwipeState {
    /// A fresh, zeroed state.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_zeroed() {
        let state = SwipeState::new();
        assert_eq!(state.position, Point::ORIGIN);
        assert_eq!(state.last_position, Point::ORIGIN);
        assert_eq!(state.delta, Vec2::ZERO);
        assert_eq!(state.diff, Vec2::ZERO);
        assert_eq!(state.edge, Edge::None);
        assert_eq!(state.flick, Flick::None);
    }
}
