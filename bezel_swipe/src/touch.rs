// Copyright 2026 the Bezel Swipe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw touch input model: event phases and per-finger touch points.

use kurbo::Point;

/// Phase of a touch event as delivered by the host event framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// A finger made contact with the display.
    Began,
    /// A tracked finger moved.
    Moved,
    /// A tracked finger lifted off the display.
    Ended,
    /// The host abandoned the touch sequence (e.g. focus loss).
    ///
    /// The recognizer has nothing to say about this phase: it returns
    /// [`Verdict::NoOpinion`](crate::recognizer::Verdict::NoOpinion) and
    /// leaves the gesture state untouched.
    Cancelled,
}

/// One active finger, in raw device pixel coordinates.
///
/// Both the position where the finger first made contact and its current
/// position ride along on every event; the recognizer derives total
/// displacement from the pair each call rather than storing the start
/// itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Position where this finger first touched down.
    pub start: Point,
    /// Current position of the finger.
    pub position: Point,
}

impl TouchPoint {
    /// A touch point that started at `start` and has since moved to
    /// `position`.
    pub fn new(start: Point, position: Point) -> Self {
        Self { start, position }
    }

    /// A touch point that has not moved from where it landed.
    pub fn at(position: Point) -> Self {
        Self {
            start: position,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_is_a_stationary_point() {
        let p = TouchPoint::at(Point::new(3.0, 4.0));
        assert_eq!(p.start, p.position);
    }
}
