// Copyright 2026 the Bezel Swipe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bezel swipe recognition: border detection, direction triggering, and
//! flick classification.
//!
//! ## Usage
//!
//! 1) Build a [`SwipeRecognizer`] around a [`HostDisplay`] implementation.
//! 2) Obtain a [`SwipeState`] from [`SwipeRecognizer::create`].
//! 3) Call [`SwipeRecognizer::recognize`] once per touch event and act on
//!    the returned [`Verdict`].
//! 4) After a [`Verdict::Cancel`] or [`Verdict::Finish`], call
//!    [`SwipeRecognizer::reset`] before reusing the state for the next
//!    gesture.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use bezel_swipe::display::RotatedDisplay;
//! use bezel_swipe::recognizer::{SwipeRecognizer, Verdict};
//! use bezel_swipe::state::Edge;
//! use bezel_swipe::touch::{TouchPhase, TouchPoint};
//!
//! let recognizer = SwipeRecognizer::new(RotatedDisplay::new(1000.0, 2000.0));
//! let mut state = recognizer.create();
//!
//! let start = Point::new(995.0, 800.0);
//! recognizer.recognize(&mut state, TouchPhase::Began, &[TouchPoint::at(start)]);
//!
//! // Leftward pull from the right bezel.
//! let verdict = recognizer.recognize(
//!     &mut state,
//!     TouchPhase::Moved,
//!     &[TouchPoint::new(start, Point::new(960.0, 805.0))],
//! );
//! assert_eq!(verdict, Verdict::Trigger);
//! assert_eq!(state.edge, Edge::Right);
//! ```

use kurbo::{Point, Vec2};
use log::{debug, trace};

use crate::display::HostDisplay;
use crate::state::{Edge, Flick, SwipeState};
use crate::touch::{TouchPhase, TouchPoint};

/// Width in logical pixels of the bezel zone a swipe must start in.
///
/// One value shared by the left, right, and bottom edge checks. Override
/// per recognizer with [`SwipeRecognizer::with_border_size`].
pub const DEFAULT_BORDER_SIZE: f64 = 50.0;

// Flick classification bands, in logical pixels per event. Per-event
// displacements in the gaps between the bands are left unclassified and
// keep the previous flick value.
const FLICK_MIN: f64 = 25.0;
const FLICK_MAX: f64 = 100.0;
const FLICK_REST: f64 = 5.0;

/// Recognition verdict returned to the dispatch framework for each event.
///
/// The framework uses the verdict to decide whether to keep delivering
/// events to this recognizer; the recognizer itself keeps no lifecycle
/// state beyond what it writes into [`SwipeState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Recognition failed for this touch sequence; stop delivering events.
    Cancel,
    /// The touch qualifies as a bezel candidate but no direction has
    /// triggered yet.
    Maybe,
    /// A direction triggered; the gesture is active.
    Trigger,
    /// The touch sequence ended.
    Finish,
    /// The event carries nothing for this recognizer; state untouched.
    NoOpinion,
}

/// Stateless bezel swipe recognizer.
///
/// Holds only its display collaborator and the border-size knob; all
/// per-gesture state lives in the [`SwipeState`] passed to
/// [`recognize`](Self::recognize) and [`reset`](Self::reset).
#[derive(Debug, Clone)]
pub struct SwipeRecognizer<D> {
    display: D,
    border_size: f64,
}

impl<D: HostDisplay> SwipeRecognizer<D> {
    /// A recognizer over the given display, using
    /// [`DEFAULT_BORDER_SIZE`].
    pub fn new(display: D) -> Self {
        Self {
            display,
            border_size: DEFAULT_BORDER_SIZE,
        }
    }

    /// Override the bezel zone width, for hosts with unusual bezel
    /// geometry. The same value applies to all three edges.
    pub fn with_border_size(mut self, border_size: f64) -> Self {
        self.border_size = border_size;
        self
    }

    /// Allocate a fresh, zeroed gesture state. Ownership passes to the
    /// caller, which lends it back on every [`recognize`](Self::recognize)
    /// call.
    pub fn create(&self) -> SwipeState {
        SwipeState::new()
    }

    /// Process one touch event, updating `state` and returning the
    /// verdict.
    ///
    /// ## Semantics
    ///
    /// - More than one active finger: [`Verdict::Cancel`], state
    ///   untouched. This is strictly a single-finger gesture.
    /// - No fingers, or [`TouchPhase::Cancelled`]: [`Verdict::NoOpinion`],
    ///   state untouched.
    /// - A touch that started away from the left, right, and bottom bezel
    ///   zones: [`Verdict::Cancel`]. There is no top bezel zone; the start
    ///   position's distance from the top edge alone never cancels.
    /// - Otherwise the state's position, displacement, and per-event diff
    ///   are updated and the verdict defaults to [`Verdict::Maybe`].
    /// - On [`TouchPhase::Moved`], the left, right, and bottom triggers
    ///   are evaluated in that fixed order. Each is an unconditional
    ///   overwrite of `state.edge` and the verdict, so when a corner start
    ///   satisfies two predicates the last one evaluated wins. Once an
    ///   edge is set, the per-event diff along that edge's axis is
    ///   classified into [`Flick`] bands; diffs in the gaps between bands
    ///   deliberately leave the previous flick value in place.
    /// - On [`TouchPhase::Ended`], the verdict is forced to
    ///   [`Verdict::Finish`]; triggering and flick classification do not
    ///   run, but the positional state update does.
    ///
    /// All geometry is normalized into the logical (rotated) display frame
    /// through the [`HostDisplay`] collaborator before any check runs.
    pub fn recognize(
        &self,
        state: &mut SwipeState,
        phase: TouchPhase,
        touches: &[TouchPoint],
    ) -> Verdict {
        if phase == TouchPhase::Cancelled {
            return Verdict::NoOpinion;
        }
        if touches.len() > 1 {
            debug!("bezel swipe: canceled, {} fingers down", touches.len());
            return Verdict::Cancel;
        }
        let Some(touch) = touches.first() else {
            return Verdict::NoOpinion;
        };

        // Re-center raw coordinates on the panel's middle so the
        // orientation transform rotates them about the origin.
        let center = Vec2::new(self.display.width() / 2.0, self.display.height() / 2.0);
        let mut start = self.display.map_to_orientation(touch.start - center);
        let mut pos = self.display.map_to_orientation(touch.position - center);
        let mapped_center = self.display.map_to_orientation(center.to_point());

        // Rotation may flip the sign of the half-extents.
        let half_bounds = Vec2::new(mapped_center.x.abs(), mapped_center.y.abs());

        // Shift everything back into a top-left-origin frame sized to the
        // logical (rotated) display.
        start += half_bounds;
        pos += half_bounds;
        let bounds = half_bounds * 2.0;

        // The swipe must have started inside a bezel zone. No top band:
        // there is no top edge to recognize.
        let border = self.border_size;
        if start.x > border && start.x < bounds.x - border && start.y < bounds.y - border {
            debug!("bezel swipe: canceled, start outside bezel zone");
            return Verdict::Cancel;
        }
        trace!("bezel swipe: maybe");
        let mut verdict = Verdict::Maybe;

        let delta = pos - start;
        state.last_position = state.position;
        state.position = pos;
        state.delta = delta;
        state.diff = state.position - state.last_position;

        if phase == TouchPhase::Moved {
            // Fixed Left -> Right -> Bottom order, each branch an
            // unconditional overwrite: last write wins for corner starts.
            if start.x <= border && delta.x > 0.0 && delta.x > delta.y {
                state.edge = Edge::Left;
                verdict = Verdict::Trigger;
                trace!("bezel swipe: left edge triggered");
            }
            if start.x >= bounds.x - border && delta.x < 0.0 && delta.x < delta.y {
                state.edge = Edge::Right;
                verdict = Verdict::Trigger;
                trace!("bezel swipe: right edge triggered");
            }
            if start.y >= bounds.y - border && delta.y < 0.0 && delta.y < delta.x {
                state.edge = Edge::Bottom;
                verdict = Verdict::Trigger;
                trace!("bezel swipe: bottom edge triggered");
            }

            let axis = match state.edge {
                Edge::Left | Edge::Right => Some(state.diff.x),
                Edge::Bottom => Some(state.diff.y),
                Edge::None => None,
            };
            if let Some(v) = axis {
                if (FLICK_MIN..=FLICK_MAX).contains(&v) {
                    state.flick = Flick::Positive;
                } else if v > -FLICK_REST && v < FLICK_REST {
                    state.flick = Flick::None;
                } else if (-FLICK_MAX..=-FLICK_MIN).contains(&v) {
                    state.flick = Flick::Negative;
                }
                // Anything else is in an unclassified gap band; the
                // previous flick value stands.
                trace!("bezel swipe: flick {:?}", state.flick);
            }
        } else if phase == TouchPhase::Ended {
            trace!("bezel swipe: finished");
            verdict = Verdict::Finish;
        }

        verdict
    }

    /// Clear the gesture state between lifecycles.
    ///
    /// Zeroes the positions and drops the edge and flick readings so
    /// nothing stale carries into the next tracked gesture. `delta` and
    /// `diff` are left alone; the next processed event rewrites them.
    /// Idempotent.
    pub fn reset(&self, state: &mut SwipeState) {
        trace!("bezel swipe: resetting");
        state.position = Point::ORIGIN;
        state.last_position = Point::ORIGIN;
        state.flick = Flick::None;
        state.edge = Edge::None;
    }
}
