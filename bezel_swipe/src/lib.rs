// Copyright 2026 the Bezel Swipe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bezel_swipe --heading-base-level=0

//! Bezel Swipe: single-finger edge-swipe recognition for touch displays.
//!
//! This crate recognizes a swipe gesture that begins on the display bezel
//! (the left, right, or bottom edge zone) and moves inward, classifying it
//! by edge of origin and, once triggered, by flick velocity. It is a small
//! input-interpretation state machine, split across focused modules:
//!
//! - [`touch`]: the raw input model — touch phases and per-finger points
//! - [`display`]: the injected display collaborator — dimensions and the
//!   orientation transform used to normalize rotated panels
//! - [`state`]: the mutable [`SwipeState`](state::SwipeState) record the
//!   recognizer writes its findings into
//! - [`recognizer`]: the recognition logic itself, producing a
//!   [`Verdict`](recognizer::Verdict) per touch event
//!
//! ## Design Philosophy
//!
//! - **Plain data, explicit ownership**: [`SwipeState`](state::SwipeState)
//!   is a behavior-free record owned by the event-dispatch framework and
//!   passed by mutable borrow; the recognizer holds no per-gesture state.
//! - **Injected display access**: the recognizer never reaches for a global
//!   display singleton. Anything implementing
//!   [`HostDisplay`](display::HostDisplay) works, which makes rotation
//!   handling deterministic to test.
//! - **Verdicts, not errors**: every outcome — including malformed input
//!   such as an empty touch list — is expressed as a
//!   [`Verdict`](recognizer::Verdict), never a panic or an error type.
//! - **Synchronous and single-threaded**: each call runs to completion;
//!   the framework serializes event delivery per gesture instance.
//!
//! ## Usage
//!
//! Drive the recognizer with one call per touch event and act on the
//! returned verdict:
//!
//! ```rust
//! use kurbo::Point;
//! use bezel_swipe::display::RotatedDisplay;
//! use bezel_swipe::recognizer::{SwipeRecognizer, Verdict};
//! use bezel_swipe::state::{Edge, Flick};
//! use bezel_swipe::touch::{TouchPhase, TouchPoint};
//!
//! let recognizer = SwipeRecognizer::new(RotatedDisplay::new(1000.0, 2000.0));
//! let mut state = recognizer.create();
//!
//! // Finger lands on the left bezel.
//! let start = Point::new(0.0, 1000.0);
//! let verdict = recognizer.recognize(
//!     &mut state,
//!     TouchPhase::Began,
//!     &[TouchPoint::at(start)],
//! );
//! assert_eq!(verdict, Verdict::Maybe);
//!
//! // It moves inward fast enough to both trigger and flick.
//! let verdict = recognizer.recognize(
//!     &mut state,
//!     TouchPhase::Moved,
//!     &[TouchPoint::new(start, Point::new(30.0, 1000.0))],
//! );
//! assert_eq!(verdict, Verdict::Trigger);
//! assert_eq!(state.edge, Edge::Left);
//! assert_eq!(state.flick, Flick::Positive);
//!
//! // Lifting the finger finishes the gesture; the framework then resets.
//! let verdict = recognizer.recognize(
//!     &mut state,
//!     TouchPhase::Ended,
//!     &[TouchPoint::new(start, Point::new(30.0, 1000.0))],
//! );
//! assert_eq!(verdict, Verdict::Finish);
//! recognizer.reset(&mut state);
//! assert_eq!(state.edge, Edge::None);
//! ```
//!
//! Putting a second finger down cancels recognition outright: this is
//! strictly a single-finger gesture.
//!
//! ## Features
//!
//! - `std` (default): compile with the standard library.
//! - `libm`: no_std numeric support, forwarded to `kurbo`.
//!
//! One of `std` or `libm` must be enabled. Diagnostic output goes through
//! the `log` facade and never affects recognition outcomes.

#![no_std]

pub mod display;
pub mod recognizer;
pub mod state;
pub mod touch;
