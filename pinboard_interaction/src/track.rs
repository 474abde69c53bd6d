// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer track helper: incremental movement deltas during a pan.
//!
//! ## Usage
//!
//! 1) Call [`PointerTrack::start`] with the position of the press.
//! 2) On each move, call [`PointerTrack::update`] to get the movement since the previous move.
//! 3) Call [`PointerTrack::end`] on release.
//!
//! Deltas are relative to the last observed position rather than the press,
//! so a pointer that leaves and re-enters the capture region never produces a
//! jump.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use pinboard_interaction::PointerTrack;
//!
//! let mut track = PointerTrack::default();
//! track.start(Point::new(10.0, 20.0));
//! assert_eq!(track.update(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! assert_eq!(track.update(Point::new(16.0, 20.0)), Some(Vec2::new(1.0, -5.0)));
//! track.end();
//! assert_eq!(track.update(Point::new(0.0, 0.0)), None);
//! ```

use kurbo::{Point, Vec2};

/// Tracks the last position of an active pointer gesture.
#[derive(Debug, Clone, Default, Copy)]
pub struct PointerTrack {
    last_pos: Option<Point>,
}

impl PointerTrack {
    /// Begins tracking from `pos`, discarding any previous gesture.
    pub fn start(&mut self, pos: Point) {
        self.last_pos = Some(pos);
    }

    /// Records `pos` and returns the movement since the previous position.
    ///
    /// Returns `None` when no gesture is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last_pos?;
        self.last_pos = Some(pos);
        Some(pos - last)
    }

    /// Ends the gesture.
    pub fn end(&mut self) {
        self.last_pos = None;
    }
}
