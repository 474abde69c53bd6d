// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinboard View: the viewport transform of an infinite, pannable, zoomable board.
//!
//! The board is an unbounded plane in **board coordinates**. A [`Viewport`]
//! maps it onto a rendering surface in **screen coordinates** with a single
//! uniform scale and a screen-space offset:
//!
//! ```text
//! screen = board * scale + offset
//! ```
//!
//! It focuses on:
//! - Exact, mutually inverse screen ↔ board conversion.
//! - Cursor-anchored zoom: the board point under the pivot stays put.
//! - Unbounded panning by screen-space deltas.
//! - Scale clamping (`[0.1, 4.0]` by default) so conversions never divide by zero.
//!
//! It knows nothing about cards or input events. Callers feed it pointer
//! deltas and wheel gestures from a higher layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use pinboard_view::Viewport;
//!
//! let mut view = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//!
//! let pivot = Point::new(400.0, 300.0);
//! let before = view.screen_to_board(pivot);
//! view.zoom_at(pivot, 0.5);
//! let after = view.screen_to_board(pivot);
//! assert!((view.scale() - 1.5).abs() < 1e-12);
//! assert!((before - after).hypot() < 1e-9);
//!
//! view.pan(Vec2::new(25.0, -10.0));
//! let board = view.screen_to_board(Point::new(10.0, 10.0));
//! let back = view.board_to_screen(board);
//! assert!((back - Point::new(10.0, 10.0)).hypot() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod modes;
mod viewport;

pub use modes::FitMode;
pub use viewport::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, Viewport, ViewportDebugInfo};
