// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinboard: an infinite, pannable, zoomable board of freely placed note cards.
//!
//! This crate wires the pieces together:
//! - [`pinboard_view`]: the viewport transform (screen ↔ board, cursor-anchored zoom, pan).
//! - [`pinboard_cards`]: card storage, debounced content-driven resize, z-order, hit testing.
//! - [`pinboard_interaction`]: the pointer state machine deciding between pan, drag and edit.
//!
//! A [`Board`] sits between a host renderer and those crates. The renderer
//! forwards raw input as [`InputEvent`]s and paints each [`Frame`] through a
//! [`RenderAdapter`]. Window-level listeners are registered through an
//! [`InputSurface`] exactly once per attached board.
//!
//! Styling, the paint surface itself, persistence, undo and collaboration are
//! left to the host.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use peniko::Color;
//! use pinboard::{Board, BoardConfig, Category, InputEvent, PointerEvent, ScrollDelta, WheelEvent};
//!
//! let mut board = Board::new(Rect::new(0.0, 0.0, 1024.0, 768.0), BoardConfig::default());
//! let id = board
//!     .add_card(Category::new('N', Color::from_rgb8(0x9b, 0xc4, 0xe2)))
//!     .id();
//!
//! // Zoom in around the cursor.
//! let wheel = WheelEvent {
//!     position: Point::new(400.0, 300.0),
//!     delta: ScrollDelta::Pixels(Vec2::new(0.0, -500.0)),
//! };
//! let response = board.handle_input(InputEvent::Wheel(wheel), 0).unwrap();
//! assert!(response.prevent_default);
//! assert!((board.view().scale() - 1.5).abs() < 1e-12);
//!
//! // Type into the card; the resize lands once typing pauses.
//! let text = InputEvent::TextChanged { card: id, content: "a\nb\nc".into() };
//! board.handle_input(text, 1_000).unwrap();
//! assert_eq!(board.next_deadline(), Some(1_100));
//! board.tick(1_100);
//! assert_eq!(board.cards().get(id).unwrap().line_count(), 3);
//!
//! // Renderers paint cards in ascending z order.
//! let frame = board.frame();
//! assert_eq!(frame.cards.len(), 1);
//! assert_eq!(frame.scale, board.view().scale());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod board;
mod config;
mod listeners;
mod render;

pub use board::{Board, BoardError, DetachError, InputEvent};
pub use config::BoardConfig;
pub use listeners::{Attachment, InputSurface, ListenerKinds};
pub use render::{Frame, RenderAdapter};

pub use pinboard_cards::{Card, CardError, CardId, CardMetrics, Category};
pub use pinboard_interaction::{
    GestureState, InteractionConfig, PointerEvent, PointerTarget, Response, ScrollDelta,
    WheelEvent,
};
pub use pinboard_view::{FitMode, Viewport};

pub use peniko::Color;
