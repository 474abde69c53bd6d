// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinboard Interaction: pointer disambiguation for an infinite board.
//!
//! A single pointer stream has to mean three different things: dragging the
//! background pans the view, dragging a card moves that card, and pressing a
//! card's text area starts editing. [`InteractionController`] decides which
//! at press time by hit testing in board coordinates (topmost card wins) and
//! records the outcome as a [`GestureState`]:
//!
//! ```text
//! Idle --down on empty board--> Panning       --move--> pan by incremental delta
//! Idle --down on a card-------> DraggingCard  --move--> card = board(pointer) - grab offset
//! Panning | DraggingCard --up/cancel--> Idle
//! ```
//!
//! Wheel events zoom around the cursor in any state without changing it.
//!
//! The controller mutates a [`pinboard_view::Viewport`] and a
//! [`pinboard_cards::CardStore`] passed in by the caller; it owns neither.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use peniko::Color;
//! use pinboard_cards::{CardStore, Category};
//! use pinboard_interaction::{GestureState, InteractionController, PointerEvent};
//! use pinboard_view::Viewport;
//!
//! let mut view = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let mut cards = CardStore::default();
//! let mut ctl = InteractionController::default();
//!
//! let id = cards
//!     .create_card(Category::new('N', Color::from_rgb8(0x9b, 0xc4, 0xe2)), &view)
//!     .id();
//!
//! // Press inside the card and drag it 40px right.
//! ctl.pointer_down(PointerEvent::new(Point::new(150.0, 150.0)), &view, &mut cards);
//! assert!(matches!(ctl.state(), GestureState::DraggingCard { .. }));
//! ctl.pointer_move(Point::new(190.0, 150.0), &mut view, &mut cards);
//! ctl.pointer_up();
//! assert_eq!(cards.get(id).unwrap().position(), Point::new(140.0, 100.0));
//!
//! // Press on empty board and drag: the view pans instead.
//! ctl.pointer_down(PointerEvent::new(Point::new(700.0, 500.0)), &view, &mut cards);
//! ctl.pointer_move(Point::new(690.0, 520.0), &mut view, &mut cards);
//! ctl.pointer_up();
//! assert_eq!(view.offset(), Vec2::new(-10.0, 20.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod events;
mod track;

pub use controller::{GestureState, InteractionConfig, InteractionController};
pub use events::{PointerEvent, PointerTarget, Response, ScrollDelta, WheelEvent};
pub use track::PointerTrack;
