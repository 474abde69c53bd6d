// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinboard Cards: the note cards living on an infinite board.
//!
//! [`CardStore`] owns every [`Card`] and is the only way to mutate one. It
//! handles:
//! - Creation inside the currently visible area of a [`pinboard_view::Viewport`].
//! - Content edits with a debounced, content-driven height recompute.
//! - Stacking through a monotonic [`ZOrder`] counter; every raise produces a
//!   strictly larger z-index than any before it.
//! - Hit testing in board coordinates, where the topmost card wins.
//!
//! It knows nothing about pointer events; an interaction layer decides when
//! to move or raise a card.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use peniko::Color;
//! use pinboard_cards::{CardStore, Category};
//! use pinboard_view::Viewport;
//!
//! let view = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let mut cards = CardStore::default();
//!
//! let note = Category::new('N', Color::from_rgb8(0x9b, 0xc4, 0xe2));
//! let id = cards.create_card(note, &view).id();
//! assert_eq!(cards.get(id).unwrap().position(), Point::new(100.0, 100.0));
//!
//! // Ten lines of text; the height follows once the edit has settled.
//! cards.update_content(id, "line\n".repeat(9) + "line", 0).unwrap();
//! assert_eq!(cards.get(id).unwrap().size().height, 200.0);
//! cards.flush_resizes(100);
//! assert_eq!(cards.get(id).unwrap().size().height, 340.0);
//!
//! assert_eq!(cards.hit_test(Point::new(150.0, 150.0)), Some(id));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod metrics;
mod store;
mod types;
mod zorder;

pub use metrics::{CardMetrics, count_lines};
pub use store::{CardError, CardStore, Resized};
pub use types::{Card, CardId, Category};
pub use zorder::ZOrder;
