// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary with whatever actually paints the board.

use alloc::vec::Vec;

use kurbo::{Affine, Rect, Vec2};
use pinboard_cards::Card;

/// Everything a renderer needs to paint one frame.
#[derive(Clone, Debug)]
pub struct Frame<'a> {
    /// Current uniform scale.
    pub scale: f64,
    /// Current screen-space offset.
    pub offset: Vec2,
    /// Board → surface transform (`scale` then `offset`).
    pub transform: Affine,
    /// Rendering surface in window coordinates.
    pub surface: Rect,
    /// Board-space rectangle covered by the surface.
    pub visible: Rect,
    /// All cards in ascending z order, back to front.
    pub cards: Vec<&'a Card>,
}

impl<'a> Frame<'a> {
    /// Cards whose bounds intersect the visible region, in paint order.
    pub fn visible_cards(&self) -> impl Iterator<Item = &'a Card> + '_ {
        self.cards
            .iter()
            .copied()
            .filter(|card| card.rect().intersect(self.visible).area() > 0.0)
    }
}

/// Paints frames produced by [`Board::render`](crate::Board::render).
pub trait RenderAdapter {
    /// Paints one frame.
    fn paint(&mut self, frame: &Frame<'_>);
}
