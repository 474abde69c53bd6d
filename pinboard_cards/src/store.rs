// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};
use pinboard_timing::{Debouncer, TimerHandle};
use pinboard_view::Viewport;

use crate::metrics::CardMetrics;
use crate::types::{Card, CardId, Category};
use crate::zorder::ZOrder;

/// Errors returned by [`CardStore`] operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    /// The id does not name a card in this store.
    #[error("no such card: {0}")]
    UnknownCard(CardId),
}

/// Outcome of one debounced height recompute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resized {
    /// The recomputed card.
    pub id: CardId,
    /// New ruled line count.
    pub line_count: usize,
    /// Height before the recompute.
    pub previous_height: f64,
    /// Height after the recompute.
    pub height: f64,
}

impl Resized {
    /// Returns `true` if the card's height actually changed.
    pub fn changed(&self) -> bool {
        self.height != self.previous_height
    }
}

/// Owns every card on a board.
///
/// Cards are kept in creation order; painting order is [`CardStore::by_z_order`].
/// Content edits apply immediately, while the derived line count and height
/// are recomputed once the card's edits have been quiet for
/// [`CardMetrics::resize_delay_ms`] (see [`CardStore::flush_resizes`]).
#[derive(Clone, Debug)]
pub struct CardStore {
    cards: Vec<Card>,
    slots: HashMap<CardId, usize>,
    next_id: u32,
    z_order: ZOrder,
    metrics: CardMetrics,
    resizes: Debouncer<CardId>,
}

impl Default for CardStore {
    fn default() -> Self {
        Self::new(CardMetrics::default())
    }
}

impl CardStore {
    /// Creates an empty store.
    pub fn new(metrics: CardMetrics) -> Self {
        Self {
            cards: Vec::new(),
            slots: HashMap::new(),
            next_id: 0,
            z_order: ZOrder::new(),
            resizes: Debouncer::new(metrics.resize_delay_ms),
            metrics,
        }
    }

    /// Sizing parameters.
    pub fn metrics(&self) -> &CardMetrics {
        &self.metrics
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the board has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns `true` if `id` names a card in this store.
    pub fn contains(&self, id: CardId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Looks up a card.
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.slots.get(&id).map(|&slot| &self.cards[slot])
    }

    /// Cards in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Cards in ascending stacking order (paint order).
    pub fn by_z_order(&self) -> Vec<&Card> {
        let mut cards: Vec<&Card> = self.cards.iter().collect();
        cards.sort_unstable_by_key(|card| card.z_index);
        cards
    }

    /// The highest stacking value handed out so far.
    pub fn top_z(&self) -> u64 {
        self.z_order.top()
    }

    /// Creates a card inside the currently visible area and returns it.
    ///
    /// The card is placed `spawn_inset` screen pixels in from the visible
    /// top-left corner, sized at the minimum dimensions, and stacked above
    /// every existing card.
    pub fn create_card(&mut self, category: Category, viewport: &Viewport) -> &Card {
        let inset = self.metrics.spawn_inset;
        let position = viewport.screen_to_board(Point::new(inset, inset));

        self.next_id += 1;
        let id = CardId(self.next_id);
        let card = Card {
            id,
            position,
            size: Size::new(self.metrics.min_width, self.metrics.min_height),
            content: String::new(),
            line_count: self.metrics.initial_line_count(),
            z_index: self.z_order.raise(),
            category,
        };
        tracing::debug!(%id, x = position.x, y = position.y, z = card.z_index, "created card");

        let slot = self.cards.len();
        self.cards.push(card);
        self.slots.insert(id, slot);
        &self.cards[slot]
    }

    /// Replaces a card's content and schedules its resize.
    ///
    /// The new text is visible immediately. Line count and height are left
    /// alone until [`CardStore::flush_resizes`] runs after the quiet period;
    /// each edit pushes the pending resize back, so a burst of edits costs a
    /// single recompute over the latest text.
    pub fn update_content(
        &mut self,
        id: CardId,
        content: impl Into<String>,
        now: u64,
    ) -> Result<TimerHandle<CardId>, CardError> {
        let card = self.card_mut(id)?;
        card.content = content.into();
        Ok(self.resizes.schedule(id, now))
    }

    /// Runs every resize whose quiet period has elapsed by `now`.
    pub fn flush_resizes(&mut self, now: u64) -> Vec<Resized> {
        let due = self.resizes.drain_due(now);
        let mut out = Vec::with_capacity(due.len());
        for id in due {
            let Some(&slot) = self.slots.get(&id) else {
                continue;
            };
            let metrics = self.metrics;
            let card = &mut self.cards[slot];
            let line_count = metrics.line_count(&card.content);
            let previous_height = card.size.height;
            let height = metrics.height_for_lines(line_count);
            card.line_count = line_count;
            card.size.height = height;
            tracing::debug!(%id, line_count, height, "resized card");
            out.push(Resized {
                id,
                line_count,
                previous_height,
                height,
            });
        }
        out
    }

    /// Earliest pending resize deadline, if any.
    pub fn next_resize_deadline(&self) -> Option<u64> {
        self.resizes.next_deadline()
    }

    /// Returns `true` if `id` has a resize waiting for its quiet period.
    pub fn resize_pending(&self, id: CardId) -> bool {
        self.resizes.deadline(&id).is_some()
    }

    /// Stacks a card above every other card and returns its new z-index.
    pub fn bring_to_front(&mut self, id: CardId) -> Result<u64, CardError> {
        let slot = self.slot(id)?;
        let z = self.z_order.raise();
        self.cards[slot].z_index = z;
        tracing::trace!(%id, z, "raised card");
        Ok(z)
    }

    /// Moves a card's top-left corner to `position` (board coordinates).
    pub fn move_to(&mut self, id: CardId, position: Point) -> Result<(), CardError> {
        self.card_mut(id)?.position = position;
        Ok(())
    }

    /// Topmost card whose bounds contain the board point, if any.
    pub fn hit_test(&self, board_pt: Point) -> Option<CardId> {
        self.cards
            .iter()
            .filter(|card| card.rect().contains(board_pt))
            .max_by_key(|card| card.z_index)
            .map(|card| card.id)
    }

    /// Union of all card bounds, or `None` for an empty board.
    pub fn bounds(&self) -> Option<Rect> {
        self.cards
            .iter()
            .map(Card::rect)
            .reduce(|acc, rect| acc.union(rect))
    }

    fn slot(&self, id: CardId) -> Result<usize, CardError> {
        self.slots
            .get(&id)
            .copied()
            .ok_or(CardError::UnknownCard(id))
    }

    fn card_mut(&mut self, id: CardId) -> Result<&mut Card, CardError> {
        let slot = self.slot(id)?;
        Ok(&mut self.cards[slot])
    }
}
