// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use pinboard_cards::CardMetrics;
use pinboard_interaction::InteractionConfig;
use pinboard_view::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE};

/// Everything tunable about a [`Board`](crate::Board).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardConfig {
    /// Card sizing, placement and resize debounce.
    pub cards: CardMetrics,
    /// Wheel sensitivity and line size.
    pub interaction: InteractionConfig,
    /// Smallest allowed scale; must be positive.
    pub min_scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            cards: CardMetrics::default(),
            interaction: InteractionConfig::default(),
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
        }
    }
}

impl BoardConfig {
    /// Replaces the card metrics.
    #[must_use]
    pub fn with_card_metrics(mut self, cards: CardMetrics) -> Self {
        self.cards = cards;
        self
    }

    /// Replaces the interaction parameters.
    #[must_use]
    pub fn with_interaction(mut self, interaction: InteractionConfig) -> Self {
        self.interaction = interaction;
        self
    }

    /// Sets the wheel zoom sensitivity (scale change per wheel pixel).
    #[must_use]
    pub fn with_zoom_sensitivity(mut self, sensitivity: f64) -> Self {
        self.interaction.zoom_sensitivity = sensitivity;
        self
    }

    /// Sets the scale limits.
    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    /// Sets the content resize debounce window.
    #[must_use]
    pub fn with_resize_delay_ms(mut self, delay_ms: u64) -> Self {
        self.cards.resize_delay_ms = delay_ms;
        self
    }
}
