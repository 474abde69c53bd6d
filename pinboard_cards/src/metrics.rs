// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card sizing: minimum dimensions, ruled-line metrics and line counting.

/// Sizing and placement parameters shared by every card in a store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardMetrics {
    /// Minimum (and creation) width in board units.
    pub min_width: f64,
    /// Minimum (and creation) height in board units.
    pub min_height: f64,
    /// Height of one ruled text line in board units.
    pub line_height: f64,
    /// Vertical space outside the ruled area (header and padding).
    pub margin: f64,
    /// Distance in screen pixels from the visible top-left corner at which
    /// new cards are placed.
    pub spawn_inset: f64,
    /// Characters per ruled line for soft-wrap estimation. `None` counts
    /// hard line breaks only.
    pub wrap_columns: Option<usize>,
    /// Quiet period before a content edit triggers a resize.
    pub resize_delay_ms: u64,
}

impl Default for CardMetrics {
    fn default() -> Self {
        Self {
            min_width: 300.0,
            min_height: 200.0,
            line_height: 28.0,
            margin: 60.0,
            spawn_inset: 100.0,
            wrap_columns: None,
            resize_delay_ms: 100,
        }
    }
}

impl CardMetrics {
    /// Sets the soft-wrap width used when counting lines.
    #[must_use]
    pub fn with_wrap_columns(mut self, columns: Option<usize>) -> Self {
        self.wrap_columns = columns;
        self
    }

    /// Sets the resize debounce window.
    #[must_use]
    pub fn with_resize_delay_ms(mut self, delay_ms: u64) -> Self {
        self.resize_delay_ms = delay_ms;
        self
    }

    /// Ruled lines that fit a card at minimum height.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "ratio of two positive lengths, truncation is the intended floor"
    )]
    pub fn initial_line_count(&self) -> usize {
        if self.line_height <= 0.0 {
            return 1;
        }
        (self.min_height / self.line_height) as usize
    }

    /// Ruled lines needed for `content`, never less than one.
    pub fn line_count(&self, content: &str) -> usize {
        count_lines(content, self.wrap_columns).max(1)
    }

    /// Card height for `line_count` ruled lines, never below `min_height`.
    pub fn height_for_lines(&self, line_count: usize) -> f64 {
        (line_count as f64 * self.line_height + self.margin).max(self.min_height)
    }
}

/// Counts the lines `content` occupies.
///
/// Every `\n` starts a new line, so a trailing newline counts as an extra
/// (empty) line. With `wrap_columns`, each hard line additionally occupies
/// `ceil(chars / columns)` rows; a zero column count disables wrapping.
pub fn count_lines(content: &str, wrap_columns: Option<usize>) -> usize {
    match wrap_columns {
        Some(columns) if columns > 0 => content
            .split('\n')
            .map(|line| {
                let chars = line.trim_end_matches('\r').chars().count();
                chars.div_ceil(columns).max(1)
            })
            .sum(),
        _ => content.split('\n').count(),
    }
}
