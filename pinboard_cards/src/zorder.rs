// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Monotonic stacking counter.
///
/// Every call to [`ZOrder::raise`] hands out a value strictly greater than
/// any before it. The counter never resets or decrements, so values stay
/// unique for the lifetime of the owning store even if cards are removed.
#[derive(Clone, Debug, Default)]
pub struct ZOrder {
    last: u64,
}

impl ZOrder {
    /// Creates a counter whose first value is `1`.
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Returns the next stacking value.
    pub fn raise(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    /// The most recently handed out value (`0` before the first raise).
    pub fn top(&self) -> u64 {
        self.last
    }
}
