// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinboard Timing: host-agnostic debouncing.
//!
//! A [`Debouncer`] keeps at most one pending deadline per key. Scheduling a
//! key again replaces its deadline and returns a fresh [`TimerHandle`], so a
//! burst of requests for the same key collapses into a
//! single firing once the burst has been quiet for the configured delay
//! (trailing edge only; nothing fires at schedule time).
//!
//! The crate owns no clock and spawns nothing. Hosts pass a monotonic
//! timestamp in milliseconds to every call, arm their own timer for
//! [`Debouncer::next_deadline`], and call [`Debouncer::drain_due`] when it
//! elapses.
//!
//! ## Minimal example
//!
//! ```rust
//! use pinboard_timing::Debouncer;
//!
//! let mut resize = Debouncer::new(100);
//!
//! // Three keystrokes on card 7 inside the window.
//! resize.schedule(7_u32, 1_000);
//! resize.schedule(7, 1_040);
//! let last = resize.schedule(7, 1_090);
//! assert_eq!(last.deadline(), 1_190);
//!
//! // Nothing is due until 100ms after the last keystroke.
//! assert!(resize.drain_due(1_150).is_empty());
//! assert_eq!(resize.next_deadline(), Some(1_190));
//! assert_eq!(resize.drain_due(1_190), vec![7]);
//! assert!(resize.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod debounce;

pub use debounce::{Debouncer, TimerHandle};
