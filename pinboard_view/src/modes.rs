// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How fitted content should be positioned on the surface.
///
/// Consulted by [`crate::Viewport::fit_rect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Center the fitted rectangle on the surface.
    #[default]
    Center,
    /// Align the board-space minimum corner of the fitted rectangle with the
    /// surface origin.
    AlignMin,
}
