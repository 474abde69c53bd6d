// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events consumed by the controller and the response it hands back.

use kurbo::{Point, Vec2};
use pinboard_cards::CardId;

/// Which kind of element the renderer reports under a press.
///
/// The card itself is found by hit testing; this only says whether the press
/// landed on the card's text editor, which turns it into an edit click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerTarget {
    /// The board surface or a card's chrome.
    #[default]
    Surface,
    /// A card's editable text area.
    TextEditor,
}

/// A pointer press reported by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer position in window coordinates.
    pub position: Point,
    /// Element kind under the pointer.
    pub target: PointerTarget,
}

impl PointerEvent {
    /// A press on the surface (or card chrome) at `position`.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            target: PointerTarget::Surface,
        }
    }

    /// A press on a card's text editor at `position`.
    pub fn on_text(position: Point) -> Self {
        Self {
            position,
            target: PointerTarget::TextEditor,
        }
    }
}

/// Scroll amount carried by a wheel event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollDelta {
    /// Precise deltas in pixels (trackpads, high-resolution wheels).
    Pixels(Vec2),
    /// Deltas in lines (classic notched wheels).
    Lines(Vec2),
}

/// A wheel gesture reported by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Cursor position in window coordinates.
    pub position: Point,
    /// Scroll amount; positive `y` scrolls toward the user.
    pub delta: ScrollDelta,
}

/// What a handled event changed, so hosts can skip redundant work.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// Board state changed; the renderer should repaint.
    pub repaint: bool,
    /// The host should suppress the event's default action.
    pub prevent_default: bool,
    /// The press landed on this card's text editor; the host should focus it.
    pub edit_text: Option<CardId>,
}

impl Response {
    /// Nothing happened.
    pub const IGNORED: Self = Self {
        repaint: false,
        prevent_default: false,
        edit_text: None,
    };

    /// Folds another response into this one.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            repaint: self.repaint || other.repaint,
            prevent_default: self.prevent_default || other.prevent_default,
            edit_text: other.edit_text.or(self.edit_text),
        }
    }
}
