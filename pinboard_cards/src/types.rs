// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for cards: identifiers, categories and the card record itself.

use alloc::string::String;
use core::fmt;

use kurbo::{Point, Rect, Size};
use peniko::Color;

/// Identifier of a card.
///
/// A small, copyable handle assigned at creation. Ids are never reused within
/// a [`CardStore`](crate::CardStore), so a handle never aliases another card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(pub(crate) u32);

impl CardId {
    /// Raw value, for hosts that need to key their own element maps.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card#{}", self.0)
    }
}

/// Presentation/category tags fixed at creation time.
///
/// Typically one category per "add card" button, for example
/// `Category::new('N', Color::from_rgb8(0x9b, 0xc4, 0xe2))` for plain notes.
#[derive(Copy, Clone, Debug)]
pub struct Category {
    /// Single letter naming the card type.
    pub type_letter: char,
    /// Color of the ruled lines drawn behind the text.
    pub line_color: Color,
}

impl Category {
    /// Creates a category.
    pub const fn new(type_letter: char, line_color: Color) -> Self {
        Self {
            type_letter,
            line_color,
        }
    }
}

/// A note card placed on the board.
///
/// Geometry is stored in board coordinates, so cards stay put in board space
/// while the view pans and zooms. Fields are read-only outside the store; all
/// mutation goes through [`CardStore`](crate::CardStore).
#[derive(Clone, Debug)]
pub struct Card {
    pub(crate) id: CardId,
    pub(crate) position: Point,
    pub(crate) size: Size,
    pub(crate) content: String,
    pub(crate) line_count: usize,
    pub(crate) z_index: u64,
    pub(crate) category: Category,
}

impl Card {
    /// The card's id.
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Top-left corner in board coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Board-space size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Board-space bounds; this is the hit area.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Current text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of ruled lines needed for the content as of the last resize.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Stacking order; higher draws on top.
    pub fn z_index(&self) -> u64 {
        self.z_index
    }

    /// Category tags.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Shorthand for `category().type_letter`.
    pub fn type_letter(&self) -> char {
        self.category.type_letter
    }

    /// Shorthand for `category().line_color`.
    pub fn line_color(&self) -> Color {
        self.category.line_color
    }
}
