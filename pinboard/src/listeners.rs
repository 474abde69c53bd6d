// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window-level listener registration.
//!
//! Moves, releases and wheel events are listened for on the whole window
//! rather than per gesture, so a drag keeps tracking after the pointer leaves
//! the board. Those listeners belong to the board instance: they are
//! registered once by [`Board::attach`](crate::Board::attach) and must be
//! handed back to [`Board::detach`](crate::Board::detach) on teardown.

use smallvec::SmallVec;

bitflags::bitflags! {
    /// Kinds of window-level input a board listens for.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ListenerKinds: u8 {
        /// Pointer movement.
        const POINTER_MOVE = 0b0000_0001;
        /// Pointer release.
        const POINTER_UP   = 0b0000_0010;
        /// Wheel / scroll.
        const WHEEL        = 0b0000_0100;
    }
}

impl ListenerKinds {
    /// The set a board registers on attach.
    pub const BOARD: Self = Self::all();
}

/// Host-side event source that can register window-level listeners.
pub trait InputSurface {
    /// Token identifying one registered listener.
    type Handle;

    /// Registers a listener for a single `kind`.
    fn add_listener(&mut self, kind: ListenerKinds) -> Self::Handle;

    /// Removes a listener previously returned by [`InputSurface::add_listener`].
    fn remove_listener(&mut self, handle: Self::Handle);
}

/// Identity of the board that registered an [`Attachment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct BoardToken(pub(crate) u32);

/// Listeners registered for one attached board.
///
/// Obtained from [`Board::attach`](crate::Board::attach) and consumed by
/// [`Board::detach`](crate::Board::detach) on the same board. A failed detach
/// hands the attachment back inside [`DetachError`](crate::DetachError).
#[derive(Debug)]
#[must_use = "listeners leak unless the attachment is passed back to `Board::detach`"]
pub struct Attachment<H> {
    pub(crate) board: BoardToken,
    pub(crate) handles: SmallVec<[(ListenerKinds, H); 3]>,
}

impl<H> Attachment<H> {
    /// Kinds covered by this attachment.
    pub fn kinds(&self) -> ListenerKinds {
        self.handles
            .iter()
            .fold(ListenerKinds::empty(), |acc, (kind, _)| acc | *kind)
    }
}
