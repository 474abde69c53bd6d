// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

use kurbo::{Point, Rect};
use pinboard_cards::{Card, CardError, CardId, CardStore, Category};
use pinboard_interaction::{InteractionController, PointerEvent, Response, WheelEvent};
use pinboard_view::{FitMode, Viewport};
use smallvec::SmallVec;

use crate::config::BoardConfig;
use crate::listeners::{Attachment, BoardToken, InputSurface, ListenerKinds};
use crate::render::{Frame, RenderAdapter};

/// Errors returned by [`Board`] operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A card operation named a card that does not exist.
    #[error(transparent)]
    Card(#[from] CardError),
    /// [`Board::attach`] was called on a board that is already attached.
    #[error("board listeners are already attached")]
    AlreadyAttached,
    /// [`Board::detach`] was handed an attachment registered by another board.
    #[error("attachment belongs to a different board")]
    ForeignAttachment,
}

/// A failed [`Board::detach`].
///
/// Carries the attachment back to the caller so its listeners can still be
/// removed through the board that registered them.
pub struct DetachError<H> {
    /// Why the detach was refused.
    pub error: BoardError,
    /// The attachment that was passed in, untouched.
    pub attachment: Attachment<H>,
}

impl<H> DetachError<H> {
    /// Takes back the attachment.
    pub fn into_attachment(self) -> Attachment<H> {
        self.attachment
    }
}

impl<H: fmt::Debug> fmt::Debug for DetachError<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetachError")
            .field("error", &self.error)
            .field("attachment", &self.attachment)
            .finish()
    }
}

impl<H> fmt::Display for DetachError<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<H: fmt::Debug> core::error::Error for DetachError<H> {}

static NEXT_BOARD: AtomicU32 = AtomicU32::new(1);

/// One input event from the renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed.
    PointerDown(PointerEvent),
    /// Pointer moved, window coordinates.
    PointerMove(Point),
    /// Pointer released, window coordinates.
    PointerUp(Point),
    /// Pointer capture lost.
    PointerCancel,
    /// Wheel / scroll.
    Wheel(WheelEvent),
    /// A card's text editor now holds `content`.
    TextChanged {
        /// The edited card.
        card: CardId,
        /// Full new content.
        content: String,
    },
}

/// An infinite board of note cards.
///
/// Owns the viewport, the cards and the interaction controller, and routes
/// renderer input to them. Everything runs on the caller's thread; the only
/// deferred work is the per-card resize, which the host drives by calling
/// [`Board::tick`] at [`Board::next_deadline`].
#[derive(Debug)]
pub struct Board {
    view: Viewport,
    cards: CardStore,
    controller: InteractionController,
    token: BoardToken,
    attached: bool,
}

impl Board {
    /// Creates an empty board rendering into `surface` (window coordinates).
    pub fn new(surface: Rect, config: BoardConfig) -> Self {
        let mut view = Viewport::new(surface);
        view.set_scale_limits(config.min_scale, config.max_scale);
        Self {
            view,
            cards: CardStore::new(config.cards),
            controller: InteractionController::new(config.interaction),
            token: BoardToken(NEXT_BOARD.fetch_add(1, Ordering::Relaxed)),
            attached: false,
        }
    }

    /// The viewport.
    pub fn view(&self) -> &Viewport {
        &self.view
    }

    /// The cards.
    pub fn cards(&self) -> &CardStore {
        &self.cards
    }

    /// The interaction controller.
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Returns `true` while window listeners are attached.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Resizes the rendering surface.
    pub fn set_surface(&mut self, surface: Rect) {
        self.view.set_surface(surface);
    }

    /// Adds a card of `category` inside the visible area.
    pub fn add_card(&mut self, category: Category) -> &Card {
        self.cards.create_card(category, &self.view)
    }

    /// Routes one input event. `now` is a monotonic timestamp in milliseconds.
    pub fn handle_input(&mut self, event: InputEvent, now: u64) -> Result<Response, BoardError> {
        let response = match event {
            InputEvent::PointerDown(ev) => {
                self.controller
                    .pointer_down(ev, &self.view, &mut self.cards)
            }
            InputEvent::PointerMove(pos) => {
                self.controller
                    .pointer_move(pos, &mut self.view, &mut self.cards)
            }
            InputEvent::PointerUp(_) => self.controller.pointer_up(),
            InputEvent::PointerCancel => self.controller.pointer_cancel(),
            InputEvent::Wheel(ev) => self.controller.wheel(ev, &mut self.view),
            InputEvent::TextChanged { card, content } => {
                let resize = self.cards.update_content(card, content, now)?;
                tracing::trace!(%card, due = resize.deadline(), "resize scheduled");
                Response {
                    repaint: true,
                    ..Response::IGNORED
                }
            }
        };
        Ok(response)
    }

    /// Runs deferred work due by `now`.
    ///
    /// Asks for a repaint only if some card actually changed height.
    pub fn tick(&mut self, now: u64) -> Response {
        let resized = self.cards.flush_resizes(now);
        Response {
            repaint: resized.iter().any(|r| r.changed()),
            ..Response::IGNORED
        }
    }

    /// When the host should next call [`Board::tick`].
    pub fn next_deadline(&self) -> Option<u64> {
        self.cards.next_resize_deadline()
    }

    /// Fits every card into the surface. Returns `false` on an empty board.
    pub fn fit_cards(&mut self, mode: FitMode) -> bool {
        match self.cards.bounds() {
            Some(bounds) => self.view.fit_rect(bounds, mode),
            None => false,
        }
    }

    /// Pans so that a card is centered on the surface.
    pub fn reveal_card(&mut self, id: CardId) -> Result<(), BoardError> {
        let center = self
            .cards
            .get(id)
            .ok_or(CardError::UnknownCard(id))?
            .rect()
            .center();
        self.view.center_on(center);
        Ok(())
    }

    /// Snapshot of the state a renderer paints.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            scale: self.view.scale(),
            offset: self.view.offset(),
            transform: self.view.transform(),
            surface: self.view.surface(),
            visible: self.view.visible_board_rect(),
            cards: self.cards.by_z_order(),
        }
    }

    /// Paints the current state through `adapter`.
    pub fn render(&self, adapter: &mut impl RenderAdapter) {
        adapter.paint(&self.frame());
    }

    /// Registers this board's window-level listeners on `surface`.
    ///
    /// Each [`ListenerKinds::BOARD`] kind is registered exactly once. The
    /// returned attachment must be handed back to [`Board::detach`].
    pub fn attach<S: InputSurface>(
        &mut self,
        surface: &mut S,
    ) -> Result<Attachment<S::Handle>, BoardError> {
        if self.attached {
            return Err(BoardError::AlreadyAttached);
        }
        let handles: SmallVec<[(ListenerKinds, S::Handle); 3]> = ListenerKinds::BOARD
            .iter()
            .map(|kind| (kind, surface.add_listener(kind)))
            .collect();
        self.attached = true;
        tracing::debug!(kinds = ?ListenerKinds::BOARD, "board attached");
        Ok(Attachment {
            board: self.token,
            handles,
        })
    }

    /// Removes the listeners registered by [`Board::attach`].
    ///
    /// Any gesture in progress is cancelled, since no further moves or
    /// releases will arrive. The attachment must come from this board; on
    /// any error no listener is touched and the attachment is handed back.
    pub fn detach<S: InputSurface>(
        &mut self,
        surface: &mut S,
        attachment: Attachment<S::Handle>,
    ) -> Result<(), DetachError<S::Handle>> {
        // Attachments are single use and only issued while detached, so a
        // matching token implies this board is attached.
        if attachment.board != self.token {
            let error = BoardError::ForeignAttachment;
            tracing::warn!(%error, "refusing to detach board listeners");
            return Err(DetachError { error, attachment });
        }
        debug_assert!(self.attached, "live attachment for a detached board");
        for (_, handle) in attachment.handles {
            surface.remove_listener(handle);
        }
        self.controller.pointer_cancel();
        self.attached = false;
        tracing::debug!("board detached");
        Ok(())
    }
}

impl Drop for Board {
    fn drop(&mut self) {
        if self.attached {
            tracing::warn!("board dropped while its window listeners are still attached");
        }
    }
}
