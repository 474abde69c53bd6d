// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use pinboard_cards::{CardId, CardStore};
use pinboard_view::Viewport;

use crate::events::{PointerEvent, PointerTarget, Response, ScrollDelta, WheelEvent};
use crate::track::PointerTrack;

/// Tunable input parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionConfig {
    /// Scale change per pixel of vertical wheel movement.
    pub zoom_sensitivity: f64,
    /// Pixels per line for line-based wheel deltas.
    pub line_delta_px: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            zoom_sensitivity: 0.001,
            line_delta_px: 20.0,
        }
    }
}

impl InteractionConfig {
    /// Sets the wheel zoom sensitivity.
    #[must_use]
    pub fn with_zoom_sensitivity(mut self, sensitivity: f64) -> Self {
        self.zoom_sensitivity = sensitivity;
        self
    }

    /// Sets the pixel size of one wheel line.
    #[must_use]
    pub fn with_line_delta_px(mut self, px: f64) -> Self {
        self.line_delta_px = px;
        self
    }
}

/// Current pointer gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureState {
    /// No button held.
    #[default]
    Idle,
    /// Dragging the background; moves pan the viewport.
    Panning,
    /// Dragging a card; moves reposition it.
    DraggingCard {
        /// The card being dragged.
        card: CardId,
        /// Board-space vector from the card's top-left corner to the grab point.
        grab_offset: Vec2,
    },
}

/// Turns a single pointer/wheel stream into pans, card drags and zooms.
///
/// The gesture state decided at press time is the only thing consulted when
/// interpreting later moves and releases, so hosts may deliver moves and
/// releases from window-level listeners for the whole lifetime of the board.
/// Moves and releases arriving while idle are ignored.
#[derive(Clone, Debug, Default)]
pub struct InteractionController {
    state: GestureState,
    track: PointerTrack,
    config: InteractionConfig,
}

impl InteractionController {
    /// Creates an idle controller.
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            state: GestureState::Idle,
            track: PointerTrack::default(),
            config,
        }
    }

    /// Input parameters.
    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Replaces the input parameters.
    pub fn set_config(&mut self, config: InteractionConfig) {
        self.config = config;
    }

    /// Current gesture.
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Returns `true` when no gesture is active.
    pub fn is_idle(&self) -> bool {
        self.state == GestureState::Idle
    }

    /// Handles a pointer press.
    ///
    /// A press on the topmost card under the pointer raises that card and
    /// starts dragging it, unless it landed on the card's text editor, in
    /// which case the card is raised and handed to the host for editing. A
    /// press on empty board starts panning. Presses during an active gesture
    /// are ignored.
    pub fn pointer_down(
        &mut self,
        event: PointerEvent,
        view: &Viewport,
        cards: &mut CardStore,
    ) -> Response {
        if !self.is_idle() {
            return Response::IGNORED;
        }
        let screen = view.surface_point(event.position);
        let board = view.screen_to_board(screen);

        let Some(card) = cards.hit_test(board) else {
            self.state = GestureState::Panning;
            self.track.start(screen);
            tracing::debug!(x = screen.x, y = screen.y, "pan started");
            return Response {
                prevent_default: true,
                ..Response::IGNORED
            };
        };

        let Some(origin) = cards.get(card).map(|c| c.position()) else {
            return Response::IGNORED;
        };
        if cards.bring_to_front(card).is_err() {
            return Response::IGNORED;
        }

        if event.target == PointerTarget::TextEditor {
            tracing::debug!(%card, "text edit press");
            return Response {
                repaint: true,
                prevent_default: false,
                edit_text: Some(card),
            };
        }

        let grab_offset = board - origin;
        self.state = GestureState::DraggingCard { card, grab_offset };
        tracing::debug!(%card, dx = grab_offset.x, dy = grab_offset.y, "card drag started");
        Response {
            repaint: true,
            prevent_default: true,
            edit_text: None,
        }
    }

    /// Handles pointer movement (window coordinates).
    pub fn pointer_move(
        &mut self,
        position: Point,
        view: &mut Viewport,
        cards: &mut CardStore,
    ) -> Response {
        let screen = view.surface_point(position);
        match self.state {
            GestureState::Idle => Response::IGNORED,
            GestureState::Panning => {
                let delta = self.track.update(screen).unwrap_or(Vec2::ZERO);
                if delta == Vec2::ZERO {
                    return Response::IGNORED;
                }
                view.pan(delta);
                tracing::trace!(dx = delta.x, dy = delta.y, "pan");
                Response {
                    repaint: true,
                    prevent_default: true,
                    edit_text: None,
                }
            }
            GestureState::DraggingCard { card, grab_offset } => {
                // Absolute position through the live viewport, never incremental.
                let target = view.screen_to_board(screen) - grab_offset;
                if let Err(err) = cards.move_to(card, target) {
                    tracing::warn!(%err, "dragged card vanished; ending drag");
                    self.reset();
                    return Response::IGNORED;
                }
                tracing::trace!(%card, x = target.x, y = target.y, "card dragged");
                Response {
                    repaint: true,
                    prevent_default: true,
                    edit_text: None,
                }
            }
        }
    }

    /// Handles a pointer release, ending any gesture.
    pub fn pointer_up(&mut self) -> Response {
        if self.is_idle() {
            return Response::IGNORED;
        }
        tracing::debug!(state = ?self.state, "gesture ended");
        self.reset();
        Response::IGNORED
    }

    /// Handles loss of pointer capture; same as a release.
    pub fn pointer_cancel(&mut self) -> Response {
        self.pointer_up()
    }

    /// Handles a wheel gesture by zooming around the cursor.
    ///
    /// Works in any gesture state and never changes it. The default scroll
    /// action is always suppressed.
    pub fn wheel(&mut self, event: WheelEvent, view: &mut Viewport) -> Response {
        let delta_y = match event.delta {
            ScrollDelta::Pixels(d) => d.y,
            ScrollDelta::Lines(d) => d.y * self.config.line_delta_px,
        };
        let delta_scale = -delta_y * self.config.zoom_sensitivity;
        let pivot = view.surface_point(event.position);

        let before = (view.scale(), view.offset());
        view.zoom_at(pivot, delta_scale);
        let changed = before != (view.scale(), view.offset());
        if changed {
            tracing::trace!(scale = view.scale(), "zoom");
        }
        Response {
            repaint: changed,
            prevent_default: true,
            edit_text: None,
        }
    }

    fn reset(&mut self) {
        self.state = GestureState::Idle;
        self.track.end();
    }
}
