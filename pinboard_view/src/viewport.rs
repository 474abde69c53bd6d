// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::modes::FitMode;

/// Smallest scale a viewport will accept by default.
pub const DEFAULT_MIN_SCALE: f64 = 0.1;
/// Largest scale a viewport will accept by default.
pub const DEFAULT_MAX_SCALE: f64 = 4.0;

/// Pan + zoom state over an unbounded board plane.
///
/// `Viewport` maps board coordinates onto the rendering surface with the
/// affine `screen = board * scale + offset`. Screen coordinates are relative
/// to the surface origin; use [`Viewport::surface_point`] to convert raw
/// window coordinates first.
///
/// Scale and offset are private and only change through [`Viewport::pan`],
/// [`Viewport::zoom_at`] and the fitting helpers, each of which commits both
/// values together.
#[derive(Clone, Debug)]
pub struct Viewport {
    surface: Rect,
    scale: f64,
    offset: Vec2,
    min_scale: f64,
    max_scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Rect::ZERO)
    }
}

impl Viewport {
    /// Creates a viewport over `surface` (window coordinates).
    ///
    /// - Initial scale is `1.0`.
    /// - Initial offset is zero (board origin maps to the surface origin).
    /// - Scale is clamped to `[0.1, 4.0]`.
    #[must_use]
    pub fn new(surface: Rect) -> Self {
        Self {
            surface,
            scale: 1.0,
            offset: Vec2::ZERO,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
        }
    }

    /// Returns the rendering surface in window coordinates.
    #[must_use]
    pub fn surface(&self) -> Rect {
        self.surface
    }

    /// Sets the rendering surface in window coordinates.
    ///
    /// Scale and offset are untouched; only the visible board region changes.
    pub fn set_surface(&mut self, surface: Rect) {
        self.surface = surface;
    }

    /// Returns the current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the screen-space translation applied after scaling.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the `(min, max)` scale limits.
    #[must_use]
    pub fn scale_limits(&self) -> (f64, f64) {
        (self.min_scale, self.max_scale)
    }

    /// Sets the minimum and maximum scale.
    ///
    /// The range is normalized so that `min <= max`, and the minimum is kept
    /// strictly positive so conversions never divide by zero. The current
    /// scale is clamped into the new range around the surface origin.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        let (lo, hi) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = lo.max(f64::MIN_POSITIVE);
        self.max_scale = hi.max(self.min_scale);
        let clamped = self.clamp_scale(self.scale);
        if clamped != self.scale {
            self.zoom_at(Point::ORIGIN, clamped - self.scale);
        }
    }

    /// Converts a window-space point into surface-local screen coordinates.
    #[must_use]
    pub fn surface_point(&self, window_pt: Point) -> Point {
        window_pt - self.surface.origin().to_vec2()
    }

    /// Converts a screen point into board coordinates.
    #[must_use]
    pub fn screen_to_board(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.offset.x) / self.scale,
            (pt.y - self.offset.y) / self.scale,
        )
    }

    /// Converts a board point into screen coordinates.
    #[must_use]
    pub fn board_to_screen(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale + self.offset.x,
            pt.y * self.scale + self.offset.y,
        )
    }

    /// Converts a board-space rectangle into screen coordinates.
    #[must_use]
    pub fn board_to_screen_rect(&self, rect: Rect) -> Rect {
        // Uniform positive scale keeps the corners ordered.
        Rect::from_points(
            self.board_to_screen(rect.origin()),
            self.board_to_screen(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Converts a screen-space rectangle into board coordinates.
    #[must_use]
    pub fn screen_to_board_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.screen_to_board(rect.origin()),
            self.screen_to_board(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Returns the board-space rectangle currently covered by the surface.
    #[must_use]
    pub fn visible_board_rect(&self) -> Rect {
        self.screen_to_board_rect(Rect::from_origin_size(Point::ORIGIN, self.surface.size()))
    }

    /// Returns the board → screen transform for renderers.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Pans by a screen-space delta. The board is unbounded, so no clamping applies.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Zooms by `delta_scale` around a screen-space pivot.
    ///
    /// The new scale is `clamp(scale + delta_scale)`, and the offset is
    /// recomputed so the board point under `pivot` stays under `pivot`.
    /// When the scale is already pinned at a limit the offset formula still
    /// runs with a ratio of one, leaving the offset unchanged.
    pub fn zoom_at(&mut self, pivot: Point, delta_scale: f64) {
        let new_scale = self.clamp_scale(self.scale + delta_scale);
        let ratio = new_scale / self.scale;
        let new_offset = Vec2::new(
            pivot.x - (pivot.x - self.offset.x) * ratio,
            pivot.y - (pivot.y - self.offset.y) * ratio,
        );
        self.scale = new_scale;
        self.offset = new_offset;
    }

    /// Fits the given board-space rectangle into the surface, preserving aspect ratio.
    ///
    /// Returns `false` (leaving the viewport untouched) when either the
    /// rectangle or the surface is empty.
    pub fn fit_rect(&mut self, rect: Rect, mode: FitMode) -> bool {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return false;
        }
        let size = self.surface.size();
        if size.width <= 0.0 || size.height <= 0.0 {
            return false;
        }

        let sx = size.width / rect.width();
        let sy = size.height / rect.height();
        let scale = self.clamp_scale(sx.min(sy));

        let offset = match mode {
            FitMode::Center => {
                let surface_center = Vec2::new(size.width * 0.5, size.height * 0.5);
                surface_center - rect.center().to_vec2() * scale
            }
            FitMode::AlignMin => -rect.origin().to_vec2() * scale,
        };
        self.scale = scale;
        self.offset = offset;
        true
    }

    /// Pans so that `board_pt` sits at the center of the surface.
    pub fn center_on(&mut self, board_pt: Point) {
        let size = self.surface.size();
        let center = Point::new(size.width * 0.5, size.height * 0.5);
        let delta = center - self.board_to_screen(board_pt);
        self.pan(delta);
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            surface: self.surface,
            visible_board_rect: self.visible_board_rect(),
            scale: self.scale,
            offset: self.offset,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
        }
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Rendering surface in window coordinates.
    pub surface: Rect,
    /// Board-space rectangle currently visible through the surface.
    pub visible_board_rect: Rect,
    /// Current uniform scale.
    pub scale: f64,
    /// Current screen-space offset.
    pub offset: Vec2,
    /// Minimum scale.
    pub min_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
}
