// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical viewport state and its reducers.
//!
//! Every reducer here is a pure function of the state and its arguments, so
//! the zoom math can be tested without an [`Area`](understory_pan_area::Area).

use kurbo::{Size, Vec2};
use understory_pan_area::PanBounds;

/// Coarse state of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardPhase {
    /// No measurement has arrived yet.
    Uninitialized,
    /// Scale equals the fit scale.
    Fitted,
    /// Scale is above the fit scale.
    Zoomed,
}

/// Authoritative scale, offset and measured sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    /// Current scale; `0.0` until initialized.
    pub scale: f64,
    /// Offset of the content center from the screen center.
    pub offset: Vec2,
    /// Fit scale; the floor for every zoom operation.
    pub start_scale: f64,
    /// Measured screen size.
    pub screen: Size,
    /// Overscanned content size.
    pub content: Size,
}

impl ViewportState {
    /// Returns the coarse phase.
    #[must_use]
    pub fn phase(&self) -> BoardPhase {
        if self.start_scale <= 0.0 {
            BoardPhase::Uninitialized
        } else if self.is_at_minimum_scale() {
            BoardPhase::Fitted
        } else {
            BoardPhase::Zoomed
        }
    }

    /// Offset limits for the current scale.
    #[must_use]
    pub fn bounds(&self) -> PanBounds {
        PanBounds::compute(self.scale, self.content, self.screen)
    }

    /// Returns `true` when the scale sits at the fit scale.
    #[must_use]
    pub fn is_at_minimum_scale(&self) -> bool {
        self.scale == self.start_scale
    }

    /// Zoom level as shown on a toolbar, e.g. `"50 %"`.
    #[must_use]
    pub fn percent_display(&self) -> String {
        // Absorb representation error so 0.3 reads as 30, not 31.
        let percent = (self.scale * 100.0 - 1e-9).ceil().max(0.0);
        format!("{percent:.0} %")
    }

    /// Applies a measurement: the fit scale becomes both the scale and the floor.
    pub fn on_init(&mut self, scale: f64, screen: Size, content: Size) {
        self.scale = scale;
        self.start_scale = scale;
        self.screen = screen;
        self.content = content;
    }

    /// Adds a (pre-clamped) delta to the offset.
    pub fn on_move(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Multiplies the scale, never going below the fit scale.
    ///
    /// With `anchor` the content point at `cursor_offset` (relative to the
    /// screen center) stays put; otherwise the offset scales uniformly and
    /// zoom appears centered on the content.
    ///
    /// Returns `false` and leaves the state untouched when the multiplier is
    /// not a positive finite number or the result would overflow.
    pub fn on_scale(&mut self, multiplier: f64, cursor_offset: Vec2, anchor: bool) -> bool {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return false;
        }
        let shift = if anchor {
            cursor_offset * multiplier - cursor_offset
        } else {
            Vec2::ZERO
        };
        let offset = self.offset * multiplier - shift;
        let scale = (self.scale * multiplier).max(self.start_scale);
        if !scale.is_finite() || !offset.is_finite() {
            return false;
        }
        self.offset = offset;
        self.scale = scale;
        true
    }

    /// Returns to the fitted, centered view.
    pub fn fit_to_screen(&mut self) {
        self.scale = self.start_scale;
        self.offset = Vec2::ZERO;
    }

    /// Shows content at native size without touching the offset.
    pub fn reset_to_native(&mut self) {
        self.scale = 1.0;
    }
}
