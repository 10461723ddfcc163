// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimap: a scaled-down proxy of the content with a visible-region indicator.
//!
//! The minimap is derived from [`ViewportState`] on demand and has no state
//! of its own. Its size is the screen size divided by the minimap ratio. The
//! indicator shows the fraction `start_scale / scale` of the content that is
//! currently visible.

use kurbo::{Point, Rect, Size, Vec2};

use crate::state::ViewportState;

/// Derived minimap geometry, in minimap-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Minimap {
    /// Minimap box size.
    pub size: Size,
    /// Fraction of the content currently visible (`<= 1`).
    pub visible_fraction: f64,
    /// Indicator size.
    pub indicator_size: Size,
    /// Distance from the indicator to the right and bottom minimap edges.
    pub indicator_inset: Vec2,
    /// Scale at which to draw the proxy content inside the minimap.
    pub content_scale: f64,
    ratio: f64,
}

impl Minimap {
    /// Derives the minimap for `state`, or `None` before initialization.
    #[must_use]
    pub fn compute(state: &ViewportState, ratio: f64) -> Option<Self> {
        if state.start_scale <= 0.0 || state.scale <= 0.0 || ratio <= 0.0 {
            return None;
        }
        let size = state.screen / ratio;
        let visible_fraction = state.start_scale / state.scale;
        let indicator_size = size * visible_fraction;
        let indicator_inset = (size - indicator_size).to_vec2() / 2.0
            + state.offset / ratio * visible_fraction;
        Some(Self {
            size,
            visible_fraction,
            indicator_size,
            indicator_inset,
            content_scale: state.start_scale / ratio,
            ratio,
        })
    }

    /// The indicator as a rectangle with a top-left origin.
    #[must_use]
    pub fn indicator_rect(&self) -> Rect {
        let origin = Point::new(
            self.size.width - self.indicator_inset.x - self.indicator_size.width,
            self.size.height - self.indicator_inset.y - self.indicator_size.height,
        );
        Rect::from_origin_size(origin, self.indicator_size)
    }

    /// Offset that centers the view on the content under `click`.
    ///
    /// `click` is in minimap-local coordinates with a top-left origin. The
    /// result is clamped so the indicator stays inside the minimap.
    #[must_use]
    pub fn offset_for_click(&self, click: Point) -> Vec2 {
        let from_center = click.to_vec2() - self.size.to_vec2() / 2.0;
        let slack = (self.size - self.indicator_size).to_vec2() / 2.0;
        let clamped = Vec2::new(
            (-from_center.x).max(-slack.x).min(slack.x),
            (-from_center.y).max(-slack.y).min(slack.y),
        );
        clamped * self.ratio / self.visible_fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(scale: f64, offset: Vec2) -> ViewportState {
        let mut state = ViewportState::default();
        state.on_init(0.5, Size::new(1000.0, 800.0), Size::new(2000.0, 1600.0));
        state.scale = scale;
        state.offset = offset;
        state
    }

    #[test]
    fn uninitialized_board_has_no_minimap() {
        assert_eq!(Minimap::compute(&ViewportState::default(), 10.0), None);
    }

    #[test]
    fn fitted_indicator_fills_minimap() {
        let map = Minimap::compute(&state(0.5, Vec2::ZERO), 10.0).unwrap();
        assert_eq!(map.size, Size::new(100.0, 80.0));
        assert_eq!(map.visible_fraction, 1.0);
        assert_eq!(map.indicator_rect(), Rect::new(0.0, 0.0, 100.0, 80.0));
        assert_eq!(map.content_scale, 0.05);
    }

    #[test]
    fn zoomed_indicator_follows_offset() {
        let map = Minimap::compute(&state(1.0, Vec2::new(200.0, 0.0)), 10.0).unwrap();
        assert_eq!(map.indicator_size, Size::new(50.0, 40.0));
        // Content dragged right means the visible region lies further left.
        assert_eq!(map.indicator_inset, Vec2::new(35.0, 20.0));
        assert_eq!(map.indicator_rect(), Rect::new(15.0, 20.0, 65.0, 60.0));
    }

    #[test]
    fn center_click_at_fit_scale_is_zero_offset() {
        let map = Minimap::compute(&state(0.5, Vec2::ZERO), 10.0).unwrap();
        assert_eq!(map.offset_for_click(Point::new(50.0, 40.0)), Vec2::ZERO);
    }

    #[test]
    fn click_centers_indicator_on_click_point() {
        let zoomed = state(1.0, Vec2::ZERO);
        let map = Minimap::compute(&zoomed, 10.0).unwrap();
        let click = Point::new(60.0, 30.0);
        let offset = map.offset_for_click(click);
        assert_eq!(offset, Vec2::new(-200.0, 200.0));

        let moved = Minimap::compute(&state(1.0, offset), 10.0).unwrap();
        assert_eq!(moved.indicator_rect().center(), click);
    }

    #[test]
    fn click_is_clamped_to_keep_indicator_inside() {
        let map = Minimap::compute(&state(1.0, Vec2::ZERO), 10.0).unwrap();
        let offset = map.offset_for_click(Point::new(100.0, 0.0));
        assert_eq!(offset, Vec2::new(-500.0, 400.0));
        let moved = Minimap::compute(&state(1.0, offset), 10.0).unwrap();
        let rect = moved.indicator_rect();
        assert_eq!(rect, Rect::new(50.0, 0.0, 100.0, 40.0));
    }
}
