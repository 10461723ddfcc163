// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// Range of offsets that keep scaled content covering the screen.
///
/// Offsets are measured from the screen center to the content center. When
/// the scaled content is smaller than the screen along an axis, both limits
/// on that axis are zero and the content stays centered. When it is larger,
/// the content may be dragged until its edge reaches the screen edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanBounds {
    /// Smallest allowed offset on each axis (always `<= 0`).
    pub min: Vec2,
    /// Largest allowed offset on each axis (always `>= 0`).
    pub max: Vec2,
}

impl PanBounds {
    /// Bounds that only admit the zero offset.
    pub const ZERO: Self = Self {
        min: Vec2::ZERO,
        max: Vec2::ZERO,
    };

    /// Computes the bounds for `content` drawn at `scale` inside `screen`.
    #[must_use]
    pub fn compute(scale: f64, content: Size, screen: Size) -> Self {
        let half_x = (content.width * scale - screen.width) / 2.0;
        let half_y = (content.height * scale - screen.height) / 2.0;
        Self {
            min: Vec2::new((-half_x).min(0.0), (-half_y).min(0.0)),
            max: Vec2::new(half_x.max(0.0), half_y.max(0.0)),
        }
    }

    /// Returns `true` if `offset` lies within the bounds on both axes.
    #[must_use]
    pub fn contains(&self, offset: Vec2) -> bool {
        (self.min.x..=self.max.x).contains(&offset.x)
            && (self.min.y..=self.max.y).contains(&offset.y)
    }

    /// Returns `true` if there is no panning room on either axis.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.min == Vec2::ZERO && self.max == Vec2::ZERO
    }

    /// Clamps `offset` into the bounds.
    #[must_use]
    pub fn clamp(&self, offset: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(offset.x, self.min.x, self.max.x),
            clamp_axis(offset.y, self.min.y, self.max.y),
        )
    }

    /// Clamps a requested `delta` so that `offset + delta` stays within bounds.
    ///
    /// Each axis is clamped into `[min - offset, max - offset]`.
    #[must_use]
    pub fn clamp_delta(&self, offset: Vec2, delta: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(delta.x, self.min.x - offset.x, self.max.x - offset.x),
            clamp_axis(delta.y, self.min.y - offset.y, self.max.y - offset.y),
        )
    }

    /// Returns the minimal per-axis delta that moves `offset` back into bounds,
    /// or `None` if it is already inside.
    #[must_use]
    pub fn correction(&self, offset: Vec2) -> Option<Vec2> {
        if self.contains(offset) {
            return None;
        }
        Some(self.clamp(offset) - offset)
    }
}

impl Default for PanBounds {
    fn default() -> Self {
        Self::ZERO
    }
}

/// The scale at which `content` fits inside `screen`, capped at `1.0`.
///
/// Returns `None` while either content dimension is zero.
#[must_use]
pub fn fit_scale(content: Size, screen: Size) -> Option<f64> {
    if content.width <= 0.0 || content.height <= 0.0 {
        return None;
    }
    Some(
        (screen.width / content.width)
            .min(screen.height / content.height)
            .min(1.0),
    )
}

// `f64::clamp` panics on inverted limits; these never invert for bounds built
// by `PanBounds::compute`, but hand-built bounds might.
fn clamp_axis(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smaller_content_has_no_pan_room() {
        let bounds = PanBounds::compute(0.5, Size::new(1000.0, 800.0), Size::new(1000.0, 800.0));
        assert!(bounds.is_locked());
        assert_eq!(bounds.clamp(Vec2::new(30.0, -40.0)), Vec2::ZERO);
    }

    #[test]
    fn scenario_bounds_at_native_scale() {
        let bounds = PanBounds::compute(1.0, Size::new(2000.0, 1600.0), Size::new(1000.0, 800.0));
        assert_eq!(bounds.min, Vec2::new(-500.0, -400.0));
        assert_eq!(bounds.max, Vec2::new(500.0, 400.0));
    }

    #[test]
    fn clamp_delta_stops_at_edge() {
        let bounds = PanBounds::compute(1.0, Size::new(2000.0, 1600.0), Size::new(1000.0, 800.0));
        let delta = bounds.clamp_delta(Vec2::new(480.0, 0.0), Vec2::new(50.0, 0.0));
        assert_eq!(delta, Vec2::new(20.0, 0.0));
        let delta = bounds.clamp_delta(Vec2::new(-480.0, 0.0), Vec2::new(-50.0, 10.0));
        assert_eq!(delta, Vec2::new(-20.0, 10.0));
    }

    #[test]
    fn correction_is_per_axis_and_minimal() {
        let bounds = PanBounds::compute(1.0, Size::new(2000.0, 1600.0), Size::new(1000.0, 800.0));
        assert_eq!(bounds.correction(Vec2::new(100.0, 100.0)), None);
        assert_eq!(
            bounds.correction(Vec2::new(600.0, 100.0)),
            Some(Vec2::new(-100.0, 0.0))
        );
        assert_eq!(
            bounds.correction(Vec2::new(0.0, -450.0)),
            Some(Vec2::new(0.0, 50.0))
        );
    }

    #[test]
    fn inverted_hand_built_bounds_do_not_panic() {
        let bounds = PanBounds {
            min: Vec2::new(5.0, 5.0),
            max: Vec2::new(-5.0, -5.0),
        };
        let _ = bounds.clamp(Vec2::ZERO);
        let _ = bounds.clamp_delta(Vec2::ZERO, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn fit_scale_caps_at_native() {
        assert_eq!(
            fit_scale(Size::new(2000.0, 1600.0), Size::new(1000.0, 800.0)),
            Some(0.5)
        );
        assert_eq!(
            fit_scale(Size::new(100.0, 100.0), Size::new(1000.0, 800.0)),
            Some(1.0)
        );
        assert_eq!(fit_scale(Size::ZERO, Size::new(1000.0, 800.0)), None);
    }
}
