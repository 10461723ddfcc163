// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for bounds clamping.

use kurbo::{Size, Vec2};
use proptest::prelude::*;
use understory_pan_area::{PanBounds, fit_scale};

fn size() -> impl Strategy<Value = Size> {
    (1.0..5_000.0_f64, 1.0..5_000.0_f64).prop_map(|(w, h)| Size::new(w, h))
}

fn offset() -> impl Strategy<Value = Vec2> {
    (-10_000.0..10_000.0_f64, -10_000.0..10_000.0_f64).prop_map(|(x, y)| Vec2::new(x, y))
}

proptest! {
    #[test]
    fn content_that_fits_has_no_pan_room(screen in size(), content in size(), t in 0.0..0.99_f64) {
        let start = fit_scale(content, screen).unwrap();
        // Any scale between the fit scale and the largest scale that still
        // fits the width.
        let fits_x = screen.width / content.width;
        prop_assume!(fits_x >= start);
        let scale = start + (fits_x - start) * t;
        let bounds = PanBounds::compute(scale, content, screen);
        prop_assert!(bounds.min.x.abs() < 1e-9);
        prop_assert!(bounds.max.x.abs() < 1e-9);
    }

    #[test]
    fn clamped_delta_keeps_offset_in_bounds(
        screen in size(),
        content in size(),
        scale in 0.01..8.0_f64,
        start in offset(),
        delta in offset(),
    ) {
        let bounds = PanBounds::compute(scale, content, screen);
        let start = bounds.clamp(start);
        let next = start + bounds.clamp_delta(start, delta);
        prop_assert!(next.x >= bounds.min.x - 1e-9 && next.x <= bounds.max.x + 1e-9);
        prop_assert!(next.y >= bounds.min.y - 1e-9 && next.y <= bounds.max.y + 1e-9);
    }

    #[test]
    fn one_correction_restores_bounds(
        screen in size(),
        content in size(),
        scale in 0.01..8.0_f64,
        start in offset(),
    ) {
        let bounds = PanBounds::compute(scale, content, screen);
        let corrected = match bounds.correction(start) {
            Some(delta) => start + delta,
            None => start,
        };
        prop_assert!(corrected.x >= bounds.min.x - 1e-9 && corrected.x <= bounds.max.x + 1e-9);
        prop_assert!(corrected.y >= bounds.min.y - 1e-9 && corrected.y <= bounds.max.y + 1e-9);
    }

    #[test]
    fn bounds_are_symmetric(screen in size(), content in size(), scale in 0.01..8.0_f64) {
        let bounds = PanBounds::compute(scale, content, screen);
        prop_assert!(bounds.min.x <= 0.0 && bounds.max.x >= 0.0);
        prop_assert!((bounds.min.x + bounds.max.x).abs() < 1e-9);
        prop_assert!((bounds.min.y + bounds.max.y).abs() < 1e-9);
    }
}
