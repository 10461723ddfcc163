// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture tracking: pointer drags and wheel interpretation.
//!
//! [`GestureSession`] turns absolute pointer positions into per-event
//! movement deltas while a drag is held. [`interpret_wheel`] decides whether
//! a wheel event zooms or pans. Neither applies any clamping; that is the job
//! of [`Area`](crate::Area).

use kurbo::{Point, Size, Vec2};

use crate::options::AreaOptions;

/// Transient per-area interaction state.
///
/// `dragging` spans pointer-down to pointer-up. `moving` is set by any
/// gesture and cleared when the settle timer fires.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSession {
    /// Whether a pointer drag is held.
    pub dragging: bool,
    /// Whether continuous input is in progress.
    pub moving: bool,
    last_pos: Option<Point>,
}

impl GestureSession {
    /// Holds a drag starting at `pos`.
    pub fn begin_drag(&mut self, pos: Point) {
        self.dragging = true;
        self.last_pos = Some(pos);
    }

    /// Moves the held drag to `pos`, returning the step since the last one.
    ///
    /// Returns `None` when no drag is held.
    pub fn drag_to(&mut self, pos: Point) -> Option<Vec2> {
        if !self.dragging {
            return None;
        }
        self.last_pos.replace(pos).map(|last| pos - last)
    }

    /// Releases the drag.
    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.last_pos = None;
    }

    /// Clears all transient state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A wheel event as seen by the area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Cursor position relative to the screen box origin.
    pub position: Point,
    /// Raw wheel delta.
    pub delta: Vec2,
    /// Whether the control modifier is held (also set by pinch gestures on
    /// most platforms).
    pub ctrl: bool,
}

impl WheelInput {
    /// A wheel event without modifiers.
    #[must_use]
    pub fn new(position: Point, delta: Vec2) -> Self {
        Self {
            position,
            delta,
            ctrl: false,
        }
    }

    /// Sets the control modifier.
    #[must_use]
    pub fn with_ctrl(mut self, ctrl: bool) -> Self {
        self.ctrl = ctrl;
        self
    }
}

/// What a wheel event should do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelAction {
    /// Zoom by `multiplier`, anchored at `cursor_offset` from the screen center.
    Zoom {
        /// Scale multiplier.
        multiplier: f64,
        /// Cursor position relative to the screen center.
        cursor_offset: Vec2,
    },
    /// Pan by an unclamped delta.
    Pan(Vec2),
    /// Consume the event without effect.
    Ignore,
}

/// Interprets a wheel event.
///
/// - Zoom mode without control: `wheel_zoom_base ^ delta.y`.
/// - Control without zoom mode: `ctrl_wheel_zoom_base ^ -delta.y`.
/// - Control in zoom mode: ignored, so the two zoom paths never combine.
/// - Otherwise: pan by the negated delta.
#[must_use]
pub fn interpret_wheel(
    input: &WheelInput,
    zoom_mode: bool,
    screen: Size,
    options: &AreaOptions,
) -> WheelAction {
    let cursor_offset = input.position.to_vec2() - screen.to_vec2() / 2.0;
    match (zoom_mode, input.ctrl) {
        (true, false) => WheelAction::Zoom {
            multiplier: options.wheel_zoom_base.powf(input.delta.y),
            cursor_offset,
        },
        (true, true) => WheelAction::Ignore,
        (false, true) => WheelAction::Zoom {
            multiplier: options.ctrl_wheel_zoom_base.powf(-input.delta.y),
            cursor_offset,
        },
        (false, false) => WheelAction::Pan(-input.delta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Size = Size::new(1000.0, 800.0);

    #[test]
    fn drag_to_without_held_drag_is_none() {
        let mut session = GestureSession::default();
        assert_eq!(session.drag_to(Point::new(5.0, 5.0)), None);
        assert!(!session.dragging);
    }

    #[test]
    fn drag_reports_step_deltas() {
        let mut session = GestureSession::default();
        session.begin_drag(Point::new(0.0, 0.0));
        assert_eq!(session.drag_to(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(session.drag_to(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        session.end_drag();
        assert!(!session.dragging);
        assert_eq!(session.drag_to(Point::new(9.0, 9.0)), None);
    }

    #[test]
    fn reset_clears_drag_and_movement() {
        let mut session = GestureSession::default();
        session.begin_drag(Point::ZERO);
        session.moving = true;
        session.reset();
        assert_eq!(session, GestureSession::default());
    }

    #[test]
    fn zoom_mode_wheel_zooms_at_cursor() {
        let input = WheelInput::new(Point::new(600.0, 300.0), Vec2::new(0.0, 100.0));
        let action = interpret_wheel(&input, true, SCREEN, &AreaOptions::default());
        let WheelAction::Zoom {
            multiplier,
            cursor_offset,
        } = action
        else {
            panic!("expected zoom, got {action:?}");
        };
        assert!((multiplier - 1.002_f64.powf(100.0)).abs() < 1e-12);
        assert!(multiplier > 1.0);
        assert_eq!(cursor_offset, Vec2::new(100.0, -100.0));
    }

    #[test]
    fn ctrl_wheel_zooms_inverted_outside_zoom_mode() {
        let input =
            WheelInput::new(Point::new(500.0, 400.0), Vec2::new(0.0, 50.0)).with_ctrl(true);
        let action = interpret_wheel(&input, false, SCREEN, &AreaOptions::default());
        let WheelAction::Zoom {
            multiplier,
            cursor_offset,
        } = action
        else {
            panic!("expected zoom, got {action:?}");
        };
        assert!(multiplier < 1.0);
        assert!((multiplier - 1.004_f64.powf(-50.0)).abs() < 1e-12);
        assert_eq!(cursor_offset, Vec2::ZERO);
    }

    #[test]
    fn ctrl_wheel_in_zoom_mode_is_ignored() {
        let input = WheelInput::new(Point::ZERO, Vec2::new(0.0, 50.0)).with_ctrl(true);
        assert_eq!(
            interpret_wheel(&input, true, SCREEN, &AreaOptions::default()),
            WheelAction::Ignore
        );
    }

    #[test]
    fn plain_wheel_pans_opposite_to_delta() {
        let input = WheelInput::new(Point::ZERO, Vec2::new(10.0, -20.0));
        assert_eq!(
            interpret_wheel(&input, false, SCREEN, &AreaOptions::default()),
            WheelAction::Pan(Vec2::new(-10.0, 20.0))
        );
    }
}
