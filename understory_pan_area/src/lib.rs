// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pan_area --heading-base-level=0

//! Understory Pan Area: a headless, controlled pan/zoom screen box.
//!
//! An [`Area`] draws content inside a fixed-size screen under the transform
//! `translate(offset) * scale(scale)`, measured from the screen center. It
//! does **not** own `scale` or `offset`: a state owner (for example
//! `understory_board`) pushes them in with [`Area::set_transform`] and
//! applies the normalized [`AreaEvent`]s the area reports:
//!
//! - [`AreaEvent::Init`] once sizes are measured, carrying the fit scale.
//! - [`AreaEvent::Move`] with a delta already clamped to [`PanBounds`].
//! - [`AreaEvent::Scale`] with a multiplier and a cursor anchor.
//!
//! The area also owns:
//! - The measurement protocol ([`MeasurementProvider`], overscan).
//! - Pointer and wheel interpretation ([`GestureSession`], [`interpret_wheel`]).
//! - A restartable [`SettleTimer`] that marks the end of continuous input.
//! - An optional [`SnapshotCache`] shown instead of live content while moving.
//!
//! Time is supplied by the caller as monotonic milliseconds, so the crate
//! has no runtime or clock dependency.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_pan_area::{Area, AreaEvent, AreaOptions, StaticMeasurements};
//!
//! let sizes = StaticMeasurements {
//!     screen: Size::new(1000.0, 800.0),
//!     natural_content: Size::new(800.0, 640.0),
//! };
//!
//! let mut area = Area::new(AreaOptions::default());
//! area.mount(0);
//!
//! // The first measurement happens after the mount delay.
//! let events = area.poll(100, &sizes);
//! assert_eq!(
//!     events,
//!     vec![AreaEvent::Init { scale: 0.5, screen: Size::new(1000.0, 800.0) }]
//! );
//!
//! // The owner applies the event and pushes its state back.
//! area.set_transform(1.0, Vec2::new(480.0, 0.0));
//!
//! // Drags are clamped so the resulting offset stays in bounds.
//! area.set_drag_mode(true);
//! area.pointer_down(Point::new(0.0, 0.0), 200);
//! let moved = area.pointer_move(Point::new(50.0, 0.0), 210);
//! assert_eq!(moved, Some(AreaEvent::Move(Vec2::new(20.0, 0.0))));
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`AreaOptions`] and
//!   [`Measurements`].

mod area;
mod bounds;
mod frame;
mod gesture;
mod measure;
mod options;
mod settle;
mod snapshot;

pub use area::{Area, AreaEvent};
pub use bounds::{PanBounds, fit_scale};
pub use frame::{AreaFrame, CursorHint, Presentation, Transition};
pub use gesture::{GestureSession, WheelAction, WheelInput, interpret_wheel};
pub use measure::{MeasureError, MeasurementProvider, Measurements, StaticMeasurements};
pub use options::{
    AreaOptions, CTRL_WHEEL_ZOOM_BASE, MEASURE_DELAY_MS, OVERSCAN_FACTOR, OptionsError,
    SETTLE_DELAY_MS, SNAPSHOT_RESOLUTION, TRANSITION_MS, WHEEL_ZOOM_BASE, require_positive,
};
pub use settle::SettleTimer;
pub use snapshot::{
    Completion, RasterRequest, RasterizeError, Rasterizer, Snapshot, SnapshotCache, SnapshotState,
    SnapshotTicket,
};
