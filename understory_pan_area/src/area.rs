// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};
use tracing::{debug, trace, warn};

use crate::bounds::{PanBounds, fit_scale};
use crate::frame::{AreaFrame, CursorHint, Presentation, Transition};
use crate::gesture::{GestureSession, WheelAction, WheelInput, interpret_wheel};
use crate::measure::{MeasurementProvider, Measurements};
use crate::options::AreaOptions;
use crate::settle::SettleTimer;
use crate::snapshot::{
    Completion, RasterRequest, RasterizeError, Rasterizer, Snapshot, SnapshotCache,
    SnapshotTicket,
};

/// Normalized event emitted by an [`Area`] for its state owner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AreaEvent {
    /// Sizes were measured; `scale` is the fit-to-screen scale.
    Init {
        /// Fit scale, capped at `1.0`.
        scale: f64,
        /// Measured screen size.
        screen: Size,
    },
    /// Add this delta to the offset. Already clamped to the current bounds.
    Move(Vec2),
    /// Multiply the scale, anchored at `cursor_offset` from the screen center.
    Scale {
        /// Scale multiplier.
        multiplier: f64,
        /// Cursor position relative to the screen center.
        cursor_offset: Vec2,
    },
}

/// A controlled pan/zoom area.
///
/// The area never owns `scale` or `offset`; the owner pushes them in with
/// [`Area::set_transform`] and applies the [`AreaEvent`]s the area reports.
/// Time is supplied by the caller as monotonic milliseconds.
#[derive(Clone, Debug)]
pub struct Area {
    options: AreaOptions,
    zoom_mode: bool,
    drag_mode: bool,
    scale: f64,
    offset: Vec2,
    measurements: Option<Measurements>,
    bounds: PanBounds,
    session: GestureSession,
    settle: SettleTimer,
    measure: SettleTimer,
    snapshot: SnapshotCache,
    generation: u64,
    mounted: bool,
    loading: bool,
}

impl Area {
    /// Creates an unmounted area.
    #[must_use]
    pub fn new(options: AreaOptions) -> Self {
        Self {
            settle: SettleTimer::new(options.settle_delay_ms),
            measure: SettleTimer::new(options.measure_delay_ms),
            options,
            zoom_mode: false,
            drag_mode: false,
            scale: 0.0,
            offset: Vec2::ZERO,
            measurements: None,
            bounds: PanBounds::ZERO,
            session: GestureSession::default(),
            snapshot: SnapshotCache::new(false),
            generation: 0,
            mounted: false,
            loading: true,
        }
    }

    /// Returns the options this area was created with.
    #[must_use]
    pub fn options(&self) -> &AreaOptions {
        &self.options
    }

    /// Mounts (or re-mounts) content, scheduling the first measurement.
    ///
    /// A re-mount means the content changed, so the snapshot cache is cleared.
    pub fn mount(&mut self, now_ms: u64) {
        self.generation += 1;
        self.mounted = true;
        self.loading = true;
        self.snapshot.invalidate();
        self.session.reset();
        self.settle.cancel();
        self.measure.arm(now_ms);
        debug!(generation = self.generation, "area mounted");
    }

    /// Tears the area down, cancelling timers and any in-flight rasterization.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.generation += 1;
        self.mounted = false;
        self.settle.cancel();
        self.measure.cancel();
        self.session.reset();
        self.snapshot.invalidate();
        debug!("area unmounted");
    }

    /// Returns `true` between [`Area::mount`] and [`Area::unmount`].
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Enables wheel zoom mode.
    pub fn set_zoom_mode(&mut self, enabled: bool) {
        self.zoom_mode = enabled;
    }

    /// Returns `true` if wheel zoom mode is enabled.
    #[must_use]
    pub fn zoom_mode(&self) -> bool {
        self.zoom_mode
    }

    /// Enables pointer dragging. Disabling ends any drag in progress.
    pub fn set_drag_mode(&mut self, enabled: bool) {
        self.drag_mode = enabled;
        if !enabled {
            self.session.end_drag();
        }
    }

    /// Returns `true` if pointer dragging is enabled.
    #[must_use]
    pub fn drag_mode(&self) -> bool {
        self.drag_mode
    }

    /// Enables rendering the snapshot cache while moving.
    pub fn set_snapshot_cache(&mut self, enabled: bool) {
        self.snapshot.set_enabled(enabled);
        if enabled && self.mounted && !self.loading {
            self.queue_snapshot();
        }
    }

    /// Pushes the owner's current scale and offset.
    ///
    /// Returns a correcting [`AreaEvent::Move`] if the offset lies outside
    /// the bounds for the new scale.
    pub fn set_transform(&mut self, scale: f64, offset: Vec2) -> Option<AreaEvent> {
        self.scale = scale;
        self.offset = offset;
        self.update_bounds();
        self.correction()
    }

    /// Current scale as last pushed by the owner.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current offset as last pushed by the owner.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Offset limits for the current scale and measurements.
    #[must_use]
    pub fn bounds(&self) -> PanBounds {
        self.bounds
    }

    /// Latest successful measurements.
    #[must_use]
    pub fn measurements(&self) -> Option<Measurements> {
        self.measurements
    }

    /// Returns `true` until the first measurement of the current mount.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns `true` while continuous input is in progress.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.session.moving
    }

    /// Returns `true` while a pointer drag is armed.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.dragging
    }

    /// Transient gesture state.
    #[must_use]
    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    /// Snapshot cache state.
    #[must_use]
    pub fn snapshot(&self) -> &SnapshotCache {
        &self.snapshot
    }

    /// Earliest pending timer deadline, for scheduling the next [`Area::poll`].
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.measure.deadline(), self.settle.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Fires due timers.
    pub fn poll(&mut self, now_ms: u64, provider: &impl MeasurementProvider) -> Vec<AreaEvent> {
        if !self.mounted {
            return Vec::new();
        }
        let mut events = Vec::new();
        if self.measure.poll(now_ms) {
            events.extend(self.measure_now(now_ms, provider));
        }
        if self.settle.poll(now_ms) {
            trace!("area settled");
            self.session.moving = false;
        }
        events
    }

    /// Re-reads measurements, typically after a resize.
    pub fn remeasure(
        &mut self,
        now_ms: u64,
        provider: &impl MeasurementProvider,
    ) -> Vec<AreaEvent> {
        if !self.mounted {
            return Vec::new();
        }
        self.measure_now(now_ms, provider)
    }

    /// Handles a pointer press at `pos` (screen coordinates).
    pub fn pointer_down(&mut self, pos: Point, now_ms: u64) {
        if !self.mounted || !self.drag_mode {
            return;
        }
        self.session.begin_drag(pos);
        self.begin_movement(now_ms);
    }

    /// Handles pointer motion; reports a clamped move while a drag is armed.
    pub fn pointer_move(&mut self, pos: Point, now_ms: u64) -> Option<AreaEvent> {
        if !self.mounted || !self.drag_mode {
            return None;
        }
        let delta = self.session.drag_to(pos)?;
        self.begin_movement(now_ms);
        self.clamped_move(delta)
    }

    /// Handles a pointer release.
    pub fn pointer_up(&mut self, now_ms: u64) {
        if self.session.dragging {
            self.session.end_drag();
            self.settle.arm(now_ms);
        }
    }

    /// Handles a wheel event. The event is always consumed.
    pub fn wheel(&mut self, input: &WheelInput, now_ms: u64) -> Option<AreaEvent> {
        if !self.mounted {
            return None;
        }
        self.begin_movement(now_ms);
        let screen = self.measurements.map_or(Size::ZERO, |m| m.screen);
        match interpret_wheel(input, self.zoom_mode, screen, &self.options) {
            WheelAction::Zoom {
                multiplier,
                cursor_offset,
            } => Some(AreaEvent::Scale {
                multiplier,
                cursor_offset,
            }),
            WheelAction::Pan(delta) => self.clamped_move(delta),
            WheelAction::Ignore => None,
        }
    }

    /// Hands the pending rasterization request to the host, if any.
    pub fn take_raster_request(&mut self) -> Option<RasterRequest> {
        if !self.mounted {
            return None;
        }
        self.snapshot.take_request()
    }

    /// Delivers a rasterization result. Results for stale tickets are ignored.
    pub fn complete_snapshot(
        &mut self,
        ticket: SnapshotTicket,
        result: Result<Snapshot, RasterizeError>,
    ) {
        if ticket.generation() != self.generation {
            trace!(ticket = ticket.generation(), "dropping stale snapshot");
            return;
        }
        let error = result.as_ref().err().cloned();
        match self.snapshot.complete(ticket, result) {
            Completion::Stored => debug!("snapshot cache ready"),
            Completion::Failed => {
                if let Some(error) = error {
                    warn!(%error, "snapshot rasterization failed, using live content");
                }
            }
            Completion::Stale => trace!("dropping snapshot for abandoned request"),
        }
    }

    /// Runs a pending rasterization request through `rasterizer`.
    ///
    /// Returns `true` if a request was processed.
    pub fn drive_rasterizer(&mut self, rasterizer: &mut impl Rasterizer) -> bool {
        let Some(request) = self.take_raster_request() else {
            return false;
        };
        let result = rasterizer.rasterize(&request);
        self.complete_snapshot(request.ticket, result);
        true
    }

    /// Affine mapping centered content coordinates to screen coordinates.
    #[must_use]
    pub fn transform(&self) -> Affine {
        let center = self
            .measurements
            .map_or(Vec2::ZERO, |m| m.screen.to_vec2() / 2.0);
        Affine::translate(center + self.offset) * Affine::scale(self.scale)
    }

    /// Converts a content-space point to screen coordinates.
    #[must_use]
    pub fn content_to_screen(&self, pt: Point) -> Point {
        self.transform() * pt
    }

    /// Converts a screen-space point to content coordinates.
    ///
    /// Returns `None` while the scale is not positive.
    #[must_use]
    pub fn screen_to_content(&self, pt: Point) -> Option<Point> {
        (self.scale > 0.0).then(|| self.transform().inverse() * pt)
    }

    /// The content-space rectangle currently visible through the screen box.
    #[must_use]
    pub fn visible_content_rect(&self) -> Option<Rect> {
        let screen = self.measurements?.screen;
        let inverse = (self.scale > 0.0).then(|| self.transform().inverse())?;
        Some(inverse.transform_rect_bbox(screen.to_rect()))
    }

    /// Builds the render plan for the current state.
    #[must_use]
    pub fn frame(&self) -> AreaFrame {
        let moving = self.session.moving;
        let presentation = if self.loading && self.options.has_loader {
            Presentation::Loader
        } else {
            match (moving, self.snapshot.ready(), self.measurements) {
                (true, Some(_), Some(m)) => Presentation::Snapshot {
                    size: m.natural_content,
                },
                _ => Presentation::Live,
            }
        };
        let transition = if moving {
            Transition::Immediate
        } else {
            Transition::Animated {
                duration_ms: self.options.transition_ms,
            }
        };
        AreaFrame {
            transform: self.transform(),
            presentation,
            transition,
            cursor: CursorHint::select(self.zoom_mode, self.drag_mode, moving),
        }
    }

    fn begin_movement(&mut self, now_ms: u64) {
        self.session.moving = true;
        self.settle.arm(now_ms);
    }

    fn clamped_move(&self, delta: Vec2) -> Option<AreaEvent> {
        let clamped = self.bounds.clamp_delta(self.offset, delta);
        trace!(?delta, ?clamped, "move");
        (clamped != Vec2::ZERO).then_some(AreaEvent::Move(clamped))
    }

    fn update_bounds(&mut self) {
        self.bounds = self.measurements.map_or(PanBounds::ZERO, |m| {
            PanBounds::compute(self.scale, m.content, m.screen)
        });
    }

    fn correction(&self) -> Option<AreaEvent> {
        self.measurements?;
        let delta = self.bounds.correction(self.offset)?;
        trace!(?delta, offset = ?self.offset, "offset out of bounds, correcting");
        Some(AreaEvent::Move(delta))
    }

    fn queue_snapshot(&mut self) {
        let Some(m) = self.measurements else {
            return;
        };
        let ticket = SnapshotTicket::new(self.generation);
        if self
            .snapshot
            .queue(ticket, m.natural_content, self.options.snapshot_resolution)
        {
            debug!(generation = self.generation, "snapshot rasterization queued");
        }
    }

    fn measure_now(&mut self, now_ms: u64, provider: &impl MeasurementProvider) -> Vec<AreaEvent> {
        let measured = match Measurements::read(provider, self.options.overscan_factor) {
            Ok(m) => m,
            Err(error) => {
                trace!(%error, "measurement unavailable, retrying");
                self.measure.arm(now_ms);
                return Vec::new();
            }
        };
        let changed = self.measurements != Some(measured);
        self.measurements = Some(measured);
        self.update_bounds();
        if self.loading {
            self.loading = false;
            self.queue_snapshot();
        }
        if !changed {
            return Vec::new();
        }
        match fit_scale(measured.content, measured.screen) {
            Some(scale) => {
                debug!(
                    scale,
                    screen = ?measured.screen,
                    content = ?measured.content,
                    "area measured"
                );
                vec![AreaEvent::Init {
                    scale,
                    screen: measured.screen,
                }]
            }
            None => self.correction().into_iter().collect(),
        }
    }
}
