// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use tracing::{debug, trace};
use understory_pan_area::{
    Area, AreaEvent, MeasurementProvider, OptionsError, RasterRequest, RasterizeError,
    Rasterizer, Snapshot, SnapshotTicket, WheelInput,
};

use crate::minimap::Minimap;
use crate::options::BoardOptions;
use crate::state::{BoardPhase, ViewportState};
use crate::toolbar::{BoardOperations, ToolbarAction, ToolbarModel};

/// Upper bound on correction round trips after a single state change.
///
/// One pass is enough for bounds built by the area; the extra passes absorb
/// floating point residue.
const MAX_CORRECTION_PASSES: usize = 4;

/// Owner of the canonical viewport state for one [`Area`].
///
/// Input is forwarded to the area, the area's [`AreaEvent`]s are reduced
/// into [`ViewportState`], and the new state is pushed back so the area can
/// correct out-of-bounds offsets. When any method returns, the offset lies
/// within the bounds for the current scale.
#[derive(Clone, Debug)]
pub struct Board {
    area: Area,
    state: ViewportState,
    options: BoardOptions,
    minimap_visible: bool,
}

impl Board {
    /// Creates a board with an unmounted area.
    #[must_use]
    pub fn new(options: BoardOptions) -> Self {
        let mut area = Area::new(options.area.clone());
        area.set_snapshot_cache(options.snapshot_while_moving);
        Self {
            area,
            state: ViewportState::default(),
            minimap_visible: options.minimap_visible,
            options,
        }
    }

    /// Validates `options` before creating the board.
    pub fn try_new(options: BoardOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self::new(options))
    }

    /// Options this board was created with.
    #[must_use]
    pub fn options(&self) -> &BoardOptions {
        &self.options
    }

    /// The controlled area, for rendering.
    #[must_use]
    pub fn area(&self) -> &Area {
        &self.area
    }

    /// Current viewport state.
    #[must_use]
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    /// Coarse phase of the board.
    #[must_use]
    pub fn phase(&self) -> BoardPhase {
        self.state.phase()
    }

    /// Mounts content; the first measurement follows after the area's delay.
    pub fn mount(&mut self, now_ms: u64) {
        self.area.mount(now_ms);
    }

    /// Tears down the area. The viewport state is left as it was.
    pub fn unmount(&mut self) {
        self.area.unmount();
    }

    /// Fires due timers and applies any resulting events.
    pub fn poll(&mut self, now_ms: u64, provider: &impl MeasurementProvider) {
        let events = self.area.poll(now_ms, provider);
        self.apply_measured(events);
    }

    /// Re-measures after a resize.
    pub fn remeasure(&mut self, now_ms: u64, provider: &impl MeasurementProvider) {
        let events = self.area.remeasure(now_ms, provider);
        self.apply_measured(events);
    }

    /// Forwards a pointer press.
    pub fn pointer_down(&mut self, pos: Point, now_ms: u64) {
        self.area.pointer_down(pos, now_ms);
    }

    /// Forwards pointer motion.
    pub fn pointer_move(&mut self, pos: Point, now_ms: u64) {
        if let Some(event) = self.area.pointer_move(pos, now_ms) {
            self.apply(event);
        }
    }

    /// Forwards a pointer release.
    pub fn pointer_up(&mut self, now_ms: u64) {
        self.area.pointer_up(now_ms);
    }

    /// Forwards a wheel event.
    pub fn wheel(&mut self, input: &WheelInput, now_ms: u64) {
        if let Some(event) = self.area.wheel(input, now_ms) {
            self.apply(event);
        }
    }

    /// See [`Area::take_raster_request`].
    pub fn take_raster_request(&mut self) -> Option<RasterRequest> {
        self.area.take_raster_request()
    }

    /// See [`Area::complete_snapshot`].
    pub fn complete_snapshot(
        &mut self,
        ticket: SnapshotTicket,
        result: Result<Snapshot, RasterizeError>,
    ) {
        self.area.complete_snapshot(ticket, result);
    }

    /// See [`Area::drive_rasterizer`].
    pub fn drive_rasterizer(&mut self, rasterizer: &mut impl Rasterizer) -> bool {
        self.area.drive_rasterizer(rasterizer)
    }

    /// Reduces one area event into the viewport state.
    ///
    /// Gesture events are ignored until the first `Init`.
    pub fn apply(&mut self, event: AreaEvent) {
        match event {
            AreaEvent::Init { scale, screen } => {
                let content = self
                    .area
                    .measurements()
                    .map_or(self.state.content, |m| m.content);
                debug!(scale, ?screen, ?content, "board fitted");
                self.state.on_init(scale, screen, content);
            }
            _ if self.state.phase() == BoardPhase::Uninitialized => {
                trace!(?event, "ignoring gesture before init");
                return;
            }
            AreaEvent::Move(delta) => {
                self.refresh_sizes();
                self.state.on_move(delta);
            }
            AreaEvent::Scale {
                multiplier,
                cursor_offset,
            } => {
                self.refresh_sizes();
                let anchor = self.options.anchor_zoom_on_cursor;
                if !self.state.on_scale(multiplier, cursor_offset, anchor) {
                    trace!(multiplier, "ignoring degenerate zoom");
                    return;
                }
            }
        }
        self.sync();
    }

    /// Zoom level text for a toolbar.
    #[must_use]
    pub fn percent_display(&self) -> String {
        self.state.percent_display()
    }

    /// Returns `true` when zooming out would have no effect.
    #[must_use]
    pub fn is_at_minimum_scale(&self) -> bool {
        self.state.is_at_minimum_scale()
    }

    /// Returns `true` if the minimap is shown.
    #[must_use]
    pub fn minimap_visible(&self) -> bool {
        self.minimap_visible
    }

    /// Read-model for toolbar UI.
    #[must_use]
    pub fn toolbar(&self) -> ToolbarModel {
        ToolbarModel {
            percent: self.percent_display(),
            is_at_minimum_scale: self.is_at_minimum_scale(),
            minimap_visible: self.minimap_visible,
            zoom_mode_enabled: self.area.zoom_mode(),
            drag_mode_enabled: self.area.drag_mode(),
        }
    }

    /// Runs a toolbar action.
    pub fn dispatch(&mut self, action: ToolbarAction) {
        action.apply(self);
    }

    /// The minimap, if it is visible and the board is initialized.
    #[must_use]
    pub fn minimap(&self) -> Option<Minimap> {
        if !self.minimap_visible {
            return None;
        }
        Minimap::compute(&self.state, self.options.minimap_ratio)
    }

    /// Centers the view on the content under a minimap click.
    ///
    /// `click` is in minimap-local coordinates with a top-left origin.
    pub fn minimap_click(&mut self, click: Point) {
        let Some(map) = self.minimap() else {
            return;
        };
        self.state.offset = map.offset_for_click(click);
        trace!(offset = ?self.state.offset, "minimap navigation");
        self.sync();
    }

    fn apply_measured(&mut self, events: Vec<AreaEvent>) {
        for event in events {
            self.apply(event);
        }
        // Measurements that fit nothing (zero content) change the bounds
        // without an `Init`.
        if self.state.phase() != BoardPhase::Uninitialized && self.refresh_sizes() {
            self.sync();
        }
    }

    /// Copies the area's latest sizes into the state; returns `true` on change.
    fn refresh_sizes(&mut self) -> bool {
        let Some(m) = self.area.measurements() else {
            return false;
        };
        if self.state.screen == m.screen && self.state.content == m.content {
            return false;
        }
        trace!(screen = ?m.screen, content = ?m.content, "board sizes refreshed");
        self.state.screen = m.screen;
        self.state.content = m.content;
        true
    }

    fn zoom_centered(&mut self, multiplier: f64) {
        if self.state.phase() == BoardPhase::Uninitialized {
            return;
        }
        if self.state.on_scale(multiplier, Vec2::ZERO, false) {
            self.sync();
        }
    }

    fn sync(&mut self) {
        for _ in 0..MAX_CORRECTION_PASSES {
            match self.area.set_transform(self.state.scale, self.state.offset) {
                Some(AreaEvent::Move(delta)) => self.state.on_move(delta),
                _ => return,
            }
        }
        // Snap whatever residue is left.
        self.state.offset = self.area.bounds().clamp(self.state.offset);
        let _ = self.area.set_transform(self.state.scale, self.state.offset);
    }
}

impl BoardOperations for Board {
    fn zoom_in(&mut self) {
        self.zoom_centered(self.options.zoom_in_step);
    }

    fn zoom_out(&mut self) {
        self.zoom_centered(self.options.zoom_out_step);
    }

    fn fit_to_screen(&mut self) {
        debug!("fit to screen");
        self.state.fit_to_screen();
        self.sync();
    }

    fn reset_to_native(&mut self) {
        debug!("reset to native scale");
        self.state.reset_to_native();
        self.sync();
    }

    fn toggle_minimap(&mut self) {
        self.minimap_visible = !self.minimap_visible;
    }

    fn toggle_zoom_mode(&mut self) {
        let enabled = !self.area.zoom_mode();
        self.area.set_zoom_mode(enabled);
    }

    fn toggle_drag_mode(&mut self) {
        let enabled = !self.area.drag_mode();
        self.area.set_drag_mode(enabled);
    }
}
