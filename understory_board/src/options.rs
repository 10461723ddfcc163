// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_pan_area::{AreaOptions, OptionsError, require_positive};

/// Multiplier applied by [`BoardOperations::zoom_in`](crate::BoardOperations::zoom_in).
pub const ZOOM_IN_STEP: f64 = 1.25;

/// Multiplier applied by [`BoardOperations::zoom_out`](crate::BoardOperations::zoom_out).
pub const ZOOM_OUT_STEP: f64 = 0.75;

/// Ratio between the screen size and the minimap size.
pub const MINIMAP_RATIO: f64 = 10.0;

/// Configuration for a [`Board`](crate::Board).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardOptions {
    /// Keep the content point under the cursor fixed during gesture zoom.
    ///
    /// Button zoom is always centered regardless of this flag.
    pub anchor_zoom_on_cursor: bool,
    /// Show the snapshot cache instead of live content while moving.
    pub snapshot_while_moving: bool,
    /// See [`ZOOM_IN_STEP`].
    pub zoom_in_step: f64,
    /// See [`ZOOM_OUT_STEP`].
    pub zoom_out_step: f64,
    /// See [`MINIMAP_RATIO`].
    pub minimap_ratio: f64,
    /// Whether the minimap starts visible.
    pub minimap_visible: bool,
    /// Options forwarded to the board's area.
    pub area: AreaOptions,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            anchor_zoom_on_cursor: false,
            snapshot_while_moving: false,
            zoom_in_step: ZOOM_IN_STEP,
            zoom_out_step: ZOOM_OUT_STEP,
            minimap_ratio: MINIMAP_RATIO,
            minimap_visible: true,
            area: AreaOptions::default(),
        }
    }
}

impl BoardOptions {
    /// Enables cursor-anchored gesture zoom.
    #[must_use]
    pub fn with_anchor_zoom_on_cursor(mut self, anchor: bool) -> Self {
        self.anchor_zoom_on_cursor = anchor;
        self
    }

    /// Enables the snapshot cache while moving.
    #[must_use]
    pub fn with_snapshot_while_moving(mut self, enabled: bool) -> Self {
        self.snapshot_while_moving = enabled;
        self
    }

    /// Sets the button zoom multipliers.
    #[must_use]
    pub fn with_zoom_steps(mut self, zoom_in: f64, zoom_out: f64) -> Self {
        self.zoom_in_step = zoom_in;
        self.zoom_out_step = zoom_out;
        self
    }

    /// Sets the screen-to-minimap ratio.
    #[must_use]
    pub fn with_minimap_ratio(mut self, ratio: f64) -> Self {
        self.minimap_ratio = ratio;
        self
    }

    /// Sets the initial minimap visibility.
    #[must_use]
    pub fn with_minimap_visible(mut self, visible: bool) -> Self {
        self.minimap_visible = visible;
        self
    }

    /// Sets the area options.
    #[must_use]
    pub fn with_area(mut self, area: AreaOptions) -> Self {
        self.area = area;
        self
    }

    /// Checks every tunable, including the nested area options.
    pub fn validate(&self) -> Result<(), OptionsError> {
        require_positive("zoom_in_step", self.zoom_in_step)?;
        require_positive("zoom_out_step", self.zoom_out_step)?;
        require_positive("minimap_ratio", self.minimap_ratio)?;
        self.area.validate()
    }
}
