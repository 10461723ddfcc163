// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable constants and [`AreaOptions`].
//!
//! The defaults were chosen empirically; they are exposed as named constants
//! so hosts can tune them instead of relying on hidden magic numbers.

use thiserror::Error;

/// Multiplier applied to the natural content size so that pan range exists
/// even at the fit scale.
pub const OVERSCAN_FACTOR: f64 = 2.5;

/// Delay after the most recent input event before the area is considered settled.
pub const SETTLE_DELAY_MS: u64 = 100;

/// Delay after mount before the first measurement is taken.
pub const MEASURE_DELAY_MS: u64 = 100;

/// Exponent base for zoom-mode wheel zoom: `WHEEL_ZOOM_BASE.powf(delta_y)`.
pub const WHEEL_ZOOM_BASE: f64 = 1.002;

/// Exponent base for control-modifier wheel zoom: `CTRL_WHEEL_ZOOM_BASE.powf(-delta_y)`.
pub const CTRL_WHEEL_ZOOM_BASE: f64 = 1.004;

/// Resolution multiplier for snapshot rasterization relative to the natural content size.
pub const SNAPSHOT_RESOLUTION: f64 = 2.0;

/// Duration of the settled-state transform animation.
pub const TRANSITION_MS: u64 = 200;

/// Error returned by [`AreaOptions::validate`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum OptionsError {
    /// A tunable that must be finite and strictly positive was not.
    #[error("`{name}` must be finite and greater than zero, got {value}")]
    NotPositive {
        /// Name of the offending option.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Ensures `value` is finite and strictly positive.
pub fn require_positive(name: &'static str, value: f64) -> Result<(), OptionsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(OptionsError::NotPositive { name, value })
    }
}

/// Configuration for an [`Area`](crate::Area).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AreaOptions {
    /// See [`OVERSCAN_FACTOR`].
    pub overscan_factor: f64,
    /// See [`SETTLE_DELAY_MS`].
    pub settle_delay_ms: u64,
    /// See [`MEASURE_DELAY_MS`].
    pub measure_delay_ms: u64,
    /// See [`WHEEL_ZOOM_BASE`].
    pub wheel_zoom_base: f64,
    /// See [`CTRL_WHEEL_ZOOM_BASE`].
    pub ctrl_wheel_zoom_base: f64,
    /// See [`SNAPSHOT_RESOLUTION`].
    pub snapshot_resolution: f64,
    /// See [`TRANSITION_MS`].
    pub transition_ms: u64,
    /// Whether the host supplies a loading placeholder shown until the first
    /// measurement completes.
    pub has_loader: bool,
}

impl Default for AreaOptions {
    fn default() -> Self {
        Self {
            overscan_factor: OVERSCAN_FACTOR,
            settle_delay_ms: SETTLE_DELAY_MS,
            measure_delay_ms: MEASURE_DELAY_MS,
            wheel_zoom_base: WHEEL_ZOOM_BASE,
            ctrl_wheel_zoom_base: CTRL_WHEEL_ZOOM_BASE,
            snapshot_resolution: SNAPSHOT_RESOLUTION,
            transition_ms: TRANSITION_MS,
            has_loader: false,
        }
    }
}

impl AreaOptions {
    /// Sets the overscan factor.
    #[must_use]
    pub fn with_overscan_factor(mut self, factor: f64) -> Self {
        self.overscan_factor = factor;
        self
    }

    /// Sets the settle delay in milliseconds.
    #[must_use]
    pub fn with_settle_delay_ms(mut self, ms: u64) -> Self {
        self.settle_delay_ms = ms;
        self
    }

    /// Sets the mount-to-measurement delay in milliseconds.
    #[must_use]
    pub fn with_measure_delay_ms(mut self, ms: u64) -> Self {
        self.measure_delay_ms = ms;
        self
    }

    /// Sets both wheel zoom exponent bases.
    #[must_use]
    pub fn with_wheel_zoom_bases(mut self, zoom_mode: f64, ctrl: f64) -> Self {
        self.wheel_zoom_base = zoom_mode;
        self.ctrl_wheel_zoom_base = ctrl;
        self
    }

    /// Sets the snapshot resolution multiplier.
    #[must_use]
    pub fn with_snapshot_resolution(mut self, resolution: f64) -> Self {
        self.snapshot_resolution = resolution;
        self
    }

    /// Declares whether a loading placeholder is supplied.
    #[must_use]
    pub fn with_loader(mut self, has_loader: bool) -> Self {
        self.has_loader = has_loader;
        self
    }

    /// Checks that every floating point tunable is finite and positive.
    pub fn validate(&self) -> Result<(), OptionsError> {
        require_positive("overscan_factor", self.overscan_factor)?;
        require_positive("wheel_zoom_base", self.wheel_zoom_base)?;
        require_positive("ctrl_wheel_zoom_base", self.ctrl_wheel_zoom_base)?;
        require_positive("snapshot_resolution", self.snapshot_resolution)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_named_constants() {
        let opts = AreaOptions::default();
        assert_eq!(opts.overscan_factor, 2.5);
        assert_eq!(opts.settle_delay_ms, 100);
        assert_eq!(opts.measure_delay_ms, 100);
        assert_eq!(opts.wheel_zoom_base, 1.002);
        assert_eq!(opts.ctrl_wheel_zoom_base, 1.004);
        assert!(!opts.has_loader);
        assert_eq!(opts.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_non_positive_tunables() {
        let opts = AreaOptions::default().with_overscan_factor(0.0);
        assert_eq!(
            opts.validate(),
            Err(OptionsError::NotPositive {
                name: "overscan_factor",
                value: 0.0
            })
        );

        let opts = AreaOptions::default().with_snapshot_resolution(f64::NAN);
        assert!(opts.validate().is_err());
    }
}
