// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement protocol between an [`Area`](crate::Area) and its host.

use kurbo::Size;
use thiserror::Error;

/// Source of layout measurements for the screen and content containers.
///
/// Implementations return `None` while the corresponding container has not
/// been laid out yet; the area retries later instead of treating it as an
/// error.
pub trait MeasurementProvider {
    /// Size of the fixed screen box.
    fn screen_size(&self) -> Option<Size>;
    /// Natural (unscaled, un-overscanned) size of the content.
    fn natural_content_size(&self) -> Option<Size>;
}

impl<P: MeasurementProvider + ?Sized> MeasurementProvider for &P {
    fn screen_size(&self) -> Option<Size> {
        (**self).screen_size()
    }

    fn natural_content_size(&self) -> Option<Size> {
        (**self).natural_content_size()
    }
}

/// A fixed pair of sizes, handy for tests and for hosts that already know
/// their layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticMeasurements {
    /// Screen box size.
    pub screen: Size,
    /// Natural content size.
    pub natural_content: Size,
}

impl MeasurementProvider for StaticMeasurements {
    fn screen_size(&self) -> Option<Size> {
        Some(self.screen)
    }

    fn natural_content_size(&self) -> Option<Size> {
        Some(self.natural_content)
    }
}

/// A container could not be measured yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MeasureError {
    /// The screen container is not mounted.
    #[error("screen container is not mounted")]
    ScreenUnavailable,
    /// The content container is not mounted.
    #[error("content container is not mounted")]
    ContentUnavailable,
}

/// Measured screen size and overscanned content size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurements {
    /// Screen box size.
    pub screen: Size,
    /// Natural content size multiplied by the overscan factor.
    pub content: Size,
    /// Natural content size as reported by the provider.
    pub natural_content: Size,
}

impl Measurements {
    /// Reads both sizes from `provider`, applying `overscan` to the content.
    pub fn read(
        provider: &impl MeasurementProvider,
        overscan: f64,
    ) -> Result<Self, MeasureError> {
        let screen = provider
            .screen_size()
            .ok_or(MeasureError::ScreenUnavailable)?;
        let natural_content = provider
            .natural_content_size()
            .ok_or(MeasureError::ContentUnavailable)?;
        Ok(Self {
            screen,
            content: natural_content * overscan,
            natural_content,
        })
    }

    /// Returns `true` if the content has a non-zero area.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.content.width > 0.0 && self.content.height > 0.0
    }
}
