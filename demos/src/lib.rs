// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the board demos.
//!
//! The demos run headless: there is no window and no real renderer, so the
//! helpers here stand in for the host pieces a UI toolkit would provide.

use kurbo::Size;
use tracing_subscriber::EnvFilter;
use understory_pan_area::{RasterRequest, RasterizeError, Rasterizer, Snapshot};

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Ignore the error when a subscriber is already installed.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// A rasterizer that paints a checkerboard instead of real content.
///
/// Set `fail` to exercise the live-content fallback.
#[derive(Clone, Debug, Default)]
pub struct CheckerRasterizer {
    /// Cell edge length in pixels.
    pub cell: u32,
    /// Fail every request.
    pub fail: bool,
    /// Number of requests served.
    pub served: usize,
}

impl CheckerRasterizer {
    /// Creates a rasterizer with `cell`-pixel squares.
    pub fn new(cell: u32) -> Self {
        Self {
            cell: cell.max(1),
            ..Self::default()
        }
    }
}

impl Rasterizer for CheckerRasterizer {
    fn rasterize(&mut self, request: &RasterRequest) -> Result<Snapshot, RasterizeError> {
        self.served += 1;
        if self.fail {
            return Err(RasterizeError::Failed("checker rasterizer told to fail".into()));
        }
        let width = request.size.width.ceil() as u32;
        let height = request.size.height.ceil() as u32;
        let cell = self.cell.max(1);
        let mut image = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let dark = (x / cell + y / cell) % 2 == 0;
                image.push(if dark { 0x30 } else { 0xd0 });
            }
        }
        Ok(Snapshot {
            image,
            size: Size::new(f64::from(width), f64::from(height)),
        })
    }
}
