// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_board --heading-base-level=0

//! Understory Board: pan/zoom state ownership for large content.
//!
//! A [`Board`] owns the authoritative [`ViewportState`] (scale, offset, fit
//! scale, measured sizes) for one [`Area`](understory_pan_area::Area). It:
//! - Reduces the area's normalized events into new state, enforcing the fit
//!   scale as a zoom floor and optionally anchoring gesture zoom on the cursor.
//! - Exposes toolbar operations through the [`BoardOperations`] contract and
//!   a [`ToolbarModel`] read-model, without knowing how a toolbar is drawn.
//! - Derives a [`Minimap`] with click-to-center navigation.
//!
//! State moves through [`BoardPhase::Uninitialized`] until the first
//! measurement, then between [`BoardPhase::Fitted`] and
//! [`BoardPhase::Zoomed`]. Dragging and settling are tracked by the area.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_board::{Board, BoardOperations, BoardOptions, BoardPhase};
//! use understory_pan_area::StaticMeasurements;
//!
//! let sizes = StaticMeasurements {
//!     screen: Size::new(1000.0, 800.0),
//!     natural_content: Size::new(800.0, 640.0),
//! };
//!
//! let mut board = Board::new(BoardOptions::default());
//! board.mount(0);
//! board.poll(100, &sizes);
//! assert_eq!(board.phase(), BoardPhase::Fitted);
//! assert_eq!(board.percent_display(), "50 %");
//!
//! board.zoom_in();
//! assert_eq!(board.phase(), BoardPhase::Zoomed);
//!
//! // Clicking the minimap recenters the view; the offset is always clamped.
//! board.minimap_click(Point::new(0.0, 0.0));
//! let bounds = board.area().bounds();
//! assert!(bounds.contains(board.state().offset));
//!
//! board.fit_to_screen();
//! assert_eq!(board.state().offset, Vec2::ZERO);
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`BoardOptions`] and
//!   [`ViewportState`].

mod board;
mod minimap;
mod options;
mod state;
mod toolbar;

pub use board::Board;
pub use minimap::Minimap;
pub use options::{BoardOptions, MINIMAP_RATIO, ZOOM_IN_STEP, ZOOM_OUT_STEP};
pub use state::{BoardPhase, ViewportState};
pub use toolbar::{BoardOperations, ToolbarAction, ToolbarModel};
