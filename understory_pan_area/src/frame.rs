// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Size};

/// What the screen box should display this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Presentation {
    /// The loading placeholder; measurement has not completed yet.
    Loader,
    /// The live content subtree.
    Live,
    /// The cached snapshot, drawn at `size` under the frame transform.
    Snapshot {
        /// Size to draw the image at, in content units.
        size: Size,
    },
}

/// How transform changes should be applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Apply immediately; used while input is in progress.
    Immediate,
    /// Animate towards the new transform.
    Animated {
        /// Animation duration.
        duration_ms: u64,
    },
}

/// Pointer cursor to show over the screen box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorHint {
    /// Zoom mode is active.
    ZoomIn,
    /// Dragging is disabled.
    Default,
    /// Dragging is enabled and idle.
    Grab,
    /// A gesture is in progress.
    Grabbing,
}

/// Everything a rendering layer needs to draw an [`Area`](crate::Area).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaFrame {
    /// Maps centered content coordinates to screen coordinates.
    pub transform: Affine,
    /// Which layer to show.
    pub presentation: Presentation,
    /// Transition behavior for transform changes.
    pub transition: Transition,
    /// Cursor to show.
    pub cursor: CursorHint,
}

impl CursorHint {
    pub(crate) fn select(zoom_mode: bool, drag_mode: bool, moving: bool) -> Self {
        if zoom_mode {
            Self::ZoomIn
        } else if !drag_mode {
            Self::Default
        } else if moving {
            Self::Grabbing
        } else {
            Self::Grab
        }
    }
}
