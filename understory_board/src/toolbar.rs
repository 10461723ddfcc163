// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability contract between a board and caller-supplied toolbar UI.
//!
//! A toolbar reads a [`ToolbarModel`] and drives the board through
//! [`BoardOperations`], either by calling the methods directly or by
//! dispatching [`ToolbarAction`] values. The board never knows how the
//! toolbar is drawn or how it is wired (callbacks, signals, messages).

/// Operations a toolbar may invoke.
pub trait BoardOperations {
    /// Zooms in by the configured step, centered.
    fn zoom_in(&mut self);
    /// Zooms out by the configured step, centered; never below the fit scale.
    fn zoom_out(&mut self);
    /// Restores the fit scale and a zero offset.
    fn fit_to_screen(&mut self);
    /// Sets the scale to `1.0`, keeping the offset.
    fn reset_to_native(&mut self);
    /// Shows or hides the minimap.
    fn toggle_minimap(&mut self);
    /// Switches wheel input between panning and zooming.
    fn toggle_zoom_mode(&mut self);
    /// Enables or disables pointer dragging.
    fn toggle_drag_mode(&mut self);
}

/// Read-only view of the board for toolbar rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolbarModel {
    /// Zoom level text, e.g. `"125 %"`.
    pub percent: String,
    /// Whether zooming out would have no effect.
    pub is_at_minimum_scale: bool,
    /// Whether the minimap is shown.
    pub minimap_visible: bool,
    /// Whether wheel zoom mode is on.
    pub zoom_mode_enabled: bool,
    /// Whether pointer dragging is on.
    pub drag_mode_enabled: bool,
}

/// A toolbar operation as a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToolbarAction {
    /// See [`BoardOperations::zoom_in`].
    ZoomIn,
    /// See [`BoardOperations::zoom_out`].
    ZoomOut,
    /// See [`BoardOperations::fit_to_screen`].
    FitToScreen,
    /// See [`BoardOperations::reset_to_native`].
    ResetToNative,
    /// See [`BoardOperations::toggle_minimap`].
    ToggleMinimap,
    /// See [`BoardOperations::toggle_zoom_mode`].
    ToggleZoomMode,
    /// See [`BoardOperations::toggle_drag_mode`].
    ToggleDragMode,
}

impl ToolbarAction {
    /// Every action, in toolbar order.
    pub const ALL: [Self; 7] = [
        Self::ZoomIn,
        Self::ZoomOut,
        Self::FitToScreen,
        Self::ResetToNative,
        Self::ToggleMinimap,
        Self::ToggleZoomMode,
        Self::ToggleDragMode,
    ];

    /// Invokes the matching operation on `target`.
    pub fn apply<T: BoardOperations + ?Sized>(self, target: &mut T) {
        match self {
            Self::ZoomIn => target.zoom_in(),
            Self::ZoomOut => target.zoom_out(),
            Self::FitToScreen => target.fit_to_screen(),
            Self::ResetToNative => target.reset_to_native(),
            Self::ToggleMinimap => target.toggle_minimap(),
            Self::ToggleZoomMode => target.toggle_zoom_mode(),
            Self::ToggleDragMode => target.toggle_drag_mode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<&'static str>);

    impl BoardOperations for Recorder {
        fn zoom_in(&mut self) {
            self.0.push("zoom_in");
        }
        fn zoom_out(&mut self) {
            self.0.push("zoom_out");
        }
        fn fit_to_screen(&mut self) {
            self.0.push("fit");
        }
        fn reset_to_native(&mut self) {
            self.0.push("native");
        }
        fn toggle_minimap(&mut self) {
            self.0.push("minimap");
        }
        fn toggle_zoom_mode(&mut self) {
            self.0.push("zoom_mode");
        }
        fn toggle_drag_mode(&mut self) {
            self.0.push("drag_mode");
        }
    }

    #[test]
    fn actions_dispatch_to_matching_operation() {
        let mut recorder = Recorder::default();
        for action in ToolbarAction::ALL {
            action.apply(&mut recorder);
        }
        assert_eq!(
            recorder.0,
            [
                "zoom_in",
                "zoom_out",
                "fit",
                "native",
                "minimap",
                "zoom_mode",
                "drag_mode"
            ]
        );
    }

    #[test]
    fn actions_work_through_trait_objects() {
        let mut recorder = Recorder::default();
        let target: &mut dyn BoardOperations = &mut recorder;
        ToolbarAction::FitToScreen.apply(target);
        assert_eq!(recorder.0, ["fit"]);
    }
}
