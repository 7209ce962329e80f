// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use joist_view2d::{Autopan, ClampMode, FitMode};

/// Runtime configuration of a [`Viewer2D`](crate::Viewer2D).
///
/// With the `serde` feature the options load from host configuration files;
/// missing fields take their default.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewerOptions {
    /// Read-only presentation: any camera change switches back to the pan tool.
    pub view_only: bool,
    /// Edge panning during drawing and dragging.
    pub autopan: Autopan,
    /// Zoom factor of one zoom-in click (zoom-out uses its inverse).
    pub zoom_step: f64,
    /// Zoom factor per wheel notch.
    pub wheel_zoom_step: f64,
    /// Largest pointer travel, in device pixels, still treated as a click by
    /// the zoom tools.
    pub click_tolerance: f64,
    /// Placement of fitted content.
    pub fit_mode: FitMode,
    /// How far the camera may leave the scene.
    pub clamp_mode: ClampMode,
    /// Smallest and largest zoom scale.
    pub zoom_limits: (f64, f64),
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            view_only: false,
            autopan: Autopan::default(),
            zoom_step: 1.1,
            wheel_zoom_step: 1.06,
            click_tolerance: 3.0,
            fit_mode: FitMode::default(),
            clamp_mode: ClampMode::default(),
            zoom_limits: (1e-3, 1e3),
        }
    }
}

impl ViewerOptions {
    /// Sets [`ViewerOptions::view_only`].
    #[must_use]
    pub fn with_view_only(mut self, view_only: bool) -> Self {
        self.view_only = view_only;
        self
    }

    /// Sets [`ViewerOptions::autopan`].
    #[must_use]
    pub fn with_autopan(mut self, autopan: Autopan) -> Self {
        self.autopan = autopan;
        self
    }

    /// Sets [`ViewerOptions::zoom_step`].
    #[must_use]
    pub fn with_zoom_step(mut self, zoom_step: f64) -> Self {
        self.zoom_step = zoom_step;
        self
    }

    /// Sets [`ViewerOptions::wheel_zoom_step`].
    #[must_use]
    pub fn with_wheel_zoom_step(mut self, wheel_zoom_step: f64) -> Self {
        self.wheel_zoom_step = wheel_zoom_step;
        self
    }

    /// Sets [`ViewerOptions::click_tolerance`].
    #[must_use]
    pub fn with_click_tolerance(mut self, click_tolerance: f64) -> Self {
        self.click_tolerance = click_tolerance;
        self
    }

    /// Sets [`ViewerOptions::fit_mode`].
    #[must_use]
    pub fn with_fit_mode(mut self, fit_mode: FitMode) -> Self {
        self.fit_mode = fit_mode;
        self
    }

    /// Sets [`ViewerOptions::clamp_mode`].
    #[must_use]
    pub fn with_clamp_mode(mut self, clamp_mode: ClampMode) -> Self {
        self.clamp_mode = clamp_mode;
        self
    }

    /// Sets [`ViewerOptions::zoom_limits`].
    #[must_use]
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.zoom_limits = (min_zoom, max_zoom);
        self
    }
}
