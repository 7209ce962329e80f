// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How far the camera may drift away from the scene surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ClampMode {
    /// The camera may pan anywhere.
    None,
    /// Pull the camera back whenever the scene surface would leave the view
    /// entirely, so some part of the plan always stays on screen.
    #[default]
    KeepSomeVisible,
}

/// Placement of a fitted rectangle inside the view.
///
/// Used by [`crate::Viewport2D::fit_rect`], which the viewer calls when the
/// host has no camera value yet and after a zoom-to-region gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FitMode {
    /// The fitted rectangle is centered in the view.
    #[default]
    Center,
    /// The fitted rectangle's top-left corner sits on the view origin.
    AlignMin,
}
