// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Joist View 2D: camera and coordinate primitives for the floor-plan viewer.
//!
//! The 2D viewer draws a scene surface (the floor plan) through a pan/zoom
//! camera. Three coordinate spaces are involved:
//!
//! - **Device space**: pixels inside the viewer widget, origin top-left.
//! - **Viewer space**: the untransformed drawing surface, origin top-left,
//!   y growing downward. The camera maps viewer space into device space.
//! - **Scene space**: the floor plan's own coordinates, origin bottom-left,
//!   y growing upward. [`SceneFrame`] flips between viewer and scene space.
//!
//! This crate provides:
//! - [`ViewTransform`]: the camera value exchanged with the host application.
//! - [`Viewport2D`]: a pan/zoom model that produces and consumes
//!   [`ViewTransform`]s.
//! - [`SceneFrame`] / [`to_scene`]: the scene axis flip.
//! - [`Autopan`]: edge detection that pans the camera while a gesture holds
//!   the pointer near the border of the viewer.
//!
//! It does **not** own the scene or any rendering backend.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use joist_view2d::{SceneFrame, Viewport2D};
//!
//! // 800x600 viewer showing a 1000x500 floor plan.
//! let frame = SceneFrame::new(1000.0, 500.0);
//! let mut view = Viewport2D::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! view.fit_rect(frame.bounds());
//!
//! // A click in the middle of the widget, in floor-plan coordinates.
//! let viewer_pt = view.view_to_world_point(Point::new(400.0, 300.0));
//! let scene_pt = frame.to_scene(viewer_pt);
//! assert!((scene_pt.x - 500.0).abs() < 1e-9);
//! assert!((scene_pt.y - 250.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod autopan;
mod modes;
mod scene;
mod transform;
mod viewport2d;

pub use autopan::Autopan;
pub use modes::{ClampMode, FitMode};
pub use scene::{SceneFrame, to_scene};
pub use transform::ViewTransform;
pub use viewport2d::Viewport2D;
