// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::modes::{ClampMode, FitMode};
use crate::transform::ViewTransform;

/// Pan/zoom camera of the 2D viewer.
///
/// `Viewport2D` maps viewer space (the drawing surface, called "world" here)
/// into device space inside `view_rect` using a uniform zoom plus a pan
/// offset. It is the working copy of the host-owned [`ViewTransform`]: load
/// the host value with [`Viewport2D::set_transform`], apply a gesture, and
/// hand [`Viewport2D::transform`] back to the host.
#[derive(Clone, Debug)]
pub struct Viewport2D {
    view_rect: Rect,
    world_bounds: Option<Rect>,
    zoom: f64,
    pan: Vec2,
    min_zoom: f64,
    max_zoom: f64,
    clamp_mode: ClampMode,
    fit_mode: FitMode,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl Viewport2D {
    /// Creates a camera over `view_rect` at zoom `1.0` with no pan.
    ///
    /// Zoom is limited to `[1e-3, 1e3]` until [`Viewport2D::set_zoom_limits`]
    /// says otherwise.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        let mut vp = Self {
            view_rect,
            world_bounds: None,
            zoom: 1.0,
            pan: Vec2::ZERO,
            min_zoom: 1e-3,
            max_zoom: 1e3,
            clamp_mode: ClampMode::default(),
            fit_mode: FitMode::default(),
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// The viewer widget rectangle in device pixels.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Resizes the viewer widget. Zoom and pan are kept.
    pub fn set_view_rect(&mut self, rect: Rect) {
        if self.view_rect == rect {
            return;
        }
        self.view_rect = rect;
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Sets the surface the camera is clamped against.
    pub fn set_world_bounds(&mut self, bounds: Option<Rect>) {
        if self.world_bounds == bounds {
            return;
        }
        self.world_bounds = bounds;
        self.clamp_to_bounds();
    }

    /// The surface the camera is clamped against, if any.
    #[must_use]
    pub fn world_bounds(&self) -> Option<Rect> {
        self.world_bounds
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current pan offset in device pixels, relative to the view origin.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Sets the zoom range. Swapped bounds are reordered.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.set_zoom(self.zoom);
    }

    /// The `(min, max)` zoom range.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// Sets how panning is clamped against the world bounds.
    pub fn set_clamp_mode(&mut self, mode: ClampMode) {
        if self.clamp_mode != mode {
            self.clamp_mode = mode;
            self.clamp_to_bounds();
        }
    }

    /// Current clamp mode.
    #[must_use]
    pub fn clamp_mode(&self) -> ClampMode {
        self.clamp_mode
    }

    /// Sets where [`Viewport2D::fit_rect`] places fitted content.
    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.fit_mode = mode;
    }

    /// Current fit mode.
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    /// Sets the zoom factor within the configured limits.
    pub fn set_zoom(&mut self, zoom: f64) {
        let clamped = zoom.clamp(self.min_zoom, self.max_zoom);
        if (self.zoom - clamped).abs() < f64::EPSILON {
            return;
        }
        self.zoom = clamped;
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Loads a host camera value.
    ///
    /// Only the uniform part is honored: `a` becomes the zoom (clamped into
    /// the zoom limits) and `(e, f)` the translation. Shear coefficients are
    /// ignored because the viewer never produces them.
    pub fn set_transform(&mut self, value: ViewTransform) {
        let zoom = if value.a > 0.0 { value.a } else { 1.0 };
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        self.pan = value.translation().to_vec2() - self.view_rect.origin().to_vec2();
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// The camera value for the host.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        ViewTransform::from_affine(self.world_to_view)
    }

    /// Pans by `delta` device pixels.
    pub fn pan_by_view(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.pan += delta;
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Multiplies the zoom by `factor`, keeping `anchor_view` (device space)
    /// over the same world point.
    pub fn zoom_about_view_point(&mut self, anchor_view: Point, factor: f64) {
        if factor <= 0.0 {
            return;
        }
        let old_zoom = self.zoom;
        let new_zoom = (old_zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - old_zoom).abs() < f64::EPSILON {
            return;
        }

        let anchored = self.view_to_world_point(anchor_view);
        self.zoom = new_zoom;
        self.rebuild_transforms();
        let drifted = self.world_to_view_point(anchored);
        self.pan_by_view(anchor_view - drifted);
    }

    /// Fits the world bounds into the view. No-op without bounds.
    pub fn fit_world(&mut self) {
        if let Some(bounds) = self.world_bounds {
            self.fit_rect(bounds);
        }
    }

    /// Zooms and pans so that `rect` (world space) fills the view while
    /// keeping its aspect ratio. Degenerate rectangles are ignored.
    pub fn fit_rect(&mut self, rect: Rect) {
        let rect = rect.abs();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let view_size = self.view_rect.size();
        if view_size.width <= 0.0 || view_size.height <= 0.0 {
            return;
        }

        let sx = view_size.width / rect.width();
        let sy = view_size.height / rect.height();
        let zoom = sx.min(sy).clamp(self.min_zoom, self.max_zoom);
        self.zoom = zoom;

        let view_origin = self.view_rect.origin().to_vec2();
        self.pan = match self.fit_mode {
            FitMode::Center => {
                let view_center = self.view_rect.center().to_vec2();
                view_center - view_origin - rect.center().to_vec2() * zoom
            }
            FitMode::AlignMin => -rect.origin().to_vec2() * zoom,
        };

        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// The world rectangle currently on screen.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        self.view_to_world_rect(self.view_rect)
    }

    /// World space to device space.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Device space to world space.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.view_to_world * pt
    }

    /// Device-space rectangle to world space.
    ///
    /// The camera has no rotation, so mapping two opposite corners is exact.
    #[must_use]
    pub fn view_to_world_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.view_to_world * rect.origin(),
            self.view_to_world * Point::new(rect.x1, rect.y1),
        )
    }

    fn rebuild_transforms(&mut self) {
        let view_origin = self.view_rect.origin().to_vec2();
        self.world_to_view = Affine::translate(view_origin + self.pan) * Affine::scale(self.zoom);
        self.view_to_world = self.world_to_view.inverse();
    }

    fn clamp_to_bounds(&mut self) {
        if self.clamp_mode == ClampMode::None {
            return;
        }
        let bounds = match self.world_bounds {
            Some(b) if b.width() > 0.0 && b.height() > 0.0 => b,
            _ => return,
        };
        let visible = self.visible_world_rect();
        if visible.width() <= 0.0 || visible.height() <= 0.0 {
            return;
        }

        let dx = if visible.x1 < bounds.x0 {
            bounds.x0 - visible.x1
        } else if visible.x0 > bounds.x1 {
            bounds.x1 - visible.x0
        } else {
            0.0
        };
        let dy = if visible.y1 < bounds.y0 {
            bounds.y0 - visible.y1
        } else if visible.y0 > bounds.y1 {
            bounds.y1 - visible.y0
        } else {
            0.0
        };

        if dx != 0.0 || dy != 0.0 {
            // Moving the visible rect by +d in world space means moving the
            // content by -d * zoom on screen.
            self.pan += Vec2::new(-dx * self.zoom, -dy * self.zoom);
            self.rebuild_transforms();
        }
    }
}
