// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Maps a viewer-space point into scene space.
///
/// The scene's y axis points up and its origin sits at the bottom of the
/// drawing surface: `scene = (x, scene_height - y)`.
#[inline]
#[must_use]
pub fn to_scene(viewer: Point, scene_height: f64) -> Point {
    Point::new(viewer.x, -viewer.y + scene_height)
}

/// The drawing surface of a floor plan.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneFrame {
    /// Surface width in scene units.
    pub width: f64,
    /// Surface height in scene units.
    pub height: f64,
}

impl SceneFrame {
    /// Creates a frame for a `width` x `height` surface.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Viewer space to scene space.
    #[inline]
    #[must_use]
    pub fn to_scene(&self, viewer: Point) -> Point {
        to_scene(viewer, self.height)
    }

    /// Scene space to viewer space.
    ///
    /// The flip is its own inverse, so this is the same mapping as
    /// [`SceneFrame::to_scene`].
    #[inline]
    #[must_use]
    pub fn to_viewer(&self, scene: Point) -> Point {
        to_scene(scene, self.height)
    }

    /// The surface rectangle in viewer space.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{SceneFrame, to_scene};

    #[test]
    fn flips_against_scene_height() {
        assert_eq!(to_scene(Point::new(10.0, 5.0), 100.0), Point::new(10.0, 95.0));
        assert_eq!(to_scene(Point::new(0.0, 0.0), 100.0), Point::new(0.0, 100.0));
        assert_eq!(to_scene(Point::new(3.0, 100.0), 100.0), Point::new(3.0, 0.0));
    }

    #[test]
    fn flip_is_an_involution() {
        let frame = SceneFrame::new(640.0, 480.0);
        for pt in [
            Point::new(0.0, 0.0),
            Point::new(12.5, -3.0),
            Point::new(640.0, 480.0),
            Point::new(-7.0, 1e6),
        ] {
            let scene = frame.to_scene(pt);
            assert_eq!(scene.x, pt.x);
            assert_eq!(scene.y, frame.height - pt.y);
            assert_eq!(frame.to_viewer(scene), pt);
        }
    }

    #[test]
    fn bounds_cover_the_surface() {
        let frame = SceneFrame::new(300.0, 200.0);
        assert_eq!(frame.bounds(), Rect::new(0.0, 0.0, 300.0, 200.0));
    }
}
