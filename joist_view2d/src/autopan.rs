// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

/// Edge-triggered camera panning for sustained gestures.
///
/// While a line is being drawn or an element dragged, holding the pointer
/// within `margin` pixels of a viewer edge pans the camera by `step` pixels
/// per pointer event so the gesture can continue past the visible area.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Autopan {
    /// Width of the sensitive band along each edge, in device pixels.
    pub margin: f64,
    /// Pan distance per triggering event, in device pixels.
    pub step: f64,
}

impl Default for Autopan {
    fn default() -> Self {
        Self {
            margin: 20.0,
            step: 20.0,
        }
    }
}

impl Autopan {
    /// Pan delta (in device space) for a pointer at `pointer` inside `view`.
    ///
    /// Returns [`Vec2::ZERO`] when the pointer is away from every edge or
    /// outside the view altogether. Near the left edge the content moves right
    /// (positive x) to reveal what lies beyond the edge; the other edges
    /// behave symmetrically. Corners pan on both axes.
    #[must_use]
    pub fn delta_for(&self, view: Rect, pointer: Point) -> Vec2 {
        if self.margin <= 0.0 || !view.contains(pointer) {
            return Vec2::ZERO;
        }
        let dx = if pointer.x - view.x0 < self.margin {
            self.step
        } else if view.x1 - pointer.x < self.margin {
            -self.step
        } else {
            0.0
        };
        let dy = if pointer.y - view.y0 < self.margin {
            self.step
        } else if view.y1 - pointer.y < self.margin {
            -self.step
        } else {
            0.0
        };
        Vec2::new(dx, dy)
    }
}
