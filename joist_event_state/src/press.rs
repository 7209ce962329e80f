// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press tracking: pair releases with presses and measure the motion between.
//!
//! ## Usage
//!
//! 1) Call [`PointerSequence::press`] on pointer down.
//! 2) Call [`PointerSequence::motion`] on every move; while pressed it yields
//!    the delta since the previous position (used to pan the camera).
//! 3) Call [`PointerSequence::release`] on pointer up. It yields a
//!    [`Release`] only when a press preceded it.

use kurbo::{Point, Vec2};

/// A completed press/release pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Release {
    /// Where the press happened.
    pub start: Point,
    /// Where the release happened.
    pub end: Point,
    /// `end - start`.
    pub offset: Vec2,
}

impl Release {
    /// Whether the pointer stayed within `tolerance` (on each axis) of the
    /// press position, i.e. the gesture reads as a click rather than a drag.
    #[must_use]
    pub fn is_click(&self, tolerance: f64) -> bool {
        self.offset.x.abs() <= tolerance && self.offset.y.abs() <= tolerance
    }
}

/// Pointer state between a press and its release.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSequence {
    start: Option<Point>,
    last: Option<Point>,
}

impl PointerSequence {
    /// Starts a sequence at `pos`. A press during a press restarts it.
    pub fn press(&mut self, pos: Point) {
        self.start = Some(pos);
        self.last = Some(pos);
    }

    /// Records a move to `pos`, returning the delta since the previous
    /// position, or `None` when nothing is pressed.
    pub fn motion(&mut self, pos: Point) -> Option<Vec2> {
        self.start?;
        let delta = self.last.map(|last| pos - last);
        self.last = Some(pos);
        delta
    }

    /// Ends the sequence at `pos`.
    ///
    /// Returns `None` for a release without a matching press.
    pub fn release(&mut self, pos: Point) -> Option<Release> {
        let start = self.start.take()?;
        self.last = None;
        Some(Release {
            start,
            end: pos,
            offset: pos - start,
        })
    }

    /// Drops any in-flight press without producing a [`Release`].
    pub fn cancel(&mut self) {
        self.start = None;
        self.last = None;
    }

    /// `true` between a press and its release.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.start.is_some()
    }

    /// Where the current press began.
    #[must_use]
    pub fn start(&self) -> Option<Point> {
        self.start
    }
}
