// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point};

/// Camera value of the 2D viewer.
///
/// The six coefficients follow the SVG matrix convention:
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
///
/// The viewer only produces uniform scale plus translation, so `a == d` and
/// `b == c == 0` for values it emits. `a` is the zoom scale reported to the
/// host through `update_zoom_scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewTransform {
    /// Horizontal scale.
    pub a: f64,
    /// Vertical shear.
    pub b: f64,
    /// Horizontal shear.
    pub c: f64,
    /// Vertical scale.
    pub d: f64,
    /// Horizontal translation in device pixels.
    pub e: f64,
    /// Vertical translation in device pixels.
    pub f: f64,
}

impl ViewTransform {
    /// The identity camera: zoom `1.0`, no translation.
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Uniform scale plus translation.
    #[must_use]
    pub const fn scale_translate(scale: f64, e: f64, f: f64) -> Self {
        Self {
            a: scale,
            b: 0.0,
            c: 0.0,
            d: scale,
            e,
            f,
        }
    }

    /// The zoom scale of this camera.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.a
    }

    /// The translation part as a point in device space.
    #[must_use]
    pub fn translation(&self) -> Point {
        Point::new(self.e, self.f)
    }

    /// Maps a viewer-space point into device space.
    #[must_use]
    pub fn apply(&self, pt: Point) -> Point {
        self.to_affine() * pt
    }

    /// The equivalent Kurbo transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::new([self.a, self.b, self.c, self.d, self.e, self.f])
    }

    /// Builds a camera value from a Kurbo transform.
    #[must_use]
    pub fn from_affine(affine: Affine) -> Self {
        let [a, b, c, d, e, f] = affine.as_coeffs();
        Self { a, b, c, d, e, f }
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Affine> for ViewTransform {
    fn from(affine: Affine) -> Self {
        Self::from_affine(affine)
    }
}

impl From<ViewTransform> for Affine {
    fn from(value: ViewTransform) -> Self {
        value.to_affine()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Vec2};

    use super::ViewTransform;

    #[test]
    fn affine_coefficients_keep_svg_order() {
        let t = ViewTransform::scale_translate(2.0, 10.0, -4.0);
        let affine = t.to_affine();
        assert_eq!(affine.as_coeffs(), [2.0, 0.0, 0.0, 2.0, 10.0, -4.0]);
        assert_eq!(ViewTransform::from(affine), t);
    }

    #[test]
    fn apply_scales_then_translates() {
        let t = ViewTransform::scale_translate(3.0, 5.0, 7.0);
        assert_eq!(t.apply(Point::new(1.0, 2.0)), Point::new(8.0, 13.0));
        assert_eq!(t.scale(), 3.0);
        assert_eq!(t.translation(), Point::new(5.0, 7.0));
    }

    #[test]
    fn from_kurbo_translate() {
        let t = ViewTransform::from_affine(Affine::translate(Vec2::new(3.0, 4.0)));
        assert_eq!(t, ViewTransform::scale_translate(1.0, 3.0, 4.0));
        assert_eq!(ViewTransform::default(), ViewTransform::IDENTITY);
    }
}
