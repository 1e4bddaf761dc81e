// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Uniform pan+zoom mapping from document space onto a viewport.
///
/// A `ViewTransform` is the value `view = document * scale + translation`
/// applied per axis. It is a plain value type: interaction strategies read
/// the current value from their controller and write whole replacement
/// values back, never mutating individual fields in place.
///
/// The scale is expected to be strictly positive; callers clamp proposed
/// scales through [`crate::ScaleBounds`] before constructing a transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    scale: f64,
    translation: Vec2,
}

impl ViewTransform {
    /// The identity mapping: scale `1.0`, zero translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    /// Creates a transform from a uniform scale and a translation in
    /// viewport (scaled) units.
    #[must_use]
    pub fn new(scale: f64, translation: Vec2) -> Self {
        debug_assert!(scale > 0.0, "scale must be strictly positive");
        Self { scale, translation }
    }

    /// Creates the transform that places the given document-space point at
    /// the viewport's top-left corner under the given scale.
    ///
    /// This is the construction step of the focal-point zoom math: given a
    /// desired visible origin `P` and scale `s`, the translation is `-P * s`.
    #[must_use]
    pub fn from_document_origin(origin: Point, scale: f64) -> Self {
        Self::new(scale, -origin.to_vec2() * scale)
    }

    /// Returns the uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the translation in viewport (scaled) units.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Returns the equivalent affine matrix (translate ∘ scale).
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale(self.scale)
    }

    /// Returns the document-space point currently visible at the viewport's
    /// top-left corner.
    #[must_use]
    pub fn document_origin(&self) -> Point {
        Point::new(
            -self.translation.x / self.scale,
            -self.translation.y / self.scale,
        )
    }

    /// Projects a document-space point into viewport coordinates.
    #[must_use]
    pub fn doc_to_view(&self, pt: Point) -> Point {
        (pt.to_vec2() * self.scale + self.translation).to_point()
    }

    /// Maps a viewport-space point back into document coordinates.
    #[must_use]
    pub fn view_to_doc(&self, pt: Point) -> Point {
        ((pt.to_vec2() - self.translation) / self.scale).to_point()
    }

    /// Returns this transform with its translation replaced.
    #[must_use]
    pub fn with_translation(&self, translation: Vec2) -> Self {
        Self {
            scale: self.scale,
            translation,
        }
    }

    /// Returns this transform translated by a delta in viewport units.
    #[must_use]
    pub fn translated_by(&self, delta: Vec2) -> Self {
        self.with_translation(self.translation + delta)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::ViewTransform;

    #[test]
    fn identity_maps_points_to_themselves() {
        let t = ViewTransform::IDENTITY;
        let p = Point::new(12.5, -3.0);
        assert_eq!(t.doc_to_view(p), p);
        assert_eq!(t.view_to_doc(p), p);
    }

    #[test]
    fn doc_view_roundtrip() {
        let t = ViewTransform::new(2.5, Vec2::new(-40.0, 17.0));
        let doc = Point::new(100.0, 200.0);
        let view = t.doc_to_view(doc);
        let back = t.view_to_doc(view);
        assert!((back.x - doc.x).abs() < 1e-9, "x should round-trip");
        assert!((back.y - doc.y).abs() < 1e-9, "y should round-trip");
    }

    #[test]
    fn document_origin_inverts_from_document_origin() {
        let origin = Point::new(30.0, -12.0);
        let t = ViewTransform::from_document_origin(origin, 3.0);
        let got = t.document_origin();
        assert!((got.x - origin.x).abs() < 1e-9, "origin x should survive");
        assert!((got.y - origin.y).abs() < 1e-9, "origin y should survive");
        // The origin projects to the viewport's top-left corner.
        let tl = t.doc_to_view(origin);
        assert!(tl.x.abs() < 1e-9 && tl.y.abs() < 1e-9, "origin maps to (0,0)");
    }

    #[test]
    fn to_affine_matches_manual_projection() {
        let t = ViewTransform::new(1.75, Vec2::new(5.0, -9.0));
        let p = Point::new(8.0, 4.0);
        let via_affine = t.to_affine() * p;
        let direct = t.doc_to_view(p);
        assert!((via_affine.x - direct.x).abs() < 1e-12, "affine x agrees");
        assert!((via_affine.y - direct.y).abs() < 1e-12, "affine y agrees");
    }

    #[test]
    fn translated_by_accumulates() {
        let t = ViewTransform::new(1.0, Vec2::new(10.0, 10.0));
        let t2 = t.translated_by(Vec2::new(-4.0, 6.0));
        assert_eq!(t2.translation(), Vec2::new(6.0, 16.0));
        assert_eq!(t2.scale(), 1.0);
    }
}
