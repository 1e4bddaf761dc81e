// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::ViewTransform;

/// Builds the transform that applies `new_scale` while keeping the document
/// point under `focal` fixed in viewport space.
///
/// `focal` is given in viewport coordinates. The construction:
/// 1. Take the document-space origin `P0` currently visible at the
///    viewport's top-left.
/// 2. Take the document-space point `D` currently under the focal point.
/// 3. Move the origin toward `D` by the fraction `1 - s0/s1`:
///    `P1 = P0 + (D - P0) * (1 - s0/s1)`.
/// 4. Rebuild the transform from `P1` and `s1`.
///
/// Afterward `D` projects exactly back onto `focal` (this cancels
/// algebraically, so the invariance holds to floating-point precision, not
/// just approximately).
///
/// Every temporal strategy calls this same function once per frame with
/// whatever scale it currently prescribes, passing the *current* transform
/// as `current`, so the focal point tracks correctly mid-animation.
///
/// Callers are responsible for clamping `new_scale` through
/// [`crate::ScaleBounds`] first; a non-positive `new_scale` leaves the
/// transform unchanged.
#[must_use]
pub fn zoom_about(current: ViewTransform, focal: Point, new_scale: f64) -> ViewTransform {
    if !new_scale.is_finite() || new_scale <= 0.0 {
        return current;
    }
    let s0 = current.scale();
    let s1 = new_scale;
    let p0 = current.document_origin();
    let d = current.view_to_doc(focal);
    let p1 = p0 + (d - p0) * (1.0 - s0 / s1);
    ViewTransform::from_document_origin(p1, s1)
}
