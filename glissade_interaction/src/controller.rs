// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use glissade_transform::{ScaleBounds, ViewTransform};
use kurbo::{Size, Vec2};

/// The canonical owner of the viewport mapping, as seen by delegates.
///
/// Delegates only ever read the current state and write whole replacement
/// [`ViewTransform`] values; they never mutate individual fields. The
/// transform a controller hands out must always have a scale inside
/// [`ViewportController::scale_bounds`].
pub trait ViewportController {
    /// Returns the current transform.
    fn transform(&self) -> ViewTransform;

    /// Replaces the transform with a new value in one atomic assignment.
    fn set_transform(&mut self, transform: ViewTransform);

    /// Returns the viewport size in device pixels.
    fn viewport_size(&self) -> Size;

    /// Returns the allowed zoom range.
    fn scale_bounds(&self) -> ScaleBounds;

    /// Returns the current uniform scale factor.
    fn current_scale(&self) -> f64 {
        self.transform().scale()
    }
}

/// Shared, single-threaded handle to a controller.
///
/// Delegates borrow the controller; they do not own it. The `Rc`/`RefCell`
/// pairing reflects the cooperative scheduling model: gesture dispatch and
/// frame callbacks interleave on one logical thread, so a borrow is never
/// contended.
pub type SharedController = Rc<RefCell<dyn ViewportController>>;

/// A straightforward [`ViewportController`] for hosts and tests.
///
/// Holds the transform, viewport size, and scale bounds directly. Hosts with
/// their own document/state layer can implement [`ViewportController`] on
/// that layer instead.
#[derive(Clone, Debug)]
pub struct CanvasController {
    transform: ViewTransform,
    viewport_size: Size,
    bounds: ScaleBounds,
}

impl CanvasController {
    /// Creates a controller at the identity translation, with the initial
    /// scale clamped into `bounds`.
    #[must_use]
    pub fn new(viewport_size: Size, bounds: ScaleBounds) -> Self {
        Self {
            transform: ViewTransform::new(bounds.clamp(1.0), Vec2::ZERO),
            viewport_size,
            bounds,
        }
    }

    /// Updates the viewport size (for example after a window resize).
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport_size = size;
    }

    /// Replaces the scale bounds, re-clamping the current scale if the new
    /// range no longer contains it. Re-clamping preserves the visible
    /// document origin.
    pub fn set_scale_bounds(&mut self, bounds: ScaleBounds) {
        self.bounds = bounds;
        let clamped = bounds.clamp(self.transform.scale());
        if clamped != self.transform.scale() {
            let origin = self.transform.document_origin();
            self.transform = ViewTransform::from_document_origin(origin, clamped);
        }
    }
}

impl ViewportController for CanvasController {
    fn transform(&self) -> ViewTransform {
        self.transform
    }

    fn set_transform(&mut self, transform: ViewTransform) {
        self.transform = transform;
    }

    fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    fn scale_bounds(&self) -> ScaleBounds {
        self.bounds
    }
}
