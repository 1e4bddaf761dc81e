// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glissade_transform::zoom_about;
use kurbo::{Point, Vec2};

use crate::{FrameClock, InteractionDelegate, SharedController};

/// Applies each gesture to the controller in a single write.
///
/// No temporal state, no frame-clock subscription. [`InteractionDelegate::stop`]
/// is a no-op because nothing is ever in flight.
#[derive(Default)]
pub struct InstantDelegate {
    controller: Option<SharedController>,
    disposed: bool,
}

impl InstantDelegate {
    /// Creates an unbound delegate; call [`InteractionDelegate::init`] before use.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl InteractionDelegate for InstantDelegate {
    fn init(&mut self, controller: SharedController, _clock: &FrameClock) {
        if self.disposed || self.controller.is_some() {
            return;
        }
        self.controller = Some(controller);
    }

    fn pan(&mut self, delta: Vec2) {
        let Some(controller) = &self.controller else {
            return;
        };
        let mut controller = controller.borrow_mut();
        let transform = controller.transform();
        controller.set_transform(transform.translated_by(delta * transform.scale()));
    }

    fn zoom(&mut self, focal: Point, scale_delta: f64) {
        let Some(controller) = &self.controller else {
            return;
        };
        let mut controller = controller.borrow_mut();
        let transform = controller.transform();
        let new_scale = controller.scale_bounds().clamp(transform.scale() * scale_delta);
        if (new_scale - transform.scale()).abs() < f64::EPSILON {
            return;
        }
        controller.set_transform(zoom_about(transform, focal, new_scale));
    }

    fn stop(&mut self) {}

    fn dispose(&mut self) {
        self.controller = None;
        self.disposed = true;
    }
}

impl std::fmt::Debug for InstantDelegate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstantDelegate")
            .field("bound", &self.controller.is_some())
            .field("disposed", &self.disposed)
            .finish()
    }
}
