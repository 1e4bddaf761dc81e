// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use glissade_transform::zoom_about;
use kurbo::{Point, Vec2};

use crate::behavior::PhysicsConfig;
use crate::friction::{FrictionSimulation, REFERENCE_FRAME_RATE};
use crate::{FrameClock, FrameHandle, InteractionDelegate, SharedController};

// Scale changes below this are not worth a transform write.
pub(crate) const SCALE_EPSILON: f64 = 1e-6;

/// Gives pan and zoom gestures inertial "coasting" behavior.
///
/// Each gesture seeds a closed-form [`FrictionSimulation`] and starts the
/// channel's per-frame ticker. Pan runs two independent simulations (one per
/// axis) over the translation; zoom runs one simulation over the scale and
/// re-applies the focal-point construction every frame, so the zoom stays
/// anchored under the gesture's focal point for the whole decay.
///
/// Initial velocities are synthesized from the per-event delta assuming a
/// [`REFERENCE_FRAME_RATE`] between events; see that constant for the
/// caveat.
pub struct PhysicsDelegate {
    config: PhysicsConfig,
    state: Rc<RefCell<PhysicsState>>,
}

struct PhysicsState {
    controller: Option<SharedController>,
    pan_x: Option<FrictionSimulation>,
    pan_y: Option<FrictionSimulation>,
    zoom_sim: Option<FrictionSimulation>,
    zoom_focal: Point,
    pan_handle: Option<FrameHandle>,
    zoom_handle: Option<FrameHandle>,
    disposed: bool,
}

impl PhysicsState {
    fn halt_pan(&mut self) {
        self.pan_x = None;
        self.pan_y = None;
        if let Some(handle) = &self.pan_handle {
            handle.stop();
        }
    }

    fn halt_zoom(&mut self) {
        self.zoom_sim = None;
        if let Some(handle) = &self.zoom_handle {
            handle.stop();
        }
    }

    fn pan_tick(&mut self, elapsed: f64) {
        let Some(controller) = self.controller.clone() else {
            self.halt_pan();
            return;
        };
        let (Some(sim_x), Some(sim_y)) = (self.pan_x, self.pan_y) else {
            self.halt_pan();
            return;
        };

        let position = Vec2::new(sim_x.position(elapsed), sim_y.position(elapsed));
        {
            let mut controller = controller.borrow_mut();
            let transform = controller.transform();
            controller.set_transform(transform.with_translation(position));
        }
        if sim_x.is_done(elapsed) && sim_y.is_done(elapsed) {
            self.halt_pan();
        }
    }

    fn zoom_tick(&mut self, elapsed: f64) {
        let Some(controller) = self.controller.clone() else {
            self.halt_zoom();
            return;
        };
        let Some(sim) = self.zoom_sim else {
            self.halt_zoom();
            return;
        };

        {
            let mut controller = controller.borrow_mut();
            let transform = controller.transform();
            let new_scale = controller.scale_bounds().clamp(sim.position(elapsed));
            if (new_scale - transform.scale()).abs() > SCALE_EPSILON {
                controller.set_transform(zoom_about(transform, self.zoom_focal, new_scale));
            }
        }
        if sim.is_done(elapsed) {
            self.halt_zoom();
        }
    }
}

impl PhysicsDelegate {
    /// Creates an unbound delegate; call [`InteractionDelegate::init`] before use.
    #[must_use]
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            config,
            state: Rc::new(RefCell::new(PhysicsState {
                controller: None,
                pan_x: None,
                pan_y: None,
                zoom_sim: None,
                zoom_focal: Point::ZERO,
                pan_handle: None,
                zoom_handle: None,
                disposed: false,
            })),
        }
    }
}

impl InteractionDelegate for PhysicsDelegate {
    fn init(&mut self, controller: SharedController, clock: &FrameClock) {
        {
            let state = self.state.borrow();
            if state.disposed || state.controller.is_some() {
                return;
            }
        }

        let weak = Rc::downgrade(&self.state);
        let pan_handle = clock.frame_callback(move |elapsed| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().pan_tick(elapsed);
            }
        });
        let weak = Rc::downgrade(&self.state);
        let zoom_handle = clock.frame_callback(move |elapsed| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().zoom_tick(elapsed);
            }
        });

        let mut state = self.state.borrow_mut();
        state.controller = Some(controller);
        state.pan_handle = Some(pan_handle);
        state.zoom_handle = Some(zoom_handle);
    }

    fn pan(&mut self, delta: Vec2) {
        let mut state = self.state.borrow_mut();
        if state.disposed {
            return;
        }
        let Some(controller) = state.controller.clone() else {
            return;
        };
        state.halt_zoom();

        let transform = controller.borrow().transform();
        let velocity = delta * transform.scale() * REFERENCE_FRAME_RATE;
        let translation = transform.translation();
        state.pan_x = Some(FrictionSimulation::new(
            translation.x,
            velocity.x,
            self.config.pan_friction,
        ));
        state.pan_y = Some(FrictionSimulation::new(
            translation.y,
            velocity.y,
            self.config.pan_friction,
        ));
        if let Some(handle) = &state.pan_handle {
            handle.start();
        }
    }

    fn zoom(&mut self, focal: Point, scale_delta: f64) {
        let mut state = self.state.borrow_mut();
        if state.disposed {
            return;
        }
        let Some(controller) = state.controller.clone() else {
            return;
        };
        state.halt_pan();

        let (transform, bounds) = {
            let controller = controller.borrow();
            (controller.transform(), controller.scale_bounds())
        };
        let current = transform.scale();
        let target = bounds.clamp(current * scale_delta);
        state.zoom_sim = Some(FrictionSimulation::new(
            current,
            (target - current) * REFERENCE_FRAME_RATE,
            self.config.zoom_friction,
        ));
        state.zoom_focal = focal;
        if let Some(handle) = &state.zoom_handle {
            handle.start();
        }
    }

    fn stop(&mut self) {
        let mut state = self.state.borrow_mut();
        if state.disposed {
            return;
        }
        state.halt_pan();
        state.halt_zoom();
    }

    fn dispose(&mut self) {
        let mut state = self.state.borrow_mut();
        state.halt_pan();
        state.halt_zoom();
        // Dropping the handles unregisters the frame callbacks.
        state.pan_handle = None;
        state.zoom_handle = None;
        state.controller = None;
        state.disposed = true;
    }
}

impl std::fmt::Debug for PhysicsDelegate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("PhysicsDelegate")
            .field("config", &self.config)
            .field("bound", &state.controller.is_some())
            .field("panning", &state.pan_x.is_some())
            .field("zooming", &state.zoom_sim.is_some())
            .field("disposed", &state.disposed)
            .finish()
    }
}
