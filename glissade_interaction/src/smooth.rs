// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use glissade_transform::zoom_about;
use kurbo::{Point, Vec2};

use crate::behavior::SmoothConfig;
use crate::physics::SCALE_EPSILON;
use crate::{FrameClock, FrameHandle, InteractionDelegate, SharedController};

#[derive(Clone, Copy)]
struct PanAnimation {
    start: Vec2,
    target: Vec2,
}

#[derive(Clone, Copy)]
struct ZoomAnimation {
    start: f64,
    target: f64,
    focal: Point,
}

/// Eases each gesture toward an accumulated target over a configured
/// duration and curve.
///
/// Re-targeting semantics: a gesture that arrives while its channel is
/// already animating accumulates on the in-flight *target*, not on the
/// current (visually lagging) value, and restarts the animation clock from
/// zero. Rapid repeated gestures therefore compose into one continuously
/// extended motion instead of restarting from behind.
pub struct SmoothDelegate {
    config: SmoothConfig,
    state: Rc<RefCell<SmoothState>>,
}

struct SmoothState {
    controller: Option<SharedController>,
    pan: Option<PanAnimation>,
    zoom: Option<ZoomAnimation>,
    pan_handle: Option<FrameHandle>,
    zoom_handle: Option<FrameHandle>,
    disposed: bool,
}

fn fraction_of(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        1.0
    } else {
        (elapsed / duration).min(1.0)
    }
}

impl SmoothState {
    fn halt_pan(&mut self) {
        self.pan = None;
        if let Some(handle) = &self.pan_handle {
            handle.stop();
        }
    }

    fn halt_zoom(&mut self) {
        self.zoom = None;
        if let Some(handle) = &self.zoom_handle {
            handle.stop();
        }
    }

    fn pan_tick(&mut self, config: &SmoothConfig, elapsed: f64) {
        let Some(controller) = self.controller.clone() else {
            self.halt_pan();
            return;
        };
        let Some(animation) = self.pan else {
            self.halt_pan();
            return;
        };

        let fraction = fraction_of(elapsed, config.pan_duration);
        let eased = config.pan_curve.transform(fraction);
        let position = animation.start + (animation.target - animation.start) * eased;
        {
            let mut controller = controller.borrow_mut();
            let transform = controller.transform();
            controller.set_transform(transform.with_translation(position));
        }
        if fraction >= 1.0 {
            self.halt_pan();
        }
    }

    fn zoom_tick(&mut self, config: &SmoothConfig, elapsed: f64) {
        let Some(controller) = self.controller.clone() else {
            self.halt_zoom();
            return;
        };
        let Some(animation) = self.zoom else {
            self.halt_zoom();
            return;
        };

        let fraction = fraction_of(elapsed, config.zoom_duration);
        let eased = config.zoom_curve.transform(fraction);
        let new_scale = animation.start + (animation.target - animation.start) * eased;
        {
            let mut controller = controller.borrow_mut();
            let transform = controller.transform();
            if (new_scale - transform.scale()).abs() > SCALE_EPSILON {
                controller.set_transform(zoom_about(transform, animation.focal, new_scale));
            }
        }
        if fraction >= 1.0 {
            self.halt_zoom();
        }
    }
}

impl SmoothDelegate {
    /// Creates an unbound delegate; call [`InteractionDelegate::init`] before use.
    #[must_use]
    pub fn new(config: SmoothConfig) -> Self {
        Self {
            config,
            state: Rc::new(RefCell::new(SmoothState {
                controller: None,
                pan: None,
                zoom: None,
                pan_handle: None,
                zoom_handle: None,
                disposed: false,
            })),
        }
    }
}

impl InteractionDelegate for SmoothDelegate {
    fn init(&mut self, controller: SharedController, clock: &FrameClock) {
        {
            let state = self.state.borrow();
            if state.disposed || state.controller.is_some() {
                return;
            }
        }

        let weak = Rc::downgrade(&self.state);
        let config = self.config;
        let pan_handle = clock.frame_callback(move |elapsed| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().pan_tick(&config, elapsed);
            }
        });
        let weak = Rc::downgrade(&self.state);
        let config = self.config;
        let zoom_handle = clock.frame_callback(move |elapsed| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().zoom_tick(&config, elapsed);
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
        let scaled = delta * transform.scale() * self.config.pan_multiplier;
        // Accumulate on the in-flight target so rapid gestures compose.
        let base = state
            .pan
            .map_or(transform.translation(), |animation| animation.target);
        state.pan = Some(PanAnimation {
            start: transform.translation(),
            target: base + scaled,
        });
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
        let base = state.zoom.map_or(current, |animation| animation.target);
        state.zoom = Some(ZoomAnimation {
            start: current,
            target: bounds.clamp(base * scale_delta),
            focal,
        });
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
        state.pan_handle = None;
        state.zoom_handle = None;
        state.controller = None;
        state.disposed = true;
    }
}

impl std::fmt::Debug for SmoothDelegate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("SmoothDelegate")
            .field("config", &self.config)
            .field("bound", &state.controller.is_some())
            .field("panning", &state.pan.is_some())
            .field("zooming", &state.zoom.is_some())
            .field("disposed", &state.disposed)
            .finish()
    }
}
