// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::{FrameClock, SharedController};

/// A pan/zoom gesture strategy bound to a controller and a frame clock.
///
/// Implementations differ only in *when* the transform reaches its target:
/// instantly, along a friction-decay simulation, or along an eased
/// interpolation. All of them preserve the focal point with the same
/// [`glissade_transform::zoom_about`] construction and keep the scale inside
/// the controller's bounds.
///
/// ## Calling contract
///
/// Operations are safe in any order. [`InteractionDelegate::init`] binds the
/// delegate exactly once; gesture calls before `init` or after
/// [`InteractionDelegate::dispose`] are silent no-ops rather than errors,
/// because gesture dispatch and disposal legitimately interleave across
/// frames in a host.
///
/// Pan and zoom are mutually exclusive channels: starting a gesture on one
/// cancels any in-flight response on the other.
pub trait InteractionDelegate {
    /// Binds the delegate to a live controller and a frame-callback source.
    ///
    /// Callable once per instance; later calls (or calls on a disposed
    /// delegate) are ignored.
    fn init(&mut self, controller: SharedController, clock: &FrameClock);

    /// Begins or extends a translation response.
    ///
    /// `delta` is in document units and is scaled by the current zoom
    /// internally. Cancels any in-flight zoom response.
    fn pan(&mut self, delta: Vec2);

    /// Begins or extends a scale response about `focal` (viewport
    /// coordinates), with `scale_delta` as a multiplicative factor.
    ///
    /// The document point under `focal` stays fixed in viewport space for
    /// the whole response. Cancels any in-flight pan response.
    fn zoom(&mut self, focal: Point, scale_delta: f64);

    /// Halts all scheduled updates and discards temporal state, leaving the
    /// transform at its last written value. Idempotent.
    fn stop(&mut self);

    /// [`InteractionDelegate::stop`] plus release of the frame-clock
    /// subscriptions and the controller binding. The delegate is unusable
    /// afterward; every later call is a no-op. Idempotent.
    fn dispose(&mut self);
}
