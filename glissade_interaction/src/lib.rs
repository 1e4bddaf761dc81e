// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=glissade_interaction --heading-base-level=0

//! Glissade Interaction: pan/zoom gesture strategies for viewport surfaces.
//!
//! This crate turns discrete pan/zoom gestures into continuously updated
//! [`ViewTransform`](glissade_transform::ViewTransform) values. Three
//! interchangeable strategies share the focal-point-preserving zoom math
//! from `glissade_transform`:
//!
//! - [`InstantDelegate`]: applies each gesture in a single write, no
//!   animation.
//! - [`PhysicsDelegate`]: gives gestures inertial "coasting" via an
//!   exponential friction-decay simulation.
//! - [`SmoothDelegate`]: eases toward an accumulated target over a
//!   configured duration and curve.
//!
//! ## Model
//!
//! Everything is headless and host-driven, like the rest of Glissade. The
//! host owns the render loop and:
//! - Keeps the canonical transform in a [`ViewportController`] (the provided
//!   [`CanvasController`] or its own implementation).
//! - Owns a [`FrameClock`] and calls [`FrameClock::run_frame`] once per
//!   rendered frame with a monotonically increasing timestamp.
//! - Forwards gestures to the active [`InteractionDelegate`].
//!
//! Pan and zoom are mutually exclusive *channels*: starting a gesture on one
//! channel cancels any in-flight response on the other. All scheduling is
//! single-threaded and cooperative (`Rc`/`RefCell`); gesture calls and frame
//! callbacks interleave on the same logical thread, so no locking is
//! involved anywhere.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use glissade_interaction::{
//!     CanvasController, FrameClock, InteractionBehavior, InteractionDelegate,
//!     ViewportController,
//! };
//! use glissade_transform::ScaleBounds;
//! use kurbo::{Point, Size, Vec2};
//!
//! let controller = Rc::new(RefCell::new(CanvasController::new(
//!     Size::new(800.0, 600.0),
//!     ScaleBounds::new(1.0, 5.0),
//! )));
//! let clock = FrameClock::new();
//!
//! let mut delegate = InteractionBehavior::Instant.create_delegate();
//! delegate.init(controller.clone(), &clock);
//!
//! delegate.zoom(Point::new(400.0, 300.0), 2.0);
//! delegate.pan(Vec2::new(-10.0, 0.0));
//!
//! // Animated strategies would need frames; the instant one is already done.
//! clock.run_frame(0.0);
//! assert_eq!(controller.borrow().current_scale(), 2.0);
//! ```
//!
//! ## Choosing a strategy
//!
//! Hosts describe the desired strategy as data with [`InteractionBehavior`],
//! which is cheap to compare and hash. Recreate the delegate only when the
//! behavior value actually changes:
//!
//! ```rust
//! use glissade_interaction::{InteractionBehavior, PhysicsConfig};
//!
//! let previous = InteractionBehavior::Physics(PhysicsConfig::default());
//! let next = InteractionBehavior::Physics(PhysicsConfig::default());
//! assert_eq!(previous, next); // keep the existing delegate
//! ```

mod behavior;
mod clock;
mod controller;
mod delegate;
mod easing;
mod friction;
mod instant;
mod physics;
mod smooth;

pub use behavior::{InteractionBehavior, PhysicsConfig, SmoothConfig};
pub use clock::{FrameClock, FrameHandle};
pub use controller::{CanvasController, SharedController, ViewportController};
pub use delegate::InteractionDelegate;
pub use easing::EasingCurve;
pub use friction::{
    DISTANCE_TOLERANCE, FrictionSimulation, REFERENCE_FRAME_RATE, VELOCITY_TOLERANCE,
};
pub use instant::InstantDelegate;
pub use physics::PhysicsDelegate;
pub use smooth::SmoothDelegate;
