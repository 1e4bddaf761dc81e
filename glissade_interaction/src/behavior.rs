// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::hash::{Hash, Hasher};

use crate::InteractionDelegate;
use crate::easing::EasingCurve;
use crate::instant::InstantDelegate;
use crate::physics::PhysicsDelegate;
use crate::smooth::SmoothDelegate;

/// Configuration for [`crate::PhysicsDelegate`].
///
/// Friction coefficients are in `1/seconds`; a gesture's coast distance is
/// `velocity / friction`, so smaller values coast further.
///
/// Equality and hashing compare the float fields bitwise, which is exact for
/// the intended use: detecting whether a host's desired configuration
/// changed between frames.
#[derive(Clone, Copy, Debug)]
pub struct PhysicsConfig {
    /// Decay coefficient for the pan channel.
    pub pan_friction: f64,
    /// Decay coefficient for the zoom channel.
    ///
    /// The default equals the reference frame rate, which makes the decay's
    /// asymptotic scale land exactly on the proposed target scale.
    pub zoom_friction: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            pan_friction: 15.0,
            zoom_friction: 60.0,
        }
    }
}

impl PartialEq for PhysicsConfig {
    fn eq(&self, other: &Self) -> bool {
        self.pan_friction.to_bits() == other.pan_friction.to_bits()
            && self.zoom_friction.to_bits() == other.zoom_friction.to_bits()
    }
}

impl Eq for PhysicsConfig {}

impl Hash for PhysicsConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pan_friction.to_bits().hash(state);
        self.zoom_friction.to_bits().hash(state);
    }
}

/// Configuration for [`crate::SmoothDelegate`].
///
/// Durations are in seconds. Equality and hashing compare the float fields
/// bitwise, like [`PhysicsConfig`].
#[derive(Clone, Copy, Debug)]
pub struct SmoothConfig {
    /// Duration of one pan animation.
    pub pan_duration: f64,
    /// Curve shaping pan progress.
    pub pan_curve: EasingCurve,
    /// Duration of one zoom animation.
    pub zoom_duration: f64,
    /// Curve shaping zoom progress.
    pub zoom_curve: EasingCurve,
    /// Amplification applied to pan deltas before they extend the target.
    pub pan_multiplier: f64,
}

impl Default for SmoothConfig {
    fn default() -> Self {
        Self {
            pan_duration: 0.25,
            pan_curve: EasingCurve::EaseOutCubic,
            zoom_duration: 0.2,
            zoom_curve: EasingCurve::EaseOutCubic,
            pan_multiplier: 1.0,
        }
    }
}

impl PartialEq for SmoothConfig {
    fn eq(&self, other: &Self) -> bool {
        self.pan_duration.to_bits() == other.pan_duration.to_bits()
            && self.pan_curve == other.pan_curve
            && self.zoom_duration.to_bits() == other.zoom_duration.to_bits()
            && self.zoom_curve == other.zoom_curve
            && self.pan_multiplier.to_bits() == other.pan_multiplier.to_bits()
    }
}

impl Eq for SmoothConfig {}

impl Hash for SmoothConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pan_duration.to_bits().hash(state);
        self.pan_curve.hash(state);
        self.zoom_duration.to_bits().hash(state);
        self.zoom_curve.hash(state);
        self.pan_multiplier.to_bits().hash(state);
    }
}

/// The desired interaction strategy, as plain data.
///
/// Hosts keep one of these in their configuration and compare it across
/// updates; delegates are recreated only when the value changes. The
/// variants carry their configuration, so two behaviors of the same kind
/// with different settings compare unequal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionBehavior {
    /// Apply gestures immediately, one write each.
    #[default]
    Instant,
    /// Friction-decay coasting.
    Physics(PhysicsConfig),
    /// Eased interpolation toward accumulated targets.
    Smooth(SmoothConfig),
}

impl InteractionBehavior {
    /// Constructs a fresh, unbound delegate implementing this behavior.
    #[must_use]
    pub fn create_delegate(&self) -> Box<dyn InteractionDelegate> {
        match self {
            Self::Instant => Box::new(InstantDelegate::new()),
            Self::Physics(config) => Box::new(PhysicsDelegate::new(*config)),
            Self::Smooth(config) => Box::new(SmoothDelegate::new(*config)),
        }
    }
}
