// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Frame rate assumed when converting a per-event gesture delta into an
/// initial velocity.
///
/// This is a known approximation: the engine does not measure true
/// inter-event time, it treats each gesture event as one frame's worth of
/// motion at this rate. Hosts that measure real event timestamps can derive
/// their own velocities and seed [`FrictionSimulation`] directly.
pub const REFERENCE_FRAME_RATE: f64 = 60.0;

/// Remaining-displacement threshold below which a simulation counts as done.
pub const DISTANCE_TOLERANCE: f64 = 1e-3;

/// Velocity threshold below which a simulation counts as done.
pub const VELOCITY_TOLERANCE: f64 = 1e-3;

/// One-dimensional decaying-velocity motion under constant friction.
///
/// Velocity decays exponentially toward zero:
///
/// ```text
/// v(t) = v0 * e^(-k*t)
/// x(t) = x0 + v0/k * (1 - e^(-k*t))
/// ```
///
/// so the motion coasts toward the asymptotic limit `x0 + v0/k` and never
/// overshoots. The closed form makes evaluation stable for any elapsed time;
/// there is no accumulated integration error between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrictionSimulation {
    position0: f64,
    velocity0: f64,
    friction: f64,
}

impl FrictionSimulation {
    /// Creates a simulation from an initial position, an initial velocity in
    /// units per second, and a friction coefficient in `1/seconds`.
    ///
    /// Non-positive friction is raised to a tiny positive floor so the
    /// closed forms stay finite.
    #[must_use]
    pub fn new(position: f64, velocity: f64, friction: f64) -> Self {
        Self {
            position0: position,
            velocity0: velocity,
            friction: friction.max(1e-9),
        }
    }

    /// Evaluates the position at `t` seconds after the start.
    #[must_use]
    pub fn position(&self, t: f64) -> f64 {
        self.position0 + self.velocity0 / self.friction * (1.0 - (-self.friction * t).exp())
    }

    /// Evaluates the velocity at `t` seconds after the start.
    #[must_use]
    pub fn velocity(&self, t: f64) -> f64 {
        self.velocity0 * (-self.friction * t).exp()
    }

    /// Returns the asymptotic rest position, `x0 + v0/k`.
    #[must_use]
    pub fn final_position(&self) -> f64 {
        self.position0 + self.velocity0 / self.friction
    }

    /// Returns `true` once both the remaining displacement and the velocity
    /// have fallen under their numeric tolerances.
    #[must_use]
    pub fn is_done(&self, t: f64) -> bool {
        self.velocity(t).abs() < VELOCITY_TOLERANCE
            && (self.final_position() - self.position(t)).abs() < DISTANCE_TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::{DISTANCE_TOLERANCE, FrictionSimulation, VELOCITY_TOLERANCE};

    #[test]
    fn starts_at_the_seed_state() {
        let sim = FrictionSimulation::new(100.0, 240.0, 4.0);
        assert_eq!(sim.position(0.0), 100.0);
        assert_eq!(sim.velocity(0.0), 240.0);
    }

    #[test]
    fn approaches_the_asymptotic_limit() {
        let sim = FrictionSimulation::new(10.0, 120.0, 4.0);
        // x0 + v0/k = 10 + 30
        assert_eq!(sim.final_position(), 40.0);
        assert!(
            (sim.position(10.0) - 40.0).abs() < DISTANCE_TOLERANCE,
            "long elapsed time should be at rest"
        );
    }

    #[test]
    fn velocity_decays_monotonically() {
        let sim = FrictionSimulation::new(0.0, -500.0, 6.0);
        let mut previous = sim.velocity(0.0).abs();
        for step in 1..=60 {
            let v = sim.velocity(f64::from(step) / 30.0).abs();
            assert!(v <= previous, "speed increased at step {step}");
            previous = v;
        }
    }

    #[test]
    fn position_never_overshoots_the_limit() {
        let sim = FrictionSimulation::new(0.0, 300.0, 5.0);
        let limit = sim.final_position();
        for step in 0..=200 {
            let x = sim.position(f64::from(step) / 50.0);
            assert!(x <= limit + 1e-12, "overshoot at step {step}: {x} > {limit}");
        }
    }

    #[test]
    fn done_within_time_proportional_to_velocity_over_friction() {
        let sim = FrictionSimulation::new(0.0, 600.0, 4.0);
        // v(t) < tol at t = ln(v0/tol)/k; give it 2x slack.
        let settle = (sim.velocity(0.0) / VELOCITY_TOLERANCE).ln() / 4.0;
        assert!(!sim.is_done(0.0), "fresh simulation is not done");
        assert!(sim.is_done(2.0 * settle), "should settle within bound");
    }

    #[test]
    fn zero_velocity_is_done_immediately() {
        let sim = FrictionSimulation::new(42.0, 0.0, 4.0);
        assert!(sim.is_done(0.0));
        assert_eq!(sim.final_position(), 42.0);
    }

    #[test]
    fn non_positive_friction_is_guarded() {
        let sim = FrictionSimulation::new(0.0, 10.0, 0.0);
        assert!(sim.position(1.0).is_finite());
        assert!(sim.velocity(1.0).is_finite());
    }
}
