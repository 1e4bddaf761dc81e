// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Monotonic curve from normalized time `[0, 1]` to normalized progress
/// `[0, 1]`, shaping an otherwise linear interpolation.
///
/// Input outside `[0, 1]` is clamped before evaluation, so every curve is
/// total and satisfies `transform(0) == 0` and `transform(1) == 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EasingCurve {
    /// Constant-rate progress.
    Linear,
    /// Quadratic acceleration from rest.
    EaseInQuad,
    /// Quadratic deceleration to rest.
    EaseOutQuad,
    /// Cubic deceleration to rest; the usual choice for gesture follow-up
    /// motion because it starts fast and settles gently.
    #[default]
    EaseOutCubic,
    /// Cubic acceleration then deceleration.
    EaseInOutCubic,
}

impl EasingCurve {
    /// Evaluates the curve at normalized time `t`.
    #[must_use]
    pub fn transform(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInQuad => t * t,
            Self::EaseOutQuad => t * (2.0 - t),
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}
