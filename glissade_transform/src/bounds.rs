// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A normalized, strictly positive zoom range.
///
/// Every scale written into a [`crate::ViewTransform`] by an interaction
/// strategy passes through [`ScaleBounds::clamp`] first. Keeping both ends
/// strictly positive means the divisions in coordinate conversion and in the
/// focal-point zoom math can never hit zero or produce NaN.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBounds {
    min: f64,
    max: f64,
}

impl ScaleBounds {
    /// The default range, `[1e-3, 1e3]`.
    pub const DEFAULT: Self = Self {
        min: 1e-3,
        max: 1e3,
    };

    /// Creates a bounds pair, normalizing so that `min <= max` and raising
    /// non-positive ends to the smallest positive value.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let min = min.max(f64::MIN_POSITIVE);
        let max = max.max(min);
        Self { min, max }
    }

    /// Returns the minimum allowed scale.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the maximum allowed scale.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps a proposed scale into this range.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }

    /// Returns `true` if the given scale lies within the range.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.min && scale <= self.max
    }
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}
