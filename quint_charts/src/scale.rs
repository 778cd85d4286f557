// Copyright 2025 the Quintessence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear value-to-coordinate mapping.

/// A linear mapping from a continuous domain to a continuous range.
///
/// The range may be inverted (`r0 > r1`), which is how the y axis is flipped so that larger
/// values draw higher on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// The domain endpoints map exactly onto the range endpoints. A collapsed domain
    /// (`d0 == d1`) maps every value to the middle of the range.
    ///
    /// Any finite domain works, including one whose width exceeds `f64::MAX`.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        // Halving is exact for normal floats and keeps `d1 - d0` from overflowing.
        let denom = 0.5 * d1 - 0.5 * d0;
        if denom == 0.0 {
            return 0.5 * (r0 + r1);
        }
        let t = (0.5 * x - 0.5 * d0) / denom;
        r0 * (1.0 - t) + r1 * t
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}
