// Copyright 2025 the Quintessence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input validation errors.

use thiserror::Error;

/// Errors returned when a series or viewport cannot produce meaningful geometry.
///
/// All geometry functions validate before computing anything, so an error always means no
/// partial output was produced.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidInput {
    /// The series has no points.
    #[error("series is empty")]
    EmptySeries,
    /// A value is `NaN` or infinite.
    #[error("value at index {index} is not finite")]
    NonFinite {
        /// Position of the offending point.
        index: usize,
    },
    /// A pie (or bar) value is below zero.
    #[error("value {value} at index {index} is negative")]
    Negative {
        /// Position of the offending point.
        index: usize,
        /// The rejected value.
        value: f64,
    },
    /// Every pie value is zero, so no proportion can be drawn.
    #[error("pie values sum to zero")]
    ZeroTotal,
    /// The viewport margins leave a negative-size (or non-finite) plot area.
    #[error("viewport margins exceed its size")]
    DegenerateViewport,
    /// The pie center is not finite, or the radius is negative or not finite.
    #[error("pie layout needs a finite center and a finite, non-negative radius")]
    DegenerateLayout,
}
