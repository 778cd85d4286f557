// Copyright 2025 the Quintessence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series data points and validation.

extern crate alloc;

use alloc::string::String;

use peniko::Color;

use crate::error::InvalidInput;

/// One value in an ordered series.
///
/// A point has no identity beyond its position in the series. `label` and `color` are carried
/// through for the presentation layer; geometry only reads `value`.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    /// The plotted value.
    pub value: f64,
    /// Optional display label (legend entry, axis category).
    pub label: Option<String>,
    /// Optional fill/stroke color.
    pub color: Option<Color>,
}

impl DataPoint {
    /// Creates an unlabeled, uncolored point.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            label: None,
            color: None,
        }
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the color.
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl From<f64> for DataPoint {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// The value range of a validated series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

impl Extent {
    /// Computes the extent of `series`.
    ///
    /// Fails on an empty series or on the first non-finite value.
    pub fn of(series: &[DataPoint]) -> Result<Self, InvalidInput> {
        check_finite(series)?;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for p in series {
            min = min.min(p.value);
            max = max.max(p.value);
        }
        Ok(Self { min, max })
    }

    /// Returns `max - min`.
    ///
    /// This is infinite when the values are spread wider than `f64::MAX`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` when every value in the series was equal.
    pub fn is_flat(&self) -> bool {
        self.min == self.max
    }
}

/// Rejects empty series and non-finite values.
pub(crate) fn check_finite(series: &[DataPoint]) -> Result<(), InvalidInput> {
    if series.is_empty() {
        return Err(InvalidInput::EmptySeries);
    }
    match series.iter().position(|p| !p.value.is_finite()) {
        Some(index) => Err(InvalidInput::NonFinite { index }),
        None => Ok(()),
    }
}

/// Rejects empty series, non-finite values and negative values.
pub(crate) fn check_non_negative(series: &[DataPoint]) -> Result<(), InvalidInput> {
    check_finite(series)?;
    match series.iter().enumerate().find(|(_, p)| p.value < 0.0) {
        Some((index, p)) => Err(InvalidInput::Negative {
            index,
            value: p.value,
        }),
        None => Ok(()),
    }
}
