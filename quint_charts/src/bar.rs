// Copyright 2025 the Quintessence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal bar lengths.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::InvalidInput;
use crate::series::{DataPoint, check_non_negative};

/// Returns each bar's length as a fraction (`0..=1`) of the largest value.
///
/// The largest bar always has fraction `1.0`. An all-zero series yields all-zero fractions.
pub fn compute_bar_fractions(series: &[DataPoint]) -> Result<Vec<f64>, InvalidInput> {
    check_non_negative(series).inspect_err(|err| {
        tracing::warn!(%err, len = series.len(), "rejected bar series");
    })?;
    let max = series.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    if max == 0.0 {
        return Ok(alloc::vec![0.0; series.len()]);
    }
    Ok(series.iter().map(|p| p.value / max).collect())
}
