// Copyright 2025 the Quintessence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart geometry for the Quintessence admin dashboard.
//!
//! This crate turns small numeric series into drawing primitives:
//! - **Line/area**: plot points and a closed area polygon inside a [`Viewport`].
//! - **Pie**: contiguous slices starting at 12 o'clock, with SVG arc flags.
//! - **Bar**: width fractions relative to the largest value.
//!
//! Everything here is a pure function of its inputs. Drawing (SVG, raster, DOM) is left to
//! the caller; [`PieSlice::svg_path`] and [`svg_points`] only format the computed geometry.
//!
//! Invalid input (empty series, non-finite values, negative pie values, a zero pie total)
//! is reported as [`InvalidInput`] rather than propagated as `NaN`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bar;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod line;
mod scale;
mod sector;
mod series;
mod viewport;

pub use bar::compute_bar_fractions;
pub use error::InvalidInput;
pub use format::{svg_number, svg_points};
pub use line::{LineChartGeometry, compute_area_polygon, compute_line_points, grid_lines};
pub use scale::ScaleLinear;
pub use sector::{PieChartGeometry, PieSlice, compute_pie_slices, compute_pie_slices_in};
pub use series::{DataPoint, Extent};
pub use viewport::{PieLayout, Viewport};
