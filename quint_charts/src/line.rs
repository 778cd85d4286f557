// Copyright 2025 the Quintessence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line and area geometry.
//!
//! Points are spread evenly across the plot width by index, and values are mapped so the
//! series minimum sits on the bottom edge of the plot and the maximum on the top edge.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};

use crate::error::InvalidInput;
use crate::scale::ScaleLinear;
use crate::series::{DataPoint, Extent};
use crate::viewport::Viewport;

/// Scales shared by the line and area computations.
struct PlotScales {
    plot: Rect,
    x: ScaleLinear,
    y: ScaleLinear,
}

impl PlotScales {
    fn new(series: &[DataPoint], viewport: &Viewport) -> Result<Self, InvalidInput> {
        let extent = Extent::of(series)?;
        let plot = viewport.checked_plot_rect()?;
        let last = (series.len() - 1) as f64;
        Ok(Self {
            plot,
            // A single point collapses the index domain onto the horizontal center.
            x: ScaleLinear::new((0.0, last), (plot.x0, plot.x1)),
            // A flat series collapses the value domain onto the vertical midline.
            y: ScaleLinear::new((extent.min, extent.max), (plot.y1, plot.y0)),
        })
    }

    fn points(&self, series: &[DataPoint]) -> Vec<Point> {
        series
            .iter()
            .enumerate()
            .map(|(i, p)| Point::new(self.x.map(i as f64), self.y.map(p.value)))
            .collect()
    }
}

/// Maps `series` to plot coordinates inside `viewport`.
///
/// The output has one point per input point, in input order, with non-decreasing `x`.
/// A constant series is drawn along the vertical midline of the plot area, and a single
/// point is placed at the horizontal center.
pub fn compute_line_points(
    series: &[DataPoint],
    viewport: &Viewport,
) -> Result<Vec<Point>, InvalidInput> {
    let scales = PlotScales::new(series, viewport).inspect_err(|err| {
        tracing::warn!(%err, len = series.len(), "rejected line series");
    })?;
    Ok(scales.points(series))
}

/// Maps `series` to a closed polygon suitable for a filled area under the line.
///
/// The ring is `[baseline start, points..., baseline end]`: exactly `n + 2` vertices, where
/// the baseline vertices sit on the bottom edge of the plot at the first and last point's `x`.
pub fn compute_area_polygon(
    series: &[DataPoint],
    viewport: &Viewport,
) -> Result<Vec<Point>, InvalidInput> {
    let scales = PlotScales::new(series, viewport).inspect_err(|err| {
        tracing::warn!(%err, len = series.len(), "rejected area series");
    })?;
    Ok(close_area(&scales.points(series), scales.plot.y1))
}

fn close_area(points: &[Point], baseline: f64) -> Vec<Point> {
    let mut ring = Vec::with_capacity(points.len() + 2);
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        ring.push(Point::new(first.x, baseline));
        ring.extend_from_slice(points);
        ring.push(Point::new(last.x, baseline));
    }
    ring
}

/// Returns the y coordinates of `count` evenly spaced horizontal grid lines, top to bottom.
///
/// The first line is on the top edge of the plot and the last on the bottom edge; the
/// analytics chart uses five (0, 25, 50, 75 and 100 percent of the plot height).
pub fn grid_lines(viewport: &Viewport, count: usize) -> Result<Vec<f64>, InvalidInput> {
    let plot = viewport.checked_plot_rect()?;
    let lines = match count {
        0 => Vec::new(),
        1 => alloc::vec![plot.y0],
        _ => {
            let scale = ScaleLinear::new((0.0, (count - 1) as f64), (plot.y0, plot.y1));
            (0..count).map(|i| scale.map(i as f64)).collect()
        }
    };
    Ok(lines)
}

/// Everything needed to draw the analytics line chart: grid, area fill, line and markers.
#[derive(Clone, Debug, PartialEq)]
pub struct LineChartGeometry {
    /// The plot rectangle inside the viewport.
    pub plot: Rect,
    /// Horizontal grid line y coordinates, top to bottom.
    pub grid: Vec<f64>,
    /// Line vertices (also the marker centers), in series order.
    pub points: Vec<Point>,
    /// Closed area ring (`points.len() + 2` vertices).
    pub area: Vec<Point>,
}

impl LineChartGeometry {
    /// Number of grid lines drawn by the dashboard.
    pub const DEFAULT_GRID_LINES: usize = 5;

    /// Computes the full line chart geometry for `series`.
    pub fn compute(series: &[DataPoint], viewport: &Viewport) -> Result<Self, InvalidInput> {
        let points = compute_line_points(series, viewport)?;
        let plot = viewport.checked_plot_rect()?;
        let area = close_area(&points, plot.y1);
        let grid = grid_lines(viewport, Self::DEFAULT_GRID_LINES)?;
        tracing::debug!(points = points.len(), "computed line chart geometry");
        Ok(Self {
            plot,
            grid,
            points,
            area,
        })
    }

    /// Returns the open polyline through `points`.
    pub fn line_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for (i, &pt) in self.points.iter().enumerate() {
            if i == 0 {
                path.move_to(pt);
            } else {
                path.line_to(pt);
            }
        }
        path
    }

    /// Returns the closed area path.
    pub fn area_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for (i, &pt) in self.area.iter().enumerate() {
            if i == 0 {
                path.move_to(pt);
            } else {
                path.line_to(pt);
            }
        }
        if !self.area.is_empty() {
            path.close_path();
        }
        path
    }
}
