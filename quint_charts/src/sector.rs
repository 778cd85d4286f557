// Copyright 2025 the Quintessence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie slice geometry.
//!
//! Slices are laid out contiguously, clockwise, starting at 12 o'clock. Angles are reported
//! in degrees measured clockwise from 12 o'clock, so slice `k` starts at the cumulative
//! percentage of slices `0..k` times `3.6`. Arc end points are in y-down screen coordinates
//! with the quarter-turn rotation already applied.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{Arc, BezPath, Point, SvgArc, Vec2};

use crate::error::InvalidInput;
use crate::format::push_coord;
use crate::series::{DataPoint, check_non_negative};
use crate::viewport::PieLayout;

/// Degrees per percentage point.
const DEGREES_PER_PERCENT: f64 = 3.6;

/// Curve flattening tolerance used when converting arcs to cubic segments.
const ARC_TOLERANCE: f64 = 0.1;

/// One pie slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieSlice {
    /// Position of the source point in the series.
    pub index: usize,
    /// The source value.
    pub value: f64,
    /// Share of the total, in percent.
    pub percentage: f64,
    /// Start angle in degrees, clockwise from 12 o'clock.
    pub start_angle: f64,
    /// End angle in degrees, clockwise from 12 o'clock.
    pub end_angle: f64,
    /// Point on the circle at `start_angle`.
    pub start: Point,
    /// Point on the circle at `end_angle`.
    pub end: Point,
    /// SVG large-arc flag: set when the slice covers more than half the pie.
    pub large_arc: bool,
}

impl PieSlice {
    /// Returns the angular extent of the slice in degrees.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Returns `true` when this slice is the whole pie.
    fn is_full_circle(&self) -> bool {
        self.percentage >= 100.0
    }

    /// Returns the SVG path data for the slice: `M c L start A r r 0 large 1 end Z`.
    ///
    /// `layout` must be the layout the slice was computed with. A full-circle slice is
    /// written as two half arcs, since an SVG arc whose end points coincide draws nothing.
    pub fn svg_path(&self, layout: &PieLayout) -> String {
        let mut d = String::with_capacity(96);
        d.push_str("M ");
        push_pair(&mut d, layout.center);
        d.push_str(" L ");
        push_pair(&mut d, self.start);
        if self.is_full_circle() {
            let opposite = point_at(layout, self.start_angle + 180.0);
            push_arc(&mut d, layout.radius, true, opposite);
            push_arc(&mut d, layout.radius, true, self.end);
        } else {
            push_arc(&mut d, layout.radius, self.large_arc, self.end);
        }
        d.push_str(" Z");
        d
    }

    /// Returns the slice outline as a `BezPath`, with the arc flattened to cubic segments.
    pub fn to_bez_path(&self, layout: &PieLayout) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(layout.center);
        path.line_to(self.start);
        if self.is_full_circle() {
            let opposite = point_at(layout, self.start_angle + 180.0);
            append_arc(&mut path, layout.radius, self.start, opposite, true);
            append_arc(&mut path, layout.radius, opposite, self.end, true);
        } else {
            append_arc(&mut path, layout.radius, self.start, self.end, self.large_arc);
        }
        path.close_path();
        path
    }
}

/// Computes pie slices for `series` on the default dashboard layout.
///
/// See [`compute_pie_slices_in`].
pub fn compute_pie_slices(series: &[DataPoint]) -> Result<Vec<PieSlice>, InvalidInput> {
    compute_pie_slices_in(series, &PieLayout::default())
}

/// Computes pie slices for `series`, placing arc end points on `layout`.
///
/// Fails when the series is empty, contains a non-finite or negative value, or sums to zero,
/// and when `layout` fails [`PieLayout::validate`]. Zero values still produce a (zero-sweep)
/// slice so output indices match the input.
pub fn compute_pie_slices_in(
    series: &[DataPoint],
    layout: &PieLayout,
) -> Result<Vec<PieSlice>, InvalidInput> {
    let total = pie_total(series)
        .and_then(|total| layout.validate().map(|()| total))
        .inspect_err(|err| {
            tracing::warn!(%err, len = series.len(), "rejected pie series");
        })?;

    let mut cumulative = 0.0;
    let slices = series
        .iter()
        .enumerate()
        .map(|(index, p)| {
            let percentage = total.percentage(p.value);
            let start_angle = cumulative * DEGREES_PER_PERCENT;
            let end_angle = (cumulative + percentage) * DEGREES_PER_PERCENT;
            cumulative += percentage;
            PieSlice {
                index,
                value: p.value,
                percentage,
                start_angle,
                end_angle,
                start: point_at(layout, start_angle),
                end: point_at(layout, end_angle),
                large_arc: percentage > 50.0,
            }
        })
        .collect();
    Ok(slices)
}

/// The denominator of a pie: values are divided by `unit`, then by `sum`.
struct PieTotal {
    unit: f64,
    sum: f64,
}

impl PieTotal {
    fn percentage(&self, value: f64) -> f64 {
        value / self.unit / self.sum * 100.0
    }
}

fn pie_total(series: &[DataPoint]) -> Result<PieTotal, InvalidInput> {
    check_non_negative(series)?;
    let sum: f64 = series.iter().map(|p| p.value).sum();
    if sum == 0.0 {
        return Err(InvalidInput::ZeroTotal);
    }
    if sum.is_finite() {
        return Ok(PieTotal { unit: 1.0, sum });
    }
    // The plain sum overflowed; add the values relative to the largest one instead.
    let unit = series.iter().map(|p| p.value).fold(0.0, f64::max);
    let sum: f64 = series.iter().map(|p| p.value / unit).sum();
    Ok(PieTotal { unit, sum })
}

/// Returns the point on the pie's circle at `degrees` clockwise from 12 o'clock.
fn point_at(layout: &PieLayout, degrees: f64) -> Point {
    let theta = (degrees - 90.0).to_radians();
    Point::new(
        layout.center.x + layout.radius * theta.cos(),
        layout.center.y + layout.radius * theta.sin(),
    )
}

fn push_pair(out: &mut String, p: Point) {
    push_coord(out, p.x);
    out.push(' ');
    push_coord(out, p.y);
}

fn push_arc(out: &mut String, radius: f64, large_arc: bool, to: Point) {
    out.push_str(" A ");
    push_coord(out, radius);
    out.push(' ');
    push_coord(out, radius);
    out.push_str(if large_arc { " 0 1 1 " } else { " 0 0 1 " });
    push_pair(out, to);
}

fn append_arc(path: &mut BezPath, radius: f64, from: Point, to: Point, large_arc: bool) {
    let svg = SvgArc {
        from,
        to,
        radii: Vec2::new(radius, radius),
        x_rotation: 0.0,
        large_arc,
        sweep: true,
    };
    match Arc::from_svg_arc(&svg) {
        Some(arc) => path.extend(arc.append_iter(ARC_TOLERANCE)),
        None => path.line_to(to),
    }
}

/// A pie chart: its total and slices.
#[derive(Clone, Debug, PartialEq)]
pub struct PieChartGeometry {
    /// Layout the slices were computed on.
    pub layout: PieLayout,
    /// Sum of all values (shown in the middle of the dashboard pies).
    ///
    /// Infinite when the values add up past `f64::MAX`; the slices are still proportional.
    pub total: f64,
    /// Slices in series order.
    pub slices: Vec<PieSlice>,
}

impl PieChartGeometry {
    /// Computes the pie chart for `series` on `layout`.
    pub fn compute(series: &[DataPoint], layout: PieLayout) -> Result<Self, InvalidInput> {
        let slices = compute_pie_slices_in(series, &layout)?;
        let total: f64 = series.iter().map(|p| p.value).sum();
        tracing::debug!(slices = slices.len(), total, "computed pie chart geometry");
        Ok(Self {
            layout,
            total,
            slices,
        })
    }

    /// Returns the SVG path data for every slice, in series order.
    pub fn svg_paths(&self) -> Vec<String> {
        self.slices
            .iter()
            .map(|s| s.svg_path(&self.layout))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{PathEl, Rect, Shape};

    use super::*;

    fn series(values: &[f64]) -> Vec<DataPoint> {
        values.iter().copied().map(DataPoint::new).collect()
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn first_slice_starts_at_twelve_o_clock() {
        let slices = compute_pie_slices(&series(&[1.0, 1.0, 2.0])).unwrap();
        assert_close(slices[0].start.x, 50.0);
        assert_close(slices[0].start.y, 10.0);
        // A quarter turn clockwise lands at 3 o'clock.
        assert_close(slices[0].end.x, 90.0);
        assert_close(slices[0].end.y, 50.0);
        // Half way round is 6 o'clock.
        assert_close(slices[1].end.x, 50.0);
        assert_close(slices[1].end.y, 90.0);
        assert_close(slices[2].end_angle, 360.0);
    }

    #[test]
    fn slices_are_contiguous() {
        let slices = compute_pie_slices(&series(&[3.0, 1.0, 4.0, 1.0, 5.0])).unwrap();
        for pair in slices.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn large_arc_only_above_half() {
        let slices = compute_pie_slices(&series(&[51.0, 49.0])).unwrap();
        assert!(slices[0].large_arc);
        assert!(!slices[1].large_arc);

        let slices = compute_pie_slices(&series(&[50.0, 50.0])).unwrap();
        assert!(slices.iter().all(|s| !s.large_arc));
    }

    #[test]
    fn zero_values_keep_their_slot() {
        let slices = compute_pie_slices(&series(&[0.0, 3.0, 0.0, 1.0])).unwrap();
        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0].sweep(), 0.0);
        assert_eq!(slices[2].index, 2);
        assert_eq!(slices[2].start, slices[2].end);
    }

    #[test]
    fn invalid_pies_are_rejected() {
        assert_eq!(compute_pie_slices(&[]), Err(InvalidInput::EmptySeries));
        assert_eq!(
            compute_pie_slices(&series(&[0.0, 0.0])),
            Err(InvalidInput::ZeroTotal)
        );
        assert_eq!(
            compute_pie_slices(&series(&[2.0, -1.0])),
            Err(InvalidInput::Negative {
                index: 1,
                value: -1.0
            })
        );
        assert_eq!(
            compute_pie_slices(&series(&[f64::NAN])),
            Err(InvalidInput::NonFinite { index: 0 })
        );
    }

    #[test]
    fn overflowing_total_still_fills_the_pie() {
        let slices = compute_pie_slices(&series(&[f64::MAX, f64::MAX, 0.0])).unwrap();
        assert_eq!(slices[0].percentage, 50.0);
        assert_eq!(slices[1].percentage, 50.0);
        assert_eq!(slices[2].sweep(), 0.0);
        assert_close(slices.iter().map(|s| s.sweep()).sum(), 360.0);

        let chart = PieChartGeometry::compute(
            &series(&[f64::MAX, f64::MAX / 2.0]),
            PieLayout::default(),
        )
        .unwrap();
        assert_eq!(chart.total, f64::INFINITY);
        assert!(chart.slices[0].large_arc);
        assert_close(chart.slices[0].sweep(), 240.0);
        assert_close(chart.slices[1].end_angle, 360.0);
    }

    #[test]
    fn invalid_layouts_are_rejected() {
        let data = series(&[1.0, 2.0]);
        for layout in [
            PieLayout::new(Point::new(50.0, 50.0), f64::NAN),
            PieLayout::new(Point::new(50.0, 50.0), -1.0),
            PieLayout::new(Point::new(f64::INFINITY, 50.0), 40.0),
        ] {
            assert_eq!(
                compute_pie_slices_in(&data, &layout),
                Err(InvalidInput::DegenerateLayout)
            );
        }
        // Series errors are reported first.
        assert_eq!(
            compute_pie_slices_in(&[], &PieLayout::new(Point::ZERO, f64::NAN)),
            Err(InvalidInput::EmptySeries)
        );
    }

    #[test]
    fn svg_path_matches_dashboard_format() {
        let layout = PieLayout::default();
        let slices = compute_pie_slices(&series(&[75.0, 25.0])).unwrap();
        assert_eq!(
            slices[0].svg_path(&layout),
            "M 50 50 L 50 10 A 40 40 0 1 1 10 50 Z"
        );
        assert_eq!(
            slices[1].svg_path(&layout),
            "M 50 50 L 10 50 A 40 40 0 0 1 50 10 Z"
        );
    }

    #[test]
    fn full_circle_is_split_into_two_arcs() {
        let layout = PieLayout::default();
        let slices = compute_pie_slices(&series(&[0.0, 8.0])).unwrap();
        let full = slices[1];
        assert_eq!(full.percentage, 100.0);
        assert_eq!(
            full.svg_path(&layout),
            "M 50 50 L 50 10 A 40 40 0 1 1 50 90 A 40 40 0 1 1 50 10 Z"
        );

        let bbox = full.to_bez_path(&layout).bounding_box();
        // Cubic approximation stays within the flattening tolerance of the circle.
        assert!((bbox.width() - 80.0).abs() < ARC_TOLERANCE, "{bbox:?}");
        assert!((bbox.height() - 80.0).abs() < ARC_TOLERANCE, "{bbox:?}");
    }

    #[test]
    fn bez_path_outlines_the_slice() {
        let layout = PieLayout::default();
        let slices = compute_pie_slices(&series(&[1.0, 3.0])).unwrap();
        let path = slices[0].to_bez_path(&layout);
        let els = path.elements();
        assert_eq!(els[0], PathEl::MoveTo(layout.center));
        assert_eq!(els[1], PathEl::LineTo(slices[0].start));
        assert_eq!(els.last(), Some(&PathEl::ClosePath));
        assert!(els.iter().any(|el| matches!(el, PathEl::CurveTo(..))));

        // The first quarter spans 12 to 3 o'clock.
        let bbox = path.bounding_box();
        let expected = Rect::new(50.0, 10.0, 90.0, 50.0);
        assert!((bbox.x0 - expected.x0).abs() < 1e-3, "{bbox:?}");
        assert!((bbox.y0 - expected.y0).abs() < 1e-3, "{bbox:?}");
        assert!((bbox.x1 - expected.x1).abs() < 1e-3, "{bbox:?}");
        assert!((bbox.y1 - expected.y1).abs() < 1e-3, "{bbox:?}");
    }

    #[test]
    fn chart_total_and_paths() {
        let chart =
            PieChartGeometry::compute(&series(&[1782.0, 1134.0, 324.0]), PieLayout::default())
                .unwrap();
        assert_eq!(chart.total, 3240.0);
        assert_eq!(chart.svg_paths().len(), 3);
        assert!(chart.svg_paths()[0].starts_with("M 50 50 L 50 10 A 40 40 0 1 1 "));
    }
}
