// Copyright 2025 the Quintessence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewports and pie layouts.
//!
//! A [`Viewport`] is the outer drawing surface of a cartesian chart (the SVG `viewBox`) plus
//! the margins reserved around the plot area. Line and area geometry is mapped into
//! [`Viewport::plot_rect`].

use kurbo::{Insets, Point, Rect};

use crate::error::InvalidInput;

/// Outer chart size plus per-side margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Total width in chart units.
    pub width: f64,
    /// Total height in chart units.
    pub height: f64,
    /// Margins around the plot area.
    ///
    /// `x0` is the left margin, `y0` the top, `x1` the right and `y1` the bottom.
    pub margins: Insets,
}

impl Viewport {
    /// Creates a viewport from its size and margins.
    pub fn new(width: f64, height: f64, margins: Insets) -> Self {
        Self {
            width,
            height,
            margins,
        }
    }

    /// Creates a viewport from explicit `top`, `right`, `bottom`, `left` margins.
    pub fn with_margins(
        width: f64,
        height: f64,
        top: f64,
        right: f64,
        bottom: f64,
        left: f64,
    ) -> Self {
        Self::new(width, height, Insets::new(left, top, right, bottom))
    }

    /// The traffic line chart on the analytics page: a `400x200` box with a `340x120` plot
    /// area starting at `(40, 40)`.
    pub fn analytics_line() -> Self {
        Self::with_margins(400.0, 200.0, 40.0, 20.0, 40.0, 40.0)
    }

    /// Returns the outer bounds, anchored at the origin.
    pub fn view_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Returns the plot rectangle (the view inset by the margins).
    ///
    /// The result may have negative size for degenerate viewports; use
    /// [`Viewport::checked_plot_rect`] where that matters.
    pub fn plot_rect(&self) -> Rect {
        Rect::new(
            self.margins.x0,
            self.margins.y0,
            self.width - self.margins.x1,
            self.height - self.margins.y1,
        )
    }

    /// Returns the plot rectangle, rejecting non-finite dimensions and margins that overlap.
    pub fn checked_plot_rect(&self) -> Result<Rect, InvalidInput> {
        let plot = self.plot_rect();
        let finite = [plot.x0, plot.y0, plot.x1, plot.y1]
            .iter()
            .all(|v| v.is_finite());
        if !finite || plot.x1 < plot.x0 || plot.y1 < plot.y0 {
            return Err(InvalidInput::DegenerateViewport);
        }
        Ok(plot)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::analytics_line()
    }
}

/// Placement of a pie inside its own view box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieLayout {
    /// Pie center.
    pub center: Point,
    /// Outer radius.
    pub radius: f64,
}

impl PieLayout {
    /// Creates a layout centered at `center` with the given `radius`.
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Checks that the center is finite and the radius is finite and non-negative.
    ///
    /// A zero radius is allowed; every slice then collapses onto the center.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        let finite = self.center.is_finite() && self.radius.is_finite();
        if !finite || self.radius < 0.0 {
            return Err(InvalidInput::DegenerateLayout);
        }
        Ok(())
    }

    /// Fits a pie into `bounds`, using `fill` (0..=1) of the shorter side as the diameter.
    pub fn fit(bounds: Rect, fill: f64) -> Self {
        let radius = 0.5 * bounds.width().abs().min(bounds.height().abs()) * fill.clamp(0.0, 1.0);
        Self::new(bounds.center(), radius)
    }

    /// Returns the square view box around the pie, with a 10-unit gutter on every side.
    ///
    /// For the default layout this is the dashboard's `0 0 100 100` view box.
    pub fn view_rect(&self) -> Rect {
        let side = 2.0 * (self.radius + 10.0);
        Rect::new(
            self.center.x - 0.5 * side,
            self.center.y - 0.5 * side,
            self.center.x + 0.5 * side,
            self.center.y + 0.5 * side,
        )
    }
}

impl Default for PieLayout {
    /// Radius 40 centered in a `100x100` view box.
    fn default() -> Self {
        Self::new(Point::new(50.0, 50.0), 40.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analytics_preset_plot_area() {
        let plot = Viewport::analytics_line().checked_plot_rect().unwrap();
        assert_eq!(plot, Rect::new(40.0, 40.0, 380.0, 160.0));
        assert_eq!(plot.width(), 340.0);
        assert_eq!(plot.height(), 120.0);
    }

    #[test]
    fn overlapping_margins_are_rejected() {
        let vp = Viewport::with_margins(100.0, 50.0, 30.0, 10.0, 30.0, 10.0);
        assert_eq!(vp.checked_plot_rect(), Err(InvalidInput::DegenerateViewport));

        let vp = Viewport::with_margins(f64::NAN, 50.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(vp.checked_plot_rect(), Err(InvalidInput::DegenerateViewport));
    }

    #[test]
    fn zero_sized_plot_is_allowed() {
        let vp = Viewport::with_margins(40.0, 40.0, 20.0, 20.0, 20.0, 20.0);
        let plot = vp.checked_plot_rect().unwrap();
        assert_eq!(plot.width(), 0.0);
        assert_eq!(plot.height(), 0.0);
    }

    #[test]
    fn default_pie_matches_dashboard_view_box() {
        let pie = PieLayout::default();
        assert_eq!(pie.view_rect(), Rect::new(0.0, 0.0, 100.0, 100.0));

        let fitted = PieLayout::fit(Rect::new(0.0, 0.0, 200.0, 100.0), 0.8);
        assert_eq!(fitted.center, Point::new(100.0, 50.0));
        assert_eq!(fitted.radius, 40.0);
    }

    #[test]
    fn pie_layout_validation() {
        assert_eq!(PieLayout::default().validate(), Ok(()));
        assert_eq!(PieLayout::new(Point::ZERO, 0.0).validate(), Ok(()));
        assert_eq!(
            PieLayout::new(Point::ZERO, -0.5).validate(),
            Err(InvalidInput::DegenerateLayout)
        );
        assert_eq!(
            PieLayout::new(Point::new(f64::NAN, 0.0), 10.0).validate(),
            Err(InvalidInput::DegenerateLayout)
        );
        let fitted = PieLayout::fit(Rect::new(0.0, 0.0, 100.0, f64::INFINITY), 0.5);
        assert_eq!(fitted.validate(), Err(InvalidInput::DegenerateLayout));
    }
}
