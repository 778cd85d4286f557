// Copyright 2025 the Quintessence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG drawing for computed chart geometry.

use std::fmt::Write as _;

use peniko::Color;
use quint_charts::{
    DataPoint, InvalidInput, LineChartGeometry, PieChartGeometry, PieLayout, Viewport,
    compute_bar_fractions, svg_number, svg_points,
};

const LINE_COLOR: Color = Color::from_rgb8(0x3b, 0x82, 0xf6);
const GRID_COLOR: Color = Color::from_rgb8(0xe5, 0xe7, 0xeb);
const TRACK_COLOR: Color = Color::from_rgb8(0xe5, 0xe7, 0xeb);
const TEXT_COLOR: Color = Color::from_rgb8(0x11, 0x18, 0x27);
const MUTED_TEXT_COLOR: Color = Color::from_rgb8(0x4b, 0x55, 0x63);
const MARKER_RADIUS: f64 = 4.0;

const BAR_ROW_HEIGHT: f64 = 28.0;
const BAR_LABEL_WIDTH: f64 = 110.0;
const BAR_TRACK_WIDTH: f64 = 220.0;
const BAR_VALUE_WIDTH: f64 = 60.0;
const BAR_THICKNESS: f64 = 12.0;

/// Draws the traffic line chart: grid, gradient area, line and point markers.
pub(crate) fn line_chart(
    series: &[DataPoint],
    viewport: &Viewport,
) -> Result<String, InvalidInput> {
    let chart = LineChartGeometry::compute(series, viewport)?;
    let view = viewport.view_rect();
    let mut out = String::new();

    open_svg(&mut out, view.width(), view.height());
    out.push_str(concat!(
        r#"<defs><linearGradient id="area-fill" x1="0%" y1="0%" x2="0%" y2="100%">"#,
        r##"<stop offset="0%" stop-color="#3b82f6" stop-opacity="0.3"/>"##,
        r##"<stop offset="100%" stop-color="#3b82f6" stop-opacity="0"/>"##,
        "</linearGradient></defs>\n",
    ));
    for y in &chart.grid {
        let _ = writeln!(
            out,
            r#"<line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{}" stroke-width="1"/>"#,
            svg_number(chart.plot.x0),
            svg_number(chart.plot.x1),
            hex(GRID_COLOR),
            y = svg_number(*y),
        );
    }
    let _ = writeln!(
        out,
        r#"<polygon fill="url(#area-fill)" points="{}"/>"#,
        svg_points(&chart.area)
    );
    let _ = writeln!(
        out,
        r#"<polyline fill="none" stroke="{}" stroke-width="3" points="{}"/>"#,
        hex(LINE_COLOR),
        svg_points(&chart.points)
    );
    for (p, pt) in series.iter().zip(&chart.points) {
        let _ = write!(
            out,
            r#"<circle cx="{}" cy="{}" r="{MARKER_RADIUS}" fill="{}">"#,
            svg_number(pt.x),
            svg_number(pt.y),
            hex(LINE_COLOR)
        );
        if let Some(label) = &p.label {
            let _ = write!(out, "<title>{}: {}</title>", escape_xml(label), p.value);
        }
        out.push_str("</circle>\n");
    }
    out.push_str("</svg>\n");
    Ok(out)
}

/// Draws a pie chart with the total in the middle and a legend underneath.
pub(crate) fn pie_chart(series: &[DataPoint]) -> Result<String, InvalidInput> {
    let layout = PieLayout::default();
    let chart = PieChartGeometry::compute(series, layout)?;
    let view = layout.view_rect();
    let legend_top = view.y1 + 6.0;
    let legend_row = 8.0;
    let height = legend_top + legend_row * series.len() as f64;
    let mut out = String::new();

    open_svg(&mut out, view.width(), height);
    for (slice, p) in chart.slices.iter().zip(series) {
        let color = p.color.unwrap_or(LINE_COLOR);
        let _ = writeln!(
            out,
            r#"<path d="{}" fill="{}"/>"#,
            slice.svg_path(&layout),
            hex(color)
        );
    }
    let _ = writeln!(
        out,
        r#"<text x="{}" y="{}" font-size="9" font-weight="bold" text-anchor="middle" dominant-baseline="middle" fill="{}">{}</text>"#,
        layout.center.x,
        layout.center.y,
        hex(TEXT_COLOR),
        chart.total
    );
    for (i, (slice, p)) in chart.slices.iter().zip(series).enumerate() {
        let y = legend_top + legend_row * i as f64;
        let color = p.color.unwrap_or(LINE_COLOR);
        let label = p.label.as_deref().unwrap_or("");
        let _ = writeln!(
            out,
            r#"<circle cx="6" cy="{}" r="2.5" fill="{}"/><text x="12" y="{}" font-size="5" dominant-baseline="middle" fill="{}">{} ({:.1}%)</text><text x="{}" y="{}" font-size="5" text-anchor="end" dominant-baseline="middle" fill="{}">{}</text>"#,
            y + 3.0,
            hex(color),
            y + 3.0,
            hex(MUTED_TEXT_COLOR),
            escape_xml(label),
            slice.percentage,
            view.x1 - 4.0,
            y + 3.0,
            hex(TEXT_COLOR),
            p.value
        );
    }
    out.push_str("</svg>\n");
    Ok(out)
}

/// Draws horizontal bars, each scaled against the largest value.
pub(crate) fn bar_chart(series: &[DataPoint]) -> Result<String, InvalidInput> {
    let fractions = compute_bar_fractions(series)?;
    let width = BAR_LABEL_WIDTH + BAR_TRACK_WIDTH + BAR_VALUE_WIDTH;
    let height = BAR_ROW_HEIGHT * series.len() as f64;
    let mut out = String::new();

    open_svg(&mut out, width, height);
    for (i, (p, fraction)) in series.iter().zip(fractions).enumerate() {
        let mid = BAR_ROW_HEIGHT * (i as f64 + 0.5);
        let top = mid - 0.5 * BAR_THICKNESS;
        let label = p.label.as_deref().unwrap_or("");
        let color = p.color.unwrap_or(LINE_COLOR);
        let _ = writeln!(
            out,
            r#"<text x="0" y="{mid}" font-size="12" dominant-baseline="middle" fill="{}">{}</text>"#,
            hex(MUTED_TEXT_COLOR),
            escape_xml(label)
        );
        let _ = writeln!(
            out,
            r#"<rect x="{BAR_LABEL_WIDTH}" y="{top}" width="{BAR_TRACK_WIDTH}" height="{BAR_THICKNESS}" rx="6" fill="{}"/>"#,
            hex(TRACK_COLOR)
        );
        let _ = writeln!(
            out,
            r#"<rect x="{BAR_LABEL_WIDTH}" y="{top}" width="{}" height="{BAR_THICKNESS}" rx="6" fill="{}"/>"#,
            fraction * BAR_TRACK_WIDTH,
            hex(color)
        );
        let _ = writeln!(
            out,
            r#"<text x="{width}" y="{mid}" font-size="12" font-weight="bold" text-anchor="end" dominant-baseline="middle" fill="{}">{}</text>"#,
            hex(TEXT_COLOR),
            p.value
        );
    }
    out.push_str("</svg>\n");
    Ok(out)
}

/// A placeholder shown in place of a chart whose data could not be drawn.
pub(crate) fn empty_state(message: &str) -> String {
    let mut out = String::new();
    open_svg(&mut out, 400.0, 60.0);
    let _ = writeln!(
        out,
        r#"<text x="200" y="30" font-size="14" text-anchor="middle" dominant-baseline="middle" fill="{}">{}</text>"#,
        hex(MUTED_TEXT_COLOR),
        escape_xml(message)
    );
    out.push_str("</svg>\n");
    out
}

fn open_svg(out: &mut String, width: f64, height: f64) {
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" preserveAspectRatio="xMinYMin meet">"#,
    );
}

fn hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<DataPoint> {
        values.iter().copied().map(DataPoint::new).collect()
    }

    #[test]
    fn line_chart_emits_grid_area_line_and_markers() {
        let svg = line_chart(&series(&[10.0, 20.0, 30.0, 40.0]), &Viewport::analytics_line())
            .unwrap();
        assert_eq!(svg.matches("<line ").count(), 5);
        assert_eq!(svg.matches("<circle ").count(), 4);
        assert!(svg.contains(r#"points="40,160 40,160 153.333,120 266.667,80 380,40 380,160""#));
        assert!(svg.contains(r#"points="40,160 153.333,120 266.667,80 380,40""#));
        assert!(svg.contains(r#"viewBox="0 0 400 200""#));
        assert!(svg.contains(r#"<circle cx="153.333" cy="120" r="4""#));
        assert!(svg.contains(r#"<line x1="40" y1="70" x2="380" y2="70""#));
    }

    #[test]
    fn pie_chart_uses_point_colors() {
        let data = vec![
            DataPoint::new(3.0).with_label("A&B").with_color(Color::from_rgb8(0xff, 0, 0)),
            DataPoint::new(1.0).with_label("C"),
        ];
        let svg = pie_chart(&data).unwrap();
        assert!(svg.contains(
            r##"<path d="M 50 50 L 50 10 A 40 40 0 1 1 10 50 Z" fill="#ff0000"/>"##
        ));
        assert!(svg.contains("A&amp;B (75.0%)"));
        assert!(svg.contains(r##"fill="#3b82f6""##));
    }

    #[test]
    fn bars_scale_to_track_width() {
        let svg = bar_chart(&series(&[4.0, 1.0])).unwrap();
        assert!(svg.contains(&format!(r#"width="{BAR_TRACK_WIDTH}" height"#)));
        assert!(svg.contains(r#"width="55" height"#));
    }

    #[test]
    fn invalid_pie_is_reported() {
        assert_eq!(pie_chart(&series(&[0.0])), Err(InvalidInput::ZeroTotal));
        assert!(empty_state("No <data>").contains("No &lt;data&gt;"));
    }
}
