// Copyright 2025 the Quintessence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG attribute formatting for computed geometry.

extern crate alloc;

use alloc::string::String;
use core::fmt::Write as _;

use kurbo::Point;

/// Formats points as an SVG `points` attribute value: `"x,y x,y ..."`.
///
/// Coordinates are written with at most three decimals.
pub fn svg_points(points: &[Point]) -> String {
    let mut out = String::with_capacity(points.len() * 16);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        push_coord(&mut out, p.x);
        out.push(',');
        push_coord(&mut out, p.y);
    }
    out
}

/// Formats a single coordinate or length the way [`svg_points`] writes coordinates.
pub fn svg_number(v: f64) -> String {
    let mut out = String::new();
    push_coord(&mut out, v);
    out
}

/// Appends `v` with three decimals, dropping trailing zeros (`160.000` becomes `160`).
pub(crate) fn push_coord(out: &mut String, v: f64) {
    let start = out.len();
    // Writing into a `String` cannot fail.
    let _ = write!(out, "{v:.3}");
    if out[start..].contains('.') {
        let trimmed = out[start..].trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(start + trimmed);
    }
    if &out[start..] == "-0" {
        out.truncate(start);
        out.push('0');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_drop_trailing_zeros() {
        assert_eq!(svg_number(160.0), "160");
        assert_eq!(svg_number(153.333_333_333_333_34), "153.333");
        assert_eq!(svg_number(266.666_666_666_666_7), "266.667");
        assert_eq!(svg_number(12.5), "12.5");
        assert_eq!(svg_number(-0.000_000_1), "0");
        assert_eq!(svg_number(-4.25), "-4.25");
    }

    #[test]
    fn points_attribute_matches_polyline_syntax() {
        let pts = [Point::new(40.0, 160.0), Point::new(210.0, 100.5)];
        assert_eq!(svg_points(&pts), "40,160 210,100.5");
        assert_eq!(svg_points(&[]), "");
    }
}
