// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Line geometry — polar lines to Cartesian segments, segments to normalized
// line equations, and intersection of two line equations.

use docquad_core::error::{DocquadError, Result};
use docquad_core::types::{Point, PolarLine, SampleRange};

/// Determinants and normals smaller than this are treated as zero.
pub const GEOMETRY_EPSILON: f64 = 1e-9;

/// Two points sampled from a polar line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianSegment {
    pub start: Point,
    pub end: Point,
}

/// An infinite line `a * x + b * y = c` with `(a, b)` of unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEquation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Sample two points of `line` over `range`.
///
/// Mostly horizontal lines (`|sin| >= |cos|`) are sampled at
/// `x = range.start` and `x = range.end`; mostly vertical lines are sampled at
/// `y = range.start` and `y = range.end`. The divisor is therefore never
/// smaller than `1/√2`, so a true vertical line resolves like any other.
pub fn to_cartesian_segment(line: &PolarLine, range: SampleRange) -> Result<CartesianSegment> {
    if !line.angle.is_finite() || !line.distance.is_finite() {
        return Err(DocquadError::DegenerateGeometry(format!(
            "non-finite polar line (angle {}, distance {})",
            line.angle, line.distance
        )));
    }
    if !range.start.is_finite() || !range.end.is_finite() || range.span() == 0.0 {
        return Err(DocquadError::DegenerateGeometry(format!(
            "empty sample range [{}, {}]",
            range.start, range.end
        )));
    }

    let (sin, cos) = line.angle.sin_cos();
    let rho = line.distance;

    let (start, end) = if sin.abs() >= cos.abs() {
        let y_at = |x: f64| (rho - x * cos) / sin;
        (
            Point::new(range.start, y_at(range.start)),
            Point::new(range.end, y_at(range.end)),
        )
    } else {
        let x_at = |y: f64| (rho - y * sin) / cos;
        (
            Point::new(x_at(range.start), range.start),
            Point::new(x_at(range.end), range.end),
        )
    };

    Ok(CartesianSegment { start, end })
}

/// Line equation through both endpoints of `segment`.
pub fn to_line_equation(segment: &CartesianSegment) -> Result<LineEquation> {
    let CartesianSegment { start, end } = segment;
    let a = end.y - start.y;
    let b = start.x - end.x;
    let norm = a.hypot(b);
    if !(norm > GEOMETRY_EPSILON) {
        return Err(DocquadError::DegenerateGeometry(format!(
            "segment endpoints coincide at ({}, {})",
            start.x, start.y
        )));
    }
    let (a, b) = (a / norm, b / norm);
    Ok(LineEquation {
        a,
        b,
        c: a * start.x + b * start.y,
    })
}

/// Intersect two line equations with Cramer's rule.
///
/// Returns `ParallelLines` when the determinant vanishes, i.e. the lines are
/// parallel or coincident.
pub fn intersect(l1: &LineEquation, l2: &LineEquation) -> Result<Point> {
    let det = l1.a * l2.b - l2.a * l1.b;
    if !(det.abs() > GEOMETRY_EPSILON) {
        return Err(DocquadError::ParallelLines);
    }
    let x = (l1.c * l2.b - l2.c * l1.b) / det;
    let y = (l1.a * l2.c - l2.a * l1.c) / det;
    Ok(Point::new(x, y))
}

/// Intersection of two polar lines, going through their Cartesian segments.
pub fn intersect_polar(a: &PolarLine, b: &PolarLine, range: SampleRange) -> Result<Point> {
    let ea = to_line_equation(&to_cartesian_segment(a, range)?)?;
    let eb = to_line_equation(&to_cartesian_segment(b, range)?)?;
    intersect(&ea, &eb)
}
