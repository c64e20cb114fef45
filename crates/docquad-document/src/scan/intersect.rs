// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Intersection resolver — corner candidates from every vertical/horizontal
// line pair.

use docquad_core::types::{ClassifiedLine, Orientation, Point, PolarLine, SampleRange};
use tracing::{debug, trace, warn};

use super::geometry::intersect_polar;

/// Intersect every vertical line with every horizontal line.
///
/// Pairs are visited with verticals in the outer loop and horizontals in the
/// inner loop, both in input order, and the output follows that order.
/// Irrelevant lines never participate. Pairs that are parallel or cannot be
/// sampled over `range` contribute nothing; identical points produced by
/// different pairs are all kept.
pub fn resolve_intersections(lines: &[ClassifiedLine], range: SampleRange) -> Vec<Point> {
    let mut verticals: Vec<&PolarLine> = Vec::new();
    let mut horizontals: Vec<&PolarLine> = Vec::new();
    for classified in lines {
        match classified.orientation {
            Orientation::Vertical => verticals.push(&classified.line),
            Orientation::Horizontal => horizontals.push(&classified.line),
            Orientation::Irrelevant => {}
        }
    }

    let mut points = Vec::with_capacity(verticals.len() * horizontals.len());
    for vertical in &verticals {
        for horizontal in &horizontals {
            match intersect_polar(horizontal, vertical, range) {
                Ok(point) => points.push(point),
                Err(err) if err.is_recoverable() => trace!(
                    error = %err,
                    vertical_angle = vertical.angle,
                    horizontal_angle = horizontal.angle,
                    "Skipping line pair"
                ),
                Err(err) => warn!(
                    error = %err,
                    vertical_angle = vertical.angle,
                    horizontal_angle = horizontal.angle,
                    "Unexpected error intersecting line pair; skipping it"
                ),
            }
        }
    }

    debug!(
        vertical = verticals.len(),
        horizontal = horizontals.len(),
        corners = points.len(),
        "Intersections resolved"
    );
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn tagged(angle: f64, distance: f64, orientation: Orientation) -> ClassifiedLine {
        ClassifiedLine {
            line: PolarLine::new(angle, distance, 1.0),
            orientation,
        }
    }

    fn approx_point(p: &Point, x: f64, y: f64) -> bool {
        (p.x - x).abs() < 1e-6 && (p.y - y).abs() < 1e-6
    }

    #[test]
    fn empty_input_yields_no_points() {
        assert!(resolve_intersections(&[], SampleRange::default()).is_empty());
    }

    #[test]
    fn irrelevant_lines_yield_no_points() {
        let lines = vec![
            tagged(FRAC_PI_4, 10.0, Orientation::Irrelevant),
            tagged(FRAC_PI_4 + 0.2, 40.0, Orientation::Irrelevant),
        ];
        assert!(resolve_intersections(&lines, SampleRange::default()).is_empty());
    }

    #[test]
    fn single_bucket_yields_no_points() {
        let lines = vec![
            tagged(0.0, 10.0, Orientation::Vertical),
            tagged(0.02, 90.0, Orientation::Vertical),
        ];
        assert!(resolve_intersections(&lines, SampleRange::default()).is_empty());
    }

    #[test]
    fn orthogonal_pair_meets_at_distances() {
        let lines = vec![
            tagged(FRAC_PI_2, 50.0, Orientation::Horizontal),
            tagged(0.0, 30.0, Orientation::Vertical),
        ];
        let points = resolve_intersections(&lines, SampleRange::new(0.0, 100.0));
        assert_eq!(points.len(), 1);
        assert!(approx_point(&points[0], 30.0, 50.0), "got {:?}", points[0]);
    }

    #[test]
    fn parallel_pair_is_skipped() {
        // Two vertical lines, one mislabelled as horizontal.
        let lines = vec![
            tagged(0.0, 30.0, Orientation::Horizontal),
            tagged(0.0, 70.0, Orientation::Vertical),
        ];
        assert!(resolve_intersections(&lines, SampleRange::default()).is_empty());
    }

    #[test]
    fn parallel_pair_does_not_abort_batch() {
        let lines = vec![
            tagged(0.0, 30.0, Orientation::Horizontal),
            tagged(FRAC_PI_2, 60.0, Orientation::Horizontal),
            tagged(0.0, 70.0, Orientation::Vertical),
        ];
        let points = resolve_intersections(&lines, SampleRange::default());
        assert_eq!(points.len(), 1);
        assert!(approx_point(&points[0], 70.0, 60.0));
    }

    #[test]
    fn order_is_verticals_outer_horizontals_inner() {
        let lines = vec![
            tagged(FRAC_PI_2, 10.0, Orientation::Horizontal),
            tagged(0.0, 100.0, Orientation::Vertical),
            tagged(FRAC_PI_2, 20.0, Orientation::Horizontal),
            tagged(0.0, 200.0, Orientation::Vertical),
        ];
        let points = resolve_intersections(&lines, SampleRange::default());
        let expected = [(100.0, 10.0), (100.0, 20.0), (200.0, 10.0), (200.0, 20.0)];
        assert_eq!(points.len(), expected.len());
        for (p, (x, y)) in points.iter().zip(expected) {
            assert!(approx_point(p, x, y), "got {:?}, want ({x}, {y})", p);
        }
    }

    #[test]
    fn duplicate_points_from_distinct_pairs_are_kept() {
        let lines = vec![
            tagged(FRAC_PI_2, 10.0, Orientation::Horizontal),
            tagged(FRAC_PI_2, 10.0, Orientation::Horizontal),
            tagged(0.0, 100.0, Orientation::Vertical),
        ];
        let points = resolve_intersections(&lines, SampleRange::default());
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], points[1]);
    }

    #[test]
    fn count_never_exceeds_pair_count() {
        let mut lines = Vec::new();
        for i in 0..5 {
            lines.push(tagged(
                FRAC_PI_2 + 0.01 * i as f64,
                40.0 * i as f64,
                Orientation::Horizontal,
            ));
        }
        for i in 0..3 {
            lines.push(tagged(-0.01 * i as f64, 25.0 * i as f64, Orientation::Vertical));
        }
        lines.push(tagged(0.0, 5.0, Orientation::Horizontal));
        let points = resolve_intersections(&lines, SampleRange::default());
        assert!(points.len() <= 6 * 3);
        // The mislabelled vertical is parallel to the first vertical only.
        assert_eq!(points.len(), 6 * 3 - 1);
    }
}
