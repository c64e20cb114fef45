// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Orientation classifier — buckets polar lines into horizontal, vertical and
// irrelevant groups by their distance to the axes.

use std::f64::consts::{FRAC_PI_2, PI};

use docquad_core::types::{ClassifiedLine, Orientation, PolarLine};
use tracing::debug;

/// Unsigned angle between two line normals, modulo π.
///
/// A line at `θ` and at `θ + π` is the same line with its distance negated,
/// so the result lies in `[0, π/2]`.
pub fn axis_distance(angle: f64, axis: f64) -> f64 {
    let diff = (angle - axis).rem_euclid(PI);
    diff.min(PI - diff)
}

/// Orientation of a line whose normal points at `angle`.
///
/// Within `[-π/4, 3π/4)` this is exactly `|angle| < tolerance` → vertical,
/// then `|angle - π/2| < tolerance` → horizontal. Non-finite angles are
/// irrelevant.
pub fn orientation_of(angle: f64, tolerance: f64) -> Orientation {
    if axis_distance(angle, 0.0) < tolerance {
        Orientation::Vertical
    } else if axis_distance(angle, FRAC_PI_2) < tolerance {
        Orientation::Horizontal
    } else {
        Orientation::Irrelevant
    }
}

/// Classify every line, preserving input order.
pub fn classify(lines: &[PolarLine], tolerance: f64) -> Vec<ClassifiedLine> {
    let classified: Vec<ClassifiedLine> = lines
        .iter()
        .map(|line| ClassifiedLine {
            line: *line,
            orientation: orientation_of(line.angle, tolerance),
        })
        .collect();

    debug!(
        total = classified.len(),
        horizontal = classified.iter().filter(|l| l.is_horizontal()).count(),
        vertical = classified.iter().filter(|l| l.is_vertical()).count(),
        tolerance,
        "Lines classified"
    );
    classified
}
