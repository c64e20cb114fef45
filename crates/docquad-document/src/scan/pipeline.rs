// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Corner pipeline — accumulator peaks → orientation buckets → corner
// candidates.

use docquad_core::config::PeakOptions;
use docquad_core::types::{ClassifiedLine, Point, SampleRange};
use tracing::{info, instrument, warn};

use super::classify::classify;
use super::hough::HoughSpace;
use super::intersect::resolve_intersections;
use super::peaks::PeakFinder;

/// Classified lines and the corners they produce.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CornerSet {
    /// Every peak line in peak order, tagged with its orientation.
    pub lines: Vec<ClassifiedLine>,
    /// Vertical × horizontal intersections, verticals outer.
    pub corners: Vec<Point>,
}

/// Find corner candidates in a Hough accumulator.
///
/// Returns an empty sequence when the accumulator has no peaks or one of the
/// orientation buckets is empty; no document boundary is not an error.
pub fn find_corners<F: PeakFinder + ?Sized>(
    space: &HoughSpace,
    peaks: &PeakOptions,
    tolerance: f64,
    range: SampleRange,
    peak_finder: &F,
) -> Vec<Point> {
    classify_and_resolve(space, peaks, tolerance, range, peak_finder).corners
}

/// Like [`find_corners`], but also keeps the classified lines.
#[instrument(skip(space, peak_finder), fields(angles = space.angles().len()))]
pub fn classify_and_resolve<F: PeakFinder + ?Sized>(
    space: &HoughSpace,
    peaks: &PeakOptions,
    tolerance: f64,
    range: SampleRange,
    peak_finder: &F,
) -> CornerSet {
    let lines = peak_finder.find_peaks(space, peaks);
    if lines.is_empty() {
        warn!("No accumulator peaks above threshold; no corners");
        return CornerSet::default();
    }

    let lines = classify(&lines, tolerance);
    let corners = resolve_intersections(&lines, range);

    if corners.is_empty() {
        warn!(lines = lines.len(), "No vertical/horizontal line pair intersects");
    } else {
        info!(lines = lines.len(), corners = corners.len(), "Corner candidates found");
    }
    CornerSet { lines, corners }
}
