// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Accumulator peak extraction — strongest, mutually separated
// (angle, distance) cells above a fraction of the maximum vote.

use docquad_core::config::PeakOptions;
use docquad_core::types::PolarLine;
use tracing::debug;

use super::hough::HoughSpace;

/// Extracts line hypotheses from a Hough accumulator.
pub trait PeakFinder {
    /// Peaks ordered by descending votes.
    fn find_peaks(&self, space: &HoughSpace, options: &PeakOptions) -> Vec<PolarLine>;
}

/// Greedy non-maximum suppression.
///
/// Cells strictly above `vote_fraction * max` are visited strongest first (ties
/// broken by angle index, then distance index). A cell is accepted unless an
/// already accepted peak lies within `min_angle` angle bins *and*
/// `min_distance` distance bins of it, so parallel edges far apart both
/// survive.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPeakFinder;

impl PeakFinder for GreedyPeakFinder {
    fn find_peaks(&self, space: &HoughSpace, options: &PeakOptions) -> Vec<PolarLine> {
        let max_votes = space.max_votes();
        if max_votes == 0 {
            debug!("Accumulator is empty; no peaks");
            return Vec::new();
        }
        let threshold = options.vote_fraction * max_votes as f64;
        let columns = space.distances().len();

        let mut candidates: Vec<(u32, usize, usize)> = space
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &votes)| votes > 0 && votes as f64 > threshold)
            .map(|(idx, &votes)| (votes, idx / columns, idx % columns))
            .collect();
        candidates.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)).then(a.2.cmp(&b.2)));

        let limit = options.max_peaks.unwrap_or(usize::MAX);
        let mut accepted: Vec<(usize, usize)> = Vec::new();
        let mut peaks = Vec::new();

        for (votes, angle_idx, distance_idx) in candidates {
            if peaks.len() >= limit {
                break;
            }
            let suppressed = accepted.iter().any(|&(a, d)| {
                a.abs_diff(angle_idx) <= options.min_angle
                    && d.abs_diff(distance_idx) <= options.min_distance
            });
            if suppressed {
                continue;
            }
            accepted.push((angle_idx, distance_idx));
            peaks.push(PolarLine::new(
                space.angles()[angle_idx],
                space.distances()[distance_idx],
                votes as f64,
            ));
        }

        debug!(
            max_votes,
            threshold,
            peaks = peaks.len(),
            "Accumulator peaks extracted"
        );
        peaks
    }
}
