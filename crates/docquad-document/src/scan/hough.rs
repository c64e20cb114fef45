// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Straight-line Hough transform — votes every edge pixel into an
// (angle, distance) accumulator using the Hesse normal form
// `x * cos(angle) + y * sin(angle) = distance`.

use docquad_core::config::HoughOptions;
use docquad_core::error::{DocquadError, Result};
use image::GrayImage;
use tracing::{debug, instrument};

/// Vote accumulator over a grid of angles and distances.
///
/// Votes are stored row-major: one row per angle, one column per distance.
#[derive(Debug, Clone, PartialEq)]
pub struct HoughSpace {
    votes: Vec<u32>,
    angles: Vec<f64>,
    distances: Vec<f64>,
}

impl HoughSpace {
    /// Build an accumulator from raw votes and its two axes.
    pub fn new(votes: Vec<u32>, angles: Vec<f64>, distances: Vec<f64>) -> Result<Self> {
        if votes.len() != angles.len() * distances.len() {
            return Err(DocquadError::InvalidConfig(format!(
                "accumulator holds {} cells but axes describe {} x {}",
                votes.len(),
                angles.len(),
                distances.len()
            )));
        }
        Ok(Self {
            votes,
            angles,
            distances,
        })
    }

    /// Angle axis in radians.
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Distance axis in pixels.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Votes at the given cell, or `None` if either index is outside its axis.
    pub fn votes(&self, angle_idx: usize, distance_idx: usize) -> Option<u32> {
        if angle_idx >= self.angles.len() || distance_idx >= self.distances.len() {
            return None;
        }
        self.votes.get(angle_idx * self.distances.len() + distance_idx).copied()
    }

    /// All cells, row-major by angle.
    pub fn cells(&self) -> &[u32] {
        &self.votes
    }

    /// Largest vote count, or zero for an empty accumulator.
    pub fn max_votes(&self) -> u32 {
        self.votes.iter().copied().max().unwrap_or(0)
    }
}

/// Turns an edge image into a line accumulator.
pub trait LineTransform {
    fn transform(&self, edges: &GrayImage) -> HoughSpace;
}

/// Classic voting Hough transform over an evenly spaced, half-open angle grid.
#[derive(Debug, Clone, Default)]
pub struct StraightLineHough {
    options: HoughOptions,
}

impl StraightLineHough {
    pub fn new(options: HoughOptions) -> Self {
        Self { options }
    }

    /// Sampled angles: `start + i * span / steps` for `i` in `0..steps`.
    pub fn angle_axis(&self) -> Vec<f64> {
        let HoughOptions {
            angle_steps,
            angle_start,
            angle_span,
        } = self.options;
        let step = angle_span / angle_steps as f64;
        (0..angle_steps)
            .map(|i| angle_start + i as f64 * step)
            .collect()
    }
}

impl LineTransform for StraightLineHough {
    #[instrument(skip_all, fields(width = edges.width(), height = edges.height()))]
    fn transform(&self, edges: &GrayImage) -> HoughSpace {
        let angles = self.angle_axis();
        let trig: Vec<(f64, f64)> = angles.iter().map(|a| a.sin_cos()).collect();

        let (width, height) = edges.dimensions();
        let offset = (width as f64).hypot(height as f64).ceil() as i64;
        let distances: Vec<f64> = (-offset..=offset).map(|d| d as f64).collect();
        let columns = distances.len();

        let mut votes = vec![0u32; angles.len() * columns];
        let mut edge_pixels = 0usize;

        for (x, y, pixel) in edges.enumerate_pixels() {
            if pixel.0[0] == 0 {
                continue;
            }
            edge_pixels += 1;
            let (xf, yf) = (x as f64, y as f64);
            for (row, &(sin, cos)) in trig.iter().enumerate() {
                let rho = (xf * cos + yf * sin).round() as i64;
                let column = (rho + offset) as usize;
                votes[row * columns + column] += 1;
            }
        }

        debug!(
            edge_pixels,
            angles = angles.len(),
            distances = columns,
            "Hough accumulator filled"
        );

        HoughSpace {
            votes,
            angles,
            distances,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    /// Locate the strongest cell as (angle, distance, votes).
    fn strongest(space: &HoughSpace) -> (f64, f64, u32) {
        let mut best = (0usize, 0usize, 0u32);
        for a in 0..space.angles().len() {
            for d in 0..space.distances().len() {
                let v = space.votes(a, d).unwrap();
                if v > best.2 {
                    best = (a, d, v);
                }
            }
        }
        (space.angles()[best.0], space.distances()[best.1], best.2)
    }

    #[test]
    fn angle_axis_is_half_open() {
        let hough = StraightLineHough::default();
        let axis = hough.angle_axis();
        assert_eq!(axis.len(), 180);
        assert!((axis[0] + FRAC_PI_4).abs() < 1e-12);
        let last = *axis.last().unwrap();
        assert!(last < 3.0 * FRAC_PI_4);
        assert!((last - (3.0 * FRAC_PI_4 - PI / 180.0)).abs() < 1e-9);
    }

    #[test]
    fn blank_image_has_no_votes() {
        let space = StraightLineHough::default().transform(&GrayImage::new(20, 10));
        assert_eq!(space.max_votes(), 0);
        // ceil(hypot(20, 10)) = 23 -> bins -23..=23
        assert_eq!(space.distances().len(), 47);
        assert_eq!(space.cells().len(), 180 * 47);
    }

    #[test]
    fn vertical_edge_peaks_at_zero_angle() {
        let mut img = GrayImage::new(60, 60);
        for y in 0..60 {
            img.put_pixel(25, y, Luma([255]));
        }
        let (angle, distance, votes) = strongest(&StraightLineHough::default().transform(&img));
        assert!(angle.abs() < 1e-9, "angle {angle}");
        assert_eq!(distance, 25.0);
        assert_eq!(votes, 60);
    }

    #[test]
    fn horizontal_edge_peaks_at_right_angle() {
        let mut img = GrayImage::new(80, 50);
        for x in 0..80 {
            img.put_pixel(x, 12, Luma([255]));
        }
        let (angle, distance, votes) = strongest(&StraightLineHough::default().transform(&img));
        assert!((angle - FRAC_PI_2).abs() < 1e-9, "angle {angle}");
        assert_eq!(distance, 12.0);
        assert_eq!(votes, 80);
    }

    #[test]
    fn votes_outside_the_axes_are_none() {
        let space = HoughSpace::new(vec![1, 2, 3, 4, 5, 6], vec![0.0, 1.0], vec![-1.0, 0.0, 1.0])
            .unwrap();
        assert_eq!(space.votes(1, 2), Some(6));
        assert_eq!(space.votes(0, 1), Some(2));
        assert_eq!(space.votes(2, 0), None);
        assert_eq!(space.votes(0, 3), None);
    }

    #[test]
    fn mismatched_axes_are_rejected() {
        let err = HoughSpace::new(vec![0; 5], vec![0.0, 1.0], vec![0.0, 1.0, 2.0]).unwrap_err();
        assert!(matches!(err, DocquadError::InvalidConfig(_)));
    }
}
