// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Detector configuration.

use std::f64::consts::{FRAC_PI_4, PI};

use serde::{Deserialize, Serialize};

use crate::error::{DocquadError, Result};
use crate::types::SampleRange;

/// Default angular tolerance around the horizontal and vertical axes (15°).
pub const DEFAULT_ANGLE_TOLERANCE: f64 = PI / 12.0;

/// Settings for the edge extraction stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeOptions {
    /// Side length of the median blur window (odd, in pixels).
    pub median_kernel: u32,
    /// Side length of the square structuring element used for open/close.
    pub morph_kernel: u32,
    /// Lowest intensity kept by the band mask.
    pub intensity_lower: u8,
    /// Highest intensity kept by the band mask.
    pub intensity_upper: u8,
    /// Canny hysteresis low threshold.
    pub canny_lower: f32,
    /// Canny hysteresis high threshold.
    pub canny_upper: f32,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self {
            median_kernel: 25,
            morph_kernel: 15,
            intensity_lower: 0,
            intensity_upper: 255,
            canny_lower: 10.0,
            canny_upper: 70.0,
        }
    }
}

/// Settings for the Hough line transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughOptions {
    /// Number of sampled angles.
    pub angle_steps: usize,
    /// First sampled angle in radians.
    pub angle_start: f64,
    /// Width of the half-open angle interval in radians.
    pub angle_span: f64,
}

impl Default for HoughOptions {
    fn default() -> Self {
        Self {
            angle_steps: 180,
            angle_start: -FRAC_PI_4,
            angle_span: PI,
        }
    }
}

/// Settings for accumulator peak extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeakOptions {
    /// Minimum votes as a fraction of the accumulator maximum.
    pub vote_fraction: f64,
    /// Suppression radius along the distance axis, in bins.
    pub min_distance: usize,
    /// Suppression radius along the angle axis, in bins.
    pub min_angle: usize,
    /// Upper bound on returned peaks; `None` keeps every peak.
    pub max_peaks: Option<usize>,
}

impl Default for PeakOptions {
    fn default() -> Self {
        Self {
            vote_fraction: 0.5,
            min_distance: 10,
            min_angle: 50,
            max_peaks: None,
        }
    }
}

/// Complete corner detector settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub edges: EdgeOptions,
    pub hough: HoughOptions,
    pub peaks: PeakOptions,
    /// Tolerance in radians around 0 and π/2 for line classification.
    pub angle_tolerance: f64,
    /// Sampling interval for accumulator-only searches, where no image width
    /// is known.
    pub sample_range: SampleRange,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            edges: EdgeOptions::default(),
            hough: HoughOptions::default(),
            peaks: PeakOptions::default(),
            angle_tolerance: DEFAULT_ANGLE_TOLERANCE,
            sample_range: SampleRange::default(),
        }
    }
}

impl DetectorConfig {
    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(DocquadError::InvalidConfig(msg.to_string()));

        if !self.angle_tolerance.is_finite() || self.angle_tolerance <= 0.0 {
            return invalid("angle_tolerance must be a positive number of radians");
        }
        if self.edges.median_kernel == 0 || self.edges.median_kernel % 2 == 0 {
            return invalid("edges.median_kernel must be odd");
        }
        if self.edges.morph_kernel == 0 {
            return invalid("edges.morph_kernel must be at least 1");
        }
        if self.edges.intensity_lower > self.edges.intensity_upper {
            return invalid("edges.intensity_lower exceeds edges.intensity_upper");
        }
        if self.edges.canny_lower > self.edges.canny_upper {
            return invalid("edges.canny_lower exceeds edges.canny_upper");
        }
        if self.hough.angle_steps == 0 {
            return invalid("hough.angle_steps must be at least 1");
        }
        if !self.hough.angle_span.is_finite() || self.hough.angle_span <= 0.0 {
            return invalid("hough.angle_span must be positive");
        }
        if !self.hough.angle_start.is_finite() {
            return invalid("hough.angle_start must be finite");
        }
        if !(self.peaks.vote_fraction > 0.0 && self.peaks.vote_fraction <= 1.0) {
            return invalid("peaks.vote_fraction must lie in (0, 1]");
        }
        if self.peaks.max_peaks == Some(0) {
            return invalid("peaks.max_peaks must be at least 1 when set");
        }
        let range = self.sample_range;
        if !range.start.is_finite() || !range.end.is_finite() || range.span() == 0.0 {
            return invalid("sample_range must be a finite, non-empty interval");
        }
        Ok(())
    }
}
