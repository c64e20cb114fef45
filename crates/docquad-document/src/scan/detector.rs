// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Corner detector — end-to-end document boundary search on a grayscale image:
// edge map, Hough accumulator, peak lines, orientation buckets and corner
// candidates.

use docquad_core::config::DetectorConfig;
use docquad_core::error::{DocquadError, Result};
use docquad_core::types::{ClassifiedLine, Point, SampleRange};
use image::GrayImage;
use tracing::{debug, info, instrument};

use super::edges::{EdgeExtractor, EdgeMap, FilterEdgeExtractor};
use super::hough::{HoughSpace, LineTransform, StraightLineHough};
use super::peaks::{GreedyPeakFinder, PeakFinder};
use super::pipeline::{CornerSet, classify_and_resolve};

/// Everything one detection run produced.
#[derive(Debug, Clone)]
pub struct Detection {
    pub edge_map: EdgeMap,
    pub hough: HoughSpace,
    /// Peak lines in descending vote order, with their orientation.
    pub lines: Vec<ClassifiedLine>,
    /// Corner candidates, verticals outer and horizontals inner.
    pub corners: Vec<Point>,
}

impl Detection {
    /// Corners that fall inside a `width` x `height` image.
    pub fn corners_within(&self, width: u32, height: u32) -> Vec<Point> {
        self.corners
            .iter()
            .copied()
            .filter(|p| p.is_within(width, height))
            .collect()
    }
}

/// Finds document corner candidates in grayscale photographs.
///
/// The three image-processing stages are pluggable; [`CornerDetector::new`]
/// wires in the default filter chain, Hough transform and greedy peak finder.
///
/// ```ignore
/// let detection = CornerDetector::new(DetectorConfig::default()).detect(&gray)?;
/// for corner in &detection.corners {
///     println!("{:.1}, {:.1}", corner.x, corner.y);
/// }
/// ```
pub struct CornerDetector<E = FilterEdgeExtractor, T = StraightLineHough, P = GreedyPeakFinder> {
    config: DetectorConfig,
    extractor: E,
    transform: T,
    peak_finder: P,
}

impl CornerDetector {
    // -- Construction ---------------------------------------------------------

    /// Detector using the bundled stages configured from `config`.
    pub fn new(config: DetectorConfig) -> Self {
        let extractor = FilterEdgeExtractor::new(config.edges.clone());
        let transform = StraightLineHough::new(config.hough.clone());
        Self {
            config,
            extractor,
            transform,
            peak_finder: GreedyPeakFinder,
        }
    }
}

impl Default for CornerDetector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

impl<E, T, P> CornerDetector<E, T, P>
where
    E: EdgeExtractor,
    T: LineTransform,
    P: PeakFinder,
{
    /// Detector built from custom stages.
    pub fn with_parts(config: DetectorConfig, extractor: E, transform: T, peak_finder: P) -> Self {
        Self {
            config,
            extractor,
            transform,
            peak_finder,
        }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    // -- Detection ------------------------------------------------------------

    /// Run the full pipeline on one image.
    ///
    /// Lines are sampled over `(0, width)`. Finding no corners is a normal
    /// outcome; only an invalid configuration or an empty image is an error.
    #[instrument(skip_all, fields(width = gray.width(), height = gray.height()))]
    pub fn detect(&self, gray: &GrayImage) -> Result<Detection> {
        self.config.validate()?;
        let (width, height) = gray.dimensions();
        if width == 0 || height == 0 {
            return Err(DocquadError::ImageError(format!(
                "cannot detect corners in an empty {}x{} image",
                width, height
            )));
        }
        info!("Starting corner detection");

        let edge_map = self.extractor.extract(gray);
        let hough = self.transform.transform(&edge_map.contour_image);
        debug!(max_votes = hough.max_votes(), "Hough transform complete");

        let set = classify_and_resolve(
            &hough,
            &self.config.peaks,
            self.config.angle_tolerance,
            SampleRange::for_width(width),
            &self.peak_finder,
        );

        info!(
            lines = set.lines.len(),
            corners = set.corners.len(),
            "Corner detection finished"
        );
        Ok(Detection {
            edge_map,
            hough,
            lines: set.lines,
            corners: set.corners,
        })
    }

    /// Peak, classify and intersect an accumulator built elsewhere.
    ///
    /// With no image at hand, lines are sampled over the configured
    /// `sample_range`.
    #[instrument(skip_all, fields(cells = hough.cells().len()))]
    pub fn detect_in_accumulator(&self, hough: &HoughSpace) -> Result<CornerSet> {
        self.config.validate()?;
        let set = classify_and_resolve(
            hough,
            &self.config.peaks,
            self.config.angle_tolerance,
            self.config.sample_range,
            &self.peak_finder,
        );
        info!(
            lines = set.lines.len(),
            corners = set.corners.len(),
            "Accumulator search finished"
        );
        Ok(set)
    }
}
