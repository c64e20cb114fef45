// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document boundary search — edge extraction, Hough line transform, peak
// extraction, orientation classification and corner resolution.

pub mod classify;
pub mod detector;
pub mod edges;
pub mod geometry;
pub mod hough;
pub mod intersect;
pub mod peaks;
pub mod pipeline;

pub use classify::{classify, orientation_of};
pub use detector::{CornerDetector, Detection};
pub use edges::{EdgeExtractor, EdgeMap, FilterEdgeExtractor};
pub use geometry::{CartesianSegment, LineEquation};
pub use hough::{HoughSpace, LineTransform, StraightLineHough};
pub use intersect::resolve_intersections;
pub use peaks::{GreedyPeakFinder, PeakFinder};
pub use pipeline::{CornerSet, find_corners};
