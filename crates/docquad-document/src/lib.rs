// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// docquad-document — Document boundary detection for scanner front-ends.
//
// Provides the grayscale filter chain (median blur, equalization, morphology,
// Canny), a straight-line Hough transform with peak extraction, and the
// geometric stage that buckets lines into horizontal/vertical groups and
// intersects them into corner candidates.

pub mod image;
pub mod scan;

// Re-export the primary structs so callers can use `docquad_document::CornerDetector` etc.
pub use self::image::processor::ImageProcessor;
pub use scan::detector::{CornerDetector, Detection};
pub use scan::pipeline::find_corners;
