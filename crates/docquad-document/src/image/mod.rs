// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module — grayscale loading and the filter chain ahead of edge detection.

pub mod processor;

pub use processor::ImageProcessor;
