// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Batch detection — one blocking task per image, results in input order.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use docquad_core::DetectorConfig;
use docquad_core::error::Result;
use docquad_core::types::{ClassifiedLine, Point};
use docquad_document::{CornerDetector, ImageProcessor};
use serde::Serialize;
use tracing::{error, info, instrument};

/// Outcome for a single input image.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ImageReport {
    Detected {
        path: PathBuf,
        width: u32,
        height: u32,
        lines: Vec<ClassifiedLine>,
        corners: Vec<Point>,
    },
    Failed {
        path: PathBuf,
        error: String,
    },
}

impl ImageReport {
    pub fn is_failure(&self) -> bool {
        matches!(self, ImageReport::Failed { .. })
    }
}

/// Load one image and run corner detection on it.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn detect_one(detector: &CornerDetector, path: &Path) -> Result<ImageReport> {
    let gray = ImageProcessor::open(path)?.into_gray();
    let (width, height) = gray.dimensions();
    let detection = detector.detect(&gray)?;
    info!(corners = detection.corners.len(), "Image processed");
    Ok(ImageReport::Detected {
        path: path.to_path_buf(),
        width,
        height,
        lines: detection.lines,
        corners: detection.corners,
    })
}

/// Process every image on the blocking pool.
///
/// A failure is reported for its own image and never stops the others.
pub async fn detect_all(paths: Vec<PathBuf>, config: DetectorConfig) -> Vec<ImageReport> {
    let detector = Arc::new(CornerDetector::new(config));

    let handles: Vec<_> = paths
        .into_iter()
        .map(|path| {
            let detector = Arc::clone(&detector);
            let task = tokio::task::spawn_blocking({
                let path = path.clone();
                move || detect_one(&detector, &path)
            });
            (path, task)
        })
        .collect();

    let mut reports = Vec::with_capacity(handles.len());
    for (path, task) in handles {
        let report = match task.await {
            Ok(Ok(report)) => report,
            Ok(Err(err)) => {
                error!(path = %path.display(), error = %err, "Corner detection failed");
                ImageReport::Failed {
                    path,
                    error: err.to_string(),
                }
            }
            Err(join_err) => {
                error!(path = %path.display(), error = %join_err, "Detection task aborted");
                ImageReport::Failed {
                    path,
                    error: format!("detection task aborted: {}", join_err),
                }
            }
        };
        reports.push(report);
    }
    reports
}
