// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for docquad.

use thiserror::Error;

/// Top-level error type for all docquad operations.
#[derive(Debug, Error)]
pub enum DocquadError {
    // -- Geometry errors (recoverable, per line pair) --
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("lines are parallel and have no unique intersection")]
    ParallelLines,

    // -- Pipeline errors --
    #[error("invalid detector configuration: {0}")]
    InvalidConfig(String),

    #[error("image processing failed: {0}")]
    ImageError(String),

    // -- Storage / persistence --
    #[error("config file error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DocquadError {
    /// Whether the error only invalidates a single line pair.
    ///
    /// The intersection resolver drops such pairs and keeps going; anything
    /// else aborts the current image.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DocquadError::DegenerateGeometry(_) | DocquadError::ParallelLines
        )
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DocquadError>;
