// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Detector settings from an optional TOML file plus command-line overrides.

use std::path::Path;

use docquad_core::DetectorConfig;
use docquad_core::error::{DocquadError, Result};
use tracing::{debug, info};

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub angle_tolerance: Option<f64>,
    pub vote_fraction: Option<f64>,
    pub max_peaks: Option<usize>,
}

/// Load settings from `path` (defaults when `None`), apply overrides and
/// validate the result.
pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<DetectorConfig> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let config: DetectorConfig = toml::from_str(&text).map_err(|err| {
                DocquadError::Config(format!("{}: {}", path.display(), err))
            })?;
            info!(path = %path.display(), "Loaded detector config");
            config
        }
        None => DetectorConfig::default(),
    };

    if let Some(tolerance) = overrides.angle_tolerance {
        config.angle_tolerance = tolerance;
    }
    if let Some(fraction) = overrides.vote_fraction {
        config.peaks.vote_fraction = fraction;
    }
    if let Some(max_peaks) = overrides.max_peaks {
        config.peaks.max_peaks = Some(max_peaks);
    }
    debug!(?config, "Effective detector config");

    config.validate()?;
    Ok(config)
}
