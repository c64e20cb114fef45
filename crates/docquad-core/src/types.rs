// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for document boundary detection.

use serde::{Deserialize, Serialize};

/// A straight line in Hesse normal form, as reported by the Hough peak finder.
///
/// The line is the set of points satisfying
///   `x * cos(angle) + y * sin(angle) = distance`
/// so `angle` is the direction of the perpendicular from the image origin and
/// `distance` is the signed length of that perpendicular.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarLine {
    /// Angle of the normal in radians, usually within `[-π/4, 3π/4)`.
    pub angle: f64,
    /// Signed perpendicular distance from the origin, in pixels.
    pub distance: f64,
    /// Accumulator strength of the peak this line came from.
    pub votes: f64,
}

impl PolarLine {
    pub fn new(angle: f64, distance: f64, votes: f64) -> Self {
        Self {
            angle,
            distance,
            votes,
        }
    }
}

/// Orientation bucket of a detected line.
///
/// Naming follows the Hesse normal form: a line whose normal angle is near 0
/// runs along the y axis (`x = distance`) and is therefore `Vertical`; a normal
/// angle near π/2 gives `y = distance`, a `Horizontal` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// Too far from either axis to bound a document edge.
    Irrelevant,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
            Orientation::Irrelevant => write!(f, "irrelevant"),
        }
    }
}

/// A polar line together with the orientation bucket it was assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    pub line: PolarLine,
    pub orientation: Orientation,
}

impl ClassifiedLine {
    pub fn is_horizontal(&self) -> bool {
        self.orientation == Orientation::Horizontal
    }

    pub fn is_vertical(&self) -> bool {
        self.orientation == Orientation::Vertical
    }
}

/// A point in image pixel coordinates. Used for corner candidates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Whether the point lies inside a `width` x `height` image.
    pub fn is_within(&self, width: u32, height: u32) -> bool {
        (0.0..=width as f64).contains(&self.x) && (0.0..=height as f64).contains(&self.y)
    }
}

/// Interval of the sampled axis used to turn a polar line into a segment.
///
/// Without image context the interval is `(0, 1000)`; callers that know the
/// image width should pass `(0, width)` so sampled endpoints stay on-image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    pub start: f64,
    pub end: f64,
}

impl SampleRange {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// The range `(0, width)` for an image of the given width.
    pub fn for_width(width: u32) -> Self {
        Self::new(0.0, width as f64)
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

impl Default for SampleRange {
    fn default() -> Self {
        Self::new(0.0, 1000.0)
    }
}
