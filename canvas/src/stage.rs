//! Stage geometry: points in stage space and the visible stage rectangle.

#[cfg(test)]
#[path = "stage_test.rs"]
mod stage_test;

use serde::{Deserialize, Serialize};

/// A point in stage coordinates (CSS pixels, origin at the top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise offset by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Size of the drawable stage.
///
/// The host reports its container size on mount and on every resize; new
/// shapes are dropped near the center of whatever size is current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    pub width: f64,
    pub height: f64,
}

impl Default for Stage {
    fn default() -> Self {
        Self { width: crate::consts::DEFAULT_STAGE_WIDTH, height: crate::consts::DEFAULT_STAGE_HEIGHT }
    }
}

impl Stage {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center of the stage.
    #[must_use]
    pub fn center(&self) -> Point {
        Point { x: self.width / 2.0, y: self.height / 2.0 }
    }

    /// Whether both dimensions are finite and strictly positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}
