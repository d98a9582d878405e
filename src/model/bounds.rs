//! Shared cube bounds for all three axes

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::error::NodeError;
use super::position::Position;

/// Divisor applied to each bound to get the per-step walk range
const STEP_DIVISOR: i64 = 10;

/// Inclusive cube edge `[min, max]`, identical on x, y and z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds")]
pub struct Bounds {
    min: i64,
    max: i64,
}

#[derive(Deserialize)]
struct RawBounds {
    min: i64,
    max: i64,
}

impl TryFrom<RawBounds> for Bounds {
    type Error = NodeError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Bounds::new(raw.min, raw.max)
    }
}

impl Bounds {
    /// Validate and build bounds. `min` must be strictly below `max`.
    pub fn new(min: i64, max: i64) -> Result<Self, NodeError> {
        if min >= max {
            return Err(NodeError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Every axis within `[min, max]`
    pub fn contains(&self, p: Position) -> bool {
        p.axes().iter().all(|v| (self.min..=self.max).contains(v))
    }

    /// Every axis within `[min, max)`
    pub fn contains_half_open(&self, p: Position) -> bool {
        p.axes().iter().all(|v| (self.min..self.max).contains(v))
    }

    /// Pin a single coordinate to the nearest edge if it left the cube
    pub fn clamp(&self, v: i64) -> i64 {
        if v > self.max {
            self.max
        } else if v < self.min {
            self.min
        } else {
            v
        }
    }

    /// Half-open range a single walk step is drawn from.
    ///
    /// Both ends are a tenth of the bound, truncated toward zero, so narrow
    /// cubes (e.g. `[0, 5]`) yield an empty range.
    pub fn step_range(&self) -> Result<Range<i64>, NodeError> {
        let low = self.min / STEP_DIVISOR;
        let high = self.max / STEP_DIVISOR;
        if low >= high {
            return Err(NodeError::EmptyStepRange { low, high });
        }
        Ok(low..high)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self { min: -100, max: 100 }
    }
}
