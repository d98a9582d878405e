//! 3D integer position

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point in the simulation cube
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Position {
    /// Implicit placement of a freshly created node
    pub const ORIGIN: Position = Position { x: 0, y: 0, z: 0 };

    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    pub const fn from_axes([x, y, z]: [i64; 3]) -> Self {
        Self { x, y, z }
    }

    /// Coordinates in x, y, z order
    pub const fn axes(&self) -> [i64; 3] {
        [self.x, self.y, self.z]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
