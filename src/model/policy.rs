//! Movement policies a node can be driven with

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a node picks its next position on each tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementPolicy {
    /// Uniform random placement anywhere in `[min, max)`
    Jump,
    /// Bounded random step from the current position
    #[default]
    Walk,
}

impl MovementPolicy {
    pub const ALL: &'static [MovementPolicy] = &[MovementPolicy::Walk, MovementPolicy::Jump];

    pub fn label(self) -> &'static str {
        match self {
            MovementPolicy::Jump => "Random Jump",
            MovementPolicy::Walk => "Random Walk",
        }
    }
}

impl fmt::Display for MovementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unrecognised policy name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown movement policy {0:?} (expected jump or walk)")]
pub struct UnknownPolicy(pub String);

impl FromStr for MovementPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jump" | "random" => Ok(MovementPolicy::Jump),
            "walk" | "random-walk" => Ok(MovementPolicy::Walk),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}
