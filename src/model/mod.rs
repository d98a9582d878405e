//! Platform-agnostic node motion model - shared between the GUI and CLI

pub mod bounds;
pub mod config;
pub mod error;
pub mod node;
pub mod policy;
pub mod position;
pub mod projection;
pub mod simulation;

pub use bounds::Bounds;
pub use config::{parse_node_count, SimConfig};
pub use error::{ConfigError, NodeError};
pub use node::Node;
pub use policy::MovementPolicy;
pub use position::Position;
pub use projection::Projection;
pub use simulation::{NodeSnapshot, Simulation, Snapshot};
