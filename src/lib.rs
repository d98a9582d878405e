//! Node Walk - bounded random movement of nodes in a 3D cube
//!
//! Each [`model::Node`] holds a position inside a shared cube and moves
//! under one of two policies:
//! - jump: uniform random placement in `[min, max)`
//! - walk: a small random step from the current position, clamped per axis
//!
//! A [`model::Simulation`] steps a collection of nodes once per tick. The
//! `gui` feature adds an egui window that plots the nodes; the `cli`
//! feature builds a headless driver that logs them.

pub mod model;
pub mod time;

#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
pub mod theme;

pub use model::{Bounds, MovementPolicy, Node, NodeError, Position, SimConfig, Simulation};
