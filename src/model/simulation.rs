//! Collection of nodes stepped together, one policy per run

use std::fmt::Write as _;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::bounds::Bounds;
use super::config::SimConfig;
use super::error::{ConfigError, NodeError};
use super::node::Node;
use super::policy::MovementPolicy;
use super::position::Position;

/// Drives every node once per tick with a shared, seeded RNG
pub struct Simulation {
    config: SimConfig,
    nodes: Vec<Node>,
    rng: StdRng,
    seed: u64,
    tick: u64,
}

impl Simulation {
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let nodes = Self::spawn_nodes(&config, config.node_count);
        debug!(
            nodes = nodes.len(),
            seed,
            min = config.bounds.min(),
            max = config.bounds.max(),
            policy = %config.policy,
            "Simulation created"
        );
        Self {
            config,
            nodes,
            rng: StdRng::seed_from_u64(seed),
            seed,
            tick: 0,
        }
    }

    /// Seed from the config, or from OS entropy when none is set
    pub fn from_config(config: SimConfig) -> Result<Self, ConfigError> {
        let seed = config.resolve_seed()?;
        if config.seed.is_none() {
            info!(seed, "Seeded simulation from OS entropy (set NODE_WALK_SEED to replay)");
        }
        Ok(Self::new(config, seed))
    }

    fn spawn_nodes(config: &SimConfig, count: usize) -> Vec<Node> {
        (0..count)
            .map(|_| match config.history_limit {
                Some(limit) => Node::with_history_limit(config.bounds, limit),
                None => Node::new(config.bounds),
            })
            .collect()
    }

    /// Discard all nodes and start over with `node_count` fresh ones
    pub fn reset(&mut self, node_count: usize) {
        self.config.node_count = node_count;
        self.nodes = Self::spawn_nodes(&self.config, node_count);
        self.tick = 0;
        debug!(nodes = node_count, "Simulation reset");
    }

    pub fn set_policy(&mut self, policy: MovementPolicy) {
        if self.config.policy != policy {
            debug!(from = %self.config.policy, to = %policy, "Movement policy changed");
            self.config.policy = policy;
        }
    }

    /// Advance every node once with the active policy.
    ///
    /// The step range is checked before any node moves, so a failed walk
    /// leaves the whole collection untouched.
    pub fn step(&mut self) -> Result<(), NodeError> {
        let policy = self.config.policy;
        if policy == MovementPolicy::Walk {
            self.config.bounds.step_range()?;
        }

        for (idx, node) in self.nodes.iter_mut().enumerate() {
            let p = node.advance(policy, &mut self.rng)?;
            trace!(node = idx + 1, x = p.x, y = p.y, z = p.z, "Node stepped");
        }

        self.tick += 1;
        Ok(())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn policy(&self) -> MovementPolicy {
        self.config.policy
    }

    pub fn bounds(&self) -> Bounds {
        self.config.bounds
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// One `Node {n}: (x, y, z)` line per node, numbered from 1
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for (idx, node) in self.nodes.iter().enumerate() {
            // Writing to a String cannot fail
            let _ = writeln!(out, "Node {}: {}", idx + 1, node.current_position());
        }
        out
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            seed: self.seed,
            policy: self.config.policy,
            bounds: self.config.bounds,
            nodes: self
                .nodes
                .iter()
                .map(|node| NodeSnapshot {
                    current: node.current_position(),
                    updates: node.update_count(),
                    history: node.past_positions().iter().copied().collect(),
                })
                .collect(),
        }
    }
}

/// Serializable view of a run at one tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub seed: u64,
    pub policy: MovementPolicy,
    pub bounds: Bounds,
    pub nodes: Vec<NodeSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub current: Position,
    pub updates: u64,
    pub history: Vec<Position>,
}
