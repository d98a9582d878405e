//! Simulation configuration, read from `NODE_WALK_*` environment variables

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::bounds::Bounds;
use super::error::ConfigError;
use super::policy::MovementPolicy;

pub const ENV_COUNT: &str = "NODE_WALK_COUNT";
pub const ENV_MIN: &str = "NODE_WALK_MIN";
pub const ENV_MAX: &str = "NODE_WALK_MAX";
pub const ENV_POLICY: &str = "NODE_WALK_POLICY";
pub const ENV_TICK_MS: &str = "NODE_WALK_TICK_MS";
pub const ENV_SEED: &str = "NODE_WALK_SEED";
/// Positions kept per node, 0 = unbounded
pub const ENV_HISTORY: &str = "NODE_WALK_HISTORY";

/// Parameters shared by every node in a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    pub node_count: usize,
    pub bounds: Bounds,
    pub policy: MovementPolicy,
    /// Delay between ticks
    pub tick_interval_ms: u64,
    /// Fixed RNG seed; drawn from OS entropy when absent
    pub seed: Option<u64>,
    /// Per-node history retention; `None` keeps everything
    pub history_limit: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            node_count: 2,
            bounds: Bounds::default(),
            policy: MovementPolicy::Walk,
            tick_interval_ms: 200,
            seed: None,
            history_limit: None,
        }
    }
}

impl SimConfig {
    /// Defaults overlaid with whatever `NODE_WALK_*` variables are set
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overlaid with values from `lookup(name)`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let node_count = match lookup(ENV_COUNT) {
            Some(raw) => parse_node_count(&raw)?,
            None => defaults.node_count,
        };
        let min = parse_var(&lookup, ENV_MIN)?.unwrap_or(defaults.bounds.min());
        let max = parse_var(&lookup, ENV_MAX)?.unwrap_or(defaults.bounds.max());
        let bounds = Bounds::new(min, max)?;
        let policy = parse_var(&lookup, ENV_POLICY)?.unwrap_or(defaults.policy);
        let tick_interval_ms = parse_var(&lookup, ENV_TICK_MS)?.unwrap_or(defaults.tick_interval_ms);
        if tick_interval_ms == 0 {
            return Err(ConfigError::InvalidVar {
                name: ENV_TICK_MS,
                value: "0".to_string(),
                reason: "tick interval must be at least 1 ms".to_string(),
            });
        }
        let seed = parse_var(&lookup, ENV_SEED)?;
        let history_limit = match parse_var::<usize, _>(&lookup, ENV_HISTORY)? {
            Some(0) | None => None,
            Some(limit) => Some(limit),
        };

        let config = Self {
            node_count,
            bounds,
            policy,
            tick_interval_ms,
            seed,
            history_limit,
        };
        debug!(?config, "Loaded simulation config");
        Ok(config)
    }

    /// The configured seed, or a fresh one from the OS entropy source
    pub fn resolve_seed(&self) -> Result<u64, ConfigError> {
        if let Some(seed) = self.seed {
            return Ok(seed);
        }
        let mut buf = [0u8; 8];
        getrandom::getrandom(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }
}

/// Parse the node count field; surrounding whitespace is ignored
pub fn parse_node_count(raw: &str) -> Result<usize, ConfigError> {
    raw.trim().parse().map_err(|e: std::num::ParseIntError| ConfigError::InvalidVar {
        name: ENV_COUNT,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::InvalidVar {
            name,
            value: raw.clone(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeError;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = SimConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SimConfig::default());
        assert_eq!(config.bounds, Bounds::new(-100, 100).unwrap());
        assert_eq!(config.tick_interval_ms, 200);
    }

    #[test]
    fn overlays_every_variable() {
        let config = SimConfig::from_lookup(lookup(&[
            (ENV_COUNT, " 5 "),
            (ENV_MIN, "-50"),
            (ENV_MAX, "50"),
            (ENV_POLICY, "jump"),
            (ENV_TICK_MS, "100"),
            (ENV_SEED, "42"),
            (ENV_HISTORY, "16"),
        ]))
        .unwrap();

        assert_eq!(config.node_count, 5);
        assert_eq!(config.bounds, Bounds::new(-50, 50).unwrap());
        assert_eq!(config.policy, MovementPolicy::Jump);
        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.history_limit, Some(16));
    }

    #[test]
    fn zero_history_means_unbounded() {
        let config = SimConfig::from_lookup(lookup(&[(ENV_HISTORY, "0")])).unwrap();
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn malformed_values_name_the_variable() {
        let err = SimConfig::from_lookup(lookup(&[(ENV_TICK_MS, "soon")])).unwrap_err();
        match err {
            ConfigError::InvalidVar { name, value, .. } => {
                assert_eq!(name, ENV_TICK_MS);
                assert_eq!(value, "soon");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = SimConfig::from_lookup(lookup(&[(ENV_POLICY, "fly")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: ENV_POLICY, .. }));

        let err = SimConfig::from_lookup(lookup(&[(ENV_TICK_MS, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: ENV_TICK_MS, .. }));
    }

    #[test]
    fn inverted_bounds_fail_fast() {
        let err = SimConfig::from_lookup(lookup(&[(ENV_MIN, "10"), (ENV_MAX, "-10")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Bounds(NodeError::InvalidBounds { min: 10, max: -10 })
        ));
    }

    #[test]
    fn node_count_rejects_garbage() {
        assert_eq!(parse_node_count("3").unwrap(), 3);
        assert_eq!(parse_node_count("  12\n").unwrap(), 12);
        assert!(parse_node_count("two").is_err());
        assert!(parse_node_count("-1").is_err());
        assert!(parse_node_count("").is_err());
    }

    #[test]
    fn fixed_seed_is_used_as_is() {
        let config = SimConfig {
            seed: Some(99),
            ..SimConfig::default()
        };
        assert_eq!(config.resolve_seed().unwrap(), 99);
    }
}
