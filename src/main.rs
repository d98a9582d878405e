//! Headless node walk driver
//!
//! Run with: cargo run --features cli --bin node-walk
//!
//! Configured through `NODE_WALK_*` environment variables; see
//! [`node_walk::model::config`].

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use node_walk::model::{SimConfig, Simulation};
    use std::time::Duration;
    use tracing::{error, info, warn};
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,node_walk=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = SimConfig::from_env()?;
    let max_ticks: u64 = match std::env::var("NODE_WALK_TICKS") {
        Ok(raw) => raw.trim().parse()?,
        Err(_) => 50,
    };
    let dump_json = std::env::var("NODE_WALK_JSON").is_ok_and(|v| v == "1");

    let mut sim = Simulation::from_config(config)?;
    info!(
        nodes = sim.nodes().len(),
        policy = %sim.policy(),
        min = sim.bounds().min(),
        max = sim.bounds().max(),
        seed = sim.seed(),
        ticks = max_ticks,
        "Starting node walk"
    );

    let mut interval =
        tokio::time::interval(Duration::from_millis(sim.config().tick_interval_ms));

    while sim.tick() < max_ticks {
        tokio::select! {
            _ = interval.tick() => {
                if let Err(e) = sim.step() {
                    error!(error = %e, tick = sim.tick(), "Step failed");
                    return Err(e.into());
                }
                for (idx, node) in sim.nodes().iter().enumerate() {
                    let p = node.current_position();
                    info!(tick = sim.tick(), node = idx + 1, x = p.x, y = p.y, z = p.z, "position");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                warn!(tick = sim.tick(), "Interrupted");
                break;
            }
        }
    }

    info!(tick = sim.tick(), "Finished\n{}", sim.summary().trim_end());

    if dump_json {
        println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
    }
    Ok(())
}
