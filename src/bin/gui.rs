//! Native window for the node walk
//!
//! Run with: cargo run --features gui --bin node-walk-gui

use eframe::egui;
use node_walk::app::NodeWalkApp;
use node_walk::model::{SimConfig, Simulation};
use tracing_subscriber::{fmt, EnvFilter};

/// Default frame size
const WIDTH: f32 = 500.0;
const HEIGHT: f32 = 500.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,node_walk=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let sim = Simulation::from_config(SimConfig::from_env()?)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("node-walk")
            .with_inner_size([WIDTH, HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "node-walk",
        options,
        Box::new(|cc| Ok(Box::new(NodeWalkApp::new(cc, sim)))),
    )?;
    Ok(())
}
