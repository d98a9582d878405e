//! Native egui window around the node simulation
//!
//! Left to right: user inputs, location summary, then the projected 3D plot
//! underneath. Steps are paced by a [`Ticker`] instead of a timer callback.

mod canvas;
mod controls;

use std::time::Duration;

use eframe::egui;
use tracing::{error, info, warn};

use crate::model::{parse_node_count, Projection, Simulation};
use crate::theme::{colors, visuals};
use crate::time::{now_seconds, Ticker};

/// How each node's history is drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathStyle {
    /// Line through every past position
    #[default]
    ConnectedPaths,
    /// Dot at every past position
    UnconnectedDots,
    /// Dot at the latest position only
    SingleDot,
}

impl PathStyle {
    pub const ALL: &'static [PathStyle] = &[
        PathStyle::ConnectedPaths,
        PathStyle::UnconnectedDots,
        PathStyle::SingleDot,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PathStyle::ConnectedPaths => "Connected Paths",
            PathStyle::UnconnectedDots => "Unconnected Dots",
            PathStyle::SingleDot => "Single Dot",
        }
    }
}

pub struct NodeWalkApp {
    pub(crate) sim: Simulation,
    /// True between Run and Stop (or a failed step)
    pub(crate) running: bool,
    pub(crate) path_style: PathStyle,
    /// Raw contents of the node count field
    pub(crate) count_input: String,
    /// Last input or simulation error, shown under the buttons
    pub(crate) status: Option<String>,
    pub(crate) projection: Projection,
    ticker: Ticker,
}

impl NodeWalkApp {
    pub fn new(cc: &eframe::CreationContext<'_>, sim: Simulation) -> Self {
        cc.egui_ctx.set_visuals(visuals());
        Self::with_simulation(sim)
    }

    /// App state without a window; nodes are created on the first Run
    pub fn with_simulation(mut sim: Simulation) -> Self {
        let count_input = sim.config().node_count.to_string();
        let ticker = Ticker::from_millis(sim.config().tick_interval_ms);
        sim.reset(0);
        Self {
            sim,
            running: false,
            path_style: PathStyle::default(),
            count_input,
            status: None,
            projection: Projection::default(),
            ticker,
        }
    }

    /// Run button: rebuild the node collection and start stepping
    pub(crate) fn start(&mut self) {
        match parse_node_count(&self.count_input) {
            Ok(count) => {
                self.sim.reset(count);
                self.status = None;
                self.running = true;
                self.ticker.reset();
                info!(nodes = count, policy = %self.sim.policy(), "Run started");
            }
            Err(e) => {
                warn!(error = %e, "Rejected node count");
                self.status = Some(format!("Number of nodes: {e}"));
                self.running = false;
            }
        }
    }

    /// Stop button
    pub(crate) fn stop(&mut self) {
        if self.running {
            info!(tick = self.sim.tick(), "Run stopped");
        }
        self.running = false;
    }

    /// Step once if running and a tick is due at `now`
    pub(crate) fn poll(&mut self, now: f64) {
        if !self.running || !self.ticker.poll(now) {
            return;
        }
        if let Err(e) = self.sim.step() {
            error!(error = %e, "Simulation step failed");
            self.status = Some(e.to_string());
            self.running = false;
        }
    }
}

impl eframe::App for NodeWalkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("inputs")
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.columns(2, |cols| {
                    self.render_inputs(&mut cols[0]);
                    self.render_summary(&mut cols[1]);
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY).inner_margin(8.0))
            .show(ctx, |ui| {
                self.render_canvas(ui);
            });

        let now = now_seconds();
        self.poll(now);

        if self.running {
            ctx.request_repaint_after(Duration::from_secs_f64(self.ticker.remaining(now)));
        }
    }
}
