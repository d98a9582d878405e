//! Projected 3D plot of every node, drawn per the selected path style

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints, Points};

use super::{NodeWalkApp, PathStyle};
use crate::theme::{colors, node_color};

impl NodeWalkApp {
    pub(crate) fn render_canvas(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("yaw").color(colors::TEXT_MUTED));
            ui.add(egui::Slider::new(&mut self.projection.yaw, -180.0..=180.0).show_value(false));
            ui.label(egui::RichText::new("pitch").color(colors::TEXT_MUTED));
            ui.add(egui::Slider::new(&mut self.projection.pitch, -90.0..=90.0).show_value(false));
            if ui.button("Reset view").clicked() {
                self.projection = Default::default();
            }
        });

        let bounds = self.sim.bounds();
        // the projected cube can reach sqrt(3) times the half-edge
        let reach = bounds.min().abs().max(bounds.max().abs()) as f64 * 1.8;
        let projection = self.projection;
        let style = self.path_style;
        let nodes = self.sim.nodes();

        Plot::new("node_canvas")
            .data_aspect(1.0)
            .show_axes([false, false])
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_scroll(false)
            .include_x(-reach)
            .include_x(reach)
            .include_y(-reach)
            .include_y(reach)
            .show(ui, |plot_ui| {
                for [a, b] in projection.cube_edges(bounds) {
                    plot_ui.line(
                        Line::new(PlotPoints::from(vec![a, b]))
                            .color(colors::CUBE_EDGE)
                            .width(1.0),
                    );
                }

                for (idx, node) in nodes.iter().enumerate() {
                    let color = node_color(idx);
                    let history = node.past_positions();

                    match style {
                        PathStyle::ConnectedPaths => {
                            let points: PlotPoints =
                                history.iter().map(|&p| projection.project(p)).collect();
                            plot_ui.line(Line::new(points).color(color).width(1.5));
                        }
                        PathStyle::UnconnectedDots => {
                            let points: PlotPoints =
                                history.iter().map(|&p| projection.project(p)).collect();
                            plot_ui.points(Points::new(points).color(color).radius(2.5).filled(true));
                        }
                        PathStyle::SingleDot => {
                            if let Some(&last) = history.back() {
                                plot_ui.points(
                                    Points::new(PlotPoints::from(vec![projection.project(last)]))
                                        .color(color)
                                        .radius(3.5)
                                        .filled(true),
                                );
                            }
                        }
                    }
                }
            });
    }
}
