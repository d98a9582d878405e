//! "User Inputs" and "Node Location Summary" boxes

use eframe::egui;

use super::{NodeWalkApp, PathStyle};
use crate::model::MovementPolicy;
use crate::theme::colors;

const INPUT_BOX_WIDTH: f32 = 100.0;

impl NodeWalkApp {
    pub(crate) fn render_inputs(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.set_min_width(ui.available_width());
            ui.label(egui::RichText::new("User Inputs").strong());

            ui.horizontal(|ui| {
                ui.label("Type of Path:");
                egui::ComboBox::from_id_salt("path_type")
                    .selected_text(self.path_style.label())
                    .show_ui(ui, |ui| {
                        for &style in PathStyle::ALL {
                            ui.selectable_value(&mut self.path_style, style, style.label());
                        }
                    });
            });

            ui.horizontal(|ui| {
                ui.label("Movement:");
                let mut policy = self.sim.policy();
                egui::ComboBox::from_id_salt("policy")
                    .selected_text(policy.label())
                    .show_ui(ui, |ui| {
                        for &p in MovementPolicy::ALL {
                            ui.selectable_value(&mut policy, p, p.label());
                        }
                    });
                self.sim.set_policy(policy);
            });

            ui.horizontal(|ui| {
                ui.label("Number of Nodes:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.count_input)
                        .desired_width(INPUT_BOX_WIDTH),
                );
            });

            ui.horizontal(|ui| {
                if ui.button("Run").clicked() {
                    self.start();
                }
                if ui.button("Stop").clicked() {
                    self.stop();
                }
            });

            if let Some(status) = &self.status {
                ui.label(egui::RichText::new(status).color(colors::TEXT_ERROR).small());
            }
        });
    }

    pub(crate) fn render_summary(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.set_min_width(ui.available_width());
            ui.label(egui::RichText::new("Node Location Summary").strong());
            egui::ScrollArea::vertical()
                .max_height(120.0)
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(self.sim.summary()).monospace());
                });
            ui.label(
                egui::RichText::new(format!("tick {} / seed {}", self.sim.tick(), self.sim.seed()))
                    .color(colors::TEXT_MUTED)
                    .small(),
            );
        });
    }
}
