//! Light aquamarine theme and per-node colours

use egui::Color32;

pub mod colors {
    use super::Color32;

    // === Backgrounds ===
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(102, 205, 170);  // #66CDAA - medium aquamarine
    pub const BG_PLOT: Color32 = Color32::from_rgb(250, 250, 250);     // #FAFAFA - canvas
    pub const BG_HOVER: Color32 = Color32::from_rgb(132, 222, 192);

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(16, 32, 28);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(60, 90, 80);
    pub const TEXT_ERROR: Color32 = Color32::from_rgb(170, 20, 20);

    // === Plot ===
    pub const CUBE_EDGE: Color32 = Color32::from_rgb(190, 190, 190);
    pub const BORDER: Color32 = Color32::from_rgb(40, 110, 90);

    /// Cycle used for node traces, same order as matplotlib's default
    pub const NODE_CYCLE: [Color32; 10] = [
        Color32::from_rgb(31, 119, 180),
        Color32::from_rgb(255, 127, 14),
        Color32::from_rgb(44, 160, 44),
        Color32::from_rgb(214, 39, 40),
        Color32::from_rgb(148, 103, 189),
        Color32::from_rgb(140, 86, 75),
        Color32::from_rgb(227, 119, 194),
        Color32::from_rgb(127, 127, 127),
        Color32::from_rgb(188, 189, 34),
        Color32::from_rgb(23, 190, 207),
    ];
}

/// Colour for the node at `index` (0-based)
pub fn node_color(index: usize) -> Color32 {
    colors::NODE_CYCLE[index % colors::NODE_CYCLE.len()]
}

pub fn visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::light();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_PRIMARY;
    visuals.extreme_bg_color = BG_PLOT;
    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.hovered.weak_bg_fill = BG_HOVER;

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_colors_cycle() {
        assert_eq!(node_color(0), node_color(10));
        assert_ne!(node_color(0), node_color(1));
    }
}
