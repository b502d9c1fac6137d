use eframe::egui::{self, Color32};

pub const ACCENT: Color32 = Color32::from_rgb(0x63, 0x66, 0xf1);
pub const ERROR: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
pub const MUTED: Color32 = Color32::from_rgb(0x64, 0x74, 0x8b);
pub const GRID: Color32 = Color32::from_rgb(0x33, 0x41, 0x55);

/// Series colors, cycled by index.
pub const CHART_COLORS: [Color32; 8] = [
    Color32::from_rgb(0x4f, 0x46, 0xe5),
    Color32::from_rgb(0xef, 0x44, 0x44),
    Color32::from_rgb(0x10, 0xb9, 0x81),
    Color32::from_rgb(0xf5, 0x9e, 0x0b),
    Color32::from_rgb(0x3b, 0x82, 0xf6),
    Color32::from_rgb(0x8b, 0x5c, 0xf6),
    Color32::from_rgb(0xec, 0x48, 0x99),
    Color32::from_rgb(0x14, 0xb8, 0xa6),
];

pub fn chart_color(index: usize) -> Color32 {
    CHART_COLORS[index % CHART_COLORS.len()]
}

pub fn apply_once(ctx: &egui::Context) {
    static ONCE: std::sync::Once = std::sync::Once::new();
    ONCE.call_once(|| {
        let mut visuals = egui::Visuals::dark();
        visuals.hyperlink_color = ACCENT;
        visuals.selection.bg_fill = ACCENT.gamma_multiply(0.6);
        ctx.set_visuals(visuals);
    });
}
