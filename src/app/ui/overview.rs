use eframe::egui;

use crate::model::VulnerabilityReport;

use super::super::state::AppState;
use super::charts;

pub fn overview(ui: &mut egui::Ui, state: &mut AppState, report: &VulnerabilityReport) {
    let rows: Vec<(String, u64)> = report
        .categories
        .iter()
        .map(|c| (c.category.clone(), c.file_count))
        .collect();

    ui.heading("Vulnerability Distribution");
    ui.add_space(4.0);
    let hovered = charts::bar_chart(ui, &rows, 300.0);
    if hovered.is_some() {
        state.ui.hovered_category = hovered;
    }

    ui.add_space(12.0);
    ui.heading("Category Distribution");
    ui.add_space(4.0);
    charts::share_bar(ui, &rows, state.ui.hovered_category);
}
