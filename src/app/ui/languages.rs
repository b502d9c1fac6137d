use eframe::egui;

use crate::model::VulnerabilityReport;

use super::charts;

pub fn languages(ui: &mut egui::Ui, report: &VulnerabilityReport) {
    let rows = report.languages_by_count();

    ui.heading("Language Distribution");
    ui.add_space(4.0);
    let hovered = charts::bar_chart(ui, &rows, 300.0);

    ui.add_space(12.0);
    ui.heading("Language Share");
    ui.add_space(4.0);
    charts::share_bar(ui, &rows, hovered);
}
