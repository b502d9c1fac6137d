use eframe::egui;

use crate::model::VulnerabilityReport;

use super::super::theme;

fn card(ui: &mut egui::Ui, title: &str, value: &str, caption: Option<&str>) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.set_min_width(170.0);
            ui.label(egui::RichText::new(title).small().color(theme::MUTED));
            ui.label(egui::RichText::new(value).size(22.0).strong());
            if let Some(c) = caption {
                ui.label(egui::RichText::new(c).small().color(theme::MUTED));
            }
        });
}

pub fn stat_cards(ui: &mut egui::Ui, report: &VulnerabilityReport) {
    let top = report
        .top_category()
        .map(|c| c.category.as_str())
        .unwrap_or("N/A");

    ui.horizontal_wrapped(|ui| {
        card(
            ui,
            "Total Files",
            &report.total_files().to_string(),
            Some("Vulnerable code samples"),
        );
        card(ui, "Vulnerability Categories", &report.categories.len().to_string(), None);
        card(ui, "Programming Languages", &report.language_count().to_string(), None);
        card(ui, "Most Common Category", top, None);
    });
}
