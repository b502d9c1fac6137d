use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::format;
use crate::model::{CategorySummary, VulnerabilityReport};

use super::super::actions::Action;
use super::super::state::AppState;
use super::super::theme;

fn badge(ui: &mut egui::Ui, text: String) {
    egui::Frame::none()
        .stroke(egui::Stroke::new(1.0, theme::GRID))
        .rounding(8.0)
        .inner_margin(egui::Margin::symmetric(6.0, 1.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small());
        });
}

fn category_matches(c: &CategorySummary, filter: &str) -> bool {
    format::contains_case_insensitive(&c.category, filter)
        || c.files.iter().any(|f| format::contains_case_insensitive(&f.path, filter))
}

fn files_table(ui: &mut egui::Ui, c: &CategorySummary, filter: &str, actions: &mut Vec<Action>) {
    // Whole category matched by name: list every file.
    let show_all = format::contains_case_insensitive(&c.category, filter);

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::remainder().at_least(240.0))
        .column(Column::auto().at_least(90.0))
        .header(18.0, |mut header| {
            header.col(|ui| {
                ui.strong("File");
            });
            header.col(|ui| {
                ui.strong("Language");
            });
        })
        .body(|mut body| {
            for f in &c.files {
                if !show_all && !format::contains_case_insensitive(&f.path, filter) {
                    continue;
                }
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        let link = ui.visuals().hyperlink_color;
                        let resp = ui
                            .add(
                                egui::Label::new(
                                    egui::RichText::new(&f.path)
                                        .monospace()
                                        .color(link),
                                )
                                .truncate(true)
                                .sense(egui::Sense::click()),
                            )
                            .on_hover_cursor(egui::CursorIcon::PointingHand)
                            .on_hover_text("Open on GitHub");
                        if resp.clicked() {
                            actions.push(Action::OpenFile(f.path.clone()));
                        }
                    });
                    row.col(|ui| {
                        ui.label(&f.language);
                    });
                });
            }
        });
}

pub fn details(ui: &mut egui::Ui, state: &AppState, report: &VulnerabilityReport) -> Vec<Action> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.label("Filter:");
        let mut filter = state.ui.details_filter.clone();
        let resp = ui.add(
            egui::TextEdit::singleline(&mut filter)
                .hint_text("category or path")
                .desired_width(240.0),
        );
        if resp.changed() {
            actions.push(Action::SetDetailsFilter(filter));
        }
    });
    ui.add_space(6.0);

    let filter = state.ui.details_filter.trim().to_string();
    let mut shown = 0usize;

    for (idx, c) in report.categories.iter().enumerate() {
        if !category_matches(c, &filter) {
            continue;
        }
        shown += 1;

        ui.push_id(("category", idx), |ui| {
            let title = egui::RichText::new(format!("{}  ({} files)", c.category, c.file_count))
                .strong()
                .color(theme::chart_color(idx));
            egui::CollapsingHeader::new(title)
                .id_source(("category_header", &c.category))
                .default_open(false)
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Languages Used").small().color(theme::MUTED));
                    ui.horizontal_wrapped(|ui| {
                        for (lang, count) in c.languages_by_count() {
                            badge(ui, format!("{} ({})", lang, count));
                        }
                    });
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new("Files").small().color(theme::MUTED));
                    files_table(ui, c, &filter, &mut actions);
                });
            ui.label(
                egui::RichText::new(format::format_language_counts(&c.language_counts, 3))
                    .small()
                    .color(theme::MUTED),
            );
        });
    }

    if shown == 0 {
        ui.label(format!("No category or file matches '{}'.", filter));
    }

    actions
}
