// src/app/ui/top_bar.rs
use eframe::egui;

use super::super::actions::Action;
use super::super::state::AppState;
use super::super::theme;

pub fn top_bar(_ctx: &egui::Context, ui: &mut egui::Ui, state: &mut AppState) -> Vec<Action> {
    let mut actions = vec![];

    ui.horizontal(|ui| {
        ui.heading("Vulnerability Sentinel");
        ui.separator();

        // ----- Source -----
        ui.label("Source:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut state.inputs.source_text)
                .hint_text("owner/repo@branch")
                .desired_width(280.0),
        );
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            actions.push(Action::ApplySource);
        }
        if ui.button("Apply").clicked() {
            actions.push(Action::ApplySource);
        }
        if ui.small_button("Reset").on_hover_text("Back to the default source").clicked() {
            actions.push(Action::ResetSource);
        }
        if ui.link("Open on GitHub").clicked() {
            actions.push(Action::OpenRepo);
        }

        ui.separator();

        // ----- Refresh -----
        let refresh = ui.add_enabled(!state.fetch.pending, egui::Button::new("↻ Refresh"));
        if refresh.clicked() {
            actions.push(Action::Refresh);
        }
        if state.fetch.pending {
            ui.spinner();
        }

        let has_data = state.results.snapshot.is_some();
        if ui.add_enabled(has_data, egui::Button::new("Export")).clicked() {
            actions.push(Action::ExportReport);
        }

        if let Some(snap) = &state.results.snapshot {
            ui.separator();
            ui.label(egui::RichText::new(format!("Last updated: {}", snap.fetched_at)).color(theme::MUTED));
        }
    });

    if let Some(err) = &state.inputs.source_error {
        ui.colored_label(theme::ERROR, err);
    }
    if let Some(status) = &state.ui.status {
        ui.label(egui::RichText::new(status).small().color(theme::MUTED));
    }

    actions
}
