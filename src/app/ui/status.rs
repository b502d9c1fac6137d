use eframe::egui;

use super::super::actions::Action;
use super::super::state::{AppState, ResultView};
use super::super::theme;

/// Loading / error / empty notices above the dashboard. Returns a retry
/// action when the user asks for one.
pub fn status_block(ui: &mut egui::Ui, state: &AppState, has_data: bool) -> Option<Action> {
    let mut action = None;

    if state.fetch.pending {
        let label = state
            .fetch
            .source
            .as_ref()
            .map(|s| s.to_string())
            .unwrap_or_else(|| state.source_label());
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new());
            ui.label(format!("Loading {} …", label));
        });
        if !has_data {
            return None;
        }
        ui.add_space(6.0);
    }

    match &state.results.view {
        ResultView::Failed(msg) => {
            egui::Frame::group(ui.style())
                .stroke(egui::Stroke::new(1.0, theme::ERROR))
                .show(ui, |ui| {
                    ui.colored_label(theme::ERROR, egui::RichText::new("Error loading data").strong());
                    ui.label(msg);
                    if has_data {
                        ui.label(egui::RichText::new("Showing the previous result.").small().color(theme::MUTED));
                    }
                    if ui.add_enabled(!state.fetch.pending, egui::Button::new("Try again")).clicked() {
                        action = Some(Action::Refresh);
                    }
                });
            ui.add_space(8.0);
        }
        ResultView::Empty => {
            ui.label(format!(
                "No categories found in {}. Only files below a top-level folder are counted.",
                state.source_label()
            ));
        }
        ResultView::Idle | ResultView::Loaded => {}
    }

    action
}
