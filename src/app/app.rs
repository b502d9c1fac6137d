use eframe::egui;

use super::actions::Tab;
use super::state::ResultView;
use super::{theme, ui};
use super::AppState;

impl eframe::App for AppState {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        theme::apply_once(ctx);

        // First frame: kick off the initial fetch.
        if self.results.view == ResultView::Idle && !self.fetch.pending && self.fetch.generation == 0 {
            self.start_fetch();
        }

        // Native window title
        let title = format!("Vulnerability Sentinel - {}", self.source_label());
        if self.last_window_title.as_deref() != Some(title.as_str()) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.last_window_title = Some(title);
        }

        // Top bar
        egui::TopBottomPanel::top("top").show(ctx, |ui_top| {
            let actions = ui::top_bar::top_bar(ctx, ui_top, self);
            for a in actions {
                self.apply_action(a);
            }
        });

        let mut actions = Vec::new();
        // Held outside the state while panels borrow it mutably; restored below.
        let snapshot = self.results.snapshot.take();
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(a) = ui::status::status_block(ui, self, snapshot.is_some()) {
                actions.push(a);
            }

            let Some(snapshot) = snapshot.as_ref() else {
                return;
            };
            let report = &snapshot.report;

            ui::stat_cards::stat_cards(ui, report);
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                for tab in Tab::ALL {
                    if ui.selectable_label(self.ui.tab == tab, tab.label()).clicked() {
                        actions.push(super::actions::Action::SetTab(tab));
                    }
                }
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.ui.tab {
                    Tab::Overview => ui::overview::overview(ui, self, report),
                    Tab::Languages => ui::languages::languages(ui, report),
                    Tab::Details => actions.extend(ui::details::details(ui, self, report)),
                });
        });
        self.results.snapshot = snapshot;
        for a in actions {
            self.apply_action(a);
        }

        // keep repainting so we notice completion quickly
        if self.finalize_frame() {
            ctx.request_repaint();
        }
    }
}
