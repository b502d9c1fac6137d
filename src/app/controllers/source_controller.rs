use tracing::{info, warn};

use crate::app::actions::Action;
use crate::app::state::{AppState, APP_NAME};
use crate::config::{self, RepoSource};

pub fn handle(state: &mut AppState, action: &Action) -> bool {
    match action {
        Action::ApplySource => {
            let text = state.inputs.source_text.clone();
            state.apply_source_text(&text);
            true
        }
        Action::ResetSource => {
            state.inputs.source_text = RepoSource::default().to_string();
            state.apply_source_text(&RepoSource::default().to_string());
            true
        }
        _ => false,
    }
}

impl AppState {
    pub(crate) fn apply_source_text(&mut self, text: &str) {
        let source = match RepoSource::parse(text) {
            Ok(s) => s,
            Err(e) => {
                self.inputs.source_error = Some(format!("{:#}", e));
                return;
            }
        };
        self.inputs.source_error = None;
        self.inputs.source_text = source.to_string();

        if source == self.config.source && (self.fetch.pending || self.results.snapshot.is_some()) {
            return;
        }

        info!(from = %self.config.source, to = %source, "switching source");
        self.config.source = source;
        self.results.snapshot = None;
        self.persist_source();
        self.start_fetch();
    }

    fn persist_source(&mut self) {
        let dir = match self.platform.app_data_dir(APP_NAME) {
            Ok(d) => d,
            Err(e) => {
                warn!("settings not saved: {:#}", e);
                return;
            }
        };
        if let Err(e) = config::save_settings(&config::settings_path(&dir), &self.config.source) {
            warn!("settings not saved: {:#}", e);
            self.ui.status = Some(format!("Settings not saved: {:#}", e));
        }
    }
}
