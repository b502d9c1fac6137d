use anyhow::Result;
use reqwest::Url;
use tracing::warn;

use crate::app::actions::Action;
use crate::app::state::AppState;

pub fn handle(state: &mut AppState, action: &Action) -> bool {
    match action {
        Action::SetTab(tab) => {
            state.ui.tab = *tab;
            true
        }
        Action::SetDetailsFilter(text) => {
            state.ui.details_filter = text.clone();
            true
        }
        Action::OpenFile(path) => {
            let url = state.config.source.blob_url(path);
            state.open_url(url);
            true
        }
        Action::OpenRepo => {
            let url = state.config.source.html_url();
            state.open_url(url);
            true
        }
        _ => false,
    }
}

impl AppState {
    fn open_url(&mut self, url: Result<Url>) {
        if let Err(e) = url.and_then(|u| self.platform.open_url(u.as_str())) {
            warn!("{:#}", e);
            self.ui.status = Some(format!("{:#}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::Tab;
    use crate::app::controllers::test_support::{opened_urls, test_state};

    #[test]
    fn open_file_builds_blob_url() {
        let mut state = test_state();
        handle(&mut state, &Action::OpenFile("sqli/a.py".into()));
        assert_eq!(
            opened_urls(&state),
            vec!["https://github.com/yeswehack/vulnerable-code-snippets/blob/main/sqli/a.py"]
        );
    }

    #[test]
    fn open_file_escapes_odd_paths() {
        let mut state = test_state();
        handle(&mut state, &Action::OpenFile("xss/pay load#1.js".into()));
        assert_eq!(
            opened_urls(&state),
            vec!["https://github.com/yeswehack/vulnerable-code-snippets/blob/main/xss/pay%20load%231.js"]
        );
    }

    #[test]
    fn tab_and_filter_are_stored() {
        let mut state = test_state();
        handle(&mut state, &Action::SetTab(Tab::Details));
        handle(&mut state, &Action::SetDetailsFilter("php".into()));
        assert_eq!(state.ui.tab, Tab::Details);
        assert_eq!(state.ui.details_filter, "php");
    }

    #[test]
    fn unrelated_actions_fall_through() {
        let mut state = test_state();
        assert!(!handle(&mut state, &Action::ExportReport));
    }
}
