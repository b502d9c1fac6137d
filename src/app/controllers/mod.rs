pub mod export_controller;
pub mod fetch_controller;
pub mod source_controller;
pub mod view_controller;

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::sync::Arc;

    use anyhow::{bail, Result};

    use crate::app::state::AppState;
    use crate::config::AppConfig;
    use crate::platform::Platform;

    thread_local! {
        static OPENED: RefCell<Vec<String>> = RefCell::new(Vec::new());
    }

    /// No app-data dir, no browser; the save dialog answers with a fixed path.
    struct FakePlatform {
        save_to: Option<PathBuf>,
    }

    impl Platform for FakePlatform {
        fn save_file(&self, _title: &str, _default_name: &str) -> Option<PathBuf> {
            self.save_to.clone()
        }

        fn app_data_dir(&self, _app_name: &str) -> Result<PathBuf> {
            bail!("no app data dir in tests")
        }

        fn open_url(&self, url: &str) -> Result<()> {
            OPENED.with(|o| o.borrow_mut().push(url.to_string()));
            Ok(())
        }
    }

    pub fn test_state() -> AppState {
        OPENED.with(|o| o.borrow_mut().clear());
        AppState::with_config(Arc::new(FakePlatform { save_to: None }), AppConfig::default())
    }

    pub fn test_state_saving_to(path: PathBuf) -> AppState {
        let mut state = test_state();
        state.platform = Arc::new(FakePlatform { save_to: Some(path) });
        state
    }

    pub fn opened_urls(_state: &AppState) -> Vec<String> {
        OPENED.with(|o| o.borrow().clone())
    }
}
