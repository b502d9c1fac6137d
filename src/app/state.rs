// src/app/state.rs
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Instant;

use crate::config::{AppConfig, RepoSource};
use crate::github::FetchOutcome;
use crate::model::ReportSnapshot;
use crate::platform::native::NativePlatform;
use crate::platform::Platform;

use super::actions::Tab;

/// Name used for the app-data directory.
pub const APP_NAME: &str = "sentinel";

/// Message from a fetch thread: the generation it was started for, and what it got.
pub type FetchMessage = (u64, FetchOutcome);

pub struct InputsState {
    /// Text field contents, `owner/repo[@branch]`.
    pub source_text: String,
    pub source_error: Option<String>,
}

pub struct FetchState {
    /// True while a background fetch is in-flight.
    pub pending: bool,
    /// Bumped on every new fetch; results for any other value are stale.
    pub generation: u64,
    pub rx: Option<Receiver<FetchMessage>>,
    pub started_at: Option<Instant>,
    /// Source the in-flight fetch was started for.
    pub source: Option<RepoSource>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultView {
    /// Nothing fetched yet.
    Idle,
    Loaded,
    Empty,
    Failed(String),
}

pub struct ResultsState {
    pub view: ResultView,
    /// Last successful snapshot. Kept while a refresh is pending.
    pub snapshot: Option<ReportSnapshot>,
}

pub struct UiState {
    pub tab: Tab,
    pub details_filter: String,
    pub hovered_category: Option<usize>,
    /// One-line feedback in the top bar (export, settings).
    pub status: Option<String>,
}

pub struct AppState {
    pub platform: Arc<dyn Platform>,
    pub config: AppConfig,

    pub inputs: InputsState,
    pub fetch: FetchState,
    pub results: ResultsState,
    pub ui: UiState,

    pub last_window_title: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(NativePlatform::new()))
    }
}

impl AppState {
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        let data_dir = platform.app_data_dir(APP_NAME).ok();
        let config = AppConfig::load(data_dir.as_deref());
        Self::with_config(platform, config)
    }

    pub fn with_config(platform: Arc<dyn Platform>, config: AppConfig) -> Self {
        let source_text = config.source.to_string();
        Self {
            platform,
            config,

            inputs: InputsState {
                source_text,
                source_error: None,
            },

            fetch: FetchState {
                pending: false,
                generation: 0,
                rx: None,
                started_at: None,
                source: None,
            },

            results: ResultsState {
                view: ResultView::Idle,
                snapshot: None,
            },

            ui: UiState {
                tab: Tab::Overview,
                details_filter: String::new(),
                hovered_category: None,
                status: None,
            },

            last_window_title: None,
        }
    }

    pub fn source_label(&self) -> String {
        self.config.source.to_string()
    }
}
