// src/app/controllers/fetch_controller.rs
// Listing fetch runner
// - one fetch at a time; Refresh while pending is ignored
// - ApplySource supersedes a pending fetch (generation bump)
// - non-blocking: background thread + channel, polled once per frame

use std::sync::mpsc::{self, TryRecvError};
use std::time::Instant;

use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::app::actions::Action;
use crate::app::state::{AppState, FetchMessage, ResultView};
use crate::format;
use crate::github::{FetchOutcome, GitHubClient};
use crate::model::ReportSnapshot;

pub fn handle(state: &mut AppState, action: &Action) -> bool {
    match action {
        Action::Refresh => {
            if state.fetch.pending {
                info!(source = %state.source_label(), "refresh ignored: fetch already running");
                return true;
            }
            state.start_fetch();
            true
        }
        _ => false,
    }
}

impl AppState {
    /// Start a background fetch for the configured source. Any fetch still in
    /// flight is superseded: its result will be dropped on arrival.
    pub(crate) fn start_fetch(&mut self) {
        let client = match GitHubClient::new(&self.config) {
            Ok(c) => c,
            Err(e) => {
                self.results.view = ResultView::Failed(format!("{:#}", e));
                return;
            }
        };

        self.fetch.generation = self.fetch.generation.wrapping_add(1);
        let generation = self.fetch.generation;
        let source = self.config.source.clone();

        let (tx, rx) = mpsc::channel::<FetchMessage>();
        let thread_source = source.clone();
        std::thread::spawn(move || {
            let outcome = FetchOutcome::from_result(client.fetch_report(&thread_source));
            // Receiver is gone if the fetch was superseded.
            let _ = tx.send((generation, outcome));
        });

        info!(source = %source, generation, "fetch started");
        self.fetch.pending = true;
        self.fetch.rx = Some(rx);
        self.fetch.started_at = Some(Instant::now());
        self.fetch.source = Some(source);
    }

    /// Poll the in-flight fetch. Returns true while still waiting.
    pub(crate) fn poll_fetch(&mut self) -> bool {
        if !self.fetch.pending {
            return false;
        }
        let Some(rx) = &self.fetch.rx else {
            self.fetch.pending = false;
            return false;
        };

        match rx.try_recv() {
            Ok((generation, outcome)) => {
                self.complete_fetch(generation, outcome, OffsetDateTime::now_utc());
                self.fetch.pending
            }
            Err(TryRecvError::Empty) => true,
            Err(TryRecvError::Disconnected) => {
                warn!("fetch channel disconnected");
                self.finish_pending();
                self.results.view = ResultView::Failed("Fetch worker stopped unexpectedly.".to_string());
                false
            }
        }
    }

    /// Apply a finished fetch. Results for a superseded generation are dropped.
    pub(crate) fn complete_fetch(&mut self, generation: u64, outcome: FetchOutcome, at: OffsetDateTime) {
        if generation != self.fetch.generation {
            debug!(generation, current = self.fetch.generation, "dropping stale fetch result");
            return;
        }

        let elapsed_ms = self
            .fetch
            .started_at
            .map(|t| u64::try_from(t.elapsed().as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0);
        let source = self
            .fetch
            .source
            .take()
            .unwrap_or_else(|| self.config.source.clone());
        self.finish_pending();

        match outcome {
            FetchOutcome::Loaded(report) => {
                info!(
                    source = %source,
                    files = report.total_files(),
                    categories = report.categories.len(),
                    elapsed_ms,
                    "fetch finished"
                );
                self.results.snapshot = Some(ReportSnapshot {
                    source: source.to_string(),
                    fetched_at: format::format_timestamp(at).unwrap_or_else(|e| {
                        warn!("{:#}", e);
                        at.unix_timestamp().to_string()
                    }),
                    report,
                });
                self.results.view = ResultView::Loaded;
                self.ui.hovered_category = None;
            }
            FetchOutcome::Empty => {
                info!(source = %source, elapsed_ms, "fetch finished: no categories");
                self.results.snapshot = None;
                self.results.view = ResultView::Empty;
            }
            FetchOutcome::Failed(msg) => {
                warn!(source = %source, elapsed_ms, "fetch failed: {}", msg);
                self.results.view = ResultView::Failed(msg);
            }
        }
    }

    fn finish_pending(&mut self) {
        self.fetch.pending = false;
        self.fetch.rx = None;
        self.fetch.started_at = None;
    }
}
