use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tracing::info;

use crate::app::actions::Action;
use crate::app::state::AppState;
use crate::config::atomic_write;
use crate::model::ReportSnapshot;

const DEFAULT_EXPORT_NAME: &str = "sentinel-report.json";

pub fn handle(state: &mut AppState, action: &Action) -> bool {
    match action {
        Action::ExportReport => {
            state.export_report();
            true
        }
        _ => false,
    }
}

pub fn write_report(path: &Path, snapshot: &ReportSnapshot) -> Result<()> {
    let text = serde_json::to_string_pretty(snapshot).context("Failed to serialize report")?;
    atomic_write(path, &text)
}

impl AppState {
    pub(crate) fn export_report(&mut self) {
        match self.try_export_report() {
            Ok(Some(p)) => self.ui.status = Some(format!("Exported to {}", p)),
            // dialog cancelled
            Ok(None) => {}
            Err(e) => self.ui.status = Some(format!("Export failed: {:#}", e)),
        }
    }

    fn try_export_report(&self) -> Result<Option<String>> {
        let snapshot = self
            .results
            .snapshot
            .as_ref()
            .ok_or_else(|| anyhow!("Nothing to export yet"))?;

        let Some(path) = self.platform.save_file("Export report", DEFAULT_EXPORT_NAME) else {
            return Ok(None);
        };

        write_report(&path, snapshot)?;
        info!(path = %path.display(), files = snapshot.report.total_files(), "report exported");
        Ok(Some(path.display().to_string()))
    }
}
