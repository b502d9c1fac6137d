use anyhow::Result;
use std::path::PathBuf;

/// All OS / environment specific behavior belongs here.
///
/// - Native builds: dialogs, filesystem app-data, launching the browser
pub trait Platform: Send + Sync {
    /// Save a file (e.g., export the current report).
    fn save_file(&self, title: &str, default_name: &str) -> Option<PathBuf>;

    /// Returns an app-specific appdata dir, e.g.:
    /// - Windows: %APPDATA%/<org>/<app>
    /// - macOS: ~/Library/Application Support/<app>
    /// - Linux: ~/.local/share/<app>
    fn app_data_dir(&self, app_name: &str) -> Result<PathBuf>;

    /// Open a URL in the user's browser.
    fn open_url(&self, url: &str) -> Result<()>;
}

pub mod native;
