use anyhow::{Context, Result};
use directories::ProjectDirs;
use rfd::FileDialog;
use std::path::PathBuf;

use super::Platform;

#[derive(Clone, Debug, Default)]
pub struct NativePlatform;

impl NativePlatform {
    pub fn new() -> Self {
        Self
    }
}

impl Platform for NativePlatform {
    fn save_file(&self, title: &str, default_name: &str) -> Option<PathBuf> {
        FileDialog::new()
            .set_title(title)
            .set_file_name(default_name)
            .add_filter("JSON", &["json"])
            .save_file()
    }

    fn app_data_dir(&self, app_name: &str) -> Result<PathBuf> {
        let pd = ProjectDirs::from("com", "Sentinel", app_name)
            .context("Failed to resolve platform app data directory (ProjectDirs::from)")?;
        Ok(pd.data_dir().to_path_buf())
    }

    fn open_url(&self, url: &str) -> Result<()> {
        open::that(url).with_context(|| format!("Failed to open {url}"))
    }
}
