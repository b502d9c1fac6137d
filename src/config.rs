// src/config.rs
// Source configuration:
// - defaults
// - settings.json in the app data dir (owner/repo/branch only, never the token)
// - environment (after dotenvy), later wins

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const DEFAULT_OWNER: &str = "yeswehack";
pub const DEFAULT_REPO: &str = "vulnerable-code-snippets";
pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const SETTINGS_FILE: &str = "settings.json";
const GITHUB_WEB: &str = "https://github.com";

// GitHub owner and repository names
fn is_valid_name(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

// Subset of git's ref-name rules.
fn is_valid_branch(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('/')
        && !s.ends_with('/')
        && !s.ends_with('.')
        && !s.contains("..")
        && !s.contains("//")
        && !s.contains("@{")
        && !s
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || "?#~^:\\[*".contains(c))
}

fn extend_path<'a, I>(url: &mut Url, segments: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let base = url.to_string();
    url.path_segments_mut()
        .map_err(|_| anyhow!("'{}' cannot carry a path", base))?
        .pop_if_empty()
        .extend(segments);
    Ok(())
}

/// Which repository listing to aggregate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSource {
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

impl Default for RepoSource {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            repo: DEFAULT_REPO.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

impl fmt::Display for RepoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}@{}", self.owner, self.repo, self.branch)
    }
}

impl RepoSource {
    /// Parse `owner/repo` or `owner/repo@branch`.
    pub fn parse(spec: &str) -> Result<Self> {
        let spec = spec.trim();
        let (name, branch) = match spec.split_once('@') {
            Some((n, b)) => (n, b.trim()),
            None => (spec, DEFAULT_BRANCH),
        };
        if branch.is_empty() {
            return Err(anyhow!("Empty branch in '{}'", spec));
        }
        if !is_valid_branch(branch) {
            return Err(anyhow!("Bad branch name '{}' in '{}'", branch, spec));
        }

        let (owner, repo) = name
            .split_once('/')
            .ok_or_else(|| anyhow!("Expected owner/repo, got '{}'", spec))?;
        let (owner, repo) = (owner.trim(), repo.trim());

        for part in [owner, repo] {
            if !is_valid_name(part) {
                return Err(anyhow!("Bad repository name '{}' in '{}'", part, spec));
            }
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            branch: branch.to_string(),
        })
    }

    /// Recursive git-trees endpoint. Every path segment is percent-encoded.
    pub fn tree_url(&self, api_base: &str) -> Result<Url> {
        let mut url =
            Url::parse(api_base).with_context(|| format!("Bad API base URL '{}'", api_base))?;
        extend_path(&mut url, ["repos", self.owner.as_str(), self.repo.as_str(), "git", "trees"])?;
        extend_path(&mut url, self.branch.split('/'))?;
        url.query_pairs_mut().append_pair("recursive", "1");
        Ok(url)
    }

    pub fn html_url(&self) -> Result<Url> {
        self.web_url("tree")
    }

    pub fn blob_url(&self, path: &str) -> Result<Url> {
        let mut url = self.web_url("blob")?;
        extend_path(&mut url, path.split('/'))?;
        Ok(url)
    }

    fn web_url(&self, kind: &str) -> Result<Url> {
        let mut url = Url::parse(GITHUB_WEB)?;
        extend_path(&mut url, [self.owner.as_str(), self.repo.as_str(), kind])?;
        extend_path(&mut url, self.branch.split('/'))?;
        Ok(url)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SettingsFile {
    pub version: u32,
    #[serde(flatten)]
    pub source: RepoSource,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub source: RepoSource,
    pub api_base: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: RepoSource::default(),
            api_base: DEFAULT_API_BASE.to_string(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Defaults, then `settings.json` from `data_dir`, then the process
    /// environment (a `.env` file is loaded first if present).
    pub fn load(data_dir: Option<&Path>) -> Self {
        let mut cfg = Self::default();

        if let Some(dir) = data_dir {
            match load_settings(&settings_path(dir)) {
                Ok(Some(s)) => {
                    debug!(source = %s.source, "loaded settings file");
                    cfg.source = s.source;
                }
                Ok(None) => {}
                Err(e) => warn!("ignoring settings file: {:#}", e),
            }
        }

        if let Err(e) = dotenvy::dotenv() {
            debug!("no .env loaded: {}", e);
        }
        cfg.apply_overrides(|k| std::env::var(k).ok());
        cfg
    }

    /// Apply `SENTINEL_*` / `GITHUB_TOKEN` overrides from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |k: &str| lookup(k).filter(|v| !v.trim().is_empty());

        if let Some(spec) = non_empty("SENTINEL_REPO") {
            match RepoSource::parse(&spec) {
                Ok(s) => self.source = s,
                Err(e) => warn!("ignoring SENTINEL_REPO: {:#}", e),
            }
        }

        if let Some(base) = non_empty("SENTINEL_API_BASE") {
            self.api_base = base.trim().trim_end_matches('/').to_string();
        }

        if let Some(t) = non_empty("SENTINEL_TIMEOUT_SECS") {
            match t.trim().parse::<u64>() {
                Ok(n) if n > 0 => self.timeout_secs = n,
                _ => warn!("ignoring SENTINEL_TIMEOUT_SECS={}", t),
            }
        }

        if let Some(tok) = non_empty("SENTINEL_GITHUB_TOKEN").or_else(|| non_empty("GITHUB_TOKEN")) {
            self.token = Some(tok.trim().to_string());
        }
    }
}

pub fn settings_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SETTINGS_FILE)
}

pub fn load_settings(path: &Path) -> Result<Option<SettingsFile>> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };
    let parsed: SettingsFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(Some(parsed))
}

pub fn save_settings(path: &Path, source: &RepoSource) -> Result<()> {
    let file = SettingsFile {
        version: 1,
        source: source.clone(),
    };
    let text = serde_json::to_string_pretty(&file)?;
    atomic_write(path, &text)
}

pub fn atomic_write(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, text).with_context(|| format!("Failed to write {}", tmp.display()))?;
    if path.exists() {
        let _ = std::fs::remove_file(path);
    }
    std::fs::rename(&tmp, path)
        .with_context(|| format!("Failed to move {} into place", tmp.display()))?;
    Ok(())
}
