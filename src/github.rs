// src/github.rs
// GitHub git-trees client:
// - fetch_blob_paths(): recursive listing of one branch, blobs only
// - fetch_report(): listing + aggregation, folded into a FetchOutcome

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::aggregate::aggregate;
use crate::config::{AppConfig, RepoSource};
use crate::model::VulnerabilityReport;

const ACCEPT_V3: &str = "application/vnd.github.v3+json";

#[derive(Debug, Deserialize)]
struct TreeResponse {
    #[serde(default)]
    tree: Vec<TreeItem>,
    #[serde(default)]
    truncated: bool,
}

#[derive(Debug, Deserialize)]
struct TreeItem {
    path: String,
    #[serde(rename = "type")]
    kind: String,
}

/// Result of one retrieval + aggregation pass.
#[derive(Clone, Debug)]
pub enum FetchOutcome {
    Loaded(VulnerabilityReport),
    /// The listing had no groupable files.
    Empty,
    Failed(String),
}

impl FetchOutcome {
    pub fn from_result(res: Result<VulnerabilityReport>) -> Self {
        match res {
            Ok(r) if r.is_empty() => FetchOutcome::Empty,
            Ok(r) => FetchOutcome::Loaded(r),
            Err(e) => FetchOutcome::Failed(format!("{:#}", e)),
        }
    }
}

#[derive(Clone)]
pub struct GitHubClient {
    http: Client,
    api_base: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(cfg: &AppConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_V3));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("sentinel/", env!("CARGO_PKG_VERSION"))),
        );

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_base: cfg.api_base.clone(),
            token: cfg.token.clone(),
        })
    }

    /// All blob paths of `source`, in listing order.
    pub fn fetch_blob_paths(&self, source: &RepoSource) -> Result<Vec<String>> {
        let url = source.tree_url(&self.api_base)?;
        debug!(%url, authenticated = self.token.is_some(), "requesting tree");

        let mut rb = self.http.get(url);
        if let Some(tok) = &self.token {
            rb = rb.bearer_auth(tok);
        }

        let resp = rb
            .send()
            .with_context(|| format!("GitHub tree request for {} failed", source))?;

        let status = resp.status();
        if !status.is_success() {
            let remaining = resp
                .headers()
                .get("x-ratelimit-remaining")
                .and_then(|v| v.to_str().ok())
                .map(|s| s.to_string());
            let body = resp.text().unwrap_or_default();
            return Err(status_error(status.as_u16(), remaining.as_deref(), &body, source));
        }

        let text = resp.text().context("Failed to read GitHub tree response")?;
        parse_tree_listing(&text)
    }

    pub fn fetch_report(&self, source: &RepoSource) -> Result<VulnerabilityReport> {
        let paths = self.fetch_blob_paths(source)?;
        let report = aggregate(&paths);
        info!(
            source = %source,
            blobs = paths.len(),
            categories = report.categories.len(),
            languages = report.language_count(),
            "aggregated listing"
        );
        Ok(report)
    }
}

fn status_error(status: u16, remaining: Option<&str>, body: &str, source: &RepoSource) -> anyhow::Error {
    let rate_limited = (status == 403 || status == 429)
        && (remaining == Some("0") || body.to_lowercase().contains("rate limit"));
    if rate_limited {
        return anyhow!(
            "GitHub rate limit exceeded while listing {} (set SENTINEL_GITHUB_TOKEN to raise it)",
            source
        );
    }
    match status {
        401 => anyhow!("GitHub rejected the token (401): {}", body.trim()),
        404 => anyhow!("Repository or branch not found: {}", source),
        _ => anyhow!("GitHub tree API returned {}: {}", status, body.trim()),
    }
}

/// Blob paths out of a git-trees JSON body.
pub fn parse_tree_listing(body: &str) -> Result<Vec<String>> {
    let parsed: TreeResponse =
        serde_json::from_str(body).context("Failed to parse GitHub tree JSON")?;
    if parsed.truncated {
        warn!(
            entries = parsed.tree.len(),
            "GitHub truncated the tree listing; counts are partial"
        );
    }
    Ok(parsed
        .tree
        .into_iter()
        .filter(|item| item.kind == "blob")
        .map(|item| item.path)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "sha": "abc",
        "url": "https://api.github.com/repos/o/r/git/trees/abc",
        "tree": [
            {"path": "sqli", "mode": "040000", "type": "tree", "sha": "1"},
            {"path": "sqli/a.py", "mode": "100644", "type": "blob", "sha": "2", "size": 10},
            {"path": "README.md", "mode": "100644", "type": "blob", "sha": "3", "size": 5},
            {"path": "vendor/lib", "mode": "160000", "type": "commit", "sha": "4"},
            {"path": "xss/c.js", "mode": "100644", "type": "blob", "sha": "5", "size": 7}
        ],
        "truncated": false
    }"#;

    #[test]
    fn keeps_only_blobs_in_order() {
        let paths = parse_tree_listing(SAMPLE).unwrap();
        assert_eq!(paths, vec!["sqli/a.py", "README.md", "xss/c.js"]);
    }

    #[test]
    fn truncated_listing_is_still_returned() {
        let body = r#"{"tree":[{"path":"a/b.go","type":"blob"}],"truncated":true}"#;
        assert_eq!(parse_tree_listing(body).unwrap(), vec!["a/b.go"]);
    }

    #[test]
    fn missing_tree_is_empty() {
        assert!(parse_tree_listing("{}").unwrap().is_empty());
    }

    #[test]
    fn malformed_body_is_an_error() {
        let err = parse_tree_listing("<html>").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse GitHub tree JSON"));
    }

    #[test]
    fn listing_feeds_the_aggregator() {
        let report = aggregate(parse_tree_listing(SAMPLE).unwrap());
        assert_eq!(report.categories.len(), 2);
        assert_eq!(report.total_files(), 2);
    }

    #[test]
    fn outcome_folds_results() {
        assert!(matches!(
            FetchOutcome::from_result(Ok(VulnerabilityReport::default())),
            FetchOutcome::Empty
        ));
        assert!(matches!(
            FetchOutcome::from_result(Ok(aggregate(["a/b.py"]))),
            FetchOutcome::Loaded(_)
        ));
        match FetchOutcome::from_result(Err(anyhow!("boom"))) {
            FetchOutcome::Failed(msg) => assert_eq!(msg, "boom"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn rate_limit_is_reported_as_such() {
        let src = RepoSource::default();
        let e = status_error(403, Some("0"), "{}", &src);
        assert!(e.to_string().contains("rate limit"));

        let e = status_error(403, None, "API rate limit exceeded for 1.2.3.4", &src);
        assert!(e.to_string().contains("rate limit"));

        let e = status_error(403, Some("10"), "forbidden", &src);
        assert!(e.to_string().contains("403"));
    }

    #[test]
    fn not_found_names_the_source() {
        let e = status_error(404, None, "", &RepoSource::default());
        assert!(e.to_string().contains("yeswehack/vulnerable-code-snippets@main"));
    }

    #[test]
    fn client_builds_from_default_config() {
        assert!(GitHubClient::new(&AppConfig::default()).is_ok());
    }
}
