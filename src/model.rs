use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One file from the source listing, tagged with its language label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: String,
    pub language: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub file_count: u64,
    // first-seen order
    pub files: Vec<FileEntry>,
    pub language_counts: BTreeMap<String, u64>,
}

impl CategorySummary {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            file_count: 0,
            files: Vec::new(),
            language_counts: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, entry: FileEntry) {
        self.file_count += 1;
        *self.language_counts.entry(entry.language.clone()).or_insert(0) += 1;
        self.files.push(entry);
    }

    /// Language counts sorted by count desc, then label.
    pub fn languages_by_count(&self) -> Vec<(String, u64)> {
        counts_by_frequency(&self.language_counts)
    }
}

pub type LanguageTotals = BTreeMap<String, u64>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VulnerabilityReport {
    /// Sorted by `file_count` desc, ties in first-seen order.
    pub categories: Vec<CategorySummary>,
    pub language_totals: LanguageTotals,
}

impl VulnerabilityReport {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn total_files(&self) -> u64 {
        self.categories.iter().map(|c| c.file_count).sum()
    }

    pub fn language_count(&self) -> usize {
        self.language_totals.len()
    }

    pub fn top_category(&self) -> Option<&CategorySummary> {
        self.categories.first()
    }

    pub fn languages_by_count(&self) -> Vec<(String, u64)> {
        counts_by_frequency(&self.language_totals)
    }
}

/// Count desc, then label.
pub fn counts_by_frequency(counts: &BTreeMap<String, u64>) -> Vec<(String, u64)> {
    let mut items: Vec<(String, u64)> = counts.iter().map(|(k, v)| (k.clone(), *v)).collect();
    items.sort_by(|(l1, c1), (l2, c2)| c2.cmp(c1).then_with(|| l1.cmp(l2)));
    items
}

/// A report together with where and when it was fetched. This is what the
/// dashboard holds and what gets exported.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportSnapshot {
    pub source: String,
    pub fetched_at: String,
    #[serde(flatten)]
    pub report: VulnerabilityReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, language: &str) -> FileEntry {
        FileEntry {
            path: path.to_string(),
            language: language.to_string(),
        }
    }

    #[test]
    fn category_add_keeps_counts_in_sync() {
        let mut c = CategorySummary::new("xss");
        c.add(entry("xss/a.js", "JavaScript"));
        c.add(entry("xss/b.php", "PHP"));
        c.add(entry("xss/c.js", "JavaScript"));

        assert_eq!(c.file_count, 3);
        assert_eq!(c.files.len(), 3);
        assert_eq!(c.language_counts.values().sum::<u64>(), 3);
        assert_eq!(c.files[1].path, "xss/b.php");
    }

    #[test]
    fn languages_by_count_breaks_ties_by_label() {
        let mut totals = LanguageTotals::new();
        totals.insert("PHP".into(), 2);
        totals.insert("Go".into(), 2);
        totals.insert("Python".into(), 5);

        let report = VulnerabilityReport {
            categories: vec![],
            language_totals: totals,
        };
        assert_eq!(
            report.languages_by_count(),
            vec![
                ("Python".to_string(), 5),
                ("Go".to_string(), 2),
                ("PHP".to_string(), 2)
            ]
        );
    }

    #[test]
    fn empty_report_has_no_top_category() {
        let report = VulnerabilityReport::default();
        assert!(report.is_empty());
        assert_eq!(report.total_files(), 0);
        assert!(report.top_category().is_none());
    }

    #[test]
    fn snapshot_serializes_report_fields_inline() {
        let snap = ReportSnapshot {
            source: "o/r@main".into(),
            fetched_at: "2024-01-01T00:00:00Z".into(),
            report: VulnerabilityReport::default(),
        };
        let v = serde_json::to_value(&snap).unwrap();
        assert!(v.get("categories").is_some());
        assert!(v.get("language_totals").is_some());
        assert_eq!(v["source"], "o/r@main");
    }
}
