use std::collections::HashMap;

use crate::language::classify_language;
use crate::model::{CategorySummary, FileEntry, LanguageTotals, VulnerabilityReport};

/// Category key for a path: its first segment. `None` for single-segment
/// paths and hidden/system top-level entries.
fn category_of(path: &str) -> Option<&str> {
    let (first, _rest) = path.split_once('/')?;
    if first.starts_with('.') {
        return None;
    }
    Some(first)
}

/// Group a flat file listing into per-category and per-language counts.
///
/// Categories come back ordered by file count (descending). Categories with
/// equal counts keep the order they were first seen in.
pub fn aggregate<I, S>(paths: I) -> VulnerabilityReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut categories: Vec<CategorySummary> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut language_totals = LanguageTotals::new();

    for p in paths {
        let path = p.as_ref();
        let Some(category) = category_of(path) else {
            continue;
        };

        let language = classify_language(path);
        let idx = match index.get(category) {
            Some(i) => *i,
            None => {
                categories.push(CategorySummary::new(category));
                index.insert(category.to_string(), categories.len() - 1);
                categories.len() - 1
            }
        };

        categories[idx].add(FileEntry {
            path: path.to_string(),
            language: language.to_string(),
        });
        *language_totals.entry(language.to_string()).or_insert(0) += 1;
    }

    // sort_by is stable
    categories.sort_by(|a, b| b.file_count.cmp(&a.file_count));

    VulnerabilityReport {
        categories,
        language_totals,
    }
}
