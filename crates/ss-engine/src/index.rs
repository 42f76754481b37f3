//! Event Index
//!
//! Built once from the host's event catalog after its audio system finishes
//! loading. Keeps every recognized event path in discovery order, plus
//! per-category buckets for same-category selection. Read-only after build.

use std::collections::HashMap;

use ss_core::{event_category, is_event_path};

/// Index of all known event paths, partitioned by category.
///
/// Paths without the `event:/` prefix are not eligible for substitution and
/// never enter the index. Duplicate paths are kept as reported by the host:
/// a path listed twice is twice as likely to be chosen, matching the weight
/// the host catalog implies.
#[derive(Debug, Clone, Default)]
pub struct EventIndex {
    /// All recognized event paths, in discovery order.
    all: Vec<String>,
    /// Category → event paths in that category, discovery order per bucket.
    by_category: HashMap<String, Vec<String>>,
}

impl EventIndex {
    /// Build the index from the host's raw catalog paths.
    ///
    /// Non-event paths are skipped. Paths with no category segment are filed
    /// under the empty-string catch-all category rather than rejected.
    pub fn build<I, S>(raw_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::default();
        for raw in raw_paths {
            let path: String = raw.into();
            if !is_event_path(&path) {
                continue;
            }

            let category = event_category(&path).to_string();
            index
                .by_category
                .entry(category)
                .or_default()
                .push(path.clone());
            index.all.push(path);
        }
        index
    }

    /// All indexed event paths, in discovery order.
    pub fn all(&self) -> &[String] {
        &self.all
    }

    /// Event paths in a category, if the category was ever seen.
    ///
    /// Buckets are created lazily on first member, so a `Some` result is
    /// never empty.
    pub fn category_events(&self, category: &str) -> Option<&[String]> {
        self.by_category.get(category).map(Vec::as_slice)
    }

    /// Whether a category bucket exists.
    pub fn has_category(&self, category: &str) -> bool {
        self.by_category.contains_key(category)
    }

    /// Number of indexed event paths.
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// Whether no events were indexed.
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Number of category buckets.
    pub fn category_count(&self) -> usize {
        self.by_category.len()
    }

    /// Iterate over category names.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.by_category.keys().map(String::as_str)
    }
}
