//! Mapping Cache
//!
//! Records the original→replacement choice per event path while deterministic
//! mode is active, so repeated lookups of the same event keep the same
//! substitute. Mutations are whole-entry inserts or a full clear — never
//! partial updates, never per-entry eviction.

use std::collections::HashMap;

/// Original→replacement mappings for the current session.
#[derive(Debug, Clone, Default)]
pub struct MappingCache {
    entries: HashMap<String, String>,
}

impl MappingCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the pinned replacement for `original`.
    pub fn get(&self, original: &str) -> Option<&str> {
        self.entries.get(original).map(String::as_str)
    }

    /// Pin `original → replacement`, keeping any mapping already present.
    ///
    /// Returns the stored replacement, which is the existing entry when two
    /// resolutions raced past the cache check; both callers then hand the
    /// same substitute back to the host.
    pub fn insert_if_absent(&mut self, original: &str, replacement: String) -> &str {
        self.entries
            .entry(original.to_string())
            .or_insert(replacement)
    }

    /// Drop every mapping. Idempotent on an empty cache.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether `original` already has a pinned replacement.
    pub fn contains(&self, original: &str) -> bool {
        self.entries.contains_key(original)
    }

    /// Number of pinned mappings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no mappings are pinned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(original, replacement)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
