//! Randomizer Coordinator
//!
//! Owns the three pieces of the substitution engine and sequences them per
//! resolution: mapping cache first (deterministic mode only), selector on a
//! miss, cache insert on the way out. All state is held behind locks so the
//! host may call in from whichever thread its audio lookups run on; the
//! index is read-mostly after its one-time build.
//!
//! Error policy: resolution never fails the host. Anything that would —
//! an unbuilt or empty index — degrades to returning the original path,
//! logged for diagnosis only.

use parking_lot::{Mutex, RwLock};

use ss_core::{SsError, SsResult};

use crate::cache::MappingCache;
use crate::index::EventIndex;
use crate::select::{SelectionMode, Selector};

/// Coordinating object for event substitution.
///
/// Lifecycle: constructed at mod load, index built on the host's
/// catalog-ready signal, cache cleared on explicit user action, everything
/// dropped at teardown. Injected into the resolve hook rather than living
/// as an ambient global.
#[derive(Debug)]
pub struct Randomizer {
    /// `None` until the host's catalog-ready signal; read-only afterward.
    index: RwLock<Option<EventIndex>>,
    /// Pinned original→replacement choices (deterministic mode only).
    cache: Mutex<MappingCache>,
    selector: Mutex<Selector>,
}

impl Randomizer {
    /// Create a coordinator with an OS-seeded selector.
    pub fn new() -> Self {
        Self::with_selector(Selector::new())
    }

    /// Create a coordinator with a fixed RNG seed (reproducible sessions).
    pub fn with_seed(seed: u64) -> Self {
        Self::with_selector(Selector::with_seed(seed))
    }

    fn with_selector(selector: Selector) -> Self {
        Self {
            index: RwLock::new(None),
            cache: Mutex::new(MappingCache::new()),
            selector: Mutex::new(selector),
        }
    }

    /// Build the event index from the host's catalog. Invoked exactly once,
    /// when the host signals its audio system finished loading.
    ///
    /// Returns the number of indexed events. A second build signal errors
    /// with [`SsError::IndexAlreadyBuilt`] and leaves the index untouched;
    /// there is no index reset path, only the mapping cache is resettable.
    pub fn build_index<I, S>(&self, raw_paths: I) -> SsResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut guard = self.index.write();
        if guard.is_some() {
            return Err(SsError::IndexAlreadyBuilt);
        }

        let index = EventIndex::build(raw_paths);
        log::debug!(
            "Indexed {} events across {} categories",
            index.len(),
            index.category_count()
        );
        let count = index.len();
        *guard = Some(index);
        Ok(count)
    }

    /// Whether the catalog-ready signal has fired.
    pub fn index_built(&self) -> bool {
        self.index.read().is_some()
    }

    /// Number of indexed events (0 before the build signal).
    pub fn indexed_count(&self) -> usize {
        self.index.read().as_ref().map_or(0, EventIndex::len)
    }

    /// Resolve `original` to its substitute.
    ///
    /// Under `deterministic`, a cached mapping short-circuits the selector
    /// and every later resolution of `original` returns the same substitute
    /// until the cache is cleared. Without it, every call draws fresh and
    /// the cache is never touched.
    ///
    /// Resolution before the index build, or with an empty index under
    /// `Random` mode, returns `original` unchanged — sound playback is
    /// never interrupted for a missing catalog.
    pub fn resolve(&self, original: &str, mode: SelectionMode, deterministic: bool) -> String {
        if deterministic {
            let cache = self.cache.lock();
            if let Some(pinned) = cache.get(original) {
                return pinned.to_string();
            }
        }

        let replacement = {
            let guard = self.index.read();
            let Some(index) = guard.as_ref() else {
                log::debug!("Resolved \"{}\" before index build, passing through", original);
                return original.to_string();
            };
            match self.selector.lock().select(original, mode, index) {
                Ok(replacement) => replacement,
                Err(err) => {
                    log::debug!("Selection failed for \"{}\" ({}), passing through", original, err);
                    return original.to_string();
                }
            }
        };

        if deterministic {
            let mut cache = self.cache.lock();
            let pinned = cache.insert_if_absent(original, replacement).to_string();
            log::debug!("Mapped \"{}\" to \"{}\", adding to cache", original, pinned);
            pinned
        } else {
            log::debug!("Mapped \"{}\" to \"{}\"", original, replacement);
            replacement
        }
    }

    /// Drop every pinned mapping. Triggered by explicit user action (and at
    /// teardown); does not touch the index.
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }

    /// Number of pinned mappings.
    pub fn cache_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Whether `original` currently has a pinned mapping.
    pub fn is_pinned(&self, original: &str) -> bool {
        self.cache.lock().contains(original)
    }

    /// JSON snapshot of engine state for host-side debug surfaces.
    pub fn snapshot(&self) -> serde_json::Value {
        let guard = self.index.read();
        let cache = self.cache.lock();

        let mappings: Vec<_> = cache
            .iter()
            .map(|(original, replacement)| {
                serde_json::json!({
                    "original": original,
                    "replacement": replacement,
                })
            })
            .collect();

        serde_json::json!({
            "indexedEvents": guard.as_ref().map_or(0, EventIndex::len),
            "categories": guard.as_ref().map_or(0, EventIndex::category_count),
            "pinnedMappings": cache.len(),
            "mappings": mappings,
        })
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built_randomizer(seed: u64) -> Randomizer {
        let randomizer = Randomizer::with_seed(seed);
        randomizer
            .build_index([
                "event:/music/lvl1/intro",
                "event:/music/lvl1/loop",
                "event:/music/lvl2/theme",
                "event:/sfx/ui/click",
                "event:/sfx/ui/back",
            ])
            .unwrap();
        randomizer
    }

    #[test]
    fn test_deterministic_resolutions_are_stable() {
        let randomizer = built_randomizer(42);

        let first = randomizer.resolve("event:/sfx/ui/click", SelectionMode::Random, true);
        let second = randomizer.resolve("event:/sfx/ui/click", SelectionMode::Random, true);
        let third = randomizer.resolve("event:/sfx/ui/click", SelectionMode::Random, true);

        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(randomizer.cache_len(), 1);
    }

    #[test]
    fn test_non_deterministic_resolutions_never_cache() {
        let randomizer = built_randomizer(42);

        for _ in 0..20 {
            randomizer.resolve("event:/sfx/ui/click", SelectionMode::Random, false);
        }
        assert_eq!(randomizer.cache_len(), 0);
        assert!(!randomizer.is_pinned("event:/sfx/ui/click"));
    }

    #[test]
    fn test_clear_forces_reselection() {
        let randomizer = built_randomizer(42);

        randomizer.resolve("event:/music/lvl1/intro", SelectionMode::Random, true);
        assert!(randomizer.is_pinned("event:/music/lvl1/intro"));

        randomizer.clear_cache();
        assert_eq!(randomizer.cache_len(), 0);

        // The selector runs again and repopulates the cache.
        randomizer.resolve("event:/music/lvl1/intro", SelectionMode::Random, true);
        assert_eq!(randomizer.cache_len(), 1);
    }

    #[test]
    fn test_resolve_before_index_returns_original() {
        let randomizer = Randomizer::with_seed(42);

        for mode in [SelectionMode::Random, SelectionMode::GroupByCategory] {
            for deterministic in [false, true] {
                assert_eq!(
                    randomizer.resolve("event:/music/lvl1/intro", mode, deterministic),
                    "event:/music/lvl1/intro"
                );
            }
        }
        // Degraded resolutions must not pin mappings either.
        assert_eq!(randomizer.cache_len(), 0);
    }

    #[test]
    fn test_empty_index_degrades_to_original() {
        let randomizer = Randomizer::with_seed(42);
        // Catalog contained nothing eligible.
        randomizer.build_index(["snapshot:/pause", "bus:/music"]).unwrap();

        assert_eq!(
            randomizer.resolve("event:/sfx/ui/click", SelectionMode::Random, true),
            "event:/sfx/ui/click"
        );
        assert_eq!(randomizer.cache_len(), 0);
    }

    #[test]
    fn test_second_build_signal_is_rejected() {
        let randomizer = built_randomizer(42);

        let err = randomizer.build_index(["event:/late/addition/nope"]).unwrap_err();
        assert!(matches!(err, SsError::IndexAlreadyBuilt));
        assert_eq!(randomizer.indexed_count(), 5);
    }

    #[test]
    fn test_category_fidelity_under_deterministic_mode() {
        let randomizer = built_randomizer(7);

        let pinned =
            randomizer.resolve("event:/music/lvl1/intro", SelectionMode::GroupByCategory, true);
        assert!(pinned.starts_with("event:/music/"));

        // The pin survives mode-independent repeat lookups.
        let again =
            randomizer.resolve("event:/music/lvl1/intro", SelectionMode::GroupByCategory, true);
        assert_eq!(pinned, again);
    }

    #[test]
    fn test_snapshot_reports_engine_state() {
        let randomizer = built_randomizer(42);
        randomizer.resolve("event:/sfx/ui/click", SelectionMode::Random, true);

        let snapshot = randomizer.snapshot();
        assert_eq!(snapshot["indexedEvents"], 5);
        assert_eq!(snapshot["pinnedMappings"], 1);
        assert_eq!(snapshot["mappings"][0]["original"], "event:/sfx/ui/click");
    }
}
