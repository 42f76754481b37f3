//! Replacement Selection
//!
//! Uniform-random choice of a replacement event from the index — either from
//! the whole catalog or restricted to the original's category. Selection is
//! a pure function of its inputs plus the RNG; all mapping state lives in
//! [`crate::cache::MappingCache`].

use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use ss_core::{SsError, SsResult, event_category};

use crate::index::EventIndex;

/// Replacement selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum SelectionMode {
    /// Uniform choice over the whole indexed catalog.
    Random = 0,
    /// Uniform choice restricted to the original's category bucket.
    #[default]
    GroupByCategory = 1,
}

impl SelectionMode {
    /// Persisted string tag for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            SelectionMode::Random => "Random",
            SelectionMode::GroupByCategory => "GroupByCategory",
        }
    }
}

impl std::str::FromStr for SelectionMode {
    type Err = SsError;

    /// Parse a persisted mode tag. An unknown tag means the stored
    /// configuration is corrupt, not a user mistake.
    fn from_str(s: &str) -> SsResult<Self> {
        match s {
            "Random" => Ok(SelectionMode::Random),
            "GroupByCategory" => Ok(SelectionMode::GroupByCategory),
            other => Err(SsError::UnsupportedMode(other.to_string())),
        }
    }
}

/// Uniform-random replacement selector.
///
/// Wraps a seedable RNG so a session's substitutions can be reproduced.
/// Statistical uniformity over the candidate pool is all that is promised;
/// the generator is not cryptographic.
#[derive(Debug, Clone)]
pub struct Selector {
    rng: ChaCha8Rng,
}

impl Selector {
    /// Create a selector seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Create a selector with a fixed seed (reproducible sessions, tests).
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Pick a replacement for `original` from the index under `mode`.
    ///
    /// - `Random`: uniform over the whole catalog. Errors with
    ///   [`SsError::EmptyIndex`] when nothing has been indexed.
    /// - `GroupByCategory`: uniform over the original's category bucket.
    ///   When the index never saw that category (resolution raced the build,
    ///   or the path was never cataloged) the original is returned unchanged;
    ///   a single-member bucket legitimately selects the original itself.
    pub fn select(
        &mut self,
        original: &str,
        mode: SelectionMode,
        index: &EventIndex,
    ) -> SsResult<String> {
        match mode {
            SelectionMode::Random => index
                .all()
                .choose(&mut self.rng)
                .cloned()
                .ok_or(SsError::EmptyIndex),
            SelectionMode::GroupByCategory => {
                match index.category_events(event_category(original)) {
                    Some(events) => Ok(events
                        .choose(&mut self.rng)
                        .cloned()
                        .unwrap_or_else(|| original.to_string())),
                    None => Ok(original.to_string()),
                }
            }
        }
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}
