//! SoundShuffle Substitution Engine
//!
//! FMOD-style audio event randomization for game audio integration:
//! - Event index built once from the host's event catalog, bucketed by category
//! - Uniform-random replacement selection, global or same-category
//! - Optional deterministic mapping cache (stable original→replacement per session)
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    RESOLUTION FLOW                            │
//! ├──────────────────────────────────────────────────────────────┤
//! │                                                               │
//! │   Host lookup            Randomizer                           │
//! │   ┌────────────┐        ┌───────────────────────────────┐    │
//! │   │ resolve(p) │───────▶│ 1. cache hit?   → return it   │    │
//! │   └────────────┘        │ 2. Selector.select(p, mode)   │    │
//! │                         │ 3. deterministic? → cache it  │    │
//! │                         │ 4. return replacement         │    │
//! │                         └───────────────────────────────┘    │
//! │                                                               │
//! │   Host init ──▶ EventIndex::build(catalog)   (exactly once)   │
//! │                                                               │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use ss_engine::{Randomizer, SelectionMode};
//!
//! let randomizer = Randomizer::new();
//! randomizer.build_index([
//!     "event:/music/lvl1/intro".to_string(),
//!     "event:/music/lvl1/loop".to_string(),
//!     "event:/sfx/ui/click".to_string(),
//! ]).unwrap();
//!
//! // Same-category substitution, pinned for the session.
//! let replacement = randomizer.resolve(
//!     "event:/music/lvl1/intro",
//!     SelectionMode::GroupByCategory,
//!     true,
//! );
//! assert!(replacement.starts_with("event:/music/"));
//! ```

pub mod cache;
pub mod index;
pub mod randomizer;
pub mod select;

// Re-exports
pub use cache::MappingCache;
pub use index::EventIndex;
pub use randomizer::Randomizer;
pub use select::{SelectionMode, Selector};
