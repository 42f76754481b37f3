//! SoundShuffle Host Integration
//!
//! Thin glue between the substitution engine and the host audio engine:
//! - `RandomizerSettings`: the persisted configuration surface the host's
//!   menu mutates (enable switch, deterministic switch, selection mode)
//! - `RandomizerHooks`: the two inbound hook points (catalog-ready, lookup)
//!   with an explicit attach/detach lifecycle and the eligibility gate in
//!   front of the engine
//!
//! The host implements [`AudioHost`] to wire the hooks into its own init
//! and lookup calls; everything here stays synchronous and allocation-light
//! because `on_resolve` sits on the audio lookup path.

pub mod hooks;
pub mod settings;

// Re-exports
pub use hooks::{AudioHost, RandomizerHooks};
pub use settings::RandomizerSettings;
