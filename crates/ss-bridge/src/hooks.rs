//! Host Hook Lifecycle
//!
//! The host engine exposes two hook points: an init signal once its event
//! catalog is loaded, and a lookup call per event resolution. This module
//! models those as explicit callback registrations with an attach/detach
//! lifecycle, instead of implicit runtime patching: the host implements
//! [`AudioHost`], and [`RandomizerHooks`] carries the inbound entry points.
//!
//! The eligibility gate lives here, in front of the engine: a disabled
//! feature or a path without the event prefix never reaches the coordinator
//! and resolves verbatim.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use ss_core::{SsResult, is_event_path};
use ss_engine::{Randomizer, SelectionMode};

use crate::settings::RandomizerSettings;

/// Seam to the host audio engine's hook points.
///
/// `subscribe` wires the hooks into the host's init and lookup calls;
/// `unsubscribe` removes them. The host owns how that wiring is done.
pub trait AudioHost {
    fn subscribe(&mut self, hooks: Arc<RandomizerHooks>);
    fn unsubscribe(&mut self);
}

/// Inbound hook surface plus the configuration the menu mutates.
///
/// One instance per process, shared with the host behind an `Arc`. All entry
/// points take `&self`; interior state is the engine's own locks plus a
/// settings `RwLock`, so the host may call in from its audio thread.
pub struct RandomizerHooks {
    engine: Randomizer,
    settings: RwLock<RandomizerSettings>,
    attached: AtomicBool,
}

impl RandomizerHooks {
    /// Create the hook surface with an OS-seeded engine.
    pub fn new(settings: RandomizerSettings) -> Self {
        Self::with_engine(settings, Randomizer::new())
    }

    /// Create the hook surface with a fixed engine seed (reproducible
    /// sessions, tests).
    pub fn with_seed(settings: RandomizerSettings, seed: u64) -> Self {
        Self::with_engine(settings, Randomizer::with_seed(seed))
    }

    fn with_engine(settings: RandomizerSettings, engine: Randomizer) -> Self {
        Self {
            engine,
            settings: RwLock::new(settings),
            attached: AtomicBool::new(false),
        }
    }

    // === Lifecycle ===

    /// Register both hooks with the host. A second attach is a no-op.
    pub fn attach<H: AudioHost>(self: &Arc<Self>, host: &mut H) {
        if self.attached.swap(true, Ordering::AcqRel) {
            return;
        }
        host.subscribe(Arc::clone(self));
        log::debug!("Randomizer hooks attached");
    }

    /// Unregister from the host and drop all pinned mappings, mirroring the
    /// attach. A detach without a prior attach is a no-op.
    pub fn detach<H: AudioHost>(&self, host: &mut H) {
        if !self.attached.swap(false, Ordering::AcqRel) {
            return;
        }
        host.unsubscribe();
        self.engine.clear_cache();
        log::debug!("Randomizer hooks detached");
    }

    /// Whether the hooks are currently registered.
    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::Acquire)
    }

    // === Inbound hooks ===

    /// Host signal: the audio event catalog finished loading.
    ///
    /// Builds the event index. Fires once per process; a repeat signal is
    /// logged and ignored, the existing index stands.
    pub fn on_index_ready<I, S>(&self, raw_paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.engine.build_index(raw_paths) {
            Ok(count) => log::info!("Indexed {} audio events for randomization", count),
            Err(err) => log::warn!("Ignoring repeat catalog signal: {}", err),
        }
    }

    /// Host call: resolve a logical event path to the one to actually play.
    ///
    /// Paths are passed through verbatim when the feature is disabled or
    /// the path lacks the event prefix; everything else goes through the
    /// engine's cache-then-select flow.
    pub fn on_resolve(&self, path: &str) -> String {
        let settings = *self.settings.read();
        if !settings.enabled || !is_event_path(path) {
            return path.to_string();
        }
        self.engine
            .resolve(path, settings.mode, settings.deterministic)
    }

    // === Menu-facing configuration surface ===

    /// Current settings snapshot.
    pub fn settings(&self) -> RandomizerSettings {
        *self.settings.read()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.settings.write().enabled = enabled;
    }

    pub fn set_deterministic(&self, deterministic: bool) {
        self.settings.write().deterministic = deterministic;
    }

    pub fn set_mode(&self, mode: SelectionMode) {
        self.settings.write().mode = mode;
    }

    /// Set the selection mode from its persisted string tag.
    ///
    /// An unknown tag means corrupt stored config; it errors and leaves the
    /// current mode in place.
    pub fn set_mode_tag(&self, tag: &str) -> SsResult<()> {
        let mode = tag.parse::<SelectionMode>()?;
        self.settings.write().mode = mode;
        Ok(())
    }

    /// Menu action: drop every pinned mapping. Does not re-index.
    pub fn clear_mappings(&self) {
        self.engine.clear_cache();
        log::info!("Cleared pinned event mappings");
    }

    /// Direct engine access for host debug surfaces.
    pub fn engine(&self) -> &Randomizer {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingHost {
        hooks: Option<Arc<RandomizerHooks>>,
        subscribes: usize,
        unsubscribes: usize,
    }

    impl AudioHost for RecordingHost {
        fn subscribe(&mut self, hooks: Arc<RandomizerHooks>) {
            self.hooks = Some(hooks);
            self.subscribes += 1;
        }

        fn unsubscribe(&mut self) {
            self.hooks = None;
            self.unsubscribes += 1;
        }
    }

    #[test]
    fn test_attach_detach_lifecycle() {
        let hooks = Arc::new(RandomizerHooks::new(RandomizerSettings::default()));
        let mut host = RecordingHost::default();

        hooks.attach(&mut host);
        assert!(hooks.is_attached());
        assert_eq!(host.subscribes, 1);

        // Re-attach is a no-op.
        hooks.attach(&mut host);
        assert_eq!(host.subscribes, 1);

        hooks.detach(&mut host);
        assert!(!hooks.is_attached());
        assert_eq!(host.unsubscribes, 1);

        // Re-detach is a no-op.
        hooks.detach(&mut host);
        assert_eq!(host.unsubscribes, 1);
    }

    #[test]
    fn test_detach_drops_pinned_mappings() {
        let settings = RandomizerSettings {
            enabled: true,
            ..Default::default()
        };
        let hooks = Arc::new(RandomizerHooks::with_seed(settings, 42));
        let mut host = RecordingHost::default();
        hooks.attach(&mut host);

        hooks.on_index_ready(["event:/sfx/ui/click", "event:/sfx/ui/back"]);
        hooks.on_resolve("event:/sfx/ui/click");
        assert_eq!(hooks.engine().cache_len(), 1);

        hooks.detach(&mut host);
        assert_eq!(hooks.engine().cache_len(), 0);
    }

    #[test]
    fn test_set_mode_tag_rejects_unknown() {
        let hooks = RandomizerHooks::new(RandomizerSettings::default());

        assert!(hooks.set_mode_tag("Random").is_ok());
        assert_eq!(hooks.settings().mode, SelectionMode::Random);

        assert!(hooks.set_mode_tag("ShuffleByMood").is_err());
        // The previous mode stands.
        assert_eq!(hooks.settings().mode, SelectionMode::Random);
    }
}
