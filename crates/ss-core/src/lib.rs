//! ss-core: Shared primitives for SoundShuffle
//!
//! This crate provides the foundational pieces used across the SoundShuffle
//! crates: the audio event-path scheme (protocol prefix, category extraction)
//! and the error taxonomy.

mod error;
mod path;

pub use error::*;
pub use path::*;
