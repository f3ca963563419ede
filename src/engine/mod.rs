//! The Mastermind game engine
//!
//! One `CodeKeeper` per session; no shared state between sessions.

mod keeper;

pub use keeper::{CodeKeeper, ConfigError, GuessError};
