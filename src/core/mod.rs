//! Core engine types: positions, RNG, configuration.
//!
//! These are the fundamental building blocks the rest of the engine is
//! written in terms of. Board geometry, tiles, and game rules live in
//! their own modules.

pub mod config;
pub mod position;
pub mod rng;

pub use config::{DealPolicy, GameConfig, DEFAULT_LAYOUT};
pub use position::Position;
pub use rng::GameRng;
