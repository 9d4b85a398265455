//! # mahjongg-engine
//!
//! A Mahjongg solitaire board engine for GUI front-ends.
//!
//! The crate implements everything below the pixels: tile identities
//! and match rules, layered board geometry, exposure (the "free tile"
//! rule), dealing, stuck detection, and the game's selection state
//! machine. Rendering, input handling, animation, and persistence are
//! callers of this API, never part of it.
//!
//! ## Design Principles
//!
//! 1. **Geometry is data**: a `BoardLayout` is a validated set of
//!    positions; no game rule is baked into a template.
//!
//! 2. **Derived exposure**: whether a tile is selectable is computed
//!    from occupancy on demand and never stored, so it cannot go stale.
//!
//! 3. **One mutation path**: tiles leave the board only through
//!    `rules::attempt_match`, in matching pairs, and only while
//!    exposed. Front-ends cannot corrupt a board.
//!
//! 4. **Reproducible games**: all randomness flows through a seeded
//!    `GameRng`; a seed replays the same deal, the same recovery
//!    shuffles, the same everything.
//!
//! ## Driving a game
//!
//! ```
//! use mahjongg_engine::{GameConfig, GameSession, SelectionOutcome};
//!
//! let mut session = GameSession::new(GameConfig::new(42)).unwrap();
//!
//! // Feed tile clicks to `select`; render from `view`.
//! let view = session.view();
//! let first = view.exposed[0];
//! assert_eq!(session.select(first), SelectionOutcome::OneChosen(first));
//! ```
//!
//! ## Modules
//!
//! - `core`: positions, RNG, configuration
//! - `tiles`: tile identities, match rules, the standard 144-tile set
//! - `layout`: validated board templates and the built-in boards
//! - `board`: live occupancy and exposure
//! - `rules`: pair removal
//! - `deal`: deal generation, stuck scans, recovery
//! - `session`: the state machine front-ends drive

pub mod board;
pub mod core;
pub mod deal;
pub mod layout;
pub mod rules;
pub mod session;
pub mod tiles;

// Re-export commonly used types
pub use crate::core::{DealPolicy, GameConfig, GameRng, Position, DEFAULT_LAYOUT};

pub use crate::tiles::{Rank, Suit, Tile, ALL_SUITS};

pub use crate::layout::{BoardLayout, LayoutBuilder, LayoutError};

pub use crate::board::{BoardState, MoveError};

pub use crate::rules::{attempt_match, MatchOutcome};

pub use crate::deal::{find_match, is_stuck, shuffle_remaining, DealError, DealGenerator};

pub use crate::session::{
    GameSession, IllegalSelection, MatchRecord, NewGameError, SelectionOutcome, SessionState,
    SessionView,
};
