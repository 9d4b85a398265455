//! Game sessions: state machine, outcomes, render snapshots.
//!
//! ## Key Types
//!
//! - `GameSession`: one game, driven by `select` and `restart`
//! - `SessionState`: `Selecting`, `OneChosen`, `Won`, `Stuck`
//! - `SelectionOutcome`: what each selection did
//! - `SessionView`: snapshot for the presentation layer

pub mod game;

pub use game::{
    GameSession, IllegalSelection, MatchRecord, NewGameError, SelectionOutcome, SessionState,
    SessionView,
};
