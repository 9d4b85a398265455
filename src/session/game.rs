//! Game session: the selection state machine.
//!
//! A `GameSession` owns one game: the layout, the live board, the RNG
//! stream, the current selection, and the match history. The GUI shell
//! reduces to two entry points - `select` for every tile click and
//! `restart` for the menu action - plus `view` for rendering.
//!
//! ## States
//!
//! - `Selecting`: no tile chosen.
//! - `OneChosen(p)`: one exposed tile chosen.
//! - `Won`: board empty; terminal until restart.
//! - `Stuck`: tiles remain but no exposed pair matches; terminal until
//!   restart, undo, or a recovery shuffle.
//!
//! Every `select` returns a `SelectionOutcome` so the caller never has
//! to infer what happened.

use derive_more::{Display, Error, From};
use im::Vector;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::board::{BoardState, MoveError};
use crate::core::{GameConfig, GameRng, Position};
use crate::deal::{self, DealError, DealGenerator};
use crate::layout::{BoardLayout, LayoutError};
use crate::rules::{self, MatchOutcome};
use crate::tiles::Tile;

/// Session state machine states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No tile chosen.
    Selecting,
    /// One exposed tile chosen.
    OneChosen(Position),
    /// Board cleared.
    Won,
    /// No legal moves remain.
    Stuck,
}

impl SessionState {
    /// Won and Stuck accept no further selections.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionState::Won | SessionState::Stuck)
    }
}

/// Why a selection was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum IllegalSelection {
    /// The position is not part of the board layout.
    #[display("{position} is outside the board")]
    OutOfBounds { position: Position },

    /// Vacant, covered, or blocked on both sides.
    #[display("{position} is not selectable")]
    NotSelectable { position: Position },

    /// The game is over; restart to continue.
    #[display("the game is over")]
    GameOver,
}

/// What a call to `select` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// First tile of a pair chosen.
    OneChosen(Position),
    /// The chosen tile was clicked again and deselected.
    Deselected(Position),
    /// The pair matched and was removed; the game continues.
    MatchSuccess { first: Position, second: Position },
    /// The tiles did not match; selection cleared, board unchanged.
    MatchFailure { first: Position, second: Position },
    /// The selection was rejected; state unchanged.
    IllegalSelection(IllegalSelection),
    /// The pair matched, and its removal cleared the board.
    Won,
    /// The pair matched, and no exposed pair matches afterwards.
    Stuck,
}

/// One successful match, as recorded in the session history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub first: Position,
    pub first_tile: Tile,
    pub second: Position,
    pub second_tile: Tile,
    /// 0-based order of this match within the game.
    pub sequence: u32,
}

/// Failure to start (or restart) a game.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error, From)]
pub enum NewGameError {
    /// The configured layout is unknown or malformed.
    #[display("{_0}")]
    Layout(LayoutError),
    /// The deal generator could not produce a board.
    #[display("{_0}")]
    Deal(DealError),
}

/// Render snapshot of a session.
///
/// Everything a presentation layer needs to draw a frame, with the
/// exposed set precomputed so renderers do not re-derive game rules.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionView {
    /// Layout template name.
    pub layout: String,
    /// Current state machine state.
    pub state: SessionState,
    /// Currently chosen position, if any.
    pub selected: Option<Position>,
    /// Occupied positions with their tiles, canonical order.
    pub tiles: Vec<(Position, Tile)>,
    /// Exposed (selectable) positions, canonical order.
    pub exposed: Vec<Position>,
    /// Tiles still on the board.
    pub tiles_remaining: usize,
    /// Matches made so far.
    pub matches_made: u32,
}

/// One player's game, driven by `select` and `restart`.
pub struct GameSession {
    config: GameConfig,
    layout: Arc<BoardLayout>,
    generator: DealGenerator,
    board: BoardState,
    rng: GameRng,
    state: SessionState,
    history: Vector<MatchRecord>,
}

impl GameSession {
    /// Start a new game from a configuration.
    ///
    /// Resolves the configured layout by name; layout and deal failures
    /// are fatal for the session (`NewGameError`).
    pub fn new(config: GameConfig) -> Result<Self, NewGameError> {
        let layout = Arc::new(BoardLayout::by_name(&config.layout_name)?);
        Self::with_layout(config, layout)
    }

    /// Start a new game on a caller-provided layout.
    ///
    /// The configured layout name is ignored; use this for custom
    /// boards built with `LayoutBuilder`.
    pub fn with_layout(
        config: GameConfig,
        layout: Arc<BoardLayout>,
    ) -> Result<Self, NewGameError> {
        let mut rng = GameRng::new(config.seed);
        let generator = DealGenerator::new(config.deal_policy);
        let board = generator.deal(&layout, &mut rng)?;
        let state = Self::state_for(&board);
        debug!(
            layout = layout.name(),
            seed = config.seed,
            tiles = board.tiles_remaining(),
            ?state,
            "new game"
        );

        Ok(Self {
            config,
            layout,
            generator,
            board,
            rng,
            state,
            history: Vector::new(),
        })
    }

    /// The configuration this session was started with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The board layout.
    #[must_use]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// The live board.
    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Current state machine state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Matches made so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MatchRecord> {
        &self.history
    }

    /// Handle a tile selection.
    pub fn select(&mut self, position: Position) -> SelectionOutcome {
        match self.state {
            SessionState::Won | SessionState::Stuck => {
                SelectionOutcome::IllegalSelection(IllegalSelection::GameOver)
            }
            SessionState::Selecting => self.select_first(position),
            SessionState::OneChosen(first) => self.select_second(first, position),
        }
    }

    /// Abandon the current board and deal a fresh one.
    ///
    /// The new deal comes from a fork of the session RNG, so restarting
    /// the same seed twice replays the same sequence of boards. On deal
    /// failure the session is left untouched.
    pub fn restart(&mut self) -> Result<(), DealError> {
        let mut deal_rng = self.rng.fork();
        let board = self.generator.deal(&self.layout, &mut deal_rng)?;

        self.board = board;
        self.state = Self::state_for(&self.board);
        self.history.clear();
        debug!(tiles = self.board.tiles_remaining(), state = ?self.state, "restart");
        Ok(())
    }

    /// Revert the most recent match.
    ///
    /// Returns `false` when there is nothing to undo (fresh board, or
    /// the history was cleared by a recovery shuffle). Undoing from
    /// `Won` or `Stuck` reopens the game.
    pub fn undo(&mut self) -> bool {
        let Some(record) = self.history.last().copied() else {
            return false;
        };
        self.history.pop_back();

        self.board.restore(record.first, record.first_tile);
        self.board.restore(record.second, record.second_tile);
        // The restored pair is exposed and matches, so the game is open.
        self.state = SessionState::Selecting;
        debug!(sequence = record.sequence, "undo");
        true
    }

    /// A matching exposed pair, if one exists.
    #[must_use]
    pub fn hint(&self) -> Option<(Position, Position)> {
        deal::find_match(&self.board)
    }

    /// Recovery from `Stuck`: reshuffle the remaining tiles in place.
    ///
    /// On success the session returns to `Selecting` and the undo
    /// history is cleared (past matches no longer correspond to the
    /// board). Returns `false` if the board is empty, the game is won,
    /// or no playable arrangement was found.
    pub fn shuffle_stuck(&mut self) -> bool {
        if self.state == SessionState::Won || self.board.is_empty() {
            return false;
        }
        if !deal::shuffle_remaining(&mut self.board, &mut self.rng) {
            return false;
        }
        self.state = SessionState::Selecting;
        self.history.clear();
        true
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> SessionView {
        let selected = match self.state {
            SessionState::OneChosen(p) => Some(p),
            _ => None,
        };
        SessionView {
            layout: self.layout.name().to_string(),
            state: self.state,
            selected,
            tiles: self.board.occupied().collect(),
            exposed: self.board.exposed_positions(),
            tiles_remaining: self.board.tiles_remaining(),
            matches_made: self.history.len() as u32,
        }
    }

    fn select_first(&mut self, position: Position) -> SelectionOutcome {
        match self.board.is_exposed(position) {
            Ok(true) => {
                self.state = SessionState::OneChosen(position);
                SelectionOutcome::OneChosen(position)
            }
            Ok(false) => SelectionOutcome::IllegalSelection(IllegalSelection::NotSelectable {
                position,
            }),
            Err(_) => SelectionOutcome::IllegalSelection(IllegalSelection::OutOfBounds {
                position,
            }),
        }
    }

    fn select_second(&mut self, first: Position, second: Position) -> SelectionOutcome {
        if first == second {
            self.state = SessionState::Selecting;
            return SelectionOutcome::Deselected(first);
        }

        match rules::attempt_match(&mut self.board, first, second) {
            Ok(MatchOutcome::Removed {
                first,
                second,
                first_tile,
                second_tile,
            }) => {
                self.history.push_back(MatchRecord {
                    first,
                    first_tile,
                    second,
                    second_tile,
                    sequence: self.history.len() as u32,
                });
                self.state = SessionState::Selecting;

                if self.board.is_empty() {
                    self.state = SessionState::Won;
                    debug!(matches = self.history.len(), "won");
                    SelectionOutcome::Won
                } else if deal::is_stuck(&self.board) {
                    self.state = SessionState::Stuck;
                    debug!(remaining = self.board.tiles_remaining(), "stuck");
                    SelectionOutcome::Stuck
                } else {
                    SelectionOutcome::MatchSuccess { first, second }
                }
            }
            Ok(MatchOutcome::Mismatch { .. }) => {
                // Failed attempt clears the selection.
                self.state = SessionState::Selecting;
                SelectionOutcome::MatchFailure { first, second }
            }
            // Second pick was illegal; the first selection stands.
            Err(MoveError::OutOfBounds { position }) => {
                SelectionOutcome::IllegalSelection(IllegalSelection::OutOfBounds { position })
            }
            Err(_) => SelectionOutcome::IllegalSelection(IllegalSelection::NotSelectable {
                position: second,
            }),
        }
    }

    fn state_for(board: &BoardState) -> SessionState {
        if board.is_empty() {
            SessionState::Won
        } else if deal::is_stuck(board) {
            // A random deal can open stuck; solvable deals never do.
            SessionState::Stuck
        } else {
            SessionState::Selecting
        }
    }
}
