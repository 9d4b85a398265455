//! Pair-removal rules.
//!
//! `attempt_match` is the sole authority for removing tiles in pairs.
//! Callers (the session, and through it any GUI) never remove tiles
//! directly, so the two-at-a-time removal invariant cannot be broken
//! from outside.

use tracing::{debug, trace};

use crate::board::{BoardState, MoveError};
use crate::core::Position;
use crate::tiles::Tile;

/// Result of a legal match attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The tiles matched; both were removed.
    Removed {
        first: Position,
        second: Position,
        first_tile: Tile,
        second_tile: Tile,
    },
    /// The tiles did not match; the board is unchanged.
    Mismatch {
        first_tile: Tile,
        second_tile: Tile,
    },
}

/// Attempt to remove the tiles at `first` and `second` as a pair.
///
/// Preconditions (reported as `MoveError`, board untouched):
/// - the positions are distinct,
/// - both are occupied and exposed.
///
/// If the preconditions hold, the tiles are compared: a match removes
/// both, a mismatch leaves the board exactly as it was.
pub fn attempt_match(
    board: &mut BoardState,
    first: Position,
    second: Position,
) -> Result<MatchOutcome, MoveError> {
    if first == second {
        return Err(MoveError::SamePosition { position: first });
    }

    let first_tile = require_exposed(board, first)?;
    let second_tile = require_exposed(board, second)?;

    if !first_tile.matches(second_tile) {
        trace!(%first, %second, %first_tile, %second_tile, "mismatch");
        return Ok(MatchOutcome::Mismatch {
            first_tile,
            second_tile,
        });
    }

    // Both verified exposed; removing the first tile can only open the
    // board further, so the second removal cannot fail.
    board.remove(first)?;
    board.remove(second)?;
    debug!(%first, %second, %first_tile, remaining = board.tiles_remaining(), "pair removed");

    Ok(MatchOutcome::Removed {
        first,
        second,
        first_tile,
        second_tile,
    })
}

fn require_exposed(board: &BoardState, p: Position) -> Result<Tile, MoveError> {
    let Some(tile) = board.occupant(p)? else {
        return Err(MoveError::Vacant { position: p });
    };
    if !board.is_exposed(p)? {
        return Err(MoveError::NotExposed { position: p });
    }
    Ok(tile)
}
