//! Live board state: which tile occupies which position.
//!
//! ## Exposure
//!
//! The exposed-tile set is derived, never stored. A tile is exposed
//! (selectable) when:
//!
//! - its position is occupied,
//! - nothing occupies any position covering it from above, and
//! - at least one horizontal neighbor is vacant or off-board.
//!
//! ## Mutation
//!
//! `remove` is the only public mutation and requires exposure, so an
//! occupied board can only ever be cleared top-down - support for tiles
//! above is preserved by construction. `restore` (crate-internal) is
//! the exact inverse used by undo.

use std::sync::Arc;

use derive_more::{Display, Error};
use rustc_hash::FxHashMap;

use crate::core::Position;
use crate::layout::BoardLayout;
use crate::tiles::Tile;

/// Recoverable gameplay error.
///
/// `OutOfBounds` indicates a caller bug (a position that is not part of
/// the layout at all); the rest are ordinary illegal moves. All of them
/// are reported, never panicked, so a front-end can surface the reason.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The position is not a slot of the board's layout.
    #[display("position {position} is outside the board layout")]
    OutOfBounds { position: Position },

    /// No tile at the position.
    #[display("no tile at {position}")]
    Vacant { position: Position },

    /// The tile exists but is covered or blocked on both sides.
    #[display("tile at {position} is not exposed")]
    NotExposed { position: Position },

    /// A pair operation was given the same position twice.
    #[display("both selections refer to {position}")]
    SamePosition { position: Position },
}

/// Mapping from positions to occupying tiles over a fixed layout.
#[derive(Clone, Debug)]
pub struct BoardState {
    layout: Arc<BoardLayout>,
    tiles: FxHashMap<Position, Tile>,
}

impl BoardState {
    /// Create a board with an explicit tile arrangement.
    ///
    /// Every position must belong to the layout. Arrangements are not
    /// required to cover the whole layout - deals do, but mid-game
    /// boards and test scenarios may occupy any subset.
    pub fn with_tiles(
        layout: Arc<BoardLayout>,
        tiles: impl IntoIterator<Item = (Position, Tile)>,
    ) -> Result<Self, MoveError> {
        let mut map = FxHashMap::default();
        for (position, tile) in tiles {
            if !layout.contains(position) {
                return Err(MoveError::OutOfBounds { position });
            }
            map.insert(position, tile);
        }
        Ok(Self { layout, tiles: map })
    }

    /// The layout this board is played on.
    #[must_use]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub(crate) fn layout_handle(&self) -> Arc<BoardLayout> {
        Arc::clone(&self.layout)
    }

    /// The tile at `p`, or `None` when vacant or out of bounds.
    ///
    /// Convenience lookup; use `occupant` when out-of-bounds positions
    /// must be reported rather than swallowed.
    #[must_use]
    pub fn tile(&self, p: Position) -> Option<Tile> {
        self.tiles.get(&p).copied()
    }

    /// The occupant of `p`, if any.
    pub fn occupant(&self, p: Position) -> Result<Option<Tile>, MoveError> {
        self.check_bounds(p)?;
        Ok(self.tile(p))
    }

    /// Is the tile at `p` exposed (selectable)?
    pub fn is_exposed(&self, p: Position) -> Result<bool, MoveError> {
        self.check_bounds(p)?;
        Ok(self.tiles.contains_key(&p) && !self.covered(p) && self.side_open(p))
    }

    /// Remove the tile at `p`.
    ///
    /// Precondition: the tile is exposed. Removal may expose neighbors
    /// and tiles underneath; it can never leave a tile unsupported.
    pub fn remove(&mut self, p: Position) -> Result<Tile, MoveError> {
        self.check_bounds(p)?;
        let Some(tile) = self.tile(p) else {
            return Err(MoveError::Vacant { position: p });
        };
        if self.covered(p) || !self.side_open(p) {
            return Err(MoveError::NotExposed { position: p });
        }
        self.tiles.remove(&p);
        Ok(tile)
    }

    /// Put a previously removed tile back. Undo path only.
    pub(crate) fn restore(&mut self, p: Position, tile: Tile) {
        debug_assert!(self.layout.contains(p), "restore outside layout: {p}");
        let previous = self.tiles.insert(p, tile);
        debug_assert!(previous.is_none(), "restore onto occupied {p}");
    }

    /// True when no tiles remain (the win condition upstream).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of tiles still on the board.
    #[must_use]
    pub fn tiles_remaining(&self) -> usize {
        self.tiles.len()
    }

    /// All exposed positions, in canonical order.
    #[must_use]
    pub fn exposed_positions(&self) -> Vec<Position> {
        self.layout
            .positions()
            .iter()
            .copied()
            .filter(|&p| {
                self.tiles.contains_key(&p) && !self.covered(p) && self.side_open(p)
            })
            .collect()
    }

    /// All occupied positions with their tiles, in canonical order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.layout
            .positions()
            .iter()
            .filter_map(|&p| self.tile(p).map(|t| (p, t)))
    }

    fn check_bounds(&self, p: Position) -> Result<(), MoveError> {
        if self.layout.contains(p) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds { position: p })
        }
    }

    fn covered(&self, p: Position) -> bool {
        self.layout
            .positions_above(p)
            .iter()
            .any(|q| self.tiles.contains_key(q))
    }

    fn side_open(&self, p: Position) -> bool {
        let (left, right) = self.layout.horizontal_neighbors(p);
        let open = |n: Option<Position>| n.map_or(true, |q| !self.tiles.contains_key(&q));
        open(left) || open(right)
    }
}
