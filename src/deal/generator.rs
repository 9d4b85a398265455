//! Deal generation.
//!
//! A deal assigns a tile multiset to every position of a layout. Tiles
//! are always drawn in whole matched pairs from the catalog's pair
//! pool, so any dealt board can at least pair off.
//!
//! ## Policies
//!
//! - `Random`: shuffle the drawn tiles over all positions. Cheap, but
//!   the board may have no complete solution.
//! - `Solvable`: play the game backwards. Starting from a fully
//!   occupied board, repeatedly pick two currently free positions and
//!   assign them the next matched pair, then take them off. The
//!   assignment order is itself a removal order, so the deal is
//!   guaranteed winnable. Geometry can deadlock an attempt (the free
//!   positions can collapse to a single stack), so attempts run on
//!   forked RNG branches and retry up to a bound.

use std::sync::Arc;

use derive_more::{Display, Error};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::board::BoardState;
use crate::core::{DealPolicy, GameRng, Position};
use crate::layout::BoardLayout;
use crate::tiles::{self, Tile};

/// Placement attempts before a solvable deal gives up.
const SOLVABLE_ATTEMPTS: usize = 64;

/// Reshuffle attempts before stuck recovery gives up.
const RECOVERY_ATTEMPTS: usize = 32;

/// Deal generation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum DealError {
    /// Constructive placement kept deadlocking on this layout.
    #[display("no solvable arrangement found after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },
}

/// Produces initial boards for a layout under a configured policy.
#[derive(Clone, Copy, Debug)]
pub struct DealGenerator {
    policy: DealPolicy,
}

impl DealGenerator {
    /// Create a generator with the given policy.
    #[must_use]
    pub fn new(policy: DealPolicy) -> Self {
        Self { policy }
    }

    /// The configured policy.
    #[must_use]
    pub fn policy(&self) -> DealPolicy {
        self.policy
    }

    /// Deal a fresh board over `layout`.
    pub fn deal(
        &self,
        layout: &Arc<BoardLayout>,
        rng: &mut GameRng,
    ) -> Result<BoardState, DealError> {
        match self.policy {
            DealPolicy::Random => Ok(self.deal_random(layout, rng)),
            DealPolicy::Solvable => self.deal_solvable(layout, rng).map(|(board, _)| board),
        }
    }

    /// Deal a solvable board and return the witness solution: the pair
    /// removal order the construction guarantees to work.
    ///
    /// Front-ends can use the witness for a "show solution" feature;
    /// tests use it to verify solvability without a search.
    pub fn deal_with_solution(
        &self,
        layout: &Arc<BoardLayout>,
        rng: &mut GameRng,
    ) -> Result<(BoardState, Vec<(Position, Position)>), DealError> {
        self.deal_solvable(layout, rng)
    }

    fn deal_random(&self, layout: &Arc<BoardLayout>, rng: &mut GameRng) -> BoardState {
        let mut deck: Vec<Tile> = draw_pairs(layout.len(), rng)
            .into_iter()
            .flat_map(|(a, b)| [a, b])
            .collect();
        rng.shuffle(&mut deck);

        let tiles: FxHashMap<Position, Tile> =
            layout.positions().iter().copied().zip(deck).collect();
        debug!(layout = layout.name(), tiles = tiles.len(), "random deal");

        board_from_assignment(layout, tiles)
    }

    fn deal_solvable(
        &self,
        layout: &Arc<BoardLayout>,
        rng: &mut GameRng,
    ) -> Result<(BoardState, Vec<(Position, Position)>), DealError> {
        for attempt in 1..=SOLVABLE_ATTEMPTS {
            let mut attempt_rng = rng.fork();
            if let Some((tiles, solution)) = try_constructive(layout, &mut attempt_rng) {
                debug!(layout = layout.name(), attempt, "solvable deal placed");
                return Ok((board_from_assignment(layout, tiles), solution));
            }
            trace!(layout = layout.name(), attempt, "constructive placement deadlocked");
        }
        Err(DealError::AttemptsExhausted {
            attempts: SOLVABLE_ATTEMPTS,
        })
    }
}

/// True iff no two exposed tiles currently match.
#[must_use]
pub fn is_stuck(board: &BoardState) -> bool {
    find_match(board).is_none()
}

/// First matching exposed pair in canonical order, if any.
///
/// O(exposed^2) scan; the exposed set is bounded by the tile count.
#[must_use]
pub fn find_match(board: &BoardState) -> Option<(Position, Position)> {
    let exposed = board.exposed_positions();
    for (i, &first) in exposed.iter().enumerate() {
        let first_tile = board.tile(first)?;
        for &second in &exposed[i + 1..] {
            let second_tile = board.tile(second)?;
            if first_tile.matches(second_tile) {
                return Some((first, second));
            }
        }
    }
    None
}

/// Stuck recovery: rearrange the remaining tiles over the currently
/// occupied positions until the board has a playable pair again.
///
/// The occupied position set is unchanged, so stacking support is
/// unaffected. Returns `false` (board unchanged) when no playable
/// arrangement turned up within the attempt bound - for example when
/// only one mutually unmatchable group of tiles remains.
pub fn shuffle_remaining(board: &mut BoardState, rng: &mut GameRng) -> bool {
    if board.tiles_remaining() < 2 {
        return false;
    }

    let positions: Vec<Position> = board.occupied().map(|(p, _)| p).collect();
    let mut tiles: Vec<Tile> = board.occupied().map(|(_, t)| t).collect();

    for attempt in 1..=RECOVERY_ATTEMPTS {
        rng.shuffle(&mut tiles);
        let assignment: FxHashMap<Position, Tile> =
            positions.iter().copied().zip(tiles.iter().copied()).collect();
        let candidate = board_from_assignment(&board.layout_handle(), assignment);
        if !is_stuck(&candidate) {
            debug!(attempt, remaining = candidate.tiles_remaining(), "recovery shuffle");
            *board = candidate;
            return true;
        }
    }
    false
}

/// Draw `positions / 2` matched pairs from the shuffled pair pool.
///
/// Layouts sized for the full standard set draw every pair exactly
/// once; smaller boards draw a random subset of whole pairs; oversized
/// boards cycle the pool.
fn draw_pairs(positions: usize, rng: &mut GameRng) -> Vec<(Tile, Tile)> {
    let mut pool = tiles::matched_pairs();
    rng.shuffle(&mut pool);
    pool.iter().copied().cycle().take(positions / 2).collect()
}

/// Reverse-removal placement over a scratch board.
///
/// Returns the assignment plus the pair order it was built in, or
/// `None` when fewer than two free positions remain before the board
/// fills.
fn try_constructive(
    layout: &Arc<BoardLayout>,
    rng: &mut GameRng,
) -> Option<(FxHashMap<Position, Tile>, Vec<(Position, Position)>)> {
    let pairs = draw_pairs(layout.len(), rng);

    // Scratch board fully occupied by a placeholder; the tile values
    // are irrelevant, only occupancy drives exposure.
    let placeholder = pairs.first()?.0;
    let mut scratch = board_from_assignment(
        layout,
        layout.positions().iter().map(|&p| (p, placeholder)).collect(),
    );

    let mut assignment = FxHashMap::default();
    let mut solution = Vec::with_capacity(pairs.len());

    for (first_tile, second_tile) in pairs {
        let mut free = scratch.exposed_positions();
        if free.len() < 2 {
            return None;
        }

        let first = free.swap_remove(rng.gen_range_usize(0..free.len()));
        let second = free.swap_remove(rng.gen_range_usize(0..free.len()));

        // Removing the first can only open the board, so both stay
        // removable.
        scratch.remove(first).ok()?;
        scratch.remove(second).ok()?;

        assignment.insert(first, first_tile);
        assignment.insert(second, second_tile);
        solution.push((first, second));
    }

    Some((assignment, solution))
}

fn board_from_assignment(
    layout: &Arc<BoardLayout>,
    tiles: FxHashMap<Position, Tile>,
) -> BoardState {
    // Assignments are built from layout positions, so this cannot fail.
    BoardState::with_tiles(Arc::clone(layout), tiles)
        .unwrap_or_else(|err| panic!("deal produced invalid assignment: {err}"))
}
