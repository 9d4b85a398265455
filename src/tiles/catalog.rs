//! The standard tile set and its matched-pair pool.
//!
//! A standard Mahjongg solitaire set has 144 tiles: the three suited
//! categories contribute 4 copies of each rank 1-9 (108), Winds 4x4
//! (16), Dragons 3x4 (12), and the two wildcard categories contribute
//! one tile per rank (4 Flowers, 4 Seasons).
//!
//! Deals work in whole removable pairs, so the set is also exposed as
//! 72 matched pairs: every four-of-a-kind splits into two identical
//! pairs, and each wildcard category pairs off among itself.

use super::tile::{Rank, Suit, Tile, ALL_SUITS};

/// Tiles in the full standard set.
pub const STANDARD_SET_SIZE: usize = 144;

/// Matched pairs the standard set decomposes into.
pub const STANDARD_PAIR_COUNT: usize = STANDARD_SET_SIZE / 2;

/// The full 144-tile multiset, in canonical order.
#[must_use]
pub fn standard_set() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(STANDARD_SET_SIZE);
    for suit in ALL_SUITS {
        for rank in 1..=suit.rank_count() {
            for _ in 0..suit.copies_per_rank() {
                tiles.push(Tile::new(suit, Rank::new(rank)));
            }
        }
    }
    tiles
}

/// The standard set grouped into its 72 removable pairs.
///
/// Non-wildcard ranks yield two identical pairs each. Wildcard ranks
/// appear once, so consecutive ranks pair off; any two members of a
/// wildcard category match, so these pairs are removable too.
#[must_use]
pub fn matched_pairs() -> Vec<(Tile, Tile)> {
    let mut pairs = Vec::with_capacity(STANDARD_PAIR_COUNT);
    for suit in ALL_SUITS {
        if suit.is_wildcard() {
            for rank in (1..=suit.rank_count()).step_by(2) {
                pairs.push((
                    Tile::new(suit, Rank::new(rank)),
                    Tile::new(suit, Rank::new(rank + 1)),
                ));
            }
        } else {
            for rank in 1..=suit.rank_count() {
                let tile = Tile::new(suit, Rank::new(rank));
                pairs.push((tile, tile));
                pairs.push((tile, tile));
            }
        }
    }
    pairs
}
