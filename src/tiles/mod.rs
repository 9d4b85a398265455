//! Tile catalog: tile identities, match rules, the standard set.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`, `Tile`: immutable tile values
//! - `Tile::matches`: the pairwise match-equivalence rule
//! - `catalog`: the fixed 144-tile multiset and its 72 matched pairs
//!
//! Everything here is pure data and pure functions; live board state
//! lives in the `board` module.

pub mod catalog;
pub mod tile;

pub use catalog::{matched_pairs, standard_set, STANDARD_PAIR_COUNT, STANDARD_SET_SIZE};
pub use tile::{Rank, Suit, Tile, ALL_SUITS};
