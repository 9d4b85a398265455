//! Tile values and match equivalence.
//!
//! A `Tile` is an immutable value: a suit plus a rank. Two tiles are
//! removable as a pair when they match - identical suit and rank, except
//! for the wildcard categories (Flowers, Seasons), where any member of
//! the category matches any other member.

use serde::{Deserialize, Serialize};

/// All tile suits, in canonical order.
pub const ALL_SUITS: [Suit; 7] = [
    Suit::Bamboo,
    Suit::Dots,
    Suit::Characters,
    Suit::Winds,
    Suit::Dragons,
    Suit::Flowers,
    Suit::Seasons,
];

/// Tile category.
///
/// The three suited categories carry ranks 1-9; honors and wildcards
/// have shorter rank ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Bamboo,
    Dots,
    Characters,
    Winds,
    Dragons,
    Flowers,
    Seasons,
}

impl Suit {
    /// Number of distinct ranks in this suit.
    #[must_use]
    pub const fn rank_count(self) -> u8 {
        match self {
            Suit::Bamboo | Suit::Dots | Suit::Characters => 9,
            Suit::Winds | Suit::Flowers | Suit::Seasons => 4,
            Suit::Dragons => 3,
        }
    }

    /// Copies of each rank in the standard 144-tile set.
    #[must_use]
    pub const fn copies_per_rank(self) -> u8 {
        if self.is_wildcard() {
            1
        } else {
            4
        }
    }

    /// Wildcard categories match within the category regardless of rank.
    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Suit::Flowers | Suit::Seasons)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Bamboo => "Bamboo",
            Suit::Dots => "Dots",
            Suit::Characters => "Characters",
            Suit::Winds => "Winds",
            Suit::Dragons => "Dragons",
            Suit::Flowers => "Flowers",
            Suit::Seasons => "Seasons",
        };
        write!(f, "{name}")
    }
}

/// Rank within a suit, 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    /// Create a new rank.
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        Self(rank)
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable tile value: suit plus rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tile {
    pub suit: Suit,
    pub rank: Rank,
}

impl Tile {
    /// Create a tile.
    ///
    /// Panics if the rank is outside the suit's range - tile identities
    /// are fixed data, so an invalid one is a programming error.
    #[must_use]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        assert!(
            rank.raw() >= 1 && rank.raw() <= suit.rank_count(),
            "rank {} out of range for suit {}",
            rank,
            suit
        );
        Self { suit, rank }
    }

    /// Match equivalence: identical suit and rank, or both members of
    /// the same wildcard category.
    #[must_use]
    pub fn matches(self, other: Tile) -> bool {
        self.suit == other.suit && (self.suit.is_wildcard() || self.rank == other.rank)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.suit, self.rank)
    }
}
