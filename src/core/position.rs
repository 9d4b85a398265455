//! Board coordinates.
//!
//! A `Position` names one tile slot in the board's physical arrangement:
//! a stacking layer plus a (row, column) cell within that layer. Higher
//! layers rest on top of lower ones; layer 0 is the table surface.
//!
//! Positions are plain coordinates - whether a position actually exists
//! on a given board is decided by `BoardLayout`, not here.

use serde::{Deserialize, Serialize};

/// A slot in the board's 3D arrangement: (layer, row, column).
///
/// Ordering is layer-major, then row, then column. That ordering defines
/// the canonical iteration order used wherever determinism matters
/// (deals, exposure scans, hints).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Stacking level; 0 is the bottom layer.
    pub layer: u8,
    /// Row within the layer.
    pub row: u8,
    /// Column within the layer.
    pub col: u8,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(layer: u8, row: u8, col: u8) -> Self {
        Self { layer, row, col }
    }

    /// The cell directly on top of this one, one layer up.
    ///
    /// Returns `None` on layer overflow.
    #[must_use]
    pub fn above(self) -> Option<Self> {
        let layer = self.layer.checked_add(1)?;
        Some(Self::new(layer, self.row, self.col))
    }

    /// The supporting cell one layer down, or `None` on the bottom layer.
    #[must_use]
    pub fn below(self) -> Option<Self> {
        let layer = self.layer.checked_sub(1)?;
        Some(Self::new(layer, self.row, self.col))
    }

    /// The cell immediately to the left in the same layer and row.
    #[must_use]
    pub fn left(self) -> Option<Self> {
        let col = self.col.checked_sub(1)?;
        Some(Self::new(self.layer, self.row, col))
    }

    /// The cell immediately to the right in the same layer and row.
    #[must_use]
    pub fn right(self) -> Option<Self> {
        let col = self.col.checked_add(1)?;
        Some(Self::new(self.layer, self.row, col))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}:{},{}", self.layer, self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors() {
        let p = Position::new(1, 2, 3);

        assert_eq!(p.above(), Some(Position::new(2, 2, 3)));
        assert_eq!(p.below(), Some(Position::new(0, 2, 3)));
        assert_eq!(p.left(), Some(Position::new(1, 2, 2)));
        assert_eq!(p.right(), Some(Position::new(1, 2, 4)));
    }

    #[test]
    fn test_edges() {
        let origin = Position::new(0, 0, 0);
        assert_eq!(origin.below(), None);
        assert_eq!(origin.left(), None);

        let top = Position::new(u8::MAX, 0, u8::MAX);
        assert_eq!(top.above(), None);
        assert_eq!(top.right(), None);
    }

    #[test]
    fn test_canonical_order() {
        let mut positions = vec![
            Position::new(1, 0, 0),
            Position::new(0, 1, 0),
            Position::new(0, 0, 2),
            Position::new(0, 0, 1),
        ];
        positions.sort();

        assert_eq!(
            positions,
            vec![
                Position::new(0, 0, 1),
                Position::new(0, 0, 2),
                Position::new(0, 1, 0),
                Position::new(1, 0, 0),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(2, 4, 11)), "L2:4,11");
    }
}
