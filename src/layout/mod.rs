//! Board layout: the fixed geometric template a game is played on.
//!
//! A `BoardLayout` is the set of valid positions plus the geometry
//! queries the exposure rule needs: which positions cover a slot from
//! above, and which are its horizontal neighbors. The template is data,
//! not algorithm - but it is validated at build time so that every
//! layout is physically stackable (no position floats above a gap) and
//! can be fully paired off.
//!
//! Layouts are built either through `LayoutBuilder` or looked up by
//! name from the built-in templates (`turtle`, `pyramid`, `flat`).

pub mod templates;

pub use templates::BUILTIN_NAMES;

use derive_more::{Display, Error};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::Position;

/// Malformed board template. Fatal: a game cannot start on a layout
/// that fails validation.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum LayoutError {
    /// The template contains no positions at all.
    #[display("layout `{name}` has no positions")]
    Empty { name: String },

    /// Tiles are removed in pairs, so a template must hold an even
    /// number of positions.
    #[display("layout `{name}` has an odd number of positions ({count})")]
    OddPositionCount { name: String, count: usize },

    /// The same position is listed more than once.
    #[display("layout `{name}` lists position {position} more than once")]
    DuplicatePosition { name: String, position: Position },

    /// A position above layer 0 has no supporting position below it.
    #[display("layout `{name}` has unsupported position {position}")]
    Unsupported { name: String, position: Position },

    /// No built-in template with the requested name.
    #[display("unknown layout `{name}`")]
    UnknownLayout { name: String },
}

/// A validated board template.
///
/// Positions are stored in canonical (layer, row, column) order; every
/// scan over a layout is deterministic because of it.
#[derive(Clone, Debug)]
pub struct BoardLayout {
    name: String,
    positions: Vec<Position>,
    index: FxHashSet<Position>,
}

impl BoardLayout {
    /// Start building a layout.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LayoutBuilder {
        LayoutBuilder {
            name: name.into(),
            positions: Vec::new(),
        }
    }

    /// Look up a built-in template by name.
    pub fn by_name(name: &str) -> Result<Self, LayoutError> {
        templates::by_name(name)
    }

    /// Template name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of positions (equals the number of tiles when dealt).
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// A layout never validates empty; kept for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Is `p` a slot of this layout?
    #[must_use]
    pub fn contains(&self, p: Position) -> bool {
        self.index.contains(&p)
    }

    /// All positions in canonical order.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Layout positions that cover `p` from above.
    ///
    /// With full-footprint support this is at most the one slot directly
    /// on top, but callers treat it as a set.
    #[must_use]
    pub fn positions_above(&self, p: Position) -> SmallVec<[Position; 4]> {
        let mut above = SmallVec::new();
        if let Some(q) = p.above() {
            if self.contains(q) {
                above.push(q);
            }
        }
        above
    }

    /// The left and right layout neighbors of `p` in its own layer.
    ///
    /// `None` means the board simply ends there - an open side for the
    /// free-tile rule.
    #[must_use]
    pub fn horizontal_neighbors(&self, p: Position) -> (Option<Position>, Option<Position>) {
        let left = p.left().filter(|q| self.contains(*q));
        let right = p.right().filter(|q| self.contains(*q));
        (left, right)
    }
}

/// Builder for `BoardLayout`.
///
/// Collects positions, then validates the template as a whole in
/// `build()`.
pub struct LayoutBuilder {
    name: String,
    positions: Vec<Position>,
}

impl LayoutBuilder {
    /// Add a single position.
    #[must_use]
    pub fn position(mut self, layer: u8, row: u8, col: u8) -> Self {
        self.positions.push(Position::new(layer, row, col));
        self
    }

    /// Add a rectangular block of positions on one layer.
    #[must_use]
    pub fn block(
        mut self,
        layer: u8,
        rows: std::ops::Range<u8>,
        cols: std::ops::Range<u8>,
    ) -> Self {
        for row in rows {
            for col in cols.clone() {
                self.positions.push(Position::new(layer, row, col));
            }
        }
        self
    }

    /// Validate and finish the layout.
    pub fn build(self) -> Result<BoardLayout, LayoutError> {
        let Self { name, mut positions } = self;

        if positions.is_empty() {
            return Err(LayoutError::Empty { name });
        }
        if positions.len() % 2 != 0 {
            return Err(LayoutError::OddPositionCount {
                name,
                count: positions.len(),
            });
        }

        positions.sort();
        if let Some(dup) = positions.windows(2).find(|w| w[0] == w[1]) {
            return Err(LayoutError::DuplicatePosition {
                name,
                position: dup[0],
            });
        }

        let index: FxHashSet<Position> = positions.iter().copied().collect();
        for &p in &positions {
            if p.layer > 0 {
                let supported = p.below().is_some_and(|q| index.contains(&q));
                if !supported {
                    return Err(LayoutError::Unsupported { name, position: p });
                }
            }
        }

        Ok(BoardLayout {
            name,
            positions,
            index,
        })
    }
}
