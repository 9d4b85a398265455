//! Built-in layout templates.
//!
//! Three stock boards:
//!
//! - `turtle`: the default three-layer 144-position board, sized for
//!   the full standard tile set.
//! - `pyramid`: a small 56-position three-layer board.
//! - `flat`: the single-layer 12x8 grid; every tile with a free side is
//!   selectable, so it plays as a beginner board.
//!
//! Templates go through the same `build()` validation as user layouts.

use super::{BoardLayout, LayoutError};

/// Names of all built-in templates.
pub const BUILTIN_NAMES: [&str; 3] = ["turtle", "pyramid", "flat"];

/// Look up a built-in template by name.
pub fn by_name(name: &str) -> Result<BoardLayout, LayoutError> {
    match name {
        "turtle" => turtle(),
        "pyramid" => pyramid(),
        "flat" => flat(),
        _ => Err(LayoutError::UnknownLayout {
            name: name.to_string(),
        }),
    }
}

/// Three stacked centered blocks: 96 + 40 + 8 = 144 positions.
fn turtle() -> Result<BoardLayout, LayoutError> {
    BoardLayout::builder("turtle")
        .block(0, 0..8, 0..12)
        .block(1, 1..6, 2..10)
        .block(2, 3..5, 4..8)
        .build()
}

/// Three stacked centered blocks: 36 + 16 + 4 = 56 positions.
fn pyramid() -> Result<BoardLayout, LayoutError> {
    BoardLayout::builder("pyramid")
        .block(0, 0..6, 0..6)
        .block(1, 1..5, 1..5)
        .block(2, 2..4, 2..4)
        .build()
}

/// The single-layer 12-column, 8-row grid.
fn flat() -> Result<BoardLayout, LayoutError> {
    BoardLayout::builder("flat").block(0, 0..8, 0..12).build()
}
