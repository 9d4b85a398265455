//! Exposure-rule verification against hand-constructed boards.
//!
//! These tests pin down the free-tile rule on small two-layer boards
//! where every expectation can be checked by eye: a tile is exposed iff
//! nothing above it is occupied and at least one horizontal side is
//! vacant or off-board.

use std::sync::Arc;

use mahjongg_engine::{
    attempt_match, BoardLayout, BoardState, MatchOutcome, Position, Rank, Suit, Tile,
};

fn tile(suit: Suit, rank: u8) -> Tile {
    Tile::new(suit, Rank::new(rank))
}

fn pos(layer: u8, row: u8, col: u8) -> Position {
    Position::new(layer, row, col)
}

/// A 3x3 bottom layer with a single tile stacked on its center.
fn capped_square() -> Arc<BoardLayout> {
    Arc::new(
        BoardLayout::builder("capped-square")
            .block(0, 0..3, 0..3)
            .position(1, 1, 1)
            .build()
            .unwrap(),
    )
}

fn fully_dealt(layout: &Arc<BoardLayout>) -> BoardState {
    let tiles: Vec<_> = layout
        .positions()
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            // Arbitrary distinct-ish tiles; exposure only cares about occupancy.
            let rank = (i % 9) as u8 + 1;
            (p, tile(Suit::Bamboo, rank))
        })
        .collect();
    BoardState::with_tiles(Arc::clone(layout), tiles).unwrap()
}

#[test]
fn exposure_requires_open_side_and_clear_top() {
    let layout = capped_square();
    let board = fully_dealt(&layout);

    // Row ends have an off-board side and nothing above.
    for row in 0..3 {
        assert!(board.is_exposed(pos(0, row, 0)).unwrap());
        assert!(board.is_exposed(pos(0, row, 2)).unwrap());
    }

    // Row middles are side-blocked; the center is also covered.
    assert!(!board.is_exposed(pos(0, 0, 1)).unwrap());
    assert!(!board.is_exposed(pos(0, 1, 1)).unwrap());
    assert!(!board.is_exposed(pos(0, 2, 1)).unwrap());

    // The cap sits alone on layer 1: nothing above, both sides open.
    assert!(board.is_exposed(pos(1, 1, 1)).unwrap());
}

#[test]
fn removing_the_cap_exposes_nothing_new_until_a_side_opens() {
    let layout = capped_square();
    let mut board = fully_dealt(&layout);
    let center = pos(0, 1, 1);

    board.remove(pos(1, 1, 1)).unwrap();

    // Uncovered, but still blocked left and right.
    assert!(!board.is_exposed(center).unwrap());

    board.remove(pos(0, 1, 0)).unwrap();
    assert!(board.is_exposed(center).unwrap());
}

#[test]
fn covered_tile_cannot_be_removed_even_with_open_sides() {
    let layout = Arc::new(
        BoardLayout::builder("tower-base")
            .block(0, 0..1, 0..2)
            .position(1, 0, 0)
            .position(1, 0, 1)
            .build()
            .unwrap(),
    );
    let mut board = fully_dealt(&layout);

    // (0,0,0) has an off-board left side but a tile on top.
    assert!(!board.is_exposed(pos(0, 0, 0)).unwrap());
    assert!(board.remove(pos(0, 0, 0)).is_err());

    // Clear the top pair and the bottom opens up.
    board.remove(pos(1, 0, 0)).unwrap();
    board.remove(pos(1, 0, 1)).unwrap();
    assert!(board.is_exposed(pos(0, 0, 0)).unwrap());
}

#[test]
fn match_attempt_on_failure_is_a_strict_no_op() {
    let layout = Arc::new(
        BoardLayout::builder("row")
            .block(0, 0..1, 0..4)
            .build()
            .unwrap(),
    );
    let arrangement = [
        tile(Suit::Bamboo, 1),
        tile(Suit::Winds, 1),
        tile(Suit::Winds, 2),
        tile(Suit::Dots, 1),
    ];
    let placed: Vec<_> = layout
        .positions()
        .iter()
        .copied()
        .zip(arrangement)
        .collect();
    let mut board = BoardState::with_tiles(Arc::clone(&layout), placed.clone()).unwrap();

    // Bamboo-1 vs Dots-1: same rank, different suit.
    let outcome = attempt_match(&mut board, pos(0, 0, 0), pos(0, 0, 3)).unwrap();
    assert!(matches!(outcome, MatchOutcome::Mismatch { .. }));

    // Every occupant is exactly where it was.
    for (p, t) in placed {
        assert_eq!(board.tile(p), Some(t));
    }
}

#[test]
fn successful_match_removes_exactly_two() {
    let layout = capped_square();
    let mut board = fully_dealt(&layout);
    let before = board.tiles_remaining();

    // Corner tiles at (0,0,0) and (0,2,0) carry ranks 1 and 7 from the
    // dealing scheme; rebuild with a known matching pair instead.
    let mut tiles: Vec<_> = board.occupied().collect();
    for (p, t) in &mut tiles {
        if *p == pos(0, 0, 0) || *p == pos(0, 2, 0) {
            *t = tile(Suit::Dragons, 2);
        }
    }
    let mut board = BoardState::with_tiles(Arc::clone(&layout), tiles).unwrap();

    let outcome = attempt_match(&mut board, pos(0, 0, 0), pos(0, 2, 0)).unwrap();
    assert!(matches!(outcome, MatchOutcome::Removed { .. }));
    assert_eq!(board.tiles_remaining(), before - 2);
}

#[test]
fn two_layer_top_pair_clears_to_empty() {
    // A two-layer board occupied only by a matching pair on the top
    // layer: both are exposed, and clearing them empties the board.
    let layout = Arc::new(
        BoardLayout::builder("top-pair")
            .block(0, 0..2, 0..2)
            .position(1, 0, 0)
            .position(1, 0, 1)
            .build()
            .unwrap(),
    );
    let pair = tile(Suit::Characters, 5);
    let mut board = BoardState::with_tiles(
        Arc::clone(&layout),
        vec![(pos(1, 0, 0), pair), (pos(1, 0, 1), pair)],
    )
    .unwrap();

    assert!(board.is_exposed(pos(1, 0, 0)).unwrap());
    assert!(board.is_exposed(pos(1, 0, 1)).unwrap());

    let outcome = attempt_match(&mut board, pos(1, 0, 0), pos(1, 0, 1)).unwrap();
    assert!(matches!(outcome, MatchOutcome::Removed { .. }));
    assert!(board.is_empty());
}

#[test]
fn vacant_layout_positions_read_as_empty_not_errors() {
    let layout = capped_square();
    let board = BoardState::with_tiles(Arc::clone(&layout), []).unwrap();

    assert_eq!(board.occupant(pos(0, 0, 0)).unwrap(), None);
    assert!(!board.is_exposed(pos(0, 0, 0)).unwrap());

    // Off-layout positions do error.
    assert!(board.occupant(pos(7, 7, 7)).is_err());
}
