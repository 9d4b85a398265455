//! Session state-machine verification: the full select/match/win/stuck
//! cycle as a GUI shell would drive it.
//!
//! Deals are random but deterministic per seed, so tests that need a
//! particular shape of board (a mismatching exposed pair, a stuck
//! opening) scan seeds for one that exhibits it and then assert the
//! engine's behavior on it. The scan itself is deterministic.

use std::sync::Arc;

use mahjongg_engine::{
    BoardLayout, DealPolicy, GameConfig, GameSession, IllegalSelection, Position,
    SelectionOutcome, SessionState,
};

fn pair_layout() -> Arc<BoardLayout> {
    Arc::new(
        BoardLayout::builder("pair")
            .block(0, 0..1, 0..2)
            .build()
            .unwrap(),
    )
}

fn row4_layout() -> Arc<BoardLayout> {
    Arc::new(
        BoardLayout::builder("row4")
            .block(0, 0..1, 0..4)
            .build()
            .unwrap(),
    )
}

#[test]
fn full_game_on_the_smallest_board() {
    let mut session = GameSession::with_layout(GameConfig::new(42), pair_layout()).unwrap();
    let left = Position::new(0, 0, 0);
    let right = Position::new(0, 0, 1);

    assert_eq!(session.state(), SessionState::Selecting);
    assert_eq!(session.select(left), SelectionOutcome::OneChosen(left));
    assert_eq!(session.select(right), SelectionOutcome::Won);
    assert_eq!(session.state(), SessionState::Won);
    assert!(session.state().is_terminal());
    assert_eq!(session.view().tiles_remaining, 0);
    assert_eq!(session.view().matches_made, 1);
}

#[test]
fn mismatch_clears_selection_and_keeps_tiles() {
    // Find a deal whose exposed set contains a non-matching pair.
    for seed in 0..50 {
        let mut session =
            GameSession::with_layout(GameConfig::new(seed), Arc::new(
                BoardLayout::by_name("pyramid").unwrap(),
            ))
            .unwrap();

        let view = session.view();
        let mismatch = view.exposed.iter().find_map(|&a| {
            view.exposed
                .iter()
                .find(|&&b| {
                    b != a
                        && !session
                            .board()
                            .tile(a)
                            .unwrap()
                            .matches(session.board().tile(b).unwrap())
                })
                .map(|&b| (a, b))
        });

        if let Some((a, b)) = mismatch {
            let before = session.view().tiles_remaining;

            assert_eq!(session.select(a), SelectionOutcome::OneChosen(a));
            assert_eq!(
                session.select(b),
                SelectionOutcome::MatchFailure { first: a, second: b }
            );
            assert_eq!(session.state(), SessionState::Selecting);
            assert_eq!(session.view().tiles_remaining, before);
            assert_eq!(session.view().selected, None);
            return;
        }
    }
    panic!("no seed in 0..50 produced a mismatching exposed pair");
}

#[test]
fn match_success_keeps_the_game_open() {
    // Matching a hinted pair removes it; on a 56-tile board the game
    // then either continues (the common case) or reports Stuck - it
    // never silently swallows the match.
    for seed in 0..20 {
        let mut session = GameSession::with_layout(
            GameConfig::new(seed),
            Arc::new(BoardLayout::by_name("pyramid").unwrap()),
        )
        .unwrap();

        let (a, b) = session.hint().expect("solvable deal always opens with a match");
        assert_eq!(session.select(a), SelectionOutcome::OneChosen(a));
        let outcome = session.select(b);
        assert_eq!(session.view().tiles_remaining, 54);
        assert_eq!(session.view().matches_made, 1);

        if outcome == (SelectionOutcome::MatchSuccess { first: a, second: b }) {
            assert_eq!(session.state(), SessionState::Selecting);
            return;
        }
        assert_eq!(outcome, SelectionOutcome::Stuck);
    }
    panic!("no seed in 0..20 continued past the first match");
}

#[test]
fn random_deal_on_a_row_can_open_stuck_and_recover() {
    // A 1x4 row exposes only its ends. With a random deal the ends may
    // mismatch, which is a stuck opening; recovery reshuffles in place.
    let config_for = |seed| GameConfig::new(seed).with_policy(DealPolicy::Random);

    for seed in 0..200 {
        let mut session =
            GameSession::with_layout(config_for(seed), row4_layout()).unwrap();
        if session.state() != SessionState::Stuck {
            continue;
        }

        // Selections are rejected while stuck.
        assert_eq!(
            session.select(Position::new(0, 0, 0)),
            SelectionOutcome::IllegalSelection(IllegalSelection::GameOver)
        );
        assert_eq!(session.hint(), None);

        // Recovery keeps the same tiles but arranges a playable board.
        assert!(session.shuffle_stuck());
        assert_eq!(session.state(), SessionState::Selecting);
        assert_eq!(session.view().tiles_remaining, 4);
        assert!(session.hint().is_some());
        return;
    }
    panic!("no seed in 0..200 dealt a stuck 1x4 row");
}

#[test]
fn selecting_a_blocked_tile_is_rejected_without_state_change() {
    let mut session = GameSession::with_layout(GameConfig::new(8), row4_layout()).unwrap();
    let blocked = Position::new(0, 0, 1);

    assert_eq!(
        session.select(blocked),
        SelectionOutcome::IllegalSelection(IllegalSelection::NotSelectable {
            position: blocked
        })
    );
    assert_eq!(session.state(), SessionState::Selecting);
}

#[test]
fn illegal_second_pick_keeps_the_first_selection() {
    let mut session = GameSession::with_layout(GameConfig::new(8), row4_layout()).unwrap();
    let first = Position::new(0, 0, 0);
    let blocked = Position::new(0, 0, 1);

    session.select(first);
    assert_eq!(
        session.select(blocked),
        SelectionOutcome::IllegalSelection(IllegalSelection::NotSelectable {
            position: blocked
        })
    );
    assert_eq!(session.state(), SessionState::OneChosen(first));
    assert_eq!(session.view().selected, Some(first));
}

#[test]
fn restart_is_reproducible_per_seed() {
    let make = || GameSession::new(GameConfig::new(77).with_layout("pyramid")).unwrap();

    let mut session_a = make();
    let mut session_b = make();
    session_a.restart().unwrap();
    session_b.restart().unwrap();

    let tiles_a: Vec<_> = session_a.board().occupied().collect();
    let tiles_b: Vec<_> = session_b.board().occupied().collect();
    assert_eq!(tiles_a, tiles_b);

    // And the restarted board differs from the initial deal.
    let initial: Vec<_> = make().board().occupied().collect();
    assert_ne!(tiles_a, initial);
}

#[test]
fn undo_walks_back_through_the_history() {
    let mut session = GameSession::new(GameConfig::new(12).with_layout("pyramid")).unwrap();

    let snapshot: Vec<_> = session.board().occupied().collect();
    let mut matches = 0;
    while matches < 3 {
        let Some((a, b)) = session.hint() else { break };
        assert!(matches!(session.select(a), SelectionOutcome::OneChosen(_)));
        let outcome = session.select(b);
        matches += 1;
        if !matches!(outcome, SelectionOutcome::MatchSuccess { .. }) {
            break;
        }
    }
    assert_eq!(session.view().matches_made, matches);

    while session.undo() {}

    let restored: Vec<_> = session.board().occupied().collect();
    assert_eq!(restored, snapshot);
    assert_eq!(session.view().matches_made, 0);
}

#[test]
fn unknown_layout_fails_to_start() {
    let err = GameSession::new(GameConfig::new(1).with_layout("no-such-board"));
    assert!(err.is_err());
}

#[test]
fn view_serializes_for_front_ends() {
    let session = GameSession::new(GameConfig::new(4).with_layout("flat")).unwrap();
    let view = session.view();

    let json = serde_json::to_string(&view).unwrap();
    let back: mahjongg_engine::SessionView = serde_json::from_str(&json).unwrap();

    assert_eq!(back.layout, "flat");
    assert_eq!(back.tiles_remaining, view.tiles_remaining);
    assert_eq!(back.tiles.len(), 96);
    assert_eq!(back.state, SessionState::Selecting);
}

#[test]
fn default_config_starts_a_full_turtle_game() {
    let session = GameSession::new(GameConfig::new(0)).unwrap();

    assert_eq!(session.layout().name(), "turtle");
    assert_eq!(session.view().tiles_remaining, 144);
    assert_eq!(session.state(), SessionState::Selecting);
}
