//! Property tests over random sequences of throws, undos and redos.

use dartrs::{
    GameState, Match, MatchOptions, RosterEntry, ScoreEvent, THROWS_PER_TURN, ThrowError, Undo,
};
use proptest::prelude::*;

const POOL: [&str; 9] = ["T20", "D20", "D10", "20", "5", "1", "-", "B", "OB"];

#[derive(Debug, Clone, Copy)]
enum Op {
    Throw(usize),
    Undo,
    Redo,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0..POOL.len()).prop_map(Op::Throw),
        2 => Just(Op::Undo),
        1 => Just(Op::Redo),
    ]
}

fn fresh(players: usize, starting_score: u32) -> Match {
    let roster: Vec<RosterEntry> = (0..players)
        .map(|index| RosterEntry::new(format!("P{index}")).with_id(format!("id-{index}")))
        .collect();
    let game = Match::new(MatchOptions::default(), 3);
    game.start_game(&roster, starting_score).unwrap();
    game
}

/// Plays every turn of `state` into a fresh match.
///
/// A turn that closes before its last throw was extended after being
/// reopened, so it is reopened here too.
fn rebuild(state: &GameState, players: usize, starting_score: u32) -> Match {
    let game = fresh(players, starting_score);
    let turns = state
        .closed_turns
        .iter()
        .rev()
        .chain(state.open_turn.iter());

    for turn in turns {
        let last = turn.len().saturating_sub(1);
        for throw in turn.throws() {
            let result = game.add_throw(throw.event).unwrap();
            assert_eq!(result.player, turn.player());
            if result.status.is_closed() && throw.index < last {
                assert!(matches!(game.undo(), Undo::Turn { .. }));
            }
        }
    }
    game
}

fn check_shape(state: &GameState) -> Result<(), TestCaseError> {
    if let Some(open) = &state.open_turn {
        prop_assert!(open.len() <= THROWS_PER_TURN);
        prop_assert_eq!(Some(open.player()), state.current_player);
    }
    for turn in &state.closed_turns {
        prop_assert!((1..=THROWS_PER_TURN).contains(&turn.len()));
        prop_assert!(turn.status().is_closed());
        prop_assert!(turn.remaining_after().is_some());
    }
    prop_assert_eq!(state.game_over, state.active_count() == 0);
    prop_assert_eq!(state.game_over, state.current_player.is_none());
    for standing in &state.standings {
        if !standing.player.active {
            prop_assert_eq!(standing.remaining, 0);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn engine_invariants_hold(
        players in 1_usize..4,
        starting_score in prop_oneof![Just(40_u32), Just(60), Just(101)],
        ops in prop::collection::vec(op(), 0..80),
    ) {
        let game = fresh(players, starting_score);

        for op in ops {
            match op {
                Op::Throw(index) => {
                    let due = game.current_player();
                    let event = ScoreEvent::parse(POOL[index], 0).unwrap();
                    match game.add_throw(event) {
                        Ok(result) => {
                            prop_assert_eq!(Some(result.player), due);
                            prop_assert!(!game.can_redo());
                        }
                        Err(ThrowError::GameOver) => prop_assert_eq!(due, None),
                        Err(ThrowError::TurnFull) => {
                            let open = game.snapshot().open_turn;
                            prop_assert_eq!(open.map(|turn| turn.len()), Some(THROWS_PER_TURN));
                        }
                        Err(ThrowError::NotStarted) => prop_assert!(false, "game was started"),
                    }
                }
                Op::Undo => {
                    let before = game.snapshot();
                    if let Undo::Turn { .. } = game.undo() {
                        // Undoing a whole turn and redoing it is a no-op.
                        game.redo();
                        prop_assert_eq!(game.snapshot(), before);
                        game.undo();
                    }
                }
                Op::Redo => {
                    game.redo();
                }
            }

            let state = game.snapshot();
            check_shape(&state)?;

            if state.redo_turns.is_empty() {
                let rebuilt = rebuild(&state, players, starting_score);
                prop_assert_eq!(rebuilt.snapshot(), state);
            }
        }
    }
}
