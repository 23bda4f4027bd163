//! Exhaustive checks over every position reachable by alternating play.

use perfect_tictactoe::{
    best_move, evaluate, BoardInvariants, BoardState, InvariantSet, Move, Outcome, Player,
    Position, WIN_SCORE,
};
use std::collections::HashSet;

/// Every state reachable from an empty board with `first` to move.
fn reachable_states(first: Player) -> HashSet<BoardState> {
    let mut seen = HashSet::new();
    let mut stack = vec![BoardState::starting_with(first)];

    while let Some(state) = stack.pop() {
        if !seen.insert(state) || state.outcome().is_terminal() {
            continue;
        }
        for pos in state.valid_moves() {
            let next = state
                .apply(Move::new(state.to_move(), pos))
                .expect("valid move from non-terminal state");
            stack.push(next);
        }
    }

    seen
}

fn all_reachable_states() -> HashSet<BoardState> {
    let mut states = reachable_states(Player::Human);
    states.extend(reachable_states(Player::Computer));
    states
}

#[test]
fn test_reachable_state_count() {
    // Well-known count of distinct legal positions when X moves first.
    assert_eq!(reachable_states(Player::Human).len(), 5478);
}

#[test]
fn test_at_most_one_winner_everywhere() {
    for state in all_reachable_states() {
        assert!(
            BoardInvariants::check_all(state.board()).is_ok(),
            "invariant broken on\n{}",
            state.board()
        );
    }
}

#[test]
fn test_evaluate_is_idempotent_and_pure() {
    for state in all_reachable_states() {
        let before = state;
        let first = evaluate(state.board());
        let second = evaluate(state.board());
        assert_eq!(first, second);
        assert_eq!(state, before);
    }
}

#[test]
fn test_best_move_is_legal_and_takes_immediate_wins() {
    let computer_turns = all_reachable_states()
        .into_iter()
        .filter(|s| s.to_move() == Player::Computer && !s.outcome().is_terminal());

    for state in computer_turns {
        let before = state;
        let pos = best_move(&state).expect("search on live position");
        assert_eq!(state, before, "search leaked a mark");
        assert!(state.board().is_empty(pos), "occupied square chosen");

        let wins_now = |p: Position| {
            let next = state.apply(Move::new(Player::Computer, p)).unwrap();
            next.outcome() == Outcome::Won(Player::Computer)
        };
        if state.valid_moves().into_iter().any(wins_now) {
            assert!(
                wins_now(pos),
                "missed a win on\n{}\nplayed {}",
                state.board(),
                pos
            );
        }
    }
}

/// Plays every human line against the engine; returns the number of games.
fn play_all_lines(state: BoardState, worst: &mut Outcome) -> usize {
    let outcome = state.outcome();
    if outcome.is_terminal() {
        assert_ne!(
            outcome,
            Outcome::Won(Player::Human),
            "computer lost on\n{}",
            state.board()
        );
        if outcome == Outcome::Draw {
            *worst = Outcome::Draw;
        }
        return 1;
    }

    match state.to_move() {
        Player::Computer => {
            let pos = best_move(&state).unwrap();
            let next = state.apply(Move::new(Player::Computer, pos)).unwrap();
            play_all_lines(next, worst)
        }
        Player::Human => state
            .valid_moves()
            .into_iter()
            .map(|pos| {
                let next = state.apply(Move::new(Player::Human, pos)).unwrap();
                play_all_lines(next, worst)
            })
            .sum(),
    }
}

#[test]
fn test_computer_never_loses_moving_second() {
    let mut worst = Outcome::Won(Player::Computer);
    let games = play_all_lines(BoardState::starting_with(Player::Human), &mut worst);
    assert!(games > 0);
    assert_eq!(worst, Outcome::Draw);
}

#[test]
fn test_computer_never_loses_moving_first() {
    let mut worst = Outcome::Won(Player::Computer);
    let games = play_all_lines(BoardState::starting_with(Player::Computer), &mut worst);
    assert!(games > 0);
    assert_eq!(worst, Outcome::Draw);
}

#[test]
fn test_scores_stay_within_depth_bounds() {
    let state = BoardState::starting_with(Player::Computer);
    for m in perfect_tictactoe::rank_moves(&state).unwrap() {
        assert!(m.score.abs() <= WIN_SCORE);
    }
}
