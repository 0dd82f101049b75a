//! Tests for the computer's search, including an exhaustive check that it
//! never loses.

use strictly_tictactoe::{
    Board, Engine, EngineInvariants, GameState, InvariantSet, Mark, MoveError, Position, find_best_move,
    rules, score_moves,
};

/// Plays every possible player line against the engine, returning how many
/// games ended in a computer win and how many in a draw.
fn explore(engine: &Engine, outcomes: &mut (usize, usize)) {
    for position in engine.valid_moves() {
        let mut next = engine.clone();
        let report = next.submit(position).expect("Legal move");

        assert!(
            EngineInvariants::check_all(&next).is_ok(),
            "Invariants broken after {:?}",
            next.history()
        );
        assert!(
            !(next.board().has_line(Mark::Player) && next.board().has_line(Mark::Computer)),
            "Both sides hold a line"
        );

        match report.state() {
            GameState::InProgress => {
                assert!(next.is_player_turn());
                explore(&next, outcomes);
            }
            GameState::ComputerWins => outcomes.0 += 1,
            GameState::Draw => outcomes.1 += 1,
            GameState::PlayerWins => panic!("Player won with {:?}", next.history()),
        }
    }
}

#[test]
fn test_computer_never_loses() {
    let mut outcomes = (0, 0);
    explore(&Engine::new_game(), &mut outcomes);

    let (computer_wins, draws) = outcomes;
    assert!(computer_wins > 0);
    assert!(draws > 0);
}

#[test]
fn test_takes_immediate_win() {
    // Computer can finish the middle row.
    let mut board = Board::from_notation("XX. OO. X..").unwrap();
    let best = find_best_move(&mut board).unwrap();
    assert_eq!(best.position, Position::MiddleRight);
    assert_eq!(best.score, 10);
}

#[test]
fn test_prefers_win_over_block() {
    // Player threatens the top row, computer can win on the middle row first.
    let mut board = Board::from_notation("XX. OO. ..X").unwrap();
    let best = find_best_move(&mut board).unwrap();
    assert_eq!(best.position, Position::MiddleRight);
}

#[test]
fn test_blocks_open_line() {
    let mut board = Board::from_notation("XX. .O. ...").unwrap();
    let best = find_best_move(&mut board).unwrap();
    assert_eq!(best.position, Position::TopRight);
    assert!(best.score >= 0);
}

#[test]
fn test_losing_candidates_score_negative() {
    let mut board = Board::from_notation("XX. .O. ...").unwrap();
    let scored = score_moves(&mut board).unwrap();

    assert_eq!(scored.len(), 6);
    for candidate in scored {
        if candidate.position != Position::TopRight {
            assert_eq!(candidate.score, 1 - 10, "{:?}", candidate);
        }
    }
}

#[test]
fn test_scores_are_row_major() {
    let mut board = Board::from_notation("X.. ... ...").unwrap();
    let positions: Vec<Position> = score_moves(&mut board)
        .unwrap()
        .iter()
        .map(|candidate| candidate.position)
        .collect();
    assert_eq!(positions, Position::ALL[1..].to_vec());
}

#[test]
fn test_corner_opening_answered_at_center() {
    for corner in ["X.. ... ...", "..X ... ...", "... ... X..", "... ... ..X"] {
        let mut board = Board::from_notation(corner).unwrap();
        let best = find_best_move(&mut board).unwrap();
        assert_eq!(best.position, Position::Center, "{}", corner);
        assert_eq!(best.score, 0);
    }
}

#[test]
fn test_center_opening_answered_at_first_corner() {
    let mut board = Board::from_notation("... .X. ...").unwrap();
    let best = find_best_move(&mut board).unwrap();
    assert_eq!(best.position, Position::TopLeft);
    assert_eq!(best.score, 0);
}

#[test]
fn test_search_is_deterministic() {
    let mut board = Board::from_notation("X.. ... ..X").unwrap();
    let first = find_best_move(&mut board).unwrap();
    for _ in 0..5 {
        assert_eq!(find_best_move(&mut board).unwrap(), first);
    }
}

#[test]
fn test_search_restores_board() {
    let mut board = Board::from_notation("X.O .X. ...").unwrap();
    let before = board.clone();
    find_best_move(&mut board).unwrap();
    assert_eq!(board, before);
}

#[test]
fn test_search_rejects_finished_board() {
    let mut won = Board::from_notation("XXX OO. ...").unwrap();
    assert!(matches!(
        find_best_move(&mut won),
        Err(MoveError::InvariantViolation(_))
    ));

    let mut full = Board::from_notation("XOX XOO OXX").unwrap();
    assert_eq!(rules::assess(&full), GameState::Draw);
    assert!(matches!(
        score_moves(&mut full),
        Err(MoveError::InvariantViolation(_))
    ));
}
