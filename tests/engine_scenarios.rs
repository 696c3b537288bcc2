use std::time::Duration;

use chess_core::engines::engine_api::{apply_user_move, new_game, search_best_move, status, GameStatus, Outcome};
use chess_core::errors::MoveRejected;
use chess_core::game_state::chess_types::{Color, Position, NO_MOVE};
use chess_core::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};

#[test]
fn open_game_then_search_returns_a_legal_white_move() {
    let start = new_game();
    let after_e4 = apply_user_move(&start, "e2e4").expect("e2e4 should be legal");
    let after_e5 = apply_user_move(&after_e4, "e7e5").expect("e7e5 should be legal");
    assert_eq!(after_e5.side_to_move, Color::Light);

    let best = search_best_move(&after_e5, Duration::from_secs(60), 4);
    assert_ne!(best, NO_MOVE);

    let text = move_to_long_algebraic(best);
    assert_eq!(long_algebraic_to_move(&after_e5, &text), Ok(best));
    let next = apply_user_move(&after_e5, &text).expect("search result should be playable");
    assert_eq!(next.side_to_move, Color::Dark);
}

#[test]
fn rejected_moves_leave_the_position_alone() {
    let start = new_game();
    assert!(matches!(
        apply_user_move(&start, "hello"),
        Err(MoveRejected::Unparseable { .. })
    ));
    assert_eq!(
        apply_user_move(&start, "e1e2"),
        Err(MoveRejected::Illegal("e1e2".to_owned()))
    );
    assert_eq!(start, Position::new_game());
}

#[test]
fn fools_mate_is_reported_as_checkmate() {
    let mut position = new_game();
    for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        position = apply_user_move(&position, text).expect("fool's mate moves should be legal");
    }

    assert_eq!(
        status(&position),
        GameStatus {
            side_to_move: Color::Light,
            in_check: true,
            outcome: Outcome::Checkmate { winner: Color::Dark },
        }
    );
    assert_eq!(search_best_move(&position, Duration::from_secs(1), 3), NO_MOVE);
}

#[test]
fn search_takes_a_mate_in_one() {
    // back-rank mate with the rook
    let position = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN should parse");
    let best = search_best_move(&position, Duration::from_secs(60), 3);
    assert_eq!(move_to_long_algebraic(best), "a1a8");

    let after = apply_user_move(&position, "a1a8").expect("mate should be legal");
    assert_eq!(status(&after).outcome, Outcome::Checkmate { winner: Color::Light });
}

#[test]
fn malformed_fen_recovers_to_the_start_position() {
    let position = Position::from_fen_or_default("rnbqkbnr/pppppppp/8/8 w KQkq - 0 1");
    assert_eq!(position, new_game());
    assert_eq!(position.to_fen(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
}

#[test]
fn impossible_positions_fall_back_instead_of_losing_a_king() {
    // an e3 target with white to move would let d2 "capture" the king on e2
    for fen in [
        "8/8/8/8/8/8/3Pk3/K7 w - e3 0 1",
        "8/8/8/3Pk3/8/8/8/K7 w - e6 0 1",
        "6k1/5Q2/6K1/8/8/8/8/8 w - - 0 1",
    ] {
        let position = Position::from_fen_or_default(fen);
        assert_eq!(position, new_game(), "{fen} should be refused");
        assert!(apply_user_move(&position, "d2e3").is_err());
    }
}
