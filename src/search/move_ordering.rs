//! Move ordering for alpha-beta.
//!
//! Principal-variation move, then captures by most-valuable-victim /
//! least-valuable-attacker, then the two killers for the ply, then quiet
//! moves by history score.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{is_capture, move_piece_kind, move_to, FLAG_EN_PASSANT};
use crate::search::search_context::SearchContext;

const PV_MOVE_SCORE: i32 = 20_000;
const CAPTURE_BASE_SCORE: i32 = 10_000;
const FIRST_KILLER_SCORE: i32 = 9_000;
const SECOND_KILLER_SCORE: i32 = 8_000;

/// `PxQ` is the best capture, `KxP` the worst.
#[inline]
pub fn mvv_lva(attacker: PieceKind, victim: PieceKind) -> i32 {
    (victim.index() as i32 + 1) * 100 + 5 - attacker.index() as i32
}

fn captured_kind(position: &Position, mv: Move) -> PieceKind {
    if mv & FLAG_EN_PASSANT != 0 {
        return PieceKind::Pawn;
    }
    position
        .piece_kind_on(position.side_to_move.opposite(), move_to(mv))
        .unwrap_or(PieceKind::Pawn)
}

pub fn score_move(position: &Position, ctx: &SearchContext, mv: Move, pv_move: Move) -> i32 {
    if mv == pv_move {
        return PV_MOVE_SCORE;
    }

    if is_capture(mv) {
        let attacker = move_piece_kind(mv).unwrap_or(PieceKind::Pawn);
        return CAPTURE_BASE_SCORE + mvv_lva(attacker, captured_kind(position, mv));
    }

    let killers = ctx.killers_at(ctx.ply);
    if mv == killers[0] {
        FIRST_KILLER_SCORE
    } else if mv == killers[1] {
        SECOND_KILLER_SCORE
    } else {
        ctx.history_score(mv)
    }
}

/// Sort `moves` best first. Ties keep generation order.
pub fn order_moves(position: &Position, ctx: &SearchContext, moves: &mut [Move], pv_move: Move) {
    let mut scored: Vec<(i32, Move)> = moves
        .iter()
        .map(|&mv| (score_move(position, ctx, mv, pv_move), mv))
        .collect();

    for i in 1..scored.len() {
        let mut j = i;
        while j > 0 && scored[j - 1].0 < scored[j].0 {
            scored.swap(j - 1, j);
            j -= 1;
        }
    }

    for (slot, (_, mv)) in moves.iter_mut().zip(scored) {
        *slot = mv;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::generate_pseudo_legal_moves;
    use crate::moves::move_descriptions::{build_move, FLAG_CAPTURE};

    #[test]
    fn victim_dominates_attacker() {
        assert_eq!(mvv_lva(PieceKind::Pawn, PieceKind::Pawn), 105);
        assert_eq!(mvv_lva(PieceKind::King, PieceKind::Pawn), 100);
        assert!(mvv_lva(PieceKind::Queen, PieceKind::Rook) > mvv_lva(PieceKind::Pawn, PieceKind::Knight));
        assert!(mvv_lva(PieceKind::Pawn, PieceKind::Queen) > mvv_lva(PieceKind::Knight, PieceKind::Queen));
    }

    #[test]
    fn captures_then_killers_then_history() {
        // white can take the d5 queen with the pawn or the c3 knight
        let position = Position::from_fen("4k3/8/8/3q4/4P3/2N5/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut ctx = SearchContext::new();

        let killer = build_move(4, 3, Color::Light, PieceKind::King, None, 0);
        let historic = build_move(4, 5, Color::Light, PieceKind::King, None, 0);
        ctx.record_killer(0, killer);
        ctx.record_history(historic, 6);

        let mut moves = generate_pseudo_legal_moves(&position);
        order_moves(&position, &ctx, &mut moves, NO_MOVE);

        let pawn_takes = build_move(28, 35, Color::Light, PieceKind::Pawn, None, FLAG_CAPTURE);
        let knight_takes = build_move(18, 35, Color::Light, PieceKind::Knight, None, FLAG_CAPTURE);
        assert_eq!(moves[0], pawn_takes);
        assert_eq!(moves[1], knight_takes);
        assert_eq!(moves[2], killer);
        assert_eq!(moves[3], historic);
    }

    #[test]
    fn pv_move_goes_first() {
        let position = Position::new_game();
        let ctx = SearchContext::new();
        let generated = generate_pseudo_legal_moves(&position);
        let pv = *generated.last().expect("start position has moves");

        let mut moves = generated.clone();
        order_moves(&position, &ctx, &mut moves, pv);
        assert_eq!(moves[0], pv);
        // the rest keep generation order
        let rest: Vec<Move> = generated.into_iter().filter(|&mv| mv != pv).collect();
        assert_eq!(&moves[1..], rest.as_slice());
    }
}
