use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{add_move, build_move, FLAG_CAPTURE};

/// Emit one move per set bit of `targets`, flagged as a capture when the
/// target holds an enemy piece. `targets` must already exclude own pieces.
#[inline]
pub fn push_target_moves(
    position: &Position,
    from: Square,
    kind: PieceKind,
    targets: Bitboard,
    out: &mut Vec<Move>,
) {
    let side = position.side_to_move;
    let enemy_occ = position.occupancy_by_color[side.opposite().index()];

    let mut remaining = targets;
    while remaining != 0 {
        let to = remaining.trailing_zeros() as Square;
        let flags = if enemy_occ & square_bit(to) != 0 {
            FLAG_CAPTURE
        } else {
            0
        };
        add_move(out, build_move(from, to, side, kind, None, flags));
        remaining &= remaining - 1;
    }
}

/// Generate moves for every `kind` piece of the side to move, with
/// `attacks(from, occupancy)` giving the raw attack set of one piece.
#[inline]
pub fn generate_piece_moves<F>(position: &Position, kind: PieceKind, attacks: F, out: &mut Vec<Move>)
where
    F: Fn(Square, Bitboard) -> Bitboard,
{
    let side = position.side_to_move;
    let own_occ = position.occupancy_by_color[side.index()];

    let mut pieces = position.bitboard(side, kind);
    while pieces != 0 {
        let from = pieces.trailing_zeros() as Square;
        let targets = attacks(from, position.occupancy_all) & !own_occ;
        push_target_moves(position, from, kind, targets, out);
        pieces &= pieces - 1;
    }
}
