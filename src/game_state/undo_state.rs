use crate::game_state::chess_types::*;

/// Delta record for `make_move` / `unmake_move`.
///
/// Holds only the fields a move can change; piece placement is restored by
/// replaying the packed move backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub moved_piece: PieceKind,
    pub promoted_piece: Option<PieceKind>,
    pub captured_piece: Option<PieceKind>,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,

    pub prev_zobrist_key: u64,
}
