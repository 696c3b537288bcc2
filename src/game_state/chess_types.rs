//! Primitive board vocabulary shared by every subsystem.
//!
//! Squares are indexed `a1 = 0 .. h8 = 63`; bitboards are plain `u64` masks
//! with bit `n` standing for square `n`.

pub use crate::game_state::position::Position;
pub use crate::game_state::undo_state::UndoState;

/// 64-bit occupancy mask.
pub type Bitboard = u64;

/// Board square index (`0..=63`).
pub type Square = u8;

/// Packed move, see `moves::move_descriptions` for the bit layout.
pub type Move = u32;

/// Canonical "no move" sentinel.
pub const NO_MOVE: Move = 0;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Light, Color::Dark];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// `+1` for light, `-1` for dark. Converts white-relative scores.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }
}

/// Piece kind (color is represented separately for cache-friendly layouts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PieceKind::Pawn),
            1 => Some(PieceKind::Knight),
            2 => Some(PieceKind::Bishop),
            3 => Some(PieceKind::Rook),
            4 => Some(PieceKind::Queen),
            5 => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Colored piece identifier (`0..=11`) as stored inside a packed move.
///
/// Light pieces occupy `0..=5`, dark pieces `6..=11`, each in `PieceKind`
/// order.
pub type PieceId = u8;

#[inline]
pub const fn piece_id(color: Color, kind: PieceKind) -> PieceId {
    (color.index() * 6 + kind.index()) as PieceId
}

#[inline]
pub const fn piece_id_parts(id: PieceId) -> Option<(Color, PieceKind)> {
    let color = if id < 6 { Color::Light } else { Color::Dark };
    match PieceKind::from_index((id % 6) as usize) {
        Some(kind) if id < 12 => Some((color, kind)),
        _ => None,
    }
}

/// Compact castling rights bitmask.
pub type CastlingRights = u8;
pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights = 0x0F;

#[inline]
pub const fn square_bit(square: Square) -> Bitboard {
    1u64 << square
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

/// Lowest set square of a non-empty bitboard.
#[inline]
pub const fn lsb_square(bitboard: Bitboard) -> Option<Square> {
    if bitboard == 0 {
        None
    } else {
        Some(bitboard.trailing_zeros() as Square)
    }
}
