//! Mutable bitboard board state.
//!
//! `Position` is the single owned board the search threads through its
//! recursion. Occupancy caches are always derived from the piece bitboards
//! via `recalc_occupancy`; they are never edited on their own.

use log::warn;

use crate::errors::FenError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::search::zobrist::compute_zobrist_key;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    // [color][piece_kind]
    pub pieces: [[Bitboard; 6]; 2],

    pub occupancy_by_color: [Bitboard; 2],
    pub occupancy_all: Bitboard,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    pub zobrist_key: u64,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,

            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,

            zobrist_key: 0,
        }
    }
}

impl Position {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    /// Parse `fen`, substituting the starting position when it is malformed.
    pub fn from_fen_or_default(fen: &str) -> Self {
        match parse_fen(fen) {
            Ok(position) => position,
            Err(err) => {
                warn!("rejecting position '{fen}' ({err}); using the starting position");
                Self::new_game()
            }
        }
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn bitboard(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    pub fn recalc_occupancy(&mut self) {
        for color in Color::ALL {
            self.occupancy_by_color[color.index()] = self.pieces[color.index()]
                .iter()
                .fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.occupancy_by_color[Color::Light.index()]
            | self.occupancy_by_color[Color::Dark.index()];
    }

    #[inline]
    pub fn refresh_hash(&mut self) {
        self.zobrist_key = compute_zobrist_key(self);
    }

    pub fn piece_kind_on(&self, color: Color, square: Square) -> Option<PieceKind> {
        let mask = square_bit(square);
        if self.occupancy_by_color[color.index()] & mask == 0 {
            return None;
        }
        PieceKind::ALL
            .into_iter()
            .find(|kind| self.pieces[color.index()][kind.index()] & mask != 0)
    }

    pub fn piece_on(&self, square: Square) -> Option<(Color, PieceKind)> {
        Color::ALL
            .into_iter()
            .find_map(|color| self.piece_kind_on(color, square).map(|kind| (color, kind)))
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        lsb_square(self.bitboard(color, PieceKind::King))
    }

    /// Total number of pieces (kings and pawns included) on the board.
    #[inline]
    pub fn piece_count(&self) -> u32 {
        self.occupancy_all.count_ones()
    }

    #[inline]
    pub fn count(&self, color: Color, kind: PieceKind) -> u32 {
        self.bitboard(color, kind).count_ones()
    }

    /// Rank-flipped, color-swapped copy of the position.
    pub fn mirrored(&self) -> Self {
        let mut mirror = Self::new_empty();
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                mirror.pieces[color.opposite().index()][kind.index()] =
                    self.bitboard(color, kind).swap_bytes();
            }
        }
        mirror.side_to_move = self.side_to_move.opposite();
        mirror.castling_rights =
            ((self.castling_rights & 0b0011) << 2) | ((self.castling_rights & 0b1100) >> 2);
        mirror.en_passant_square = self.en_passant_square.map(|sq| sq ^ 56);
        mirror.halfmove_clock = self.halfmove_clock;
        mirror.fullmove_number = self.fullmove_number;
        mirror.recalc_occupancy();
        mirror.refresh_hash();
        mirror
    }
}
