//! Zobrist hashing support for transposition lookup.
//!
//! The keys are drawn from a fixed seed so hashes are deterministic across
//! runs, which is useful for testing and debugging.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::chess_types::*;
use crate::moves::leaper_attacks::pawn_attacks;

const ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    side_to_move: u64,
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for key in piece_square.iter_mut().flatten().flatten() {
        *key = rng.random();
    }

    let side_to_move = rng.random();

    let mut castling = [0u64; 16];
    rng.fill(&mut castling[..]);

    let mut en_passant_file = [0u64; 8];
    rng.fill(&mut en_passant_file[..]);

    ZobristTables {
        piece_square,
        side_to_move,
        castling,
        en_passant_file,
    }
}

/// Key for a `(color, piece, square)` occupancy term.
#[inline]
pub fn piece_square_key(color: Color, piece: PieceKind, square: Square) -> u64 {
    tables().piece_square[color.index()][piece.index()][square as usize]
}

/// Key for a castling rights value (`0..=15`).
#[inline]
pub fn castling_key(castling_rights: CastlingRights) -> u64 {
    tables().castling[(castling_rights & 0x0F) as usize]
}

#[inline]
pub fn en_passant_file_key(file: u8) -> u64 {
    tables().en_passant_file[(file & 7) as usize]
}

/// Side-to-move toggle (xor in when dark to move).
#[inline]
pub fn side_to_move_key() -> u64 {
    tables().side_to_move
}

/// En-passant contribution of the current position.
///
/// The file key is only mixed in when a pawn of the side to move could
/// actually capture onto the target square; otherwise two positions that
/// differ only in a dead en-passant marker hash identically.
pub fn en_passant_term(position: &Position) -> u64 {
    let Some(target) = position.en_passant_square else {
        return 0;
    };

    let mover = position.side_to_move;
    let capturers = pawn_attacks(mover.opposite(), target) & position.bitboard(mover, PieceKind::Pawn);
    if capturers == 0 {
        0
    } else {
        en_passant_file_key(file_of(target))
    }
}

/// Full recompute of the position key.
pub fn compute_zobrist_key(position: &Position) -> u64 {
    let mut key = 0u64;

    for color in Color::ALL {
        for piece in PieceKind::ALL {
            let mut bb = position.bitboard(color, piece);
            while bb != 0 {
                let sq = bb.trailing_zeros() as Square;
                key ^= piece_square_key(color, piece, sq);
                bb &= bb - 1;
            }
        }
    }

    if position.side_to_move == Color::Dark {
        key ^= side_to_move_key();
    }

    key ^= castling_key(position.castling_rights);
    key ^= en_passant_term(position);

    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::make_legal_move;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    fn play(position: &mut Position, moves: &[&str]) {
        for text in moves {
            let mv = long_algebraic_to_move(position, text).expect("move should be legal");
            make_legal_move(position, mv)
                .expect("position should stay consistent")
                .expect("move should be legal");
        }
    }

    #[test]
    fn transposed_move_orders_share_a_key() {
        let mut first = Position::new_game();
        let mut second = Position::new_game();

        play(&mut first, &["g1f3", "g8f6", "b1c3", "b8c6"]);
        play(&mut second, &["b1c3", "b8c6", "g1f3", "g8f6"]);

        assert_eq!(first.zobrist_key, second.zobrist_key);
        assert_eq!(first.zobrist_key, compute_zobrist_key(&first));
    }

    #[test]
    fn dead_en_passant_target_does_not_change_key() {
        let with_target = Position::from_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1").expect("FEN should parse");
        let without = Position::from_fen("4k3/8/8/8/4P3/8/8/4K3 b - - 0 1").expect("FEN should parse");
        assert_eq!(with_target.zobrist_key, without.zobrist_key);

        let live = Position::from_fen("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1").expect("FEN should parse");
        let live_without = Position::from_fen("4k3/8/8/8/3pP3/8/8/4K3 b - - 0 1").expect("FEN should parse");
        assert_ne!(live.zobrist_key, live_without.zobrist_key);
    }

    #[test]
    fn side_and_castling_change_the_key() {
        let white = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let black = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").expect("FEN should parse");
        let no_rights = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").expect("FEN should parse");

        assert_eq!(white.zobrist_key ^ black.zobrist_key, side_to_move_key());
        assert_ne!(white.zobrist_key, no_rights.zobrist_key);
    }
}
