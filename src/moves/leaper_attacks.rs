//! Precomputed attack masks for pawns, knights and kings.
//!
//! Each mask is produced by shifting a single-square bitboard and clearing
//! whatever wrapped around the a/h files.

use crate::game_state::chess_types::{Bitboard, Color, Square};

pub const NOT_A_FILE: Bitboard = 0xFEFE_FEFE_FEFE_FEFE;
pub const NOT_H_FILE: Bitboard = 0x7F7F_7F7F_7F7F_7F7F;
pub const NOT_AB_FILE: Bitboard = 0xFCFC_FCFC_FCFC_FCFC;
pub const NOT_GH_FILE: Bitboard = 0x3F3F_3F3F_3F3F_3F3F;

pub const LIGHT_PAWN_ATTACKS: [Bitboard; 64] = build_table(Leaper::LightPawn);
pub const DARK_PAWN_ATTACKS: [Bitboard; 64] = build_table(Leaper::DarkPawn);
pub const KNIGHT_ATTACKS: [Bitboard; 64] = build_table(Leaper::Knight);
pub const KING_ATTACKS: [Bitboard; 64] = build_table(Leaper::King);

#[derive(Clone, Copy)]
enum Leaper {
    LightPawn,
    DarkPawn,
    Knight,
    King,
}

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> Bitboard {
    match color {
        Color::Light => LIGHT_PAWN_ATTACKS[square as usize],
        Color::Dark => DARK_PAWN_ATTACKS[square as usize],
    }
}

#[inline]
pub const fn knight_attacks(square: Square) -> Bitboard {
    KNIGHT_ATTACKS[square as usize]
}

#[inline]
pub const fn king_attacks(square: Square) -> Bitboard {
    KING_ATTACKS[square as usize]
}

const fn build_table(leaper: Leaper) -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;
    while sq < 64 {
        let bb = 1u64 << sq;
        table[sq] = match leaper {
            Leaper::LightPawn => light_pawn_mask(bb),
            Leaper::DarkPawn => dark_pawn_mask(bb),
            Leaper::Knight => knight_mask(bb),
            Leaper::King => king_mask(bb),
        };
        sq += 1;
    }
    table
}

const fn light_pawn_mask(bb: Bitboard) -> Bitboard {
    ((bb << 7) & NOT_H_FILE) | ((bb << 9) & NOT_A_FILE)
}

const fn dark_pawn_mask(bb: Bitboard) -> Bitboard {
    ((bb >> 7) & NOT_A_FILE) | ((bb >> 9) & NOT_H_FILE)
}

const fn knight_mask(bb: Bitboard) -> Bitboard {
    ((bb << 17) & NOT_A_FILE)
        | ((bb << 15) & NOT_H_FILE)
        | ((bb << 10) & NOT_AB_FILE)
        | ((bb << 6) & NOT_GH_FILE)
        | ((bb >> 17) & NOT_H_FILE)
        | ((bb >> 15) & NOT_A_FILE)
        | ((bb >> 10) & NOT_GH_FILE)
        | ((bb >> 6) & NOT_AB_FILE)
}

const fn king_mask(bb: Bitboard) -> Bitboard {
    (bb << 8)
        | (bb >> 8)
        | ((bb << 1) & NOT_A_FILE)
        | ((bb >> 1) & NOT_H_FILE)
        | ((bb << 9) & NOT_A_FILE)
        | ((bb << 7) & NOT_H_FILE)
        | ((bb >> 7) & NOT_A_FILE)
        | ((bb >> 9) & NOT_H_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_targets_shrink_near_corners() {
        assert_eq!(knight_attacks(27).count_ones(), 8);
        assert_eq!(knight_attacks(0), (1u64 << 10) | (1u64 << 17));
        assert_eq!(knight_attacks(63), (1u64 << 53) | (1u64 << 46));
        assert_eq!(knight_attacks(7).count_ones(), 2);
    }

    #[test]
    fn king_targets_do_not_wrap_files() {
        assert_eq!(king_attacks(0), (1u64 << 1) | (1u64 << 8) | (1u64 << 9));
        assert_eq!(king_attacks(7), (1u64 << 6) | (1u64 << 14) | (1u64 << 15));
        assert_eq!(king_attacks(36).count_ones(), 8);
    }

    #[test]
    fn pawn_captures_point_forward_for_each_color() {
        assert_eq!(pawn_attacks(Color::Light, 12), (1u64 << 19) | (1u64 << 21));
        assert_eq!(pawn_attacks(Color::Light, 8), 1u64 << 17);
        assert_eq!(pawn_attacks(Color::Dark, 52), (1u64 << 43) | (1u64 << 45));
        assert_eq!(pawn_attacks(Color::Dark, 55), 1u64 << 46);
        assert_eq!(pawn_attacks(Color::Light, 60), 0);
    }
}
