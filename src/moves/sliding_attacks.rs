//! Ray-cast slider attacks and relevant-occupancy masks.
//!
//! These are the slow reference routines the magic tables are built from and
//! checked against; move generation goes through `attack_tables` instead.

use crate::game_state::chess_types::{Bitboard, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderKind {
    Bishop,
    Rook,
}

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

impl SliderKind {
    pub const ALL: [SliderKind; 2] = [SliderKind::Bishop, SliderKind::Rook];

    #[inline]
    fn directions(self) -> &'static [(i8, i8); 4] {
        match self {
            SliderKind::Bishop => &BISHOP_DIRECTIONS,
            SliderKind::Rook => &ROOK_DIRECTIONS,
        }
    }

    /// Attack-table slots reserved per square (`2^max relevant bits`).
    #[inline]
    pub const fn slots_per_square(self) -> usize {
        match self {
            SliderKind::Bishop => 512,
            SliderKind::Rook => 4096,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            SliderKind::Bishop => "bishop",
            SliderKind::Rook => "rook",
        }
    }
}

#[inline]
fn on_board(file: i8, rank: i8) -> bool {
    (0..8).contains(&file) && (0..8).contains(&rank)
}

#[inline]
fn bit_at(file: i8, rank: i8) -> Bitboard {
    1u64 << (rank as u32 * 8 + file as u32)
}

/// Squares whose occupancy can change the slider's attack set from `square`.
///
/// The last square of every ray is left out: a piece standing there cannot
/// block anything behind it.
pub fn relevant_occupancy_mask(slider: SliderKind, square: Square) -> Bitboard {
    let file = (square % 8) as i8;
    let rank = (square / 8) as i8;
    let mut mask = 0u64;

    for &(df, dr) in slider.directions() {
        let (mut f, mut r) = (file + df, rank + dr);
        while on_board(f, r) && on_board(f + df, r + dr) {
            mask |= bit_at(f, r);
            f += df;
            r += dr;
        }
    }

    mask
}

/// Attack set from `square` given `occupancy`, stopping each ray at (and
/// including) the first blocker.
pub fn slider_attacks_on_the_fly(slider: SliderKind, square: Square, occupancy: Bitboard) -> Bitboard {
    let file = (square % 8) as i8;
    let rank = (square / 8) as i8;
    let mut attacks = 0u64;

    for &(df, dr) in slider.directions() {
        let (mut f, mut r) = (file + df, rank + dr);
        while on_board(f, r) {
            let bit = bit_at(f, r);
            attacks |= bit;
            if occupancy & bit != 0 {
                break;
            }
            f += df;
            r += dr;
        }
    }

    attacks
}
