//! Magic-number discovery for slider attack tables.
//!
//! A magic multiplier hashes every occupancy subset of a square's relevant
//! mask into `2^bits` slots so that two subsets share a slot only when they
//! produce the same attack set.

use rand::Rng;

use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::sliding_attacks::{relevant_occupancy_mask, slider_attacks_on_the_fly, SliderKind};

/// Give up on a square after this many rejected candidates.
pub const MAX_MAGIC_ATTEMPTS: u32 = 100_000_000;

/// Magic hashing parameters for one slider on one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderMagic {
    pub mask: Bitboard,
    pub magic: u64,
    pub relevant_bits: u32,
}

impl SliderMagic {
    #[inline]
    pub fn index(&self, occupancy: Bitboard) -> usize {
        magic_index(occupancy, self.mask, self.magic, self.relevant_bits)
    }
}

#[inline]
pub fn magic_index(occupancy: Bitboard, mask: Bitboard, magic: u64, relevant_bits: u32) -> usize {
    ((occupancy & mask).wrapping_mul(magic) >> (64 - relevant_bits)) as usize
}

/// The `index`-th subset of `mask`: bit `i` of `index` selects the `i`-th
/// lowest square of the mask.
pub fn set_occupancy(index: usize, bits_in_mask: u32, mask: Bitboard) -> Bitboard {
    let mut occupancy = 0u64;
    let mut remaining = mask;

    for count in 0..bits_in_mask {
        if remaining == 0 {
            break;
        }
        let square = remaining.trailing_zeros();
        remaining &= remaining - 1;
        if index & (1usize << count) != 0 {
            occupancy |= 1u64 << square;
        }
    }

    occupancy
}

/// Sparse random candidate; ANDing three draws leaves roughly 8 set bits.
#[inline]
pub fn random_magic_candidate<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    rng.random::<u64>() & rng.random::<u64>() & rng.random::<u64>()
}

/// Trial-and-error search for a collision-free magic multiplier.
///
/// Candidates that spread fewer than six mask bits into the top byte are
/// rejected before the full collision check. Returns `None` only if every
/// one of `MAX_MAGIC_ATTEMPTS` candidates fails.
pub fn find_magic_number<R: Rng + ?Sized>(
    square: Square,
    slider: SliderKind,
    rng: &mut R,
) -> Option<SliderMagic> {
    let mask = relevant_occupancy_mask(slider, square);
    let relevant_bits = mask.count_ones();
    let permutations = 1usize << relevant_bits;

    let occupancies: Vec<Bitboard> = (0..permutations)
        .map(|index| set_occupancy(index, relevant_bits, mask))
        .collect();
    let attacks: Vec<Bitboard> = occupancies
        .iter()
        .map(|&occupancy| slider_attacks_on_the_fly(slider, square, occupancy))
        .collect();
    let mut used = vec![0u64; permutations];

    for _ in 0..MAX_MAGIC_ATTEMPTS {
        let magic = random_magic_candidate(rng);
        if (mask.wrapping_mul(magic) & 0xFF00_0000_0000_0000).count_ones() < 6 {
            continue;
        }

        used.fill(0);
        let collides = occupancies.iter().zip(&attacks).any(|(&occupancy, &attack)| {
            let slot = &mut used[magic_index(occupancy, mask, magic, relevant_bits)];
            if *slot == 0 {
                // Slider attack sets are never empty, so 0 marks a free slot.
                *slot = attack;
                false
            } else {
                *slot != attack
            }
        });

        if !collides {
            return Some(SliderMagic {
                mask,
                magic,
                relevant_bits,
            });
        }
    }

    None
}
