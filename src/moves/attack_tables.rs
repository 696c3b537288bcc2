//! Process-wide attack lookup tables.
//!
//! Leaper masks are compile-time constants. Slider tables are filled on first
//! use from the shipped magic multipliers and shared read-only afterwards;
//! `AttackTables::build` searches for a fresh set from a seed instead.

use std::sync::OnceLock;
use std::time::Instant;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::errors::AttackTableError;
use crate::game_state::chess_types::{Bitboard, Color, Square};
use crate::moves::leaper_attacks;
use crate::moves::magic_bitboards::{find_magic_number, set_occupancy, SliderMagic};
use crate::moves::magic_constants::{BISHOP_MAGICS, ROOK_MAGICS};
use crate::moves::sliding_attacks::{relevant_occupancy_mask, slider_attacks_on_the_fly, SliderKind};

/// Seed of the candidate generator used to discover slider magics.
pub const MAGIC_SEED: u64 = 0x1D6C_94B3_2F07_5A8E;

static ATTACK_TABLES: OnceLock<AttackTables> = OnceLock::new();

/// Shared tables, built on first call.
pub fn attack_tables() -> &'static AttackTables {
    ATTACK_TABLES.get_or_init(|| {
        AttackTables::from_magics(&BISHOP_MAGICS, &ROOK_MAGICS)
            .expect("shipped magic multipliers should hash without collisions")
    })
}

#[derive(Debug, Clone)]
pub struct AttackTables {
    bishop_magics: Vec<SliderMagic>,
    rook_magics: Vec<SliderMagic>,
    // 64 x 512 and 64 x 4096, flattened by square.
    bishop_table: Vec<Bitboard>,
    rook_table: Vec<Bitboard>,
}

impl AttackTables {
    /// Discover magics for every square and fill both slider tables.
    pub fn build(seed: u64) -> Result<Self, AttackTableError> {
        let started = Instant::now();
        let mut rng = StdRng::seed_from_u64(seed);

        let bishop = search_magics(SliderKind::Bishop, &mut rng)?;
        let rook = search_magics(SliderKind::Rook, &mut rng)?;
        debug!("magic search from seed {seed:#x} took {:.1?}", started.elapsed());

        Self::from_magics(&bishop, &rook)
    }

    /// Fill both slider tables from known multipliers, refusing any that
    /// send two different attack sets to one slot.
    pub fn from_magics(bishop: &[u64; 64], rook: &[u64; 64]) -> Result<Self, AttackTableError> {
        let started = Instant::now();

        let (bishop_magics, bishop_table) = fill_slider(SliderKind::Bishop, bishop)?;
        let (rook_magics, rook_table) = fill_slider(SliderKind::Rook, rook)?;

        debug!(
            "attack tables filled in {:.1?} (bishop slots {}, rook slots {})",
            started.elapsed(),
            bishop_table.len(),
            rook_table.len()
        );

        Ok(Self {
            bishop_magics,
            rook_magics,
            bishop_table,
            rook_table,
        })
    }

    #[inline]
    pub fn pawn_attacks(&self, color: Color, square: Square) -> Bitboard {
        leaper_attacks::pawn_attacks(color, square)
    }

    #[inline]
    pub fn knight_attacks(&self, square: Square) -> Bitboard {
        leaper_attacks::knight_attacks(square)
    }

    #[inline]
    pub fn king_attacks(&self, square: Square) -> Bitboard {
        leaper_attacks::king_attacks(square)
    }

    #[inline]
    pub fn bishop_attacks(&self, square: Square, occupancy: Bitboard) -> Bitboard {
        let magic = &self.bishop_magics[square as usize];
        self.bishop_table[square as usize * SliderKind::Bishop.slots_per_square() + magic.index(occupancy)]
    }

    #[inline]
    pub fn rook_attacks(&self, square: Square, occupancy: Bitboard) -> Bitboard {
        let magic = &self.rook_magics[square as usize];
        self.rook_table[square as usize * SliderKind::Rook.slots_per_square() + magic.index(occupancy)]
    }

    #[inline]
    pub fn queen_attacks(&self, square: Square, occupancy: Bitboard) -> Bitboard {
        self.bishop_attacks(square, occupancy) | self.rook_attacks(square, occupancy)
    }

    #[inline]
    pub fn slider_attacks(&self, slider: SliderKind, square: Square, occupancy: Bitboard) -> Bitboard {
        match slider {
            SliderKind::Bishop => self.bishop_attacks(square, occupancy),
            SliderKind::Rook => self.rook_attacks(square, occupancy),
        }
    }

    /// Per-square hashing parameters, indexed by square.
    pub fn magics(&self, slider: SliderKind) -> &[SliderMagic] {
        match slider {
            SliderKind::Bishop => &self.bishop_magics,
            SliderKind::Rook => &self.rook_magics,
        }
    }
}

fn search_magics(slider: SliderKind, rng: &mut StdRng) -> Result<[u64; 64], AttackTableError> {
    let mut magics = [0u64; 64];
    for square in 0..64u8 {
        magics[square as usize] = find_magic_number(square, slider, rng)
            .ok_or(AttackTableError::MagicNotFound { square, slider })?
            .magic;
    }
    Ok(magics)
}

fn fill_slider(
    slider: SliderKind,
    multipliers: &[u64; 64],
) -> Result<(Vec<SliderMagic>, Vec<Bitboard>), AttackTableError> {
    let slots = slider.slots_per_square();
    let mut magics = Vec::with_capacity(64);
    let mut table = vec![0u64; 64 * slots];

    for square in 0..64u8 {
        let mask = relevant_occupancy_mask(slider, square);
        let magic = SliderMagic {
            mask,
            magic: multipliers[square as usize],
            relevant_bits: mask.count_ones(),
        };

        let base = square as usize * slots;
        for index in 0..1usize << magic.relevant_bits {
            let occupancy = set_occupancy(index, magic.relevant_bits, mask);
            let attacks = slider_attacks_on_the_fly(slider, square, occupancy);
            // Attack sets are never empty, so 0 marks a free slot.
            let slot = &mut table[base + magic.index(occupancy)];
            if *slot != 0 && *slot != attacks {
                return Err(AttackTableError::CollidingMagic {
                    square,
                    slider,
                    magic: magic.magic,
                });
            }
            *slot = attacks;
        }
        magics.push(magic);
    }

    Ok((magics, table))
}
