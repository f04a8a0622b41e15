//! Pawn attack patterns.
//!
//! Set-wise shifts for whole pawn bitboards plus per-square tables derived
//! from them. Light pawns attack towards rank 8 (`<< 7`, `<< 9`), dark pawns
//! towards rank 1 (`>> 7`, `>> 9`); the file masks drop captures that would
//! wrap around the board edge.

use crate::game_state::chess_types::Color;
use crate::moves::bitboard_masks::{FILE_A, FILE_H};

pub const LIGHT_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(Color::Light);
pub const DARK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(Color::Dark);

/// Every square attacked by a set of pawns of `color`.
#[inline]
pub const fn pawn_attacks_set(color: Color, pawns: u64) -> u64 {
    match color {
        Color::Light => ((pawns << 7) & !FILE_H) | ((pawns << 9) & !FILE_A),
        Color::Dark => ((pawns >> 7) & !FILE_A) | ((pawns >> 9) & !FILE_H),
    }
}

#[inline]
pub const fn pawn_attacks(color: Color, square: u8) -> u64 {
    match color {
        Color::Light => LIGHT_PAWN_ATTACKS[square as usize],
        Color::Dark => DARK_PAWN_ATTACKS[square as usize],
    }
}

const fn generate_pawn_attacks(color: Color) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = pawn_attacks_set(color, 1u64 << sq);
        sq += 1;
    }

    table
}
