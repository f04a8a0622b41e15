//! King attack table.
//!
//! Same construction as the knight table, using the one-step pattern centred
//! on b2.

use crate::moves::bitboard_masks::{FILE_AB, FILE_GH};

/// King targets from b2 (square 9).
pub const KING_SPAN: u64 = 460_039;
const KING_SPAN_CENTRE: usize = 9;

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: u8) -> u64 {
    KING_ATTACKS[square as usize]
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let span = if sq > KING_SPAN_CENTRE {
            KING_SPAN << (sq - KING_SPAN_CENTRE)
        } else {
            KING_SPAN >> (KING_SPAN_CENTRE - sq)
        };

        table[sq] = if sq % 8 < 4 { span & !FILE_GH } else { span & !FILE_AB };
        sq += 1;
    }

    table
}
