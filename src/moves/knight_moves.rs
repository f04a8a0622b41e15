//! Knight attack table.
//!
//! Built by shifting the knight pattern centred on c3 to every square and
//! cutting the wrapped bits with the two-file edge masks.

use crate::moves::bitboard_masks::{FILE_AB, FILE_GH};

/// Knight targets from c3 (square 18).
pub const KNIGHT_SPAN: u64 = 43_234_889_994;
const KNIGHT_SPAN_CENTRE: usize = 18;

pub const KNIGHT_ATTACKS: [u64; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: u8) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

const fn generate_knight_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let span = if sq > KNIGHT_SPAN_CENTRE {
            KNIGHT_SPAN << (sq - KNIGHT_SPAN_CENTRE)
        } else {
            KNIGHT_SPAN >> (KNIGHT_SPAN_CENTRE - sq)
        };

        table[sq] = if sq % 8 < 4 { span & !FILE_GH } else { span & !FILE_AB };
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{knight_attacks, KNIGHT_ATTACKS};

    #[test]
    fn knight_attacks_from_d4_has_eight_targets() {
        let d4 = 27u8;
        assert_eq!(KNIGHT_ATTACKS[d4 as usize].count_ones(), 8);
        assert_eq!(knight_attacks(d4).count_ones(), 8);
    }

    #[test]
    fn corner_knights_do_not_wrap() {
        // a1 -> b3, c2
        assert_eq!(knight_attacks(0), (1u64 << 17) | (1u64 << 10));
        // h8 -> g6, f7
        assert_eq!(knight_attacks(63), (1u64 << 46) | (1u64 << 53));
        // h1 -> g3, f2
        assert_eq!(knight_attacks(7), (1u64 << 22) | (1u64 << 13));
    }

    #[test]
    fn knight_table_is_symmetric() {
        for from in 0..64u8 {
            let mut targets = knight_attacks(from);
            while targets != 0 {
                let to = targets.trailing_zeros() as u8;
                assert_ne!(knight_attacks(to) & (1u64 << from), 0);
                targets &= targets - 1;
            }
        }
    }
}
