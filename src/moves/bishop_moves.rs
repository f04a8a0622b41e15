//! Diagonal sliding attacks.
//!
//! Same line formula as the rook file/rank case, applied to the slider's
//! a1-h8 diagonal and a8-h1 anti-diagonal masks.

use crate::moves::bitboard_masks::{
    anti_diagonal_index, diagonal_index, ANTI_DIAGONAL_MASKS, DIAGONAL_MASKS,
};
use crate::moves::rook_moves::line_attacks;

#[inline]
pub const fn diagonal_anti_diagonal(square: u8, occupied: u64) -> u64 {
    line_attacks(square, occupied, DIAGONAL_MASKS[diagonal_index(square)])
        | line_attacks(square, occupied, ANTI_DIAGONAL_MASKS[anti_diagonal_index(square)])
}

#[inline]
pub const fn bishop_attacks(square: u8, occupied: u64) -> u64 {
    diagonal_anti_diagonal(square, occupied)
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;

    #[test]
    fn bishop_from_d4_on_empty_board_has_thirteen_squares() {
        let d4 = 27u8;
        assert_eq!(bishop_attacks(d4, 0).count_ones(), 13);
    }

    #[test]
    fn bishop_blocker_stops_ray() {
        let c1 = 2u8;
        let blocker_on_e3 = 1u64 << 20;
        let attacks = bishop_attacks(c1, blocker_on_e3);

        assert_ne!(attacks & (1u64 << 20), 0);
        assert_eq!(attacks & (1u64 << 29), 0);
        // the other wing to a3 is untouched
        assert_ne!(attacks & (1u64 << 16), 0);
    }

    #[test]
    fn corner_bishop_sees_only_long_diagonal() {
        assert_eq!(bishop_attacks(0, 0), 0x8040_2010_0804_0200);
    }
}
