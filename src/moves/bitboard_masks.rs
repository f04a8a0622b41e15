//! Static file, rank and diagonal masks.
//!
//! Generated at compile time for the `0 == a1` square orientation. Diagonals
//! run in the a1-h8 direction (`rank - file` constant), anti-diagonals in the
//! a8-h1 direction (`rank + file` constant).

use crate::game_state::chess_types::Square;

pub const FILE_A: u64 = 0x0101_0101_0101_0101;
pub const FILE_H: u64 = FILE_A << 7;
pub const FILE_AB: u64 = FILE_A | (FILE_A << 1);
pub const FILE_GH: u64 = FILE_H | (FILE_H >> 1);

pub const RANK_1: u64 = 0xFF;
pub const RANK_2: u64 = RANK_1 << 8;
pub const RANK_3: u64 = RANK_1 << 16;
pub const RANK_4: u64 = RANK_1 << 24;
pub const RANK_5: u64 = RANK_1 << 32;
pub const RANK_6: u64 = RANK_1 << 40;
pub const RANK_7: u64 = RANK_1 << 48;
pub const RANK_8: u64 = RANK_1 << 56;

pub const FILE_MASKS: [u64; 8] = generate_file_masks();
pub const RANK_MASKS: [u64; 8] = generate_rank_masks();
pub const DIAGONAL_MASKS: [u64; 15] = generate_diagonal_masks();
pub const ANTI_DIAGONAL_MASKS: [u64; 15] = generate_anti_diagonal_masks();

#[inline]
pub const fn file_of(square: Square) -> usize {
    (square % 8) as usize
}

#[inline]
pub const fn rank_of(square: Square) -> usize {
    (square / 8) as usize
}

#[inline]
pub const fn diagonal_index(square: Square) -> usize {
    rank_of(square) + 7 - file_of(square)
}

#[inline]
pub const fn anti_diagonal_index(square: Square) -> usize {
    rank_of(square) + file_of(square)
}

const fn generate_file_masks() -> [u64; 8] {
    let mut table = [0u64; 8];
    let mut file = 0usize;
    while file < 8 {
        table[file] = FILE_A << file;
        file += 1;
    }
    table
}

const fn generate_rank_masks() -> [u64; 8] {
    let mut table = [0u64; 8];
    let mut rank = 0usize;
    while rank < 8 {
        table[rank] = RANK_1 << (rank * 8);
        rank += 1;
    }
    table
}

const fn generate_diagonal_masks() -> [u64; 15] {
    let mut table = [0u64; 15];
    let mut sq = 0usize;
    while sq < 64 {
        table[diagonal_index(sq as Square)] |= 1u64 << sq;
        sq += 1;
    }
    table
}

const fn generate_anti_diagonal_masks() -> [u64; 15] {
    let mut table = [0u64; 15];
    let mut sq = 0usize;
    while sq < 64 {
        table[anti_diagonal_index(sq as Square)] |= 1u64 << sq;
        sq += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_diagonals_match_known_constants() {
        // a1-h8 and a8-h1
        assert_eq!(DIAGONAL_MASKS[7], 0x8040_2010_0804_0201);
        assert_eq!(ANTI_DIAGONAL_MASKS[7], 0x0102_0408_1020_4080);
    }

    #[test]
    fn masks_partition_the_board() {
        for table in [&FILE_MASKS[..], &RANK_MASKS[..], &DIAGONAL_MASKS[..], &ANTI_DIAGONAL_MASKS[..]] {
            let union = table.iter().fold(0u64, |acc, mask| acc | mask);
            let total: u32 = table.iter().map(|mask| mask.count_ones()).sum();
            assert_eq!(union, u64::MAX);
            assert_eq!(total, 64);
        }
    }

    #[test]
    fn corner_diagonals_hold_single_squares() {
        // h1 sits alone on its a1-h8 diagonal, a1 alone on its anti-diagonal.
        assert_eq!(DIAGONAL_MASKS[diagonal_index(7)], 1u64 << 7);
        assert_eq!(ANTI_DIAGONAL_MASKS[anti_diagonal_index(0)], 1u64);
        assert_eq!(FILE_GH & FILE_AB, 0);
    }
}
