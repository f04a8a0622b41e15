use crate::moves::bishop_moves::diagonal_anti_diagonal;
use crate::moves::rook_moves::horizontal_vertical;

#[inline]
pub const fn queen_attacks(square: u8, occupied: u64) -> u64 {
    horizontal_vertical(square, occupied) | diagonal_anti_diagonal(square, occupied)
}
