//! Orthogonal sliding attacks.
//!
//! Uses the hyperbola-quintessence form `o ^ (o - 2r)` on the slider's file
//! and rank, with a full 64-bit reversal for the negative direction, so a
//! ray is resolved in a handful of word operations with no square loop.

use crate::moves::bitboard_masks::{file_of, rank_of, FILE_MASKS, RANK_MASKS};

/// Attacks along a single line up to and including the first blocker on
/// each side. The slider square itself is never included.
#[inline]
pub const fn line_attacks(square: u8, occupied: u64, line: u64) -> u64 {
    let slider = 1u64 << square;
    let occ = (occupied | slider) & line;
    let forward = occ.wrapping_sub(slider.wrapping_mul(2));
    let reverse = occ
        .reverse_bits()
        .wrapping_sub(slider.reverse_bits().wrapping_mul(2))
        .reverse_bits();
    (forward ^ reverse) & line
}

#[inline]
pub const fn horizontal_vertical(square: u8, occupied: u64) -> u64 {
    line_attacks(square, occupied, RANK_MASKS[rank_of(square)])
        | line_attacks(square, occupied, FILE_MASKS[file_of(square)])
}

#[inline]
pub const fn rook_attacks(square: u8, occupied: u64) -> u64 {
    horizontal_vertical(square, occupied)
}
