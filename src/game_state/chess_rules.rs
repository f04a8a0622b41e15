//! Canonical chess-rule constants.
//!
//! Static rule tables shared by FEN parsing, make/unmake and evaluation.

use crate::game_state::chess_types::{CastlingRights, Piece, PIECE_SLOTS};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Upper bound on legal moves in any reachable position.
pub const MAX_POSITION_MOVES: usize = 256;

/// Material value per bitboard slot (marker slots are worth nothing).
pub const PIECE_VALUES: [i32; PIECE_SLOTS] = [
    0, 100, 325, 325, 550, 1000, 50000, 100, 325, 325, 550, 1000, 50000, 0,
];

#[inline]
pub const fn piece_value(piece: Piece) -> i32 {
    PIECE_VALUES[piece.index()]
}

/// Castling rights surviving a move that touches each square.
///
/// After every move `rights &= CASTLE_PERMISSIONS[from] & CASTLE_PERMISSIONS[to]`.
/// Only the king and rook home squares clear bits.
pub const CASTLE_PERMISSIONS: [CastlingRights; 64] = [
    13, 15, 15, 15, 12, 15, 15, 14, //
    15, 15, 15, 15, 15, 15, 15, 15, //
    15, 15, 15, 15, 15, 15, 15, 15, //
    15, 15, 15, 15, 15, 15, 15, 15, //
    15, 15, 15, 15, 15, 15, 15, 15, //
    15, 15, 15, 15, 15, 15, 15, 15, //
    15, 15, 15, 15, 15, 15, 15, 15, //
    7, 15, 15, 15, 3, 15, 15, 11, //
];

pub const E1: u8 = 4;
pub const E8: u8 = 60;
pub const A1: u8 = 0;
pub const H1: u8 = 7;
pub const A8: u8 = 56;
pub const H8: u8 = 63;
pub const C1: u8 = 2;
pub const D1: u8 = 3;
pub const F1: u8 = 5;
pub const G1: u8 = 6;
pub const C8: u8 = 58;
pub const D8: u8 = 59;
pub const F8: u8 = 61;
pub const G8: u8 = 62;
