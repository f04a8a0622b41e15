use crate::game_state::chess_types::{Move, Piece, Square};

const FROM_SHIFT: u32 = 0;
const TO_SHIFT: u32 = 6;
const CAPTURED_PIECE_SHIFT: u32 = 12;
const PROMOTION_PIECE_SHIFT: u32 = 16;

const SQUARE_MASK: u32 = 0x3F;
const PIECE_MASK: u32 = 0xF;

pub const FLAG_NONE: u32 = 0;
pub const FLAG_DOUBLE_PAWN_PUSH: u32 = 1 << 20;
pub const FLAG_EN_PASSANT: u32 = 1 << 21;
pub const FLAG_CASTLING: u32 = 1 << 22;

const FLAG_MASK: u32 = FLAG_DOUBLE_PAWN_PUSH | FLAG_EN_PASSANT | FLAG_CASTLING;

/// Sentinel used by callers that need "no move" without an `Option`.
pub const NULL_MOVE: Move = 0;

/// Packs a move.
///
/// `captured_piece` is `Piece::NoPiece` for quiet moves; for en passant it is
/// the captured pawn even though that pawn is not on `to`. `promotion_piece`
/// is the colour-qualified piece the pawn becomes.
#[inline]
pub const fn pack_move_description(
    from: Square,
    to: Square,
    captured_piece: Piece,
    promotion_piece: Piece,
    flags: u32,
) -> Move {
    ((from as u32) << FROM_SHIFT)
        | ((to as u32) << TO_SHIFT)
        | ((captured_piece as u32) << CAPTURED_PIECE_SHIFT)
        | ((promotion_piece as u32) << PROMOTION_PIECE_SHIFT)
        | (flags & FLAG_MASK)
}

#[inline]
pub const fn move_from(move_description: Move) -> Square {
    ((move_description >> FROM_SHIFT) & SQUARE_MASK) as Square
}

#[inline]
pub const fn move_to(move_description: Move) -> Square {
    ((move_description >> TO_SHIFT) & SQUARE_MASK) as Square
}

#[inline]
pub fn move_captured_piece(move_description: Move) -> Piece {
    piece_from_code((move_description >> CAPTURED_PIECE_SHIFT) & PIECE_MASK)
}

#[inline]
pub fn move_promotion_piece(move_description: Move) -> Piece {
    piece_from_code((move_description >> PROMOTION_PIECE_SHIFT) & PIECE_MASK)
}

#[inline]
pub const fn move_flags(move_description: Move) -> u32 {
    move_description & FLAG_MASK
}

#[inline]
pub const fn is_capture(move_description: Move) -> bool {
    (move_description >> CAPTURED_PIECE_SHIFT) & PIECE_MASK != 0
}

#[inline]
pub const fn is_promotion(move_description: Move) -> bool {
    (move_description >> PROMOTION_PIECE_SHIFT) & PIECE_MASK != 0
}

#[inline]
pub const fn is_en_passant(move_description: Move) -> bool {
    move_description & FLAG_EN_PASSANT != 0
}

#[inline]
pub const fn is_castling(move_description: Move) -> bool {
    move_description & FLAG_CASTLING != 0
}

#[inline]
pub const fn is_double_pawn_push(move_description: Move) -> bool {
    move_description & FLAG_DOUBLE_PAWN_PUSH != 0
}

// Codes outside the real-piece range never get packed; decode them as empty.
#[inline]
fn piece_from_code(code: u32) -> Piece {
    match Piece::from_index(code as usize) {
        Some(piece) if piece.is_real() => piece,
        _ => Piece::NoPiece,
    }
}
