//! Make/unmake with incremental hash maintenance.
//!
//! `make_move` pushes an [`UndoState`] holding everything a move cannot
//! reconstruct by itself (castling rights, en-passant file, both clocks,
//! hash). `unmake_move` pops it and replays the move backwards. After any
//! `make_move(mv); unmake_move()` pair the state compares equal to the
//! original, hash included.

use crate::game_state::chess_rules::{CASTLE_PERMISSIONS, A1, A8, C1, C8, D1, D8, F1, F8, G1, G8, H1, H8};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bitboard_masks::{file_of, FILE_MASKS};
use crate::moves::move_descriptions::{
    is_capture, is_castling, is_double_pawn_push, is_en_passant, is_promotion, move_captured_piece,
    move_from, move_promotion_piece, move_to,
};

/// Rook squares `(from, to)` for a castling king landing on `king_to`.
fn castle_rook_squares(king_to: Square) -> (Square, Square) {
    match king_to {
        G1 => (H1, F1),
        C1 => (A1, D1),
        G8 => (H8, F8),
        C8 => (A8, D8),
        _ => panic!("castling move lands the king on {king_to}, which has no castling rook"),
    }
}

/// Square of the pawn taken by an en-passant capture landing on `to`.
#[inline]
fn en_passant_victim_square(mover: Color, to: Square) -> Square {
    match mover {
        Color::Light => to - 8,
        Color::Dark => to + 8,
    }
}

impl GameState {
    /// Apply a move produced by the generator for this position.
    ///
    /// # Panics
    ///
    /// If `from` does not hold a piece of the side to move, or a castling
    /// move does not land on c1/g1/c8/g8.
    pub fn make_move(&mut self, mv: Move) {
        let from = move_from(mv);
        let to = move_to(mv);
        let mover = self.side_to_move;
        let moving = self.piece_on(from);
        assert!(
            moving.color() == Some(mover),
            "make_move: square {from} holds {moving:?}, not a {mover:?} piece"
        );

        self.history.push(UndoState {
            mv,
            prev_castling_rights: self.castling_rights,
            prev_en_passant: self.en_passant_file(),
            prev_halfmove_clock: self.halfmove_clock,
            prev_fullmove_number: self.fullmove_number,
            prev_zobrist_key: self.zobrist_key,
        });
        self.halfmove_clock = self.halfmove_clock.saturating_add(1);

        if is_en_passant(mv) {
            self.remove_piece(en_passant_victim_square(mover, to));
            self.halfmove_clock = 0;
        } else if is_capture(mv) {
            let captured = self.remove_piece(to);
            debug_assert_eq!(captured, move_captured_piece(mv));
            self.halfmove_clock = 0;
        }

        self.move_piece(from, to);
        if moving.kind() == Some(PieceKind::Pawn) {
            self.halfmove_clock = 0;
        }

        if is_castling(mv) {
            let (rook_from, rook_to) = castle_rook_squares(to);
            self.move_piece(rook_from, rook_to);
        }

        let new_en_passant = if is_double_pawn_push(mv) {
            FILE_MASKS[file_of(from)]
        } else {
            0
        };
        self.set_en_passant_file(new_en_passant);

        self.set_castling_rights(
            self.castling_rights & CASTLE_PERMISSIONS[from as usize] & CASTLE_PERMISSIONS[to as usize],
        );

        if is_promotion(mv) {
            self.remove_piece(to);
            self.add_piece(move_promotion_piece(mv), to);
        }

        if mover == Color::Dark {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.flip_side_to_move();
    }

    /// Take back the last move made; `None` if there is nothing to undo.
    pub fn unmake_move(&mut self) -> Option<Move> {
        let undo = self.history.pop()?;
        let mv = undo.mv;
        let from = move_from(mv);
        let to = move_to(mv);

        self.flip_side_to_move();
        let mover = self.side_to_move;

        if is_promotion(mv) {
            self.remove_piece(to);
            self.add_piece(Piece::from_parts(mover, PieceKind::Pawn), to);
        }

        self.set_castling_rights(undo.prev_castling_rights);
        self.set_en_passant_file(undo.prev_en_passant);

        if is_castling(mv) {
            let (rook_from, rook_to) = castle_rook_squares(to);
            self.move_piece(rook_to, rook_from);
        }

        self.move_piece(to, from);

        if is_en_passant(mv) {
            self.add_piece(move_captured_piece(mv), en_passant_victim_square(mover, to));
        } else if is_capture(mv) {
            self.add_piece(move_captured_piece(mv), to);
        }

        self.halfmove_clock = undo.prev_halfmove_clock;
        self.fullmove_number = undo.prev_fullmove_number;
        debug_assert_eq!(self.zobrist_key, undo.prev_zobrist_key);

        Some(mv)
    }
}
