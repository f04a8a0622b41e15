//! Core incremental board state representation.
//!
//! `GameState` is the central model of the crate. It stores one bitboard per
//! piece slot, the square-to-piece inverse index, turn/state flags, clocks,
//! the running hash and material, and the undo stack used by make/unmake.
//!
//! Every piece placement goes through [`GameState::add_piece`] and
//! [`GameState::remove_piece`], which keep the bitboards, the inverse index,
//! the material sums and the hash key in step.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::{piece_value, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::move_generator::MoveList;
use crate::search::zobrist::{castling_key, en_passant_mask_key, piece_square_key, side_to_move_key};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Incremental game state optimized for fast move making/unmaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // --- Bitboard representation ---
    // indexed by `Piece::index()`; slot 0 stays empty, slot 13 is the en-passant file mask
    pub(crate) bitboards: [u64; PIECE_SLOTS],
    pub(crate) square_index: [Piece; 64],

    // --- Side and state flags ---
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,

    // --- Clocks / move counters ---
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,

    // --- Incremental hashing and material ---
    pub(crate) zobrist_key: u64,
    pub(crate) material: [i32; 2],

    // --- Make/unmake stack ---
    pub(crate) history: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            bitboards: [0; PIECE_SLOTS],
            square_index: [Piece::NoPiece; 64],

            side_to_move: Color::Light,
            castling_rights: 0,

            halfmove_clock: 0,
            fullmove_number: 1,

            // light to move with no rights and no pieces
            zobrist_key: side_to_move_key() ^ castling_key(0),
            material: [0; 2],

            history: Vec::new(),
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Clear back to the empty default state, dropping the undo history.
    pub fn reset(&mut self) {
        *self = Self::default();
        tracing::debug!(zobrist_key = self.zobrist_key, "game state reset");
    }

    /// Legal moves for the side to move.
    #[inline]
    pub fn get_moves(&self) -> MoveList {
        generate_legal_moves(self)
    }

    /// Material balance from light's point of view.
    #[inline]
    pub fn eval_position(&self) -> i32 {
        self.material[Color::Light.index()] - self.material[Color::Dark.index()]
    }

    // --- Read-only accessors ---

    #[inline]
    pub fn bitboard(&self, piece: Piece) -> u64 {
        self.bitboards[piece.index()]
    }

    #[inline]
    pub fn piece_on(&self, square: Square) -> Piece {
        self.square_index[square as usize]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// File mask of the current en-passant file, or 0.
    #[inline]
    pub fn en_passant_file(&self) -> u64 {
        self.bitboards[Piece::EnPassantFile.index()]
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Half-moves made since this state was set up.
    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn zobrist_key(&self) -> u64 {
        self.zobrist_key
    }

    #[inline]
    pub fn material(&self, color: Color) -> i32 {
        self.material[color.index()]
    }

    #[inline]
    pub fn history(&self) -> &[UndoState] {
        &self.history
    }

    /// All pieces of one colour.
    #[inline]
    pub fn color_occupancy(&self, color: Color) -> u64 {
        let start = 1 + color.index() * 6;
        self.bitboards[start..start + 6].iter().fold(0u64, |acc, &bb| acc | bb)
    }

    #[inline]
    pub fn occupied(&self) -> u64 {
        self.color_occupancy(Color::Light) | self.color_occupancy(Color::Dark)
    }

    // --- Incremental mutation ---

    /// Place `piece` on an empty square, updating index, material and hash.
    #[inline]
    pub(crate) fn add_piece(&mut self, piece: Piece, square: Square) {
        debug_assert!(piece.is_real());
        debug_assert_eq!(self.square_index[square as usize], Piece::NoPiece);

        self.bitboards[piece.index()] |= 1u64 << square;
        self.square_index[square as usize] = piece;
        self.zobrist_key ^= piece_square_key(piece, square);
        if let Some(color) = piece.color() {
            self.material[color.index()] += piece_value(piece);
        }
    }

    /// Remove and return whatever stands on `square`.
    #[inline]
    pub(crate) fn remove_piece(&mut self, square: Square) -> Piece {
        let piece = self.square_index[square as usize];
        debug_assert!(piece.is_real(), "no piece to remove on square {square}");

        self.bitboards[piece.index()] &= !(1u64 << square);
        self.square_index[square as usize] = Piece::NoPiece;
        self.zobrist_key ^= piece_square_key(piece, square);
        if let Some(color) = piece.color() {
            self.material[color.index()] -= piece_value(piece);
        }
        piece
    }

    #[inline]
    pub(crate) fn move_piece(&mut self, from: Square, to: Square) {
        let piece = self.remove_piece(from);
        self.add_piece(piece, to);
    }

    /// Replace the en-passant file mask, keeping the hash in step.
    #[inline]
    pub(crate) fn set_en_passant_file(&mut self, file_mask: u64) {
        let slot = Piece::EnPassantFile.index();
        self.zobrist_key ^= en_passant_mask_key(self.bitboards[slot]);
        self.bitboards[slot] = file_mask;
        self.zobrist_key ^= en_passant_mask_key(file_mask);
    }

    #[inline]
    pub(crate) fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.zobrist_key ^= castling_key(self.castling_rights);
        self.castling_rights = rights & CASTLE_ALL;
        self.zobrist_key ^= castling_key(self.castling_rights);
    }

    /// Flip the side to move; the side key toggles with it.
    #[inline]
    pub(crate) fn flip_side_to_move(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
        self.zobrist_key ^= side_to_move_key();
    }
}
