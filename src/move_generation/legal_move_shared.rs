//! Derived boards shared by the analyzer and every piece generator.
//!
//! Rebuilt from the piece bitboards on each generation call and never stored
//! on `GameState`, so they cannot drift from the position.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{pack_move_description, FLAG_NONE};
use crate::move_generation::move_generator::MoveList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateBoards {
    pub side: Color,
    pub king_square: Square,
    pub occupied: u64,
    pub empty: u64,
    pub own: u64,
    pub enemy: u64,
    pub enemy_rooks_queens: u64,
    pub enemy_bishops_queens: u64,
    pub enemy_knights: u64,
    pub enemy_pawns: u64,
    pub enemy_king: u64,
}

impl StateBoards {
    /// `None` when the side to move has no king on the board.
    pub fn new(game_state: &GameState) -> Option<Self> {
        let side = game_state.side_to_move();
        let enemy_color = side.opposite();
        let enemy_piece = |kind| game_state.bitboard(Piece::from_parts(enemy_color, kind));

        let king_bb = game_state.bitboard(Piece::from_parts(side, PieceKind::King));
        if king_bb == 0 {
            return None;
        }

        let own = game_state.color_occupancy(side);
        let enemy = game_state.color_occupancy(enemy_color);
        let enemy_queens = enemy_piece(PieceKind::Queen);

        Some(Self {
            side,
            king_square: king_bb.trailing_zeros() as Square,
            occupied: own | enemy,
            empty: !(own | enemy),
            own,
            enemy,
            enemy_rooks_queens: enemy_piece(PieceKind::Rook) | enemy_queens,
            enemy_bishops_queens: enemy_piece(PieceKind::Bishop) | enemy_queens,
            enemy_knights: enemy_piece(PieceKind::Knight),
            enemy_pawns: enemy_piece(PieceKind::Pawn),
            enemy_king: enemy_piece(PieceKind::King),
        })
    }

    /// Squares a non-king piece may land on: empty or enemy, never the enemy king.
    #[inline]
    pub fn targets(&self) -> u64 {
        !self.own & !self.enemy_king
    }
}

/// Emit one move per destination bit, recording whatever stands on it.
#[inline]
pub fn push_moves_to_targets(game_state: &GameState, from: Square, mut targets: u64, out: &mut MoveList) {
    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        out.push(pack_move_description(from, to, game_state.piece_on(to), Piece::NoPiece, FLAG_NONE));
        targets &= targets - 1;
    }
}
