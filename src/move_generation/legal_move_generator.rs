//! Full legal move generation pipeline.
//!
//! Builds the derived boards and the check/pin analysis once, then runs each
//! piece generator under the same masks. Nothing is generated and filtered
//! afterwards: every emitted move is legal.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::CheckAnalysis;
use crate::move_generation::legal_move_shared::StateBoards;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{generate_castling_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::MoveList;

/// Legal moves for the side to move, in the order pawns, knights, bishops,
/// rooks, queens, king, castling.
///
/// A position without a king for the side to move has no moves.
pub fn generate_legal_moves(game_state: &GameState) -> MoveList {
    let mut out = MoveList::new();
    let Some(boards) = StateBoards::new(game_state) else {
        return out;
    };
    let analysis = CheckAnalysis::new(game_state, &boards);

    if !analysis.is_double_check() {
        generate_pawn_moves(game_state, &boards, &analysis, &mut out);
        generate_knight_moves(game_state, &boards, &analysis, &mut out);
        generate_bishop_moves(game_state, &boards, &analysis, &mut out);
        generate_rook_moves(game_state, &boards, &analysis, &mut out);
        generate_queen_moves(game_state, &boards, &analysis, &mut out);
    }
    generate_king_moves(game_state, &boards, &analysis, &mut out);
    generate_castling_moves(game_state, &boards, &analysis, &mut out);

    out
}
