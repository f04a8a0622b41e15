use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::CheckAnalysis;
use crate::move_generation::legal_move_shared::{push_moves_to_targets, StateBoards};
use crate::move_generation::move_generator::MoveList;
use crate::moves::knight_moves::knight_attacks;

pub fn generate_knight_moves(
    game_state: &GameState,
    boards: &StateBoards,
    analysis: &CheckAnalysis,
    out: &mut MoveList,
) {
    let allowed = boards.targets() & analysis.evasion_mask();

    let mut knights = game_state.bitboard(Piece::from_parts(boards.side, PieceKind::Knight));
    while knights != 0 {
        let from = knights.trailing_zeros() as Square;
        // a pinned knight never lands on its own pin ray
        let targets = knight_attacks(from) & allowed & analysis.pins.ray_for(1u64 << from);
        push_moves_to_targets(game_state, from, targets, out);
        knights &= knights - 1;
    }
}
