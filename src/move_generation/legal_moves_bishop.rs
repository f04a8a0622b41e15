use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::CheckAnalysis;
use crate::move_generation::legal_move_shared::{push_moves_to_targets, StateBoards};
use crate::move_generation::move_generator::MoveList;
use crate::moves::bishop_moves::bishop_attacks;

pub fn generate_bishop_moves(
    game_state: &GameState,
    boards: &StateBoards,
    analysis: &CheckAnalysis,
    out: &mut MoveList,
) {
    let allowed = boards.targets() & analysis.evasion_mask();

    let mut bishops = game_state.bitboard(Piece::from_parts(boards.side, PieceKind::Bishop));
    while bishops != 0 {
        let from = bishops.trailing_zeros() as Square;
        let targets =
            bishop_attacks(from, boards.occupied) & allowed & analysis.pins.ray_for(1u64 << from);
        push_moves_to_targets(game_state, from, targets, out);
        bishops &= bishops - 1;
    }
}
