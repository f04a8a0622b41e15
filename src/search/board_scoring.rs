//! Pluggable board evaluation interface and the material baseline.
//!
//! Only material is scored here. The running sums are maintained by
//! `GameState::add_piece`/`remove_piece`, so scoring never walks the board.

use crate::game_state::chess_rules::piece_value;
use crate::game_state::{chess_types::*, game_state::GameState};

pub trait BoardScorer: Send + Sync {
    /// Score from light's point of view.
    fn score(&self, game_state: &GameState) -> i32;

    /// Score from the side to move's point of view.
    fn relative_score(&self, game_state: &GameState) -> i32 {
        match game_state.side_to_move() {
            Color::Light => self.score(game_state),
            Color::Dark => -self.score(game_state),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: Piece) -> i32 {
        piece_value(piece)
    }

    /// Recount material from the bitboards; the incremental sums must match it.
    pub fn recount(game_state: &GameState, color: Color) -> i32 {
        ALL_PIECE_KINDS
            .iter()
            .map(|&kind| {
                let piece = Piece::from_parts(color, kind);
                game_state.bitboard(piece).count_ones() as i32 * Self::piece_value(piece)
            })
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        game_state.eval_position()
    }
}
