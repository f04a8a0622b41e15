use crate::game_state::chess_rules::{A1, A8, C1, C8, E1, E8, G1, G8, H1, H8};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::CheckAnalysis;
use crate::move_generation::legal_move_shared::{push_moves_to_targets, StateBoards};
use crate::move_generation::move_generator::MoveList;
use crate::moves::king_moves::king_attacks;
use crate::moves::move_descriptions::{pack_move_description, FLAG_CASTLING};

/// One castling option: rights bit, king/rook home squares and the squares
/// that must be empty or unattacked.
struct CastlePath {
    right: CastlingRights,
    king_from: Square,
    king_to: Square,
    rook_from: Square,
    must_be_empty: u64,
    must_be_safe: u64,
}

// f/g for the short side; b/c/d empty and c/d safe for the long side
const LIGHT_CASTLES: [CastlePath; 2] = [
    CastlePath {
        right: CASTLE_LIGHT_KINGSIDE,
        king_from: E1,
        king_to: G1,
        rook_from: H1,
        must_be_empty: 0x60,
        must_be_safe: 0x60,
    },
    CastlePath {
        right: CASTLE_LIGHT_QUEENSIDE,
        king_from: E1,
        king_to: C1,
        rook_from: A1,
        must_be_empty: 0x0E,
        must_be_safe: 0x0C,
    },
];

const DARK_CASTLES: [CastlePath; 2] = [
    CastlePath {
        right: CASTLE_DARK_KINGSIDE,
        king_from: E8,
        king_to: G8,
        rook_from: H8,
        must_be_empty: 0x60u64 << 56,
        must_be_safe: 0x60u64 << 56,
    },
    CastlePath {
        right: CASTLE_DARK_QUEENSIDE,
        king_from: E8,
        king_to: C8,
        rook_from: A8,
        must_be_empty: 0x0Eu64 << 56,
        must_be_safe: 0x0Cu64 << 56,
    },
];

/// King steps never depend on the push/capture masks; `unsafe_squares`
/// already excludes every square the king could be captured on.
pub fn generate_king_moves(
    game_state: &GameState,
    boards: &StateBoards,
    analysis: &CheckAnalysis,
    out: &mut MoveList,
) {
    let from = boards.king_square;
    let targets = king_attacks(from) & boards.targets() & !analysis.unsafe_squares;
    push_moves_to_targets(game_state, from, targets, out);
}

pub fn generate_castling_moves(
    game_state: &GameState,
    boards: &StateBoards,
    analysis: &CheckAnalysis,
    out: &mut MoveList,
) {
    if analysis.in_check() {
        return;
    }

    let paths = match boards.side {
        Color::Light => &LIGHT_CASTLES,
        Color::Dark => &DARK_CASTLES,
    };
    let rooks = game_state.bitboard(Piece::from_parts(boards.side, PieceKind::Rook));

    for path in paths {
        if game_state.castling_rights() & path.right == 0
            || boards.king_square != path.king_from
            || rooks & (1u64 << path.rook_from) == 0
            || boards.occupied & path.must_be_empty != 0
            || analysis.unsafe_squares & path.must_be_safe != 0
        {
            continue;
        }

        out.push(pack_move_description(
            path.king_from,
            path.king_to,
            Piece::NoPiece,
            Piece::NoPiece,
            FLAG_CASTLING,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::{is_castling, move_to};

    fn castles(fen: &str) -> Vec<Square> {
        let game = GameState::from_fen(fen).unwrap();
        let boards = StateBoards::new(&game).unwrap();
        let analysis = CheckAnalysis::new(&game, &boards);
        let mut out = MoveList::new();
        generate_castling_moves(&game, &boards, &analysis, &mut out);
        assert!(out.iter().all(|&mv| is_castling(mv)));
        out.iter().map(|&mv| move_to(mv)).collect()
    }

    #[test]
    fn both_sides_available_on_open_back_rank() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"), vec![G1, C1]);
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1"), vec![G8, C8]);
    }

    #[test]
    fn attacked_transit_square_blocks_castling() {
        // rook f8 covers f1
        assert_eq!(castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1"), vec![C1]);
    }

    #[test]
    fn attacked_b_file_does_not_block_long_castle() {
        assert_eq!(castles("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1"), vec![C1]);
    }

    #[test]
    fn occupied_b_file_blocks_long_castle() {
        assert_eq!(castles("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1"), vec![G1]);
        assert_eq!(castles("rn2k2r/8/8/8/8/8/8/4K3 b kq - 0 1"), vec![G8]);
    }

    #[test]
    fn no_castling_out_of_check_or_without_rook() {
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").is_empty());
        assert_eq!(castles("4k3/8/8/8/8/8/8/4K2R w KQ - 0 1"), vec![G1]);
    }
}
