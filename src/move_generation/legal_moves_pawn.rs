//! Pawn pushes, captures, promotions and en passant.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::CheckAnalysis;
use crate::move_generation::legal_move_shared::StateBoards;
use crate::move_generation::move_generator::MoveList;
use crate::moves::bishop_moves::diagonal_anti_diagonal;
use crate::moves::bitboard_masks::{RANK_1, RANK_2, RANK_7, RANK_8};
use crate::moves::move_descriptions::{
    pack_move_description, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT, FLAG_NONE,
};
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::horizontal_vertical;

const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

pub fn generate_pawn_moves(
    game_state: &GameState,
    boards: &StateBoards,
    analysis: &CheckAnalysis,
    out: &mut MoveList,
) {
    let side = boards.side;
    let (start_rank, promotion_rank) = match side {
        Color::Light => (RANK_2, RANK_8),
        Color::Dark => (RANK_7, RANK_1),
    };
    let capturable = boards.enemy & !boards.enemy_king & analysis.capture_mask;

    let mut pawns = game_state.bitboard(Piece::from_parts(side, PieceKind::Pawn));
    while pawns != 0 {
        let from = pawns.trailing_zeros() as Square;
        let from_bb = 1u64 << from;
        let pin_ray = analysis.pins.ray_for(from_bb);

        let single = forward(side, from_bb) & boards.empty;
        if single & analysis.push_mask & pin_ray != 0 {
            push_pawn_move(side, from, single, Piece::NoPiece, promotion_rank, out);
        }

        if from_bb & start_rank != 0 {
            let double = forward(side, single) & boards.empty;
            if double & analysis.push_mask & pin_ray != 0 {
                out.push(pack_move_description(
                    from,
                    double.trailing_zeros() as Square,
                    Piece::NoPiece,
                    Piece::NoPiece,
                    FLAG_DOUBLE_PAWN_PUSH,
                ));
            }
        }

        let mut captures = pawn_attacks(side, from) & capturable & pin_ray;
        while captures != 0 {
            let to_bb = captures & captures.wrapping_neg();
            let captured = game_state.piece_on(to_bb.trailing_zeros() as Square);
            push_pawn_move(side, from, to_bb, captured, promotion_rank, out);
            captures &= captures - 1;
        }

        pawns &= pawns - 1;
    }

    generate_en_passant(game_state, boards, analysis, out);
}

/// One rank towards the promotion rank.
#[inline]
fn forward(side: Color, bb: u64) -> u64 {
    match side {
        Color::Light => bb << 8,
        Color::Dark => bb >> 8,
    }
}

#[inline]
fn push_pawn_move(
    side: Color,
    from: Square,
    to_bb: u64,
    captured: Piece,
    promotion_rank: u64,
    out: &mut MoveList,
) {
    let to = to_bb.trailing_zeros() as Square;
    if to_bb & promotion_rank != 0 {
        for kind in PROMOTION_KINDS {
            out.push(pack_move_description(
                from,
                to,
                captured,
                Piece::from_parts(side, kind),
                FLAG_NONE,
            ));
        }
    } else {
        out.push(pack_move_description(from, to, captured, Piece::NoPiece, FLAG_NONE));
    }
}

/// Target and captured-pawn squares for the current en-passant file.
#[inline]
pub fn en_passant_squares(side: Color, file: u8) -> (Square, Square) {
    match side {
        Color::Light => (40 + file, 32 + file),
        Color::Dark => (16 + file, 24 + file),
    }
}

fn generate_en_passant(
    game_state: &GameState,
    boards: &StateBoards,
    analysis: &CheckAnalysis,
    out: &mut MoveList,
) {
    let ep_file = game_state.en_passant_file();
    if ep_file == 0 {
        return;
    }

    let side = boards.side;
    let (to, captured_sq) = en_passant_squares(side, (ep_file.trailing_zeros() % 8) as u8);
    let to_bb = 1u64 << to;
    let captured_bb = 1u64 << captured_sq;
    if captured_bb & boards.enemy_pawns == 0 || to_bb & boards.empty == 0 {
        return;
    }

    // Resolves a check either by landing on the block square or by removing
    // the checking pawn.
    if to_bb & analysis.push_mask == 0 && captured_bb & analysis.capture_mask == 0 {
        return;
    }

    let own_pawns = game_state.bitboard(Piece::from_parts(side, PieceKind::Pawn));
    // our pawns that attack `to` sit where an enemy pawn on `to` would attack
    let mut candidates = pawn_attacks(side.opposite(), to) & own_pawns;
    while candidates != 0 {
        let from = candidates.trailing_zeros() as Square;
        let from_bb = 1u64 << from;
        candidates &= candidates - 1;

        if to_bb & analysis.pins.ray_for(from_bb) == 0 {
            continue;
        }

        // Both pawns leave their squares at once, which can open a rank or a
        // diagonal onto the king that no pin ray describes.
        let occupied_after = (boards.occupied ^ from_bb ^ captured_bb) | to_bb;
        let exposed = (horizontal_vertical(boards.king_square, occupied_after)
            & boards.enemy_rooks_queens)
            | (diagonal_anti_diagonal(boards.king_square, occupied_after)
                & boards.enemy_bishops_queens);
        if exposed != 0 {
            continue;
        }

        out.push(pack_move_description(
            from,
            to,
            game_state.piece_on(captured_sq),
            Piece::NoPiece,
            FLAG_EN_PASSANT,
        ));
    }
}
