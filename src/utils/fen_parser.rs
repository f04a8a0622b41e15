//! FEN-to-GameState parser.
//!
//! Builds a fully-populated incremental state from a Forsyth-Edwards Notation
//! string. Pieces are placed through `GameState::add_piece`, so the square
//! index, material sums and hash key come out exactly as make/unmake would
//! maintain them.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bitboard_masks::{file_of, rank_of, FILE_MASKS};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    let [board_part, side_part, castling_part, en_passant_part, halfmove_part, fullmove_part] =
        parts[..]
    else {
        return Err(ChessErrors::InvalidFenFieldCount(parts.len()));
    };

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    let side_to_move = parse_side_to_move(side_part)?;
    if side_to_move == Color::Dark {
        game_state.flip_side_to_move();
    }
    game_state.set_castling_rights(parse_castling_rights(castling_part)?);
    game_state.set_en_passant_file(parse_en_passant_file(en_passant_part, side_to_move)?);
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| ChessErrors::InvalidFenCounter(halfmove_part.to_owned()))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| ChessErrors::InvalidFenCounter(fullmove_part.to_owned()))?;

    let light_kings = game_state.bitboard(Piece::LightKing).count_ones();
    let dark_kings = game_state.bitboard(Piece::DarkKing).count_ones();
    if light_kings != 1 || dark_kings != 1 {
        return Err(ChessErrors::InvalidKingCount {
            light: light_kings,
            dark: dark_kings,
        });
    }

    tracing::debug!(fen, zobrist_key = game_state.zobrist_key(), "parsed FEN");
    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let invalid = |reason: &str| ChessErrors::InvalidFenBoard(format!("{board_part} ({reason})"));

    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid("empty-square count out of range"));
                }
                file += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| invalid("unknown piece character"))?;
            if file >= 8 {
                return Err(invalid("rank has too many files"));
            }

            game_state.add_piece(piece, (board_rank * 8 + file) as Square);
            file += 1;
        }

        if file != 8 {
            return Err(invalid("rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::InvalidFenSideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => return Err(ChessErrors::InvalidFenCastling(castling_part.to_owned())),
        }
    }

    Ok(rights)
}

/// The en-passant field as a file mask. The target must sit behind a pawn the
/// side not to move just pushed: rank 6 with light to move, rank 3 with dark.
fn parse_en_passant_file(en_passant_part: &str, side_to_move: Color) -> ChessResult<u64> {
    if en_passant_part == "-" {
        return Ok(0);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| ChessErrors::InvalidFenEnPassant(en_passant_part.to_owned()))?;
    let target_rank = match side_to_move {
        Color::Light => 5,
        Color::Dark => 2,
    };
    if rank_of(square) != target_rank {
        return Err(ChessErrors::InvalidFenEnPassant(en_passant_part.to_owned()));
    }

    Ok(FILE_MASKS[file_of(square)])
}

pub(crate) fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::from_parts(color, kind))
}
