//! Long algebraic move strings (`e2e4`, `e7e8q`).
//!
//! Strings are never decoded into moves directly: they are matched against
//! the legal move list, so anything returned here is safe to pass to
//! `GameState::make_move`.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{move_from, move_promotion_piece, move_to};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: Move) -> String {
    let mut out = square_to_algebraic(move_from(mv));
    out.push_str(&square_to_algebraic(move_to(mv)));
    if let Some(ch) = move_promotion_piece(mv).kind().and_then(promotion_to_char) {
        out.push(ch);
    }
    out
}

/// The legal move named by `long_algebraic` in this position.
pub fn find_legal_move(game_state: &GameState, long_algebraic: &str) -> ChessResult<Move> {
    let (from, to, promotion) = parse_long_algebraic(long_algebraic)?;

    game_state
        .get_moves()
        .iter()
        .copied()
        .find(|&mv| {
            move_from(mv) == from && move_to(mv) == to && move_promotion_piece(mv).kind() == promotion
        })
        .ok_or_else(|| ChessErrors::IllegalMove(long_algebraic.to_owned()))
}

/// Apply every move in order, or none of them.
///
/// On the first string that does not name a legal move, every move already
/// applied by this call is taken back and `UnmatchedMove` reports its index.
pub fn apply_move_sequence(game_state: &mut GameState, moves: &[&str]) -> ChessResult<()> {
    for (index, &mv_str) in moves.iter().enumerate() {
        match find_legal_move(game_state, mv_str) {
            Ok(mv) => game_state.make_move(mv),
            Err(err) => {
                tracing::warn!(index, mv = mv_str, %err, "rejecting move sequence");
                for _ in 0..index {
                    game_state.unmake_move();
                }
                return Err(ChessErrors::UnmatchedMove {
                    index,
                    mv: mv_str.to_owned(),
                });
            }
        }
    }

    Ok(())
}

fn parse_long_algebraic(long_algebraic: &str) -> ChessResult<(Square, Square, Option<PieceKind>)> {
    let invalid = || ChessErrors::InvalidMoveString(long_algebraic.to_owned());

    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&long_algebraic[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&long_algebraic[2..4]).map_err(|_| invalid())?;
    let promotion = match long_algebraic[4..].chars().next() {
        Some(ch) => Some(char_to_promotion(ch).ok_or_else(invalid)?),
        None => None,
    };

    Ok((from, to, promotion))
}

fn promotion_to_char(piece_kind: PieceKind) -> Option<char> {
    match piece_kind {
        PieceKind::Knight => Some('n'),
        PieceKind::Bishop => Some('b'),
        PieceKind::Rook => Some('r'),
        PieceKind::Queen => Some('q'),
        _ => None,
    }
}

fn char_to_promotion(ch: char) -> Option<PieceKind> {
    match ch.to_ascii_lowercase() {
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::{is_castling, is_double_pawn_push, is_en_passant};
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn finds_double_push_and_renders_it_back() {
        let game_state = parse_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        let mv = find_legal_move(&game_state, "e2e4").expect("move should be legal");

        assert!(is_double_pawn_push(mv));
        assert_eq!(move_to_long_algebraic(mv), "e2e4");
    }

    #[test]
    fn promotion_suffix_selects_piece() {
        let game_state = parse_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").expect("FEN should parse");
        let mv = find_legal_move(&game_state, "a7a8n").expect("underpromotion should be legal");

        assert_eq!(move_promotion_piece(mv), Piece::LightKnight);
        assert_eq!(move_to_long_algebraic(mv), "a7a8n");
        assert!(find_legal_move(&game_state, "a7a8").is_err());
    }

    #[test]
    fn detects_castling_and_en_passant() {
        let castle_state = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        assert!(is_castling(find_legal_move(&castle_state, "e1g1").expect("castle is legal")));

        let ep_state = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        assert!(is_en_passant(find_legal_move(&ep_state, "e5d6").expect("en passant is legal")));
    }

    #[test]
    fn malformed_and_illegal_strings_are_distinguished() {
        let game_state = GameState::new_game();
        assert!(matches!(find_legal_move(&game_state, "e2"), Err(ChessErrors::InvalidMoveString(_))));
        assert!(matches!(find_legal_move(&game_state, "e2e4x"), Err(ChessErrors::InvalidMoveString(_))));
        assert!(matches!(find_legal_move(&game_state, "e2e5"), Err(ChessErrors::IllegalMove(_))));
    }

    #[test]
    fn sequence_is_all_or_nothing() {
        let mut game_state = GameState::new_game();
        let before = game_state.clone();

        let err = apply_move_sequence(&mut game_state, &["e2e4", "e7e5", "e1e3"]).unwrap_err();
        assert_eq!(
            err,
            ChessErrors::UnmatchedMove {
                index: 2,
                mv: "e1e3".to_owned()
            }
        );
        assert_eq!(game_state, before);

        apply_move_sequence(&mut game_state, &["e2e4", "e7e5", "g1f3"]).expect("sequence is legal");
        assert_eq!(game_state.ply(), 3);
        assert_eq!(
            game_state.get_fen(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
        );
    }
}
