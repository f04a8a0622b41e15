//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests and diagnostics
//! in text environments. Rendering only reads the state.

use std::fmt;

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board plus side to move, castling rights, en-passant file and
/// hash key.
///
/// Assumes square indexing where `0 == a1`, `7 == h1`, and `63 == h8`.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            out.push(piece_to_unicode(game_state.piece_on(rank * 8 + file)).unwrap_or('·'));
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");

    let side = match game_state.side_to_move() {
        Color::Light => "light",
        Color::Dark => "dark",
    };
    out.push_str(&format!(
        "side: {side}  castling: {}  en passant: {}\nkey: {:016x}",
        castling_label(game_state.castling_rights()),
        en_passant_label(game_state.en_passant_file()),
        game_state.zobrist_key()
    ));

    out
}

/// Debug grid of a raw bitboard, rank 8 at the top, `X` for set bits.
pub fn render_bitboard(bitboard: u64) -> String {
    let mut out = String::with_capacity(8 * 17);

    for rank in (0..8).rev() {
        for file in 0..8 {
            let set = bitboard & (1u64 << (rank * 8 + file)) != 0;
            out.push(if set { 'X' } else { '.' });
            if file < 7 {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out
}

fn castling_label(rights: CastlingRights) -> String {
    let label: String = [
        (CASTLE_LIGHT_KINGSIDE, 'K'),
        (CASTLE_LIGHT_QUEENSIDE, 'Q'),
        (CASTLE_DARK_KINGSIDE, 'k'),
        (CASTLE_DARK_QUEENSIDE, 'q'),
    ]
    .iter()
    .filter(|(right, _)| rights & right != 0)
    .map(|&(_, ch)| ch)
    .collect();

    if label.is_empty() {
        "-".to_owned()
    } else {
        label
    }
}

/// File letter of an en-passant file mask, `-` when unset.
fn en_passant_label(file_mask: u64) -> String {
    if file_mask == 0 {
        return "-".to_owned();
    }
    char::from(b'a' + file_mask.trailing_zeros() as u8).to_string()
}

fn piece_to_unicode(piece: Piece) -> Option<char> {
    let glyph = match (piece.color()?, piece.kind()?) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    };
    Some(glyph)
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}
