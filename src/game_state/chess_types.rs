//! Core board vocabulary shared by every subsystem.
//!
//! Squares are bit indices with `0 == a1`, `7 == h1` and `63 == h8`. Pieces
//! are stored as a single colour-qualified slot index so one array of
//! bitboards (plus one en-passant slot) covers the whole board.

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

/// Piece kind without colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// Bitboard slot index.
///
/// Slot 0 is the empty square marker, 1..=12 are the real pieces and slot 13
/// holds the en-passant file mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Piece {
    #[default]
    NoPiece = 0,
    LightPawn,
    LightKnight,
    LightBishop,
    LightRook,
    LightQueen,
    LightKing,
    DarkPawn,
    DarkKnight,
    DarkBishop,
    DarkRook,
    DarkQueen,
    DarkKing,
    EnPassantFile,
}

pub const PIECE_SLOTS: usize = 14;

const SLOT_ORDER: [Piece; PIECE_SLOTS] = [
    Piece::NoPiece,
    Piece::LightPawn,
    Piece::LightKnight,
    Piece::LightBishop,
    Piece::LightRook,
    Piece::LightQueen,
    Piece::LightKing,
    Piece::DarkPawn,
    Piece::DarkKnight,
    Piece::DarkBishop,
    Piece::DarkRook,
    Piece::DarkQueen,
    Piece::DarkKing,
    Piece::EnPassantFile,
];

/// Dense sliding-piece lookup indexed by slot.
const IS_SLIDER: [bool; PIECE_SLOTS] = [
    false, false, false, true, true, true, false, false, false, true, true, true, false, false,
];

impl Piece {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Piece> {
        if index < PIECE_SLOTS {
            Some(SLOT_ORDER[index])
        } else {
            None
        }
    }

    #[inline]
    pub const fn from_parts(color: Color, kind: PieceKind) -> Piece {
        SLOT_ORDER[1 + color.index() * 6 + kind.index()]
    }

    /// Colour of a real piece; `None` for the empty and en-passant slots.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self as u8 {
            1..=6 => Some(Color::Light),
            7..=12 => Some(Color::Dark),
            _ => None,
        }
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        match self as u8 {
            1 | 7 => Some(PieceKind::Pawn),
            2 | 8 => Some(PieceKind::Knight),
            3 | 9 => Some(PieceKind::Bishop),
            4 | 10 => Some(PieceKind::Rook),
            5 | 11 => Some(PieceKind::Queen),
            6 | 12 => Some(PieceKind::King),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_slider(self) -> bool {
        IS_SLIDER[self as usize]
    }

    #[inline]
    pub const fn is_real(self) -> bool {
        matches!(self as u8, 1..=12)
    }
}

/// Packed move word; see `moves::move_descriptions` for the layout.
pub type Move = u32;

/// Board square index (`0..=63`).
pub type Square = u8;

pub type CastlingRights = u8;

pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights = 0x0F;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_round_trips_colour_and_kind() {
        for color in [Color::Light, Color::Dark] {
            for kind in ALL_PIECE_KINDS {
                let piece = Piece::from_parts(color, kind);
                assert_eq!(piece.color(), Some(color));
                assert_eq!(piece.kind(), Some(kind));
                assert!(piece.is_real());
            }
        }
    }

    #[test]
    fn only_bishops_rooks_and_queens_slide() {
        let sliders: Vec<Piece> = (0..PIECE_SLOTS)
            .filter_map(Piece::from_index)
            .filter(|piece| piece.is_slider())
            .collect();
        assert_eq!(
            sliders,
            vec![
                Piece::LightBishop,
                Piece::LightRook,
                Piece::LightQueen,
                Piece::DarkBishop,
                Piece::DarkRook,
                Piece::DarkQueen,
            ]
        );
    }

    #[test]
    fn marker_slots_have_no_colour() {
        assert_eq!(Piece::NoPiece.color(), None);
        assert_eq!(Piece::EnPassantFile.color(), None);
        assert_eq!(Piece::from_index(PIECE_SLOTS), None);
    }
}
