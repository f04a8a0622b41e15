//! Errors used throughout the move-generation core.
//!
//! `ChessErrors` is the single error type for recoverable failures: bad FEN
//! text, bad square notation, and move strings that do not name a legal move.
//! Broken board invariants are not represented here; those panic at the point
//! where the invariant is checked.

use thiserror::Error;

/// Unified error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// The FEN string did not have the expected six fields.
    #[error("FEN must have 6 fields, found {0}")]
    InvalidFenFieldCount(usize),

    /// The piece placement field could not be parsed.
    #[error("invalid FEN board field: {0}")]
    InvalidFenBoard(String),

    #[error("invalid FEN side-to-move field: {0}")]
    InvalidFenSideToMove(String),

    #[error("invalid FEN castling field: {0}")]
    InvalidFenCastling(String),

    #[error("invalid FEN en-passant field: {0}")]
    InvalidFenEnPassant(String),

    /// Halfmove clock or fullmove number was not a non-negative integer.
    #[error("invalid FEN move counter: {0}")]
    InvalidFenCounter(String),

    /// Each side needs exactly one king on the board.
    #[error("position has {light} light kings and {dark} dark kings")]
    InvalidKingCount { light: u32, dark: u32 },

    /// A square string such as `"e4"` was malformed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicString(String),

    /// A long-algebraic move string was malformed.
    #[error("invalid move string: {0}")]
    InvalidMoveString(String),

    /// A well-formed move string that is not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A batch of move strings was rejected at `index`; nothing was applied.
    #[error("move {index} ({mv}) does not match a legal move")]
    UnmatchedMove { index: usize, mv: String },
}

pub type ChessResult<T> = Result<T, ChessErrors>;

#[cfg(test)]
mod tests {
    use super::ChessErrors;

    #[test]
    fn unmatched_move_message_names_index_and_move() {
        let err = ChessErrors::UnmatchedMove {
            index: 2,
            mv: "e2e5".to_owned(),
        };
        assert_eq!(err.to_string(), "move 2 (e2e5) does not match a legal move");
    }
}
