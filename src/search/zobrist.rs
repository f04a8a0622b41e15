//! Zobrist hashing support for fast position identity.
//!
//! The keys are drawn from a `StdRng` with a fixed seed so hashes are
//! deterministic across runs, which is useful for testing and debugging.
//! Every bitboard slot gets a key per square; the en-passant slot reuses its
//! first eight entries as per-file keys.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::chess_types::*;

pub const ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[u64; 64]; PIECE_SLOTS],
    side_to_move: u64,
    castling: [u64; 16],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_square = [[0u64; 64]; PIECE_SLOTS];
    for slot in &mut piece_square {
        for key in slot.iter_mut() {
            *key = rng.random::<u64>();
        }
    }

    let side_to_move = rng.random::<u64>();

    let mut castling = [0u64; 16];
    for key in &mut castling {
        *key = rng.random::<u64>();
    }

    ZobristTables {
        piece_square,
        side_to_move,
        castling,
    }
}

/// Key for `piece` standing on `square`.
#[inline]
pub fn piece_square_key(piece: Piece, square: Square) -> u64 {
    tables().piece_square[piece.index()][square as usize]
}

/// Key for a castling rights mask (`0..=15`).
#[inline]
pub fn castling_key(castling_rights: CastlingRights) -> u64 {
    tables().castling[(castling_rights & 0x0F) as usize]
}

/// Key for an en-passant file (`0..=7`).
#[inline]
pub fn en_passant_file_key(file: u8) -> u64 {
    tables().piece_square[Piece::EnPassantFile.index()][file as usize]
}

/// Key for an en-passant file mask as stored in the en-passant slot.
/// An empty mask contributes nothing.
#[inline]
pub fn en_passant_mask_key(file_mask: u64) -> u64 {
    if file_mask == 0 {
        0
    } else {
        en_passant_file_key((file_mask.trailing_zeros() % 8) as u8)
    }
}

/// Side key; present in the hash while light is to move.
#[inline]
pub fn side_to_move_key() -> u64 {
    tables().side_to_move
}

/// Compute the full position key from scratch.
///
/// Make/unmake and FEN parsing maintain the key incrementally; this is the
/// reference they must agree with.
pub fn compute_zobrist_key(game_state: &GameState) -> u64 {
    let mut key = 0u64;

    for index in 1..=12 {
        let Some(piece) = Piece::from_index(index) else {
            continue;
        };
        let mut bb = game_state.bitboard(piece);
        while bb != 0 {
            let sq = bb.trailing_zeros() as Square;
            key ^= piece_square_key(piece, sq);
            bb &= bb - 1;
        }
    }

    if game_state.side_to_move() == Color::Light {
        key ^= side_to_move_key();
    }

    key ^= castling_key(game_state.castling_rights());
    key ^= en_passant_mask_key(game_state.bitboard(Piece::EnPassantFile));

    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::bitboard_masks::FILE_MASKS;

    #[test]
    fn keys_are_deterministic_and_distinct() {
        let a = piece_square_key(Piece::LightPawn, 12);
        let b = piece_square_key(Piece::LightPawn, 12);
        assert_eq!(a, b);
        assert_ne!(piece_square_key(Piece::LightPawn, 12), piece_square_key(Piece::DarkPawn, 12));
        assert_ne!(castling_key(0), castling_key(15));
        assert_ne!(side_to_move_key(), 0);
    }

    #[test]
    fn en_passant_mask_key_matches_file_key() {
        assert_eq!(en_passant_mask_key(0), 0);
        for file in 0..8u8 {
            assert_eq!(en_passant_mask_key(FILE_MASKS[file as usize]), en_passant_file_key(file));
        }
    }

    #[test]
    fn start_position_hash_matches_incremental_hash() {
        let game = GameState::new_game();
        assert_eq!(compute_zobrist_key(&game), game.zobrist_key());
    }

    #[test]
    fn fen_hash_matches_recomputed_hash() {
        for fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/8/8/K2pP2q/8/8/8/3k4 w - d6 0 2",
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 b - - 0 1",
        ] {
            let game = GameState::from_fen(fen).expect("valid FEN");
            assert_eq!(compute_zobrist_key(&game), game.zobrist_key(), "{fen}");
        }
    }
}
