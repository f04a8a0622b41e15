//! Attack and safety analysis for the side to move.
//!
//! [`CheckAnalysis`] is computed once per generation call and carries
//! everything the piece generators need to emit only legal moves:
//!
//! - `unsafe_squares`: every square the opponent attacks, with our own king
//!   lifted off the board so sliders see through it.
//! - `checkers`: enemy pieces giving check.
//! - `push_mask` / `capture_mask`: where a non-king move must land. Both are
//!   full boards out of check and empty in double check.
//! - `pins`: one ray per absolutely pinned piece.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::StateBoards;
use crate::moves::bishop_moves::diagonal_anti_diagonal;
use crate::moves::bitboard_masks::{
    anti_diagonal_index, diagonal_index, file_of, rank_of, ANTI_DIAGONAL_MASKS, DIAGONAL_MASKS,
    FILE_MASKS, RANK_MASKS,
};
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::{pawn_attacks, pawn_attacks_set};
use crate::moves::rook_moves::{horizontal_vertical, line_attacks};

/// At most eight lines meet at the king.
const MAX_PINS: usize = 8;

/// Pin rays from the king, each running from next to the king up to and
/// including the pinning piece.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinRays {
    rays: [u64; MAX_PINS],
    count: usize,
}

impl PinRays {
    #[inline]
    fn push(&mut self, ray: u64) {
        debug_assert!(self.count < MAX_PINS);
        self.rays[self.count] = ray;
        self.count += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The ray a piece on `square_bb` must stay on; all squares if unpinned.
    #[inline]
    pub fn ray_for(&self, square_bb: u64) -> u64 {
        self.rays[..self.count]
            .iter()
            .copied()
            .find(|ray| ray & square_bb != 0)
            .unwrap_or(!0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckAnalysis {
    pub unsafe_squares: u64,
    pub checkers: u64,
    pub push_mask: u64,
    pub capture_mask: u64,
    pub pins: PinRays,
}

impl CheckAnalysis {
    pub fn new(game_state: &GameState, boards: &StateBoards) -> Self {
        let king_sq = boards.king_square;
        let king_bb = 1u64 << king_sq;

        let unsafe_squares =
            attacked_squares(game_state, boards.side.opposite(), boards.occupied & !king_bb);
        let checkers = checkers_of(boards);

        let (push_mask, capture_mask) = match checkers.count_ones() {
            0 => (!0, !0),
            1 => {
                let checker_sq = checkers.trailing_zeros() as Square;
                let push_mask = if game_state.piece_on(checker_sq).is_slider() {
                    // A sliding checker always shares a line with the king; a
                    // knight or pawn check has no ray and cannot be blocked.
                    match line_through(king_sq, checker_sq) {
                        Some(line) => between_on_line(king_sq, checker_sq, line),
                        None => panic!(
                            "sliding checker on {checker_sq} is not aligned with king on {king_sq}"
                        ),
                    }
                } else {
                    0
                };
                (push_mask, checkers)
            }
            _ => (0, 0),
        };

        Self {
            unsafe_squares,
            checkers,
            push_mask,
            capture_mask,
            pins: pin_rays(boards),
        }
    }

    #[inline]
    pub fn in_check(&self) -> bool {
        self.checkers != 0
    }

    #[inline]
    pub fn is_double_check(&self) -> bool {
        self.checkers.count_ones() >= 2
    }

    /// Destinations that resolve the current check (everything when not in check).
    #[inline]
    pub fn evasion_mask(&self) -> u64 {
        self.push_mask | self.capture_mask
    }
}

fn checkers_of(boards: &StateBoards) -> u64 {
    let k = boards.king_square;
    (horizontal_vertical(k, boards.occupied) & boards.enemy_rooks_queens)
        | (diagonal_anti_diagonal(k, boards.occupied) & boards.enemy_bishops_queens)
        | (knight_attacks(k) & boards.enemy_knights)
        // our pawn pattern from the king square finds the enemy pawns hitting it
        | (pawn_attacks(boards.side, k) & boards.enemy_pawns)
}

fn pin_rays(boards: &StateBoards) -> PinRays {
    let k = boards.king_square;
    let mut pins = PinRays::default();

    // Casting against enemy pieces only looks through our own pieces.
    let mut pinners = (horizontal_vertical(k, boards.enemy) & boards.enemy_rooks_queens)
        | (diagonal_anti_diagonal(k, boards.enemy) & boards.enemy_bishops_queens);

    while pinners != 0 {
        let pinner_sq = pinners.trailing_zeros() as Square;
        if let Some(line) = line_through(k, pinner_sq) {
            let between = between_on_line(k, pinner_sq, line);
            if (between & boards.own).count_ones() == 1 {
                pins.push(between | (1u64 << pinner_sq));
            }
        }
        pinners &= pinners - 1;
    }

    pins
}

/// The full file, rank, diagonal or anti-diagonal through both squares.
pub fn line_through(a: Square, b: Square) -> Option<u64> {
    if a == b {
        None
    } else if file_of(a) == file_of(b) {
        Some(FILE_MASKS[file_of(a)])
    } else if rank_of(a) == rank_of(b) {
        Some(RANK_MASKS[rank_of(a)])
    } else if diagonal_index(a) == diagonal_index(b) {
        Some(DIAGONAL_MASKS[diagonal_index(a)])
    } else if anti_diagonal_index(a) == anti_diagonal_index(b) {
        Some(ANTI_DIAGONAL_MASKS[anti_diagonal_index(a)])
    } else {
        None
    }
}

#[inline]
fn between_on_line(a: Square, b: Square, line: u64) -> u64 {
    line_attacks(a, 1u64 << b, line) & line_attacks(b, 1u64 << a, line)
}

/// Squares strictly between `a` and `b`; empty if they share no line.
pub fn between(a: Square, b: Square) -> u64 {
    line_through(a, b).map_or(0, |line| between_on_line(a, b, line))
}

/// Every square attacked by `by`, with sliders blocked by `occupied`.
pub fn attacked_squares(game_state: &GameState, by: Color, occupied: u64) -> u64 {
    let piece = |kind| game_state.bitboard(Piece::from_parts(by, kind));
    let queens = piece(PieceKind::Queen);

    let mut attacks = pawn_attacks_set(by, piece(PieceKind::Pawn));

    let mut knights = piece(PieceKind::Knight);
    while knights != 0 {
        attacks |= knight_attacks(knights.trailing_zeros() as Square);
        knights &= knights - 1;
    }

    let mut orthogonal = piece(PieceKind::Rook) | queens;
    while orthogonal != 0 {
        attacks |= horizontal_vertical(orthogonal.trailing_zeros() as Square, occupied);
        orthogonal &= orthogonal - 1;
    }

    let mut diagonal = piece(PieceKind::Bishop) | queens;
    while diagonal != 0 {
        attacks |= diagonal_anti_diagonal(diagonal.trailing_zeros() as Square, occupied);
        diagonal &= diagonal - 1;
    }

    let mut kings = piece(PieceKind::King);
    while kings != 0 {
        attacks |= king_attacks(kings.trailing_zeros() as Square);
        kings &= kings - 1;
    }

    attacks
}

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    let kings = game_state.bitboard(Piece::from_parts(color, PieceKind::King));
    if kings == 0 {
        None
    } else {
        Some(kings.trailing_zeros() as Square)
    }
}

pub fn is_square_attacked(game_state: &GameState, square: Square, by: Color) -> bool {
    let piece = |kind| game_state.bitboard(Piece::from_parts(by, kind));
    let occupied = game_state.occupied();
    let queens = piece(PieceKind::Queen);

    // attacker pawns sit where a defending pawn on `square` would capture
    (pawn_attacks(by.opposite(), square) & piece(PieceKind::Pawn)) != 0
        || (knight_attacks(square) & piece(PieceKind::Knight)) != 0
        || (king_attacks(square) & piece(PieceKind::King)) != 0
        || (diagonal_anti_diagonal(square, occupied) & (piece(PieceKind::Bishop) | queens)) != 0
        || (horizontal_vertical(square, occupied) & (piece(PieceKind::Rook) | queens)) != 0
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

/// Whether the side to move is in check.
#[inline]
pub fn is_in_check(game_state: &GameState) -> bool {
    is_king_in_check(game_state, game_state.side_to_move())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyse(fen: &str) -> CheckAnalysis {
        let game = GameState::from_fen(fen).unwrap();
        let boards = StateBoards::new(&game).unwrap();
        CheckAnalysis::new(&game, &boards)
    }

    #[test]
    fn quiet_position_has_open_masks() {
        let analysis = analyse("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");

        assert!(!analysis.in_check());
        assert_eq!(analysis.push_mask, !0);
        assert_eq!(analysis.capture_mask, !0);
        assert!(analysis.pins.is_empty());
        // dark pawns cover all of rank 6
        assert_eq!(analysis.unsafe_squares & 0x0000_FF00_0000_0000, 0x0000_FF00_0000_0000);
    }

    #[test]
    fn rook_check_sets_block_and_capture_masks() {
        // rook e8 checks king e1 down the open file
        let analysis = analyse("4r2k/8/8/8/8/8/8/4K3 w - - 0 1");

        assert_eq!(analysis.checkers, 1u64 << 60);
        assert_eq!(analysis.capture_mask, 1u64 << 60);
        assert_eq!(analysis.push_mask, FILE_MASKS[4] & !(1u64 << 4) & !(1u64 << 60));
        // the king cannot step back along the checking file
        assert_ne!(analysis.unsafe_squares & (1u64 << 12), 0);
    }

    #[test]
    fn king_shadow_is_unsafe() {
        // rook a1 checks king d1; e1 stays attacked behind the king
        let analysis = analyse("7k/8/8/8/8/8/8/r2K4 w - - 0 1");
        assert_ne!(analysis.unsafe_squares & (1u64 << 4), 0);
    }

    #[test]
    fn knight_check_cannot_be_blocked() {
        let analysis = analyse("7k/8/8/8/8/3n4/8/4K3 w - - 0 1");

        assert_eq!(analysis.checkers, 1u64 << 19);
        assert_eq!(analysis.push_mask, 0);
        assert_eq!(analysis.evasion_mask(), 1u64 << 19);
    }

    #[test]
    fn pawn_check_is_found() {
        // dark pawn d2 checks light king e1
        let analysis = analyse("7k/8/8/8/8/8/3p4/4K3 w - - 0 1");
        assert_eq!(analysis.checkers, 1u64 << 11);

        // light pawn f7 checks dark king e8
        let analysis = analyse("4k3/5P2/8/8/8/8/8/K7 b - - 0 1");
        assert_eq!(analysis.checkers, 1u64 << 53);
    }

    #[test]
    fn double_check_closes_both_masks() {
        let analysis = analyse("4k3/8/8/8/8/5n2/8/3BK2r w - - 0 1");

        assert!(analysis.is_double_check());
        assert_eq!(analysis.evasion_mask(), 0);
    }

    #[test]
    fn pin_ray_runs_to_the_pinner() {
        // bishop e2 pinned by rook e8 against king e1
        let analysis = analyse("4r2k/8/8/8/8/8/4B3/4K3 w - - 0 1");

        assert!(!analysis.in_check());
        assert_eq!(analysis.pins.len(), 1);
        let ray = analysis.pins.ray_for(1u64 << 12);
        assert_eq!(ray, FILE_MASKS[4] & !(1u64 << 4));
        assert_eq!(analysis.pins.ray_for(1u64 << 0), !0);
    }

    #[test]
    fn two_blockers_are_not_a_pin() {
        let analysis = analyse("4r2k/8/8/8/8/4N3/4B3/4K3 w - - 0 1");
        assert!(analysis.pins.is_empty());
    }

    #[test]
    fn between_squares() {
        assert_eq!(between(0, 63).count_ones(), 6);
        assert_eq!(between(4, 7), (1u64 << 5) | (1u64 << 6));
        assert_eq!(between(4, 5), 0);
        assert_eq!(between(0, 10), 0);
        assert!(line_through(0, 10).is_none());
    }

    #[test]
    fn square_attack_queries() {
        let game = GameState::new_game();
        assert!(is_square_attacked(&game, 20, Color::Light));
        assert!(is_square_attacked(&game, 44, Color::Dark));
        assert!(!is_square_attacked(&game, 28, Color::Light));
        assert!(!is_in_check(&game));
        assert_eq!(king_square(&game, Color::Dark), Some(60));
    }
}
