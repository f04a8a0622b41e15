//! Perft: exhaustive legal-move counting used as a correctness oracle.

use std::thread;

use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::{is_capture, is_castling, is_en_passant, is_promotion};
use crate::utils::long_algebraic::move_to_long_algebraic;

/// Leaf statistics; each field counts leaf moves of that kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
    }
}

/// Number of leaf positions `depth` plies below `game_state`.
pub fn perft(game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(game_state);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for &mv in moves.iter() {
        game_state.make_move(mv);
        nodes += perft(game_state, depth - 1);
        game_state.unmake_move();
    }
    nodes
}

pub fn perft_with_counts(game_state: &mut GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
    } else {
        count_recurse(game_state, depth, &mut counts);
    }
    tracing::debug!(depth, nodes = counts.nodes, captures = counts.captures, "perft counts");
    counts
}

fn count_recurse(game_state: &mut GameState, depth: u8, counts: &mut PerftCounts) {
    let moves = generate_legal_moves(game_state);
    for &mv in moves.iter() {
        game_state.make_move(mv);

        if depth == 1 {
            counts.nodes += 1;
            if is_capture(mv) {
                counts.captures += 1;
            }
            if is_en_passant(mv) {
                counts.en_passant += 1;
            }
            if is_castling(mv) {
                counts.castles += 1;
            }
            if is_promotion(mv) {
                counts.promotions += 1;
            }
            if is_in_check(game_state) {
                counts.checks += 1;
            }
        } else {
            count_recurse(game_state, depth - 1, counts);
        }

        game_state.unmake_move();
    }
}

/// Node counts below each root move, in generation order.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let moves = generate_legal_moves(game_state);
    let mut out = Vec::with_capacity(moves.len());
    let mut total = 0u64;

    for &mv in moves.iter() {
        game_state.make_move(mv);
        let nodes = perft(game_state, depth - 1);
        game_state.unmake_move();

        let name = move_to_long_algebraic(mv);
        tracing::debug!(mv = %name, nodes, "perft divide");
        total += nodes;
        out.push((name, nodes));
    }

    tracing::debug!(depth, total, "perft divide total");
    out
}

/// Same result as [`perft_with_counts`], with root moves spread over threads.
///
/// Each worker owns a clone of the position; nothing is shared.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8, threads: usize) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let moves = generate_legal_moves(game_state);
    let threads = threads.clamp(1, moves.len().max(1));
    let chunk_size = moves.len().div_ceil(threads).max(1);

    let mut total = PerftCounts::default();
    thread::scope(|scope| {
        let handles: Vec<_> = moves
            .chunks(chunk_size)
            .map(|chunk| {
                let mut local_state = game_state.clone();
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    for &mv in chunk {
                        local_state.make_move(mv);
                        if depth == 1 {
                            local.merge(leaf_counts(&local_state, mv));
                        } else {
                            count_recurse(&mut local_state, depth - 1, &mut local);
                        }
                        local_state.unmake_move();
                    }
                    local
                })
            })
            .collect();

        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
    });

    tracing::debug!(depth, threads, nodes = total.nodes, "perft multi-threaded");
    total
}

// Counts for a single leaf move that has already been made.
fn leaf_counts(game_state: &GameState, mv: Move) -> PerftCounts {
    PerftCounts {
        nodes: 1,
        captures: is_capture(mv) as u64,
        en_passant: is_en_passant(mv) as u64,
        castles: is_castling(mv) as u64,
        promotions: is_promotion(mv) as u64,
        checks: is_in_check(game_state) as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const POSITION_4: &str = "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1";
    const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";
    const POSITION_6: &str =
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10";

    fn perft_fen(fen: &str, depth: u8) -> u64 {
        let mut game = GameState::from_fen(fen).unwrap();
        let nodes = perft(&mut game, depth);
        assert_eq!(game, GameState::from_fen(fen).unwrap(), "perft must leave the position untouched");
        nodes
    }

    #[test]
    fn start_position_shallow() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&mut game, 0), 1);
        assert_eq!(perft(&mut game, 1), 20);
        assert_eq!(perft(&mut game, 2), 400);
        assert_eq!(perft(&mut game, 3), 8_902);
        assert_eq!(perft(&mut game, 4), 197_281);
    }

    #[test]
    #[ignore]
    fn start_position_depth_5() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&mut game, 5), 4_865_609);
    }

    #[test]
    fn reference_positions_shallow() {
        assert_eq!(perft_fen(KIWIPETE, 1), 48);
        assert_eq!(perft_fen(KIWIPETE, 2), 2_039);
        assert_eq!(perft_fen(KIWIPETE, 3), 97_862);
        assert_eq!(perft_fen(POSITION_3, 4), 43_238);
        assert_eq!(perft_fen(POSITION_4, 3), 9_467);
        assert_eq!(perft_fen(POSITION_5, 3), 62_379);
        assert_eq!(perft_fen(POSITION_6, 3), 89_890);
    }

    #[test]
    #[ignore]
    fn reference_positions_deep() {
        assert_eq!(perft_fen(KIWIPETE, 4), 4_085_603);
        assert_eq!(perft_fen(POSITION_3, 5), 674_624);
        assert_eq!(perft_fen(POSITION_4, 4), 422_333);
        assert_eq!(perft_fen(POSITION_5, 4), 2_103_487);
        assert_eq!(perft_fen(POSITION_6, 4), 3_894_594);
    }

    #[test]
    fn kiwipete_leaf_statistics() {
        let mut game = GameState::from_fen(KIWIPETE).unwrap();
        let counts = perft_with_counts(&mut game, 2);

        assert_eq!(counts.nodes, 2_039);
        assert_eq!(counts.captures, 351);
        assert_eq!(counts.en_passant, 1);
        assert_eq!(counts.castles, 91);
        assert_eq!(counts.promotions, 0);
        assert_eq!(counts.checks, 3);
    }

    #[test]
    fn start_position_depth_3_statistics() {
        let mut game = GameState::new_game();
        let counts = perft_with_counts(&mut game, 3);

        assert_eq!(counts.nodes, 8_902);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.checks, 12);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut game = GameState::from_fen(KIWIPETE).unwrap();
        let divide = perft_divide(&mut game, 2);

        assert_eq!(divide.len(), 48);
        assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 2_039);
        assert!(divide.iter().any(|(mv, _)| mv == "e1g1"));
    }

    #[test]
    fn multi_threaded_matches_single_threaded() {
        let game = GameState::from_fen(POSITION_4).unwrap();
        let mut single = game.clone();

        let expected = perft_with_counts(&mut single, 3);
        let parallel = perft_multi_threaded(&game, 3, 4);

        assert_eq!(parallel, expected);
        assert_eq!(parallel.nodes, 9_467);
        assert_eq!(perft_multi_threaded(&game, 1, 8).nodes, 6);
    }
}
