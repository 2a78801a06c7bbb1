//! Full legal move generation pipeline.
//!
//! Collects pseudo-legal moves for every piece type, plays each on a copy of
//! the position, and keeps those that do not leave the mover's own king in
//! check.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_pieces::generate_piece_moves;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let mut pseudo = Vec::<ChessMove>::with_capacity(64);

    generate_pawn_moves(game_state, &mut pseudo);
    generate_piece_moves(game_state, &mut pseudo);
    generate_king_moves(game_state, &mut pseudo);

    pseudo
}

/// Legal moves paired with the position each one leads to.
pub fn generate_legal_successors(game_state: &GameState) -> Vec<(ChessMove, GameState)> {
    let mover = game_state.side_to_move;

    generate_pseudo_legal_moves(game_state)
        .into_iter()
        .filter_map(|mv| {
            // Generated moves always start on an occupied square.
            let next = apply_move(game_state, mv).ok()?;
            (!is_king_in_check(&next, mover)).then_some((mv, next))
        })
        .collect()
}

pub fn generate_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    generate_legal_successors(game_state)
        .into_iter()
        .map(|(mv, _)| mv)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{generate_legal_moves, generate_legal_successors};
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::game_state::GameState;

    fn perft(game_state: &GameState, depth: u8) -> u64 {
        if depth == 0 {
            return 1;
        }
        let successors = generate_legal_successors(game_state);
        if depth == 1 {
            return successors.len() as u64;
        }
        successors
            .iter()
            .map(|(_, next)| perft(next, depth - 1))
            .sum()
    }

    struct PerftCase {
        name: &'static str,
        fen: &'static str,
        expected_nodes: &'static [u64],
    }

    const CASES: &[PerftCase] = &[
        PerftCase {
            name: "startpos",
            fen: STARTING_POSITION_FEN,
            expected_nodes: &[20, 400, 8902],
        },
        PerftCase {
            name: "kiwipete",
            fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            expected_nodes: &[48, 2039],
        },
        PerftCase {
            name: "en_passant_pins",
            fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            expected_nodes: &[14, 191, 2812],
        },
        PerftCase {
            name: "promotions",
            fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
            expected_nodes: &[6, 264],
        },
    ];

    #[test]
    fn perft_node_counts_match_reference_positions() {
        for case in CASES {
            let game = GameState::from_fen(case.fen).expect("perft FEN should parse");
            for (depth, expected) in case.expected_nodes.iter().enumerate() {
                let depth = depth as u8 + 1;
                assert_eq!(
                    perft(&game, depth),
                    *expected,
                    "{} perft({depth}) mismatch",
                    case.name
                );
            }
        }
    }

    #[test]
    fn checkmated_side_has_no_moves() {
        // Fool's mate.
        let game = GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .expect("FEN should parse");
        assert!(generate_legal_moves(&game).is_empty());
    }

    #[test]
    fn castling_through_an_attacked_square_is_not_generated() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/5r2/R3K2R w KQ - 0 1").expect("FEN should parse");
        let lans: Vec<String> = generate_legal_moves(&game)
            .iter()
            .map(|mv| mv.to_string())
            .collect();
        // The f2 rook checks nothing but covers f1, so only the long castle stays.
        assert!(!lans.contains(&"e1g1".to_owned()));
        assert!(lans.contains(&"e1c1".to_owned()));
    }
}
