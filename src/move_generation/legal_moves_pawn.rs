use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::attack_tables::pawn_attacks;
use crate::moves::move_descriptions::ChessMove;

/// Pseudo-legal pawn pushes, double pushes, captures, en passant and promotions.
pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move;
    let enemy_occ = game_state.occupancy_by_side[side.opposite().index()];
    let empty = !game_state.occupancy_all;

    let (forward, start_rank, promotion_rank): (i16, u8, u8) = match side {
        Side::White => (8, 1, 7),
        Side::Black => (-8, 6, 0),
    };

    let pawns = SquareSet::from_bits(game_state.pieces_of(side, PieceKind::Pawn));
    for from in pawns {
        if let Some(one_step) = step(from, forward).filter(|to| empty & to.bit() != 0) {
            push_with_promotions(out, from, one_step, promotion_rank);

            if from.rank() == start_rank {
                if let Some(two_step) = step(one_step, forward).filter(|to| empty & to.bit() != 0) {
                    out.push(ChessMove::new(from, two_step));
                }
            }
        }

        for to in SquareSet::from_bits(pawn_attacks(side, from)) {
            if enemy_occ & to.bit() != 0 {
                push_with_promotions(out, from, to, promotion_rank);
            } else if game_state.en_passant_square == Some(to) {
                out.push(ChessMove::new(from, to));
            }
        }
    }
}

fn push_with_promotions(out: &mut Vec<ChessMove>, from: Square, to: Square, promotion_rank: u8) {
    if to.rank() == promotion_rank {
        for promotion in PieceKind::PROMOTIONS {
            out.push(ChessMove::new(from, to).with_promotion(promotion));
        }
    } else {
        out.push(ChessMove::new(from, to));
    }
}

fn step(square: Square, delta: i16) -> Option<Square> {
    let index = square.index() as i16 + delta;
    if (0..64).contains(&index) {
        Square::new(index as u8)
    } else {
        None
    }
}
