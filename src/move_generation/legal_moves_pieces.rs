//! Knight, bishop, rook and queen moves.
//!
//! These pieces move exactly where they attack, minus squares held by their
//! own side, so one routine covers all four.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::attack_tables::piece_attacks;
use crate::moves::move_descriptions::ChessMove;

const PLAIN_MOVERS: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

pub fn generate_piece_moves(game_state: &GameState, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move;
    let own_occ = game_state.occupancy_by_side[side.index()];

    for kind in PLAIN_MOVERS {
        let piece = Piece::new(side, kind);
        for from in SquareSet::from_bits(game_state.pieces_of(side, kind)) {
            let targets = piece_attacks(piece, from, game_state.occupancy_all) & !own_occ;
            for to in SquareSet::from_bits(targets) {
                out.push(ChessMove::new(from, to));
            }
        }
    }
}
