use crate::game_state::chess_rules::CASTLE_ROUTES;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::attack_tables::king_attacks;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_king_moves(game_state: &GameState, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move;
    let own_occ = game_state.occupancy_by_side[side.index()];
    let Some(from) = game_state.king_square(side) else {
        return;
    };

    for to in SquareSet::from_bits(king_attacks(from) & !own_occ) {
        out.push(ChessMove::new(from, to));
    }

    generate_castling_moves(game_state, out, from);
}

fn generate_castling_moves(game_state: &GameState, out: &mut Vec<ChessMove>, king_from: Square) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let own_rooks = game_state.pieces_of(side, PieceKind::Rook);

    // Cannot castle out of check.
    if is_square_attacked(game_state, king_from, enemy) {
        return;
    }

    for route in CASTLE_ROUTES.iter().filter(|route| route.side == side) {
        let available = game_state.castling_rights & route.right != 0
            && route.king_from == king_from
            && own_rooks & route.rook_from.bit() != 0
            && game_state.occupancy_all & route.between == 0
            && route
                .king_path
                .iter()
                .all(|&square| !is_square_attacked(game_state, square, enemy));

        if available {
            out.push(ChessMove::new(route.king_from, route.king_to));
        }
    }
}
