use crate::chess_errors::RulesError;
use crate::game_state::chess_rules::castling_right_anchored_at;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{describe_move, ChessMove, SpecialMove};

/// Play `mv` on a copy of `game_state`. No legality check beyond there being a
/// piece to move; callers filter through the legal move set first.
pub fn apply_move(game_state: &GameState, mv: ChessMove) -> Result<GameState, RulesError> {
    let description = describe_move(game_state, mv)?;
    let moving_side = game_state.side_to_move;
    let mut next = game_state.clone();

    next.clear_square(mv.from);
    if let Some((captured_square, _)) = description.captured {
        next.clear_square(captured_square);
    }
    next.clear_square(mv.to);

    let placed = match mv.promotion {
        Some(kind) => Piece::new(description.moved.side, kind),
        None => description.moved,
    };
    next.put_piece(placed, mv.to);

    if let SpecialMove::Castle(route) = description.special {
        next.clear_square(route.rook_from);
        next.put_piece(Piece::new(route.side, PieceKind::Rook), route.rook_to);
    }

    // Moving off or capturing on a king/rook home square drops the matching rights.
    next.castling_rights &=
        !(castling_right_anchored_at(mv.from) | castling_right_anchored_at(mv.to));

    next.en_passant_square = match description.special {
        SpecialMove::DoublePawnPush => Square::new((mv.from.index() + mv.to.index()) / 2),
        _ => None,
    };

    if description.moved.kind == PieceKind::Pawn || description.captured.is_some() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if moving_side == Side::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.side_to_move = moving_side.opposite();
    next.recalc_occupancy();

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::apply_move;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    fn play(game: &GameState, lan: &str) -> GameState {
        let mv = long_algebraic_to_move(lan).expect("test move should parse");
        apply_move(game, mv).expect("test move should apply")
    }

    #[test]
    fn double_push_sets_en_passant_and_flips_side() {
        let next = play(&GameState::new_game(), "e2e4");
        assert_eq!(
            next.get_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }

    #[test]
    fn castling_moves_the_rook_and_clears_rights() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 10").expect("FEN should parse");
        let next = play(&game, "e1g1");
        assert_eq!(next.get_fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 4 10");

        let next = play(&next, "e8c8");
        assert_eq!(next.get_fen(), "2kr3r/8/8/8/8/8/8/R4RK1 w - - 5 11");
    }

    #[test]
    fn capturing_a_home_rook_removes_that_right() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let next = play(&game, "a1a8");
        assert_eq!(next.castling_rights, CASTLE_WHITE_KINGSIDE | CASTLE_BLACK_KINGSIDE);
        assert_eq!(next.halfmove_clock, 0);
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        let next = play(&game, "e5d6");
        assert_eq!(next.get_fen(), "4k3/8/3P4/8/8/8/8/4K3 b - - 0 1");
    }

    #[test]
    fn promotion_replaces_the_pawn() {
        let game = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let next = play(&game, "a7a8q");
        assert_eq!(
            next.piece_at(Square::new(56).expect("a8")),
            Some(Piece::new(Side::White, PieceKind::Queen))
        );
        assert_eq!(next.pieces_of(Side::White, PieceKind::Pawn), 0);
    }
}
