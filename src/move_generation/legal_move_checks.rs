//! Square attack queries.
//!
//! Attacks are looked up in reverse: a side attacks `square` from wherever its
//! pieces sit on the squares a same-kind piece on `square` would reach. Pawns
//! use the opposite side's pattern for that reason.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::attack_tables::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};

/// Every piece of `attacker_side` that attacks `square`, regardless of what
/// stands on it and ignoring pins.
pub fn attackers_to_square(game_state: &GameState, square: Square, attacker_side: Side) -> SquareSet {
    let occupancy = game_state.occupancy_all;
    let pieces = |kind: PieceKind| game_state.pieces_of(attacker_side, kind);

    let diagonal = pieces(PieceKind::Bishop) | pieces(PieceKind::Queen);
    let straight = pieces(PieceKind::Rook) | pieces(PieceKind::Queen);

    let attackers = (pawn_attacks(attacker_side.opposite(), square) & pieces(PieceKind::Pawn))
        | (knight_attacks(square) & pieces(PieceKind::Knight))
        | (king_attacks(square) & pieces(PieceKind::King))
        | (bishop_attacks(square, occupancy) & diagonal)
        | (rook_attacks(square, occupancy) & straight);

    SquareSet::from_bits(attackers)
}

#[inline]
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_side: Side) -> bool {
    !attackers_to_square(game_state, square, attacker_side).is_empty()
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, side: Side) -> bool {
    let Some(king_sq) = game_state.king_square(side) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, side.opposite())
}
