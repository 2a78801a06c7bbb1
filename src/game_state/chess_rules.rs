//! Canonical chess-rule constants.
//!
//! Holds the standard starting position and the fixed castling geometry shared
//! by king move generation and move application.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// King and rook travel for one castling option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleRoute {
    pub side: Side,
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares between king and rook that must be empty.
    pub between: u64,
    /// Squares the king crosses or lands on; none may be attacked.
    pub king_path: [Square; 2],
}

pub static CASTLE_ROUTES: [CastleRoute; 4] = [
    CastleRoute {
        side: Side::White,
        right: CASTLE_WHITE_KINGSIDE,
        king_from: Square::from_bit_index(4),
        king_to: Square::from_bit_index(6),
        rook_from: Square::from_bit_index(7),
        rook_to: Square::from_bit_index(5),
        between: (1 << 5) | (1 << 6),
        king_path: [Square::from_bit_index(5), Square::from_bit_index(6)],
    },
    CastleRoute {
        side: Side::White,
        right: CASTLE_WHITE_QUEENSIDE,
        king_from: Square::from_bit_index(4),
        king_to: Square::from_bit_index(2),
        rook_from: Square::from_bit_index(0),
        rook_to: Square::from_bit_index(3),
        between: (1 << 1) | (1 << 2) | (1 << 3),
        king_path: [Square::from_bit_index(3), Square::from_bit_index(2)],
    },
    CastleRoute {
        side: Side::Black,
        right: CASTLE_BLACK_KINGSIDE,
        king_from: Square::from_bit_index(60),
        king_to: Square::from_bit_index(62),
        rook_from: Square::from_bit_index(63),
        rook_to: Square::from_bit_index(61),
        between: (1 << 61) | (1 << 62),
        king_path: [Square::from_bit_index(61), Square::from_bit_index(62)],
    },
    CastleRoute {
        side: Side::Black,
        right: CASTLE_BLACK_QUEENSIDE,
        king_from: Square::from_bit_index(60),
        king_to: Square::from_bit_index(58),
        rook_from: Square::from_bit_index(56),
        rook_to: Square::from_bit_index(59),
        between: (1 << 57) | (1 << 58) | (1 << 59),
        king_path: [Square::from_bit_index(59), Square::from_bit_index(58)],
    },
];

/// Castling right lost when a piece leaves or is captured on `square`.
pub fn castling_right_anchored_at(square: Square) -> CastlingRights {
    match square.index() {
        0 => CASTLE_WHITE_QUEENSIDE,
        4 => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
        7 => CASTLE_WHITE_KINGSIDE,
        56 => CASTLE_BLACK_QUEENSIDE,
        60 => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
        63 => CASTLE_BLACK_KINGSIDE,
        _ => 0,
    }
}

/// Route matching a king move, if it is a castling move.
pub fn castle_route_for(side: Side, from: Square, to: Square) -> Option<&'static CastleRoute> {
    CASTLE_ROUTES
        .iter()
        .find(|route| route.side == side && route.king_from == from && route.king_to == to)
}
