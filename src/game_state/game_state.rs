//! Bitboard board position.
//!
//! `GameState` is the position the rules engine owns: piece bitboards,
//! occupancy caches, side to move, castling and en-passant state, and clocks.
//! It is a plain value; making a move produces a new `GameState`.

use crate::chess_errors::RulesError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // [side][piece_kind]
    pub pieces: [[u64; 6]; 2],

    pub occupancy_by_side: [u64; 2],
    pub occupancy_all: u64,

    pub side_to_move: Side,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_side: [0; 2],
            occupancy_all: 0,

            side_to_move: Side::White,
            castling_rights: 0,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        parse_fen(fen).map_err(RulesError::InvalidFen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn pieces_of(&self, side: Side, kind: PieceKind) -> u64 {
        self.pieces[side.index()][kind.index()]
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let mask = square.bit();
        if self.occupancy_all & mask == 0 {
            return None;
        }
        for side in Side::BOTH {
            for kind in PieceKind::ALL {
                if self.pieces[side.index()][kind.index()] & mask != 0 {
                    return Some(Piece::new(side, kind));
                }
            }
        }
        None
    }

    pub fn put_piece(&mut self, piece: Piece, square: Square) {
        self.pieces[piece.side.index()][piece.kind.index()] |= square.bit();
    }

    /// Remove whatever stands on `square`.
    pub fn clear_square(&mut self, square: Square) {
        let keep = !square.bit();
        for side_boards in self.pieces.iter_mut() {
            for board in side_boards.iter_mut() {
                *board &= keep;
            }
        }
    }

    pub fn king_square(&self, side: Side) -> Option<Square> {
        let kings = self.pieces_of(side, PieceKind::King);
        if kings == 0 {
            None
        } else {
            Some(Square::from_bit_index(kings.trailing_zeros() as u8))
        }
    }

    /// Rebuild occupancy caches after piece bitboards changed.
    pub fn recalc_occupancy(&mut self) {
        for side in Side::BOTH {
            self.occupancy_by_side[side.index()] = self.pieces[side.index()]
                .iter()
                .copied()
                .fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.occupancy_by_side[Side::White.index()]
            | self.occupancy_by_side[Side::Black.index()];
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::{Piece, PieceKind, Side, Square};

    #[test]
    fn start_position_queries() {
        let game = GameState::new_game();
        let e1 = Square::new(4).expect("valid square");
        let e4 = Square::new(28).expect("valid square");
        assert_eq!(game.piece_at(e1), Some(Piece::new(Side::White, PieceKind::King)));
        assert_eq!(game.piece_at(e4), None);
        assert_eq!(game.king_square(Side::Black), Square::new(60));
        assert_eq!(game.occupancy_all.count_ones(), 32);
    }

    #[test]
    fn clear_and_put_keep_caches_consistent_after_recalc() {
        let mut game = GameState::new_game();
        let e2 = Square::new(12).expect("valid square");
        let e4 = Square::new(28).expect("valid square");
        game.clear_square(e2);
        game.put_piece(Piece::new(Side::White, PieceKind::Pawn), e4);
        game.recalc_occupancy();
        assert_eq!(game.piece_at(e2), None);
        assert_eq!(game.piece_at(e4), Some(Piece::new(Side::White, PieceKind::Pawn)));
        assert_eq!(game.occupancy_all.count_ones(), 32);
    }

    #[test]
    fn invalid_fen_is_reported() {
        assert!(GameState::from_fen("not a fen").is_err());
    }
}
