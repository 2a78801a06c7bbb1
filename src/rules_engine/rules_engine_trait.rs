//! Capability interface the visualizer consumes the rules engine through.
//!
//! The visualizer never inspects board internals; it asks these questions and
//! submits moves. Any engine answering them can drive the viewer.

use crate::game_state::chess_types::{Piece, Side, Square, SquareSet};
use crate::moves::move_descriptions::ChessMove;

pub trait RulesEngine {
    /// Pieces of `side` attacking `square` in the current position.
    fn attackers_of(&self, side: Side, square: Square) -> SquareSet;

    fn piece_at(&self, square: Square) -> Option<Piece>;

    /// Legal moves for the side to move.
    fn legal_moves(&self) -> Vec<ChessMove>;

    /// Play `mv` if it is legal. Returns whether it was accepted; a rejected
    /// move leaves the position untouched.
    fn apply_move(&mut self, mv: ChessMove) -> bool;

    /// Take back the most recently applied move, returning it.
    fn revert_last_move(&mut self) -> Option<ChessMove>;

    fn side_to_move(&self) -> Side;

    fn to_fen(&self) -> String;
}
