//! Bitboard rules engine backing the visualizer.
//!
//! Wraps a `GameState` with an undo stack. Moves are copy-made, so reverting
//! is restoring the stored prior position.

use crate::chess_errors::RulesError;
use crate::game_state::chess_types::{Piece, Side, Square, SquareSet};
use crate::game_state::game_state::GameState;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_checks::attackers_to_square;
use crate::move_generation::legal_move_generator::{generate_legal_moves, generate_legal_successors};
use crate::moves::move_descriptions::ChessMove;
use crate::rules_engine::rules_engine_trait::RulesEngine;

#[derive(Debug, Clone)]
pub struct BoardRulesEngine {
    position: GameState,
    undo_stack: Vec<UndoState>,
}

impl Default for BoardRulesEngine {
    fn default() -> Self {
        Self::new(GameState::new_game())
    }
}

impl BoardRulesEngine {
    pub fn new(position: GameState) -> Self {
        Self {
            position,
            undo_stack: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        GameState::from_fen(fen).map(Self::new)
    }

    #[inline]
    pub fn position(&self) -> &GameState {
        &self.position
    }

    /// Number of moves that can still be reverted.
    #[inline]
    pub fn ply_count(&self) -> usize {
        self.undo_stack.len()
    }
}

impl RulesEngine for BoardRulesEngine {
    fn attackers_of(&self, side: Side, square: Square) -> SquareSet {
        attackers_to_square(&self.position, square, side)
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.piece_at(square)
    }

    fn legal_moves(&self) -> Vec<ChessMove> {
        generate_legal_moves(&self.position)
    }

    fn apply_move(&mut self, mv: ChessMove) -> bool {
        let Some((_, next)) = generate_legal_successors(&self.position)
            .into_iter()
            .find(|(legal, _)| *legal == mv)
        else {
            return false;
        };

        let before = std::mem::replace(&mut self.position, next);
        self.undo_stack.push(UndoState { mv, before });
        true
    }

    fn revert_last_move(&mut self) -> Option<ChessMove> {
        let undo = self.undo_stack.pop()?;
        self.position = undo.before;
        Some(undo.mv)
    }

    fn side_to_move(&self) -> Side {
        self.position.side_to_move
    }

    fn to_fen(&self) -> String {
        self.position.get_fen()
    }
}
