//! Selected square and the legal moves leaving it.
//!
//! Selection is permissive: any occupied square can be picked (whoever's turn
//! it is) and picking another occupied square simply replaces it. Highlights
//! come from the engine's legal move list; actual legality is decided when the
//! move is applied.

use crate::chess_errors::VisualizerError;
use crate::game_state::chess_types::{PieceKind, Square, SquareSet};
use crate::moves::move_descriptions::ChessMove;
use crate::rules_engine::rules_engine_trait::RulesEngine;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionGate {
    selected: Option<Square>,
}

impl SelectionGate {
    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Select `square` if a piece stands on it; otherwise keep the current
    /// selection and report `EmptySelectionTarget`.
    pub fn select_square<R: RulesEngine + ?Sized>(
        &mut self,
        engine: &R,
        square: Square,
    ) -> Result<Square, VisualizerError> {
        if engine.piece_at(square).is_none() {
            return Err(VisualizerError::EmptySelectionTarget(square));
        }
        self.selected = Some(square);
        Ok(square)
    }

    #[inline]
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Destinations of legal moves starting on `square`.
    pub fn legal_targets_from<R: RulesEngine + ?Sized>(&self, engine: &R, square: Square) -> SquareSet {
        engine
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.from == square)
            .map(|mv| mv.to)
            .collect()
    }

    /// Move for a pointer release on `target`, or `None` with nothing selected.
    ///
    /// Dragging a pawn to its last rank promotes to a queen.
    pub fn candidate_move<R: RulesEngine + ?Sized>(&self, engine: &R, target: Square) -> Option<ChessMove> {
        let from = self.selected?;
        let bare = ChessMove::new(from, target);

        let matching: Vec<ChessMove> = engine
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.from == from && mv.to == target)
            .collect();

        let chosen = matching
            .iter()
            .find(|mv| mv.promotion.is_none())
            .or_else(|| matching.iter().find(|mv| mv.promotion == Some(PieceKind::Queen)))
            .copied()
            .unwrap_or(bare);

        Some(chosen)
    }
}
