//! Undo/redo sequencing over the rules engine.
//!
//! `MoveHistory` owns the engine and is the only thing that mutates it. It
//! keeps two stacks: `applied` mirrors the engine's own move stack, and
//! `undone` holds taken-back moves available for redo. A fresh move that is not
//! a redo empties `undone`.

use crate::chess_errors::VisualizerError;
use crate::moves::move_descriptions::ChessMove;
use crate::rules_engine::rules_engine_trait::RulesEngine;

#[derive(Debug, Clone)]
pub struct MoveHistory<R> {
    engine: R,
    applied: Vec<ChessMove>,
    undone: Vec<ChessMove>,
}

impl<R: RulesEngine> MoveHistory<R> {
    pub fn new(engine: R) -> Self {
        Self {
            engine,
            applied: Vec::new(),
            undone: Vec::new(),
        }
    }

    #[inline]
    pub fn engine(&self) -> &R {
        &self.engine
    }

    #[inline]
    pub fn applied(&self) -> &[ChessMove] {
        &self.applied
    }

    #[inline]
    pub fn undone(&self) -> &[ChessMove] {
        &self.undone
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.applied.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    pub fn apply_move(&mut self, mv: ChessMove) -> Result<(), VisualizerError> {
        if !self.engine.apply_move(mv) {
            return Err(VisualizerError::IllegalMove(mv));
        }
        self.applied.push(mv);
        self.undone.clear();
        Ok(())
    }

    pub fn undo(&mut self) -> Result<ChessMove, VisualizerError> {
        let mv = self.applied.pop().ok_or(VisualizerError::EmptyHistory)?;
        match self.engine.revert_last_move() {
            Some(reverted) if reverted == mv => {
                self.undone.push(mv);
                Ok(mv)
            }
            stray => {
                // Re-play whatever the engine took back so the board matches `applied` again.
                if let Some(other) = stray {
                    self.engine.apply_move(other);
                }
                self.applied.push(mv);
                Err(VisualizerError::EngineOutOfSync(mv))
            }
        }
    }

    pub fn redo(&mut self) -> Result<ChessMove, VisualizerError> {
        let mv = self.undone.pop().ok_or(VisualizerError::EmptyHistory)?;
        if !self.engine.apply_move(mv) {
            self.undone.push(mv);
            return Err(VisualizerError::IllegalMove(mv));
        }
        self.applied.push(mv);
        Ok(mv)
    }
}
