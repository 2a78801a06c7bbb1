//! Error types for the rules engine and the visualizer state machine.
//!
//! `RulesError` covers malformed input handed to the rules engine (FEN,
//! coordinates, move notation). `VisualizerError` is the recoverable
//! interaction taxonomy: every variant leaves the application running and is
//! resolved within the event that produced it.

use thiserror::Error;

use crate::game_state::chess_types::Square;
use crate::moves::move_descriptions::ChessMove;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),
    #[error("no piece on from-square {0}")]
    NoPieceOnSquare(Square),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualizerError {
    /// Candidate move is not in the engine's legal set; nothing changed.
    #[error("illegal move {0}")]
    IllegalMove(ChessMove),
    /// Undo with nothing applied, or redo with nothing undone.
    #[error("move history is empty")]
    EmptyHistory,
    /// Selection attempted on an empty square; prior selection kept.
    #[error("no piece to select on {0}")]
    EmptySelectionTarget(Square),
    /// The engine's revert did not take back the move the history expected;
    /// both stacks are left as they were.
    #[error("rules engine did not revert {0}")]
    EngineOutOfSync(ChessMove),
}
