//! Engine-side undo record.

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

/// Single undo record kept by the rules engine for `revert_last_move`.
#[derive(Debug, Clone)]
pub struct UndoState {
    pub mv: ChessMove,
    pub before: GameState,
}
