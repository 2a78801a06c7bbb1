//! Long algebraic move text (`e2e4`, `a7a8q`) to `ChessMove`.
//!
//! Formatting goes through `ChessMove`'s `Display`. Parsing is purely
//! syntactic; whether the move is legal is the rules engine's call.

use crate::chess_errors::RulesError;
use crate::game_state::chess_types::PieceKind;
use crate::moves::move_descriptions::ChessMove;
use crate::utils::algebraic::algebraic_to_square;

pub fn long_algebraic_to_move(long_algebraic: &str) -> Result<ChessMove, RulesError> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(RulesError::InvalidAlgebraic(format!(
            "long algebraic move must be 4 or 5 characters: {long_algebraic}"
        )));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let mv = ChessMove::new(from, to);

    match text[4..].chars().next() {
        None => Ok(mv),
        Some(ch) => {
            let promotion = char_to_promotion(ch)?;
            Ok(mv.with_promotion(promotion))
        }
    }
}

fn char_to_promotion(ch: char) -> Result<PieceKind, RulesError> {
    match PieceKind::from_fen_letter(ch) {
        Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => Ok(kind),
        _ => Err(RulesError::InvalidAlgebraic(format!(
            "invalid promotion piece character: {ch}"
        ))),
    }
}
