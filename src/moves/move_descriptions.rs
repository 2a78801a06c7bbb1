//! Move values and their board-derived descriptions.
//!
//! A `ChessMove` is only the squares (plus a promotion choice). Everything else
//! a move does on the board is recovered from the position it is played in by
//! `describe_move`, the same way long algebraic input is interpreted.

use std::fmt;

use crate::chess_errors::RulesError;
use crate::game_state::chess_rules::{castle_route_for, CastleRoute};
use crate::game_state::{chess_types::*, game_state::GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(self, promotion: PieceKind) -> Self {
        Self {
            promotion: Some(promotion),
            ..self
        }
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.fen_letter())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialMove {
    Plain,
    DoublePawnPush,
    EnPassant,
    Castle(CastleRoute),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDescription {
    pub mv: ChessMove,
    pub moved: Piece,
    /// Captured piece and the square it is removed from (differs from `to` for en passant).
    pub captured: Option<(Square, PieceKind)>,
    pub special: SpecialMove,
}

/// Interpret `mv` against `game_state`. Does not check legality.
pub fn describe_move(game_state: &GameState, mv: ChessMove) -> Result<MoveDescription, RulesError> {
    let moved = game_state
        .piece_at(mv.from)
        .ok_or(RulesError::NoPieceOnSquare(mv.from))?;
    let enemy = moved.side.opposite();

    let mut captured = game_state
        .piece_at(mv.to)
        .filter(|piece| piece.side == enemy)
        .map(|piece| (mv.to, piece.kind));
    let mut special = SpecialMove::Plain;

    match moved.kind {
        PieceKind::Pawn if mv.from.index().abs_diff(mv.to.index()) == 16 => {
            special = SpecialMove::DoublePawnPush;
        }
        PieceKind::Pawn
            if game_state.en_passant_square == Some(mv.to)
                && mv.from.file() != mv.to.file()
                && game_state.piece_at(mv.to).is_none() =>
        {
            let behind = match moved.side {
                Side::White => mv.to.index().checked_sub(8),
                Side::Black => mv.to.index().checked_add(8),
            };
            let behind = behind.and_then(Square::new).ok_or_else(|| {
                RulesError::InvalidAlgebraic(format!("en-passant capture square behind {}", mv.to))
            })?;
            captured = Some((behind, PieceKind::Pawn));
            special = SpecialMove::EnPassant;
        }
        PieceKind::King if mv.from.file().abs_diff(mv.to.file()) == 2 => {
            if let Some(route) = castle_route_for(moved.side, mv.from, mv.to) {
                special = SpecialMove::Castle(*route);
            }
        }
        _ => {}
    }

    Ok(MoveDescription {
        mv,
        moved,
        captured,
        special,
    })
}
