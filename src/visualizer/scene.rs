//! Renderer-agnostic description of one frame.
//!
//! A `Scene` is plain data: the board squares, translucent overlays drawn on
//! top of them in order, pieces, and buttons. Renderers draw it as-is.

use crate::game_state::chess_types::{Piece, Side, Square};
use crate::visualizer::board_layout::{ButtonAction, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const LIGHT_SQUARE: Rgb = Rgb(255, 255, 255);
pub const DARK_SQUARE: Rgb = Rgb(190, 190, 190);
pub const WHITE_HEAT: Rgb = Rgb(255, 0, 0);
pub const BLACK_HEAT: Rgb = Rgb(0, 0, 255);
pub const SELECTION_HIGHLIGHT: Rgb = Rgb(0, 255, 0);
pub const TARGET_HIGHLIGHT: Rgb = Rgb(0, 255, 255);
pub const HIGHLIGHT_ALPHA: u8 = 100;
pub const HISTORY_BUTTON: Rgb = Rgb(50, 50, 50);
pub const TOGGLE_BUTTON: Rgb = Rgb(70, 70, 70);
pub const BUTTON_TEXT: Rgb = Rgb(255, 255, 255);

pub const UNDO_LABEL: &str = "Undo Move";
pub const REDO_LABEL: &str = "Redo Move";

#[inline]
pub fn heat_color(side: Side) -> Rgb {
    match side {
        Side::White => WHITE_HEAT,
        Side::Black => BLACK_HEAT,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSquare {
    pub square: Square,
    pub rect: Rect,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Heat { side: Side, count: u8 },
    Selection,
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    pub square: Square,
    pub rect: Rect,
    pub color: Rgb,
    pub alpha: u8,
    pub kind: OverlayKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiecePlacement {
    pub square: Square,
    pub rect: Rect,
    pub piece: Piece,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    pub action: ButtonAction,
    pub rect: Rect,
    pub label: String,
    pub color: Rgb,
    pub text_color: Rgb,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub squares: Vec<BoardSquare>,
    /// Drawn in order after the squares.
    pub overlays: Vec<Overlay>,
    pub pieces: Vec<PiecePlacement>,
    pub buttons: Vec<ButtonSpec>,
}

impl Scene {
    pub fn overlays_on(&self, square: Square) -> impl Iterator<Item = &Overlay> + '_ {
        self.overlays.iter().filter(move |overlay| overlay.square == square)
    }

    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.pieces
            .iter()
            .find(|placement| placement.square == square)
            .map(|placement| placement.piece)
    }

    pub fn button(&self, action: ButtonAction) -> Option<&ButtonSpec> {
        self.buttons.iter().find(|button| button.action == action)
    }

    pub fn heat_on(&self, square: Square, side: Side) -> Option<u8> {
        self.overlays_on(square).find_map(|overlay| match overlay.kind {
            OverlayKind::Heat { side: owner, count } if owner == side => Some(count),
            _ => None,
        })
    }
}
