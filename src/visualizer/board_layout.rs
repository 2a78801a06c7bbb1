//! Canvas geometry: board squares on top, two rows of buttons underneath.
//!
//! Coordinates are pixels with the origin at the top-left corner. Rank 8 is
//! drawn at the top, so `rank = 7 - y / square_size`.

use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Half-open containment: the right and bottom edges are outside.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    Undo,
    Redo,
    ToggleWhite,
    ToggleBlack,
}

impl ButtonAction {
    /// Draw order: top row left to right, then the bottom row.
    pub const ALL: [ButtonAction; 4] = [
        ButtonAction::Undo,
        ButtonAction::Redo,
        ButtonAction::ToggleWhite,
        ButtonAction::ToggleBlack,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub square_size: i32,
    pub button_height: i32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl BoardLayout {
    /// 80 px squares with 40 px button rows: a 640x720 canvas.
    pub const STANDARD: BoardLayout = BoardLayout {
        square_size: 80,
        button_height: 40,
    };

    #[inline]
    pub fn board_size(&self) -> i32 {
        self.square_size * 8
    }

    #[inline]
    pub fn canvas_width(&self) -> i32 {
        self.board_size()
    }

    #[inline]
    pub fn canvas_height(&self) -> i32 {
        self.board_size() + 2 * self.button_height
    }

    pub fn canvas(&self) -> Rect {
        Rect::new(0, 0, self.canvas_width(), self.canvas_height())
    }

    pub fn board(&self) -> Rect {
        Rect::new(0, 0, self.board_size(), self.board_size())
    }

    pub fn square_at(&self, x: i32, y: i32) -> Option<Square> {
        if !self.board().contains(x, y) {
            return None;
        }
        let file = x / self.square_size;
        let rank = 7 - y / self.square_size;
        Square::from_coords(file as u8, rank as u8)
    }

    pub fn square_rect(&self, square: Square) -> Rect {
        Rect::new(
            i32::from(square.file()) * self.square_size,
            i32::from(square.display_row()) * self.square_size,
            self.square_size,
            self.square_size,
        )
    }

    pub fn button_rect(&self, action: ButtonAction) -> Rect {
        let half = self.canvas_width() / 2;
        let top = self.board_size();
        let (column, row) = match action {
            ButtonAction::Undo => (0, 0),
            ButtonAction::Redo => (1, 0),
            ButtonAction::ToggleWhite => (0, 1),
            ButtonAction::ToggleBlack => (1, 1),
        };
        Rect::new(column * half, top + row * self.button_height, half, self.button_height)
    }

    pub fn button_at(&self, x: i32, y: i32) -> Option<ButtonAction> {
        ButtonAction::ALL
            .into_iter()
            .find(|&action| self.button_rect(action).contains(x, y))
    }
}
