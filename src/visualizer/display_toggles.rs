//! Which attack heatmap layers are drawn.

use crate::game_state::chess_types::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayToggles {
    show_white_attacks: bool,
    show_black_attacks: bool,
}

impl Default for DisplayToggles {
    fn default() -> Self {
        Self {
            show_white_attacks: true,
            show_black_attacks: true,
        }
    }
}

impl DisplayToggles {
    /// Flip the white layer, returning its new state.
    pub fn toggle_white(&mut self) -> bool {
        self.show_white_attacks = !self.show_white_attacks;
        self.show_white_attacks
    }

    /// Flip the black layer, returning its new state.
    pub fn toggle_black(&mut self) -> bool {
        self.show_black_attacks = !self.show_black_attacks;
        self.show_black_attacks
    }

    #[inline]
    pub fn show_white_attacks(&self) -> bool {
        self.show_white_attacks
    }

    #[inline]
    pub fn show_black_attacks(&self) -> bool {
        self.show_black_attacks
    }

    #[inline]
    pub fn shows(&self, side: Side) -> bool {
        match side {
            Side::White => self.show_white_attacks,
            Side::Black => self.show_black_attacks,
        }
    }

    /// Button caption, e.g. `"White Attacks: Y"`.
    pub fn label_for(&self, side: Side) -> String {
        let name = match side {
            Side::White => "White",
            Side::Black => "Black",
        };
        let flag = if self.shows(side) { 'Y' } else { 'N' };
        format!("{name} Attacks: {flag}")
    }
}
