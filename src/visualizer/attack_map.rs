//! Per-square attacker counts for one side, laid out in screen order.
//!
//! Row 0 is rank 8 (the top of the board as drawn), so cell `(row, file)`
//! holds the count for the square at rank `7 - row`. Maps are recomputed from
//! scratch every frame with a full 64-square scan.

use crate::game_state::chess_types::{Side, Square};
use crate::rules_engine::rules_engine_trait::RulesEngine;

/// Alpha added to a heat overlay per attacker.
pub const HEAT_STEP: u16 = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttackMap {
    cells: [[u8; 8]; 8],
}

impl AttackMap {
    #[inline]
    pub fn count(&self, row: usize, file: usize) -> u8 {
        self.cells[row][file]
    }

    #[inline]
    pub fn count_on(&self, square: Square) -> u8 {
        self.cells[square.display_row() as usize][square.file() as usize]
    }

    pub fn total(&self) -> u32 {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .map(|&count| u32::from(count))
            .sum()
    }
}

/// Overlay alpha for `count` attackers: `min(count * 50, 255)`.
#[inline]
pub fn heat_intensity(count: u8) -> u8 {
    (u16::from(count) * HEAT_STEP).min(255) as u8
}

/// Count `side`'s attackers on every square of the engine's current position.
pub fn compute_attack_map<R: RulesEngine + ?Sized>(engine: &R, side: Side) -> AttackMap {
    let mut map = AttackMap::default();

    for square in Square::all() {
        let attackers = engine.attackers_of(side, square).len();
        map.cells[square.display_row() as usize][square.file() as usize] =
            u8::try_from(attackers).unwrap_or(u8::MAX);
    }

    map
}
