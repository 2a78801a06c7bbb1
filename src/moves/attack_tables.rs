//! Attack bitboards for every piece kind.
//!
//! Leapers (knight, king, pawn) use tables built at compile time. Sliders trace
//! rays against the current occupancy; the first occupied square on a ray is
//! included and ends the ray.

use crate::game_state::chess_types::{Piece, PieceKind, Side, Square};

const KNIGHT_STEPS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_STEPS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const WHITE_PAWN_STEPS: [(i32, i32); 2] = [(-1, 1), (1, 1)];
const BLACK_PAWN_STEPS: [(i32, i32); 2] = [(-1, -1), (1, -1)];

const DIAGONALS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
const ORTHOGONALS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub const KNIGHT_ATTACKS: [u64; 64] = leaper_table(&KNIGHT_STEPS);
pub const KING_ATTACKS: [u64; 64] = leaper_table(&KING_STEPS);
/// Indexed `[side][square]`.
pub const PAWN_ATTACKS: [[u64; 64]; 2] = [
    leaper_table(&WHITE_PAWN_STEPS),
    leaper_table(&BLACK_PAWN_STEPS),
];

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square.index() as usize]
}

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square.index() as usize]
}

#[inline]
pub const fn pawn_attacks(side: Side, square: Square) -> u64 {
    PAWN_ATTACKS[side.index()][square.index() as usize]
}

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    slide(square, &DIAGONALS, occupancy)
}

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    slide(square, &ORTHOGONALS, occupancy)
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: u64) -> u64 {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

/// Squares `piece` standing on `square` attacks under `occupancy`.
pub fn piece_attacks(piece: Piece, square: Square, occupancy: u64) -> u64 {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.side, square),
        PieceKind::Knight => knight_attacks(square),
        PieceKind::Bishop => bishop_attacks(square, occupancy),
        PieceKind::Rook => rook_attacks(square, occupancy),
        PieceKind::Queen => queen_attacks(square, occupancy),
        PieceKind::King => king_attacks(square),
    }
}

fn slide(square: Square, directions: &[(i32, i32)], occupancy: u64) -> u64 {
    let mut attacks = 0u64;

    for &(file_step, rank_step) in directions {
        let mut file = square.file() as i32 + file_step;
        let mut rank = square.rank() as i32 + rank_step;

        while (0..8).contains(&file) && (0..8).contains(&rank) {
            let bit = 1u64 << (rank * 8 + file);
            attacks |= bit;
            if occupancy & bit != 0 {
                break;
            }
            file += file_step;
            rank += rank_step;
        }
    }

    attacks
}

const fn leaper_table(steps: &[(i32, i32)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;
        let mut i = 0usize;

        while i < steps.len() {
            let (file_step, rank_step) = steps[i];
            let to_file = file + file_step;
            let to_rank = rank + rank_step;
            if to_file >= 0 && to_file < 8 && to_rank >= 0 && to_rank < 8 {
                attacks |= 1u64 << (to_rank * 8 + to_file);
            }
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(index: u8) -> Square {
        Square::new(index).expect("test square index is on the board")
    }

    #[test]
    fn leaper_counts_from_corner_and_centre() {
        assert_eq!(king_attacks(sq(0)).count_ones(), 3);
        assert_eq!(king_attacks(sq(27)).count_ones(), 8);
        assert_eq!(knight_attacks(sq(27)).count_ones(), 8);
        assert_eq!(knight_attacks(sq(0)).count_ones(), 2);
    }

    #[test]
    fn pawn_attacks_point_forward_for_each_side() {
        let e2 = sq(12);
        assert_eq!(pawn_attacks(Side::White, e2), (1u64 << 19) | (1u64 << 21));
        let e7 = sq(52);
        assert_eq!(pawn_attacks(Side::Black, e7), (1u64 << 43) | (1u64 << 45));
        // a-file pawn only attacks towards b.
        assert_eq!(pawn_attacks(Side::White, sq(8)), 1u64 << 17);
        // Last rank has nothing in front of it.
        assert_eq!(pawn_attacks(Side::White, sq(60)), 0);
    }

    #[test]
    fn open_board_slider_counts_from_d4() {
        assert_eq!(bishop_attacks(sq(27), 0).count_ones(), 13);
        assert_eq!(rook_attacks(sq(27), 0).count_ones(), 14);
        assert_eq!(queen_attacks(sq(27), 0).count_ones(), 27);
    }

    #[test]
    fn blocker_is_attacked_and_stops_the_ray() {
        let blocker_on_a4 = 1u64 << 24;
        let attacks = rook_attacks(sq(0), blocker_on_a4);
        assert_ne!(attacks & (1u64 << 24), 0);
        assert_eq!(attacks & (1u64 << 32), 0);

        let blocker_on_e3 = 1u64 << 20;
        let attacks = bishop_attacks(sq(2), blocker_on_e3);
        assert_ne!(attacks & (1u64 << 20), 0);
        assert_eq!(attacks & (1u64 << 29), 0);
    }
}
