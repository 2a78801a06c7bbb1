//! FEN-to-GameState parser.
//!
//! Builds a fully populated position from a Forsyth-Edwards Notation string:
//! piece bitboards, side to move, castling rights, en-passant square, clocks,
//! and occupancy caches. Only the syntax is checked; a position with, say, no
//! kings parses fine and is left to the rules engine.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant square in FEN")?;
    // Clocks are commonly dropped from hand-written FEN; default them.
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid halfmove clock: {halfmove_part}"))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid fullmove number: {fullmove_part}"))?;

    game_state.recalc_occupancy();

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err("Board rank has too many files".to_owned());
                }
                continue;
            }

            let piece = Piece::from_symbol(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;
            let square = Square::from_coords(file, board_rank)
                .ok_or("Board rank has too many files")?;

            game_state.put_piece(piece, square);
            file += 1;
        }

        if file != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Side, String> {
    match side_part {
        "w" => Ok(Side::White),
        "b" => Ok(Side::Black),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, String> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => return Err(format!("Invalid castling rights character: {ch}")),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, String> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Side, Square, CASTLE_BLACK_KINGSIDE};

    #[test]
    fn parse_starting_fen() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game_state.side_to_move, Side::White);
        assert_eq!(game_state.fullmove_number, 1);
        assert_eq!(game_state.halfmove_clock, 0);
        assert_eq!(game_state.castling_rights.count_ones(), 4);
        assert_eq!(game_state.occupancy_by_side[Side::White.index()].count_ones(), 16);
        assert_eq!(game_state.occupancy_by_side[Side::Black.index()].count_ones(), 16);
    }

    #[test]
    fn clocks_may_be_omitted() {
        let game_state = parse_fen("7k/8/8/8/8/8/8/K7 b k e3").expect("short FEN should parse");
        assert_eq!(game_state.side_to_move, Side::Black);
        assert_eq!(game_state.castling_rights, CASTLE_BLACK_KINGSIDE);
        assert_eq!(game_state.en_passant_square, Square::new(20));
        assert_eq!(game_state.fullmove_number, 1);
    }

    #[test]
    fn malformed_layouts_are_rejected() {
        for bad in [
            "",
            "8/8/8/8/8/8/8 w - - 0 1",
            "9/8/8/8/8/8/8/8 w - - 0 1",
            "8/8/8/8/8/8/8/7 w - - 0 1",
            "8/8/8/8/8/8/8/ppppppppp w - - 0 1",
            "8/8/8/8/8/8/8/x7 w - - 0 1",
            "8/8/8/8/8/8/8/8 x - - 0 1",
            "8/8/8/8/8/8/8/8 w Z - 0 1",
            "8/8/8/8/8/8/8/8 w - z9 0 1",
            "8/8/8/8/8/8/8/8 w - - zero 1",
            "8/8/8/8/8/8/8/8 w - - 0 1 extra",
        ] {
            assert!(parse_fen(bad).is_err(), "{bad:?} should not parse");
        }
    }
}
