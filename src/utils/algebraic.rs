//! Algebraic square names (`e4`) to and from `Square`.

use std::str::FromStr;

use crate::chess_errors::RulesError;
use crate::game_state::chess_types::Square;

impl FromStr for Square {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> Result<Square, RulesError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(RulesError::InvalidAlgebraic(format!(
            "square must be two characters: {square}"
        )));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(RulesError::InvalidAlgebraic(format!(
            "file out of range: {}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(RulesError::InvalidAlgebraic(format!(
            "rank out of range: {}",
            rank as char
        )));
    }

    Square::from_coords(file - b'a', rank - b'1')
        .ok_or_else(|| RulesError::InvalidAlgebraic(square.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::algebraic_to_square;
    use crate::game_state::chess_types::Square;

    #[test]
    fn corners_and_centre_parse() {
        assert_eq!(algebraic_to_square("a1").map(Square::index), Ok(0));
        assert_eq!(algebraic_to_square("h8").map(Square::index), Ok(63));
        assert_eq!("e4".parse::<Square>().map(Square::index), Ok(28));
        assert_eq!("E2".parse::<Square>().map(Square::index), Ok(12));
    }

    #[test]
    fn malformed_names_are_rejected() {
        for bad in ["", "e", "e44", "i1", "a0", "a9", "11"] {
            assert!(algebraic_to_square(bad).is_err(), "{bad} should not parse");
        }
    }
}
