//! Square conversions between board coordinates (`e4`) and indices.

use crate::errors::NotationError;
use crate::game_state::chess_types::{file_of, rank_of, Square};

/// Convert a coordinate such as `"e4"` to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, NotationError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(NotationError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(NotationError::InvalidSquare(square.to_owned()));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert a square index (`0..=63`) to a coordinate such as `"e4"`.
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, NotationError> {
    if square > 63 {
        return Err(NotationError::SquareOutOfBounds(square));
    }

    let file_char = char::from(b'a' + file_of(square));
    let rank_char = char::from(b'1' + rank_of(square));
    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_squares_convert_both_ways() {
        assert_eq!(algebraic_to_square("a1"), Ok(0));
        assert_eq!(algebraic_to_square("h8"), Ok(63));
        assert_eq!(algebraic_to_square("e4"), Ok(28));
        assert_eq!(square_to_algebraic(0).as_deref(), Ok("a1"));
        assert_eq!(square_to_algebraic(63).as_deref(), Ok("h8"));
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("e").is_err());
        assert_eq!(square_to_algebraic(64), Err(NotationError::SquareOutOfBounds(64)));
    }
}
