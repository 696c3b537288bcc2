//! Coordinate move text (`e2e4`, `e7e8q`) to and from packed moves.

use crate::errors::{MoveRejected, NotationError};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::{move_from, move_promotion_kind, move_to};
use crate::utils::algebraic::algebraic_to_square;

/// Source, target and optional promotion piece of a coordinate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

pub fn parse_coordinate_move(text: &str) -> Result<CoordinateMove, NotationError> {
    let text = text.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(NotationError::InvalidMoveText(text.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        Some(ch) => Some(char_to_promotion(ch)?),
        None => None,
    };

    Ok(CoordinateMove { from, to, promotion })
}

/// Resolve `text` against the legal moves of `position`.
pub fn long_algebraic_to_move(position: &Position, text: &str) -> Result<Move, MoveRejected> {
    let wanted = parse_coordinate_move(text).map_err(|source| MoveRejected::Unparseable {
        text: text.to_owned(),
        source,
    })?;

    let mut scratch = position.clone();
    let legal = generate_legal_moves(&mut scratch).map_err(|_| MoveRejected::Illegal(text.to_owned()))?;

    legal
        .into_iter()
        .find(|&mv| {
            move_from(mv) == wanted.from
                && move_to(mv) == wanted.to
                && move_promotion_kind(mv) == wanted.promotion
        })
        .ok_or_else(|| MoveRejected::Illegal(text.to_owned()))
}

/// `e2e4` style text; promotions get a lowercase piece letter.
pub fn move_to_long_algebraic(mv: Move) -> String {
    let mut out = String::with_capacity(5);
    push_square(&mut out, move_from(mv));
    push_square(&mut out, move_to(mv));
    if let Some(kind) = move_promotion_kind(mv) {
        out.push(promotion_to_char(kind));
    }
    out
}

/// Space separated coordinate text for a line of moves.
pub fn line_to_long_algebraic(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|&mv| move_to_long_algebraic(mv))
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_square(out: &mut String, square: Square) {
    out.push(char::from(b'a' + file_of(square)));
    out.push(char::from(b'1' + rank_of(square)));
}

fn promotion_to_char(piece_kind: PieceKind) -> char {
    match piece_kind {
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        _ => 'q',
    }
}

fn char_to_promotion(ch: char) -> Result<PieceKind, NotationError> {
    match ch.to_ascii_lowercase() {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        _ => Err(NotationError::InvalidPromotion(ch)),
    }
}
