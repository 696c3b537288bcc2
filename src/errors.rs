//! Error types surfaced by the engine core.
//!
//! Notation and move-token errors are recoverable and reported to callers;
//! `PositionError` and `SearchError` signal a board that no longer matches
//! the move being played and abort the running search.

use thiserror::Error;

use crate::game_state::chess_types::Square;
use crate::moves::sliding_attacks::SliderKind;

/// Malformed Forsyth-Edwards Notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("missing FEN field: {0}")]
    MissingField(&'static str),
    #[error("FEN has extra trailing fields")]
    TrailingFields,
    #[error("invalid board layout: {0}")]
    InvalidBoard(String),
    #[error("invalid side to move: {0}")]
    InvalidSide(String),
    #[error("invalid castling rights: {0}")]
    InvalidCastling(String),
    #[error("invalid en-passant square: {0}")]
    InvalidEnPassant(String),
    #[error("invalid move clock: {0}")]
    InvalidClock(String),
    #[error("position must contain exactly one king per side")]
    MissingKing,
    #[error("the side not to move is in check")]
    WaitingSideInCheck,
}

/// Slider attack tables could not be hashed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttackTableError {
    #[error("no {} magic number found for square {square}", .slider.name())]
    MagicNotFound { square: Square, slider: SliderKind },
    #[error("{} magic {magic:#018x} collides on square {square}", .slider.name())]
    CollidingMagic { square: Square, slider: SliderKind, magic: u64 },
}

/// Square or coordinate-move text that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("invalid square: {0}")]
    InvalidSquare(String),
    #[error("square index out of bounds: {0}")]
    SquareOutOfBounds(Square),
    #[error("invalid coordinate move: {0}")]
    InvalidMoveText(String),
    #[error("invalid promotion piece: {0}")]
    InvalidPromotion(char),
}

/// A user-supplied move that was refused without touching the position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejected {
    #[error("unparseable move '{text}': {source}")]
    Unparseable {
        text: String,
        #[source]
        source: NotationError,
    },
    #[error("illegal move '{0}' in the current position")]
    Illegal(String),
}

/// The board disagrees with the move being applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("no piece of the side to move on source square {0}")]
    EmptySource(Square),
    #[error("encoded piece id {encoded} does not match piece id {found} on square {square}")]
    PieceMismatch { square: Square, encoded: u8, found: u8 },
    #[error("invalid piece id {0} in move encoding")]
    InvalidPieceId(u8),
}

/// Fatal failure while searching; the position may be inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search aborted while playing {move_text}: {source}")]
    CorruptPosition {
        move_text: String,
        #[source]
        source: PositionError,
    },
    #[error("evaluation failed in position {fen}: {source}")]
    Evaluation {
        fen: String,
        #[source]
        source: PositionError,
    },
}
