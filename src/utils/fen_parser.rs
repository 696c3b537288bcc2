//! FEN-to-Position parser.
//!
//! Builds a fully-populated position from a Forsyth-Edwards Notation string:
//! piece bitboards, rights, clocks, occupancies, and the Zobrist key. The move
//! clocks are optional so that four-field FEN strings are accepted.

use crate::errors::FenError;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::utils::algebraic::algebraic_to_square;

const BACK_RANKS: Bitboard = 0xFF00_0000_0000_00FF;

pub fn parse_fen(fen: &str) -> Result<Position, FenError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(FenError::MissingField("board layout"))?;
    let side_part = parts.next().ok_or(FenError::MissingField("side to move"))?;
    let castling_part = parts.next().ok_or(FenError::MissingField("castling rights"))?;
    let en_passant_part = parts.next().ok_or(FenError::MissingField("en-passant square"))?;
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(FenError::TrailingFields);
    }

    let mut position = Position::new_empty();

    parse_board(board_part, &mut position)?;
    position.side_to_move = parse_side_to_move(side_part)?;
    position.castling_rights = parse_castling_rights(castling_part)?;
    position.en_passant_square = parse_en_passant_square(en_passant_part, position.side_to_move)?;
    position.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| FenError::InvalidClock(halfmove_part.to_owned()))?;
    position.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| FenError::InvalidClock(fullmove_part.to_owned()))?;

    for color in Color::ALL {
        if position.bitboard(color, PieceKind::King).count_ones() != 1 {
            return Err(FenError::MissingKing);
        }
        if position.bitboard(color, PieceKind::Pawn) & BACK_RANKS != 0 {
            return Err(FenError::InvalidBoard("pawn on the first or last rank".to_owned()));
        }
    }

    position.recalc_occupancy();

    if let Some(target) = position.en_passant_square {
        check_en_passant_target(&position, target, en_passant_part)?;
    }
    if is_in_check(&position, position.side_to_move.opposite()) {
        return Err(FenError::WaitingSideInCheck);
    }

    position.refresh_hash();

    Ok(position)
}

fn parse_board(board_part: &str, position: &mut Position) -> Result<(), FenError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidBoard("board layout must contain 8 ranks".to_owned()));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::InvalidBoard(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as usize;
                continue;
            }

            let (color, piece) = piece_from_fen_char(ch)
                .ok_or_else(|| FenError::InvalidBoard(format!("invalid piece character '{ch}'")))?;

            if file >= 8 {
                return Err(FenError::InvalidBoard(format!("rank '{rank_str}' has too many files")));
            }

            let sq = board_rank * 8 + file;
            position.pieces[color.index()][piece.index()] |= 1u64 << sq;
            file += 1;
        }

        if file != 8 {
            return Err(FenError::InvalidBoard(format!("rank '{rank_str}' does not sum to 8 files")));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(FenError::InvalidSide(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, FenError> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => return Err(FenError::InvalidCastling(castling_part.to_owned())),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str, side_to_move: Color) -> Result<Option<Square>, FenError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| FenError::InvalidEnPassant(en_passant_part.to_owned()))?;
    match (side_to_move, rank_of(square)) {
        (Color::Light, 5) | (Color::Dark, 2) => Ok(Some(square)),
        _ => Err(FenError::InvalidEnPassant(en_passant_part.to_owned())),
    }
}

/// The target must be empty with the double-pushed enemy pawn right behind it.
fn check_en_passant_target(position: &Position, target: Square, en_passant_part: &str) -> Result<(), FenError> {
    let (pushed_from, pawn_square) = match position.side_to_move {
        Color::Light => (target + 8, target - 8),
        Color::Dark => (target - 8, target + 8),
    };
    let pusher = position.side_to_move.opposite();
    let occupied = position.occupancy_all;

    let pawn_in_place = position.piece_on(pawn_square) == Some((pusher, PieceKind::Pawn));
    let path_clear = occupied & ((1u64 << target) | (1u64 << pushed_from)) == 0;
    if pawn_in_place && path_clear {
        Ok(())
    } else {
        Err(FenError::InvalidEnPassant(en_passant_part.to_owned()))
    }
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, piece))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::FenError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn parse_starting_fen() {
        let position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(position.side_to_move, Color::Light);
        assert_eq!(position.fullmove_number, 1);
        assert_eq!(position.halfmove_clock, 0);
        assert_eq!(position.bitboard(Color::Light, PieceKind::Pawn), 0xFF00);
        assert_eq!(position.bitboard(Color::Dark, PieceKind::Knight), (1 << 57) | (1 << 62));
    }

    #[test]
    fn clocks_are_optional() {
        let position = parse_fen("4k3/8/8/8/8/8/8/4K3 b - -").expect("four-field FEN should parse");
        assert_eq!(position.side_to_move, Color::Dark);
        assert_eq!(position.fullmove_number, 1);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(parse_fen(""), Err(FenError::MissingField(_))));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::InvalidBoard(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1"),
            Err(FenError::InvalidSide(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w KX - 0 1"),
            Err(FenError::InvalidCastling(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - e4 0 1"),
            Err(FenError::InvalidEnPassant(_))
        ));
        assert_eq!(parse_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"), Err(FenError::MissingKing));
    }

    #[test]
    fn en_passant_target_must_follow_a_double_push() {
        // Rank 3 belongs to white's double pushes, so white cannot capture there.
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/3Pk3/K7 w - e3 0 1"),
            Err(FenError::InvalidEnPassant(_))
        ));
        // A king on the pawn's square.
        assert!(matches!(
            parse_fen("8/8/8/3Pk3/8/8/8/K7 w - e6 0 1"),
            Err(FenError::InvalidEnPassant(_))
        ));
        // Pawn in place but the square it left is occupied.
        assert!(matches!(
            parse_fen("4k3/4n3/8/3Pp3/8/8/8/4K3 w - e6 0 1"),
            Err(FenError::InvalidEnPassant(_))
        ));

        let position = parse_fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1").expect("real double push should parse");
        assert_eq!(position.en_passant_square, Some(44));
    }

    #[test]
    fn rejects_positions_with_the_waiting_king_in_check() {
        assert_eq!(
            parse_fen("6k1/5Q2/6K1/8/8/8/8/8 w - - 0 1"),
            Err(FenError::WaitingSideInCheck)
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1").map(|p| p.side_to_move),
            Ok(Color::Dark)
        );
    }

    #[test]
    fn rejects_pawns_on_back_ranks() {
        assert!(matches!(
            parse_fen("P3k3/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(FenError::InvalidBoard(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/p3K3 w - - 0 1"),
            Err(FenError::InvalidBoard(_))
        ));
    }
}
