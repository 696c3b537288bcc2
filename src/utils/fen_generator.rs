use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(position);
    let side_to_move = match position.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let castling = generate_castling_field(position.castling_rights);
    let en_passant = position
        .en_passant_square
        .and_then(|sq| square_to_algebraic(sq).ok())
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {} {} {}",
        board, side_to_move, castling, en_passant, position.halfmove_clock, position.fullmove_number
    )
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match position.piece_on(rank * 8 + file) {
                Some((color, piece)) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(color, piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

pub fn piece_to_fen_char(color: Color, piece: PieceKind) -> char {
    let base = match piece {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match color {
        Color::Light => base.to_ascii_uppercase(),
        Color::Dark => base,
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let out: String = [
        (CASTLE_LIGHT_KINGSIDE, 'K'),
        (CASTLE_LIGHT_QUEENSIDE, 'Q'),
        (CASTLE_DARK_KINGSIDE, 'k'),
        (CASTLE_DARK_QUEENSIDE, 'q'),
    ]
    .into_iter()
    .filter(|(flag, _)| rights & flag != 0)
    .map(|(_, ch)| ch)
    .collect();

    if out.is_empty() {
        "-".to_owned()
    } else {
        out
    }
}
