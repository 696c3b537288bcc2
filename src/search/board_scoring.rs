//! Pluggable board evaluation interfaces and the default evaluator.
//!
//! Search stays modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.

use crate::errors::PositionError;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::count_legal_moves;
use crate::search::game_phase::{game_phase, GamePhase};
use crate::search::piece_square_tables::piece_square_bonus;

/// Penalty per legal reply available to the opponent.
pub const MOBILITY_PENALTY: i32 = 5;

/// Bound of the root search window; no real score reaches it.
pub const SCORE_INFINITY: i32 = 50_000;

/// Score of being checkmated at the root; mated at ply `n` scores
/// `-MATE_SCORE + n`.
pub const MATE_SCORE: i32 = 49_000;

/// Scores beyond this magnitude encode a forced mate.
pub const MATE_THRESHOLD: i32 = 48_000;

pub trait BoardScorer {
    /// Score from the perspective of the side to move. `position` is only
    /// borrowed mutably to probe moves and is returned unchanged.
    fn score(&self, position: &mut Position) -> Result<i32, PositionError>;
}

#[inline]
pub const fn piece_value(piece: PieceKind) -> i32 {
    match piece {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 350,
        PieceKind::Rook => 500,
        PieceKind::Queen => 1000,
        PieceKind::King => 10000,
    }
}

/// Material only; no move probing.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    fn material_balance_white_minus_black(position: &Position) -> i32 {
        PieceKind::ALL
            .into_iter()
            .map(|piece| {
                let white_count = position.count(Color::Light, piece) as i32;
                let black_count = position.count(Color::Dark, piece) as i32;
                (white_count - black_count) * piece_value(piece)
            })
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, position: &mut Position) -> Result<i32, PositionError> {
        Ok(Self::material_balance_white_minus_black(position) * position.side_to_move.sign())
    }
}

/// Material, piece-square tables, opponent mobility and bare-king mating
/// terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl PositionalScorer {
    /// Everything except mobility, from light's point of view.
    pub fn static_score_white(position: &Position) -> i32 {
        let phase = game_phase(position);
        material_and_placement(position, phase) + basic_endgame_bonus(position, phase)
    }
}

impl BoardScorer for PositionalScorer {
    fn score(&self, position: &mut Position) -> Result<i32, PositionError> {
        let static_score = Self::static_score_white(position) * position.side_to_move.sign();
        let replies = opponent_reply_count(position)? as i32;
        Ok(static_score - replies * MOBILITY_PENALTY)
    }
}

fn material_and_placement(position: &Position, phase: GamePhase) -> i32 {
    let mut score = 0;

    for color in Color::ALL {
        let mut side_score = 0;
        for piece in PieceKind::ALL {
            let mut bb = position.bitboard(color, piece);
            while bb != 0 {
                let sq = bb.trailing_zeros() as Square;
                side_score += piece_value(piece) + piece_square_bonus(phase, color, piece, sq);
                bb &= bb - 1;
            }
        }
        score += side_score * color.sign();
    }

    score
}

/// Legal moves the opponent would have if it were their turn.
///
/// The en-passant target belongs to the side to move, so it is hidden while
/// the opponent's moves are counted.
pub fn opponent_reply_count(position: &mut Position) -> Result<usize, PositionError> {
    let side = position.side_to_move;
    let en_passant = position.en_passant_square;
    let key = position.zobrist_key;

    position.side_to_move = side.opposite();
    position.en_passant_square = None;
    let count = count_legal_moves(position);

    position.side_to_move = side;
    position.en_passant_square = en_passant;
    position.zobrist_key = key;

    count
}

#[inline]
fn manhattan_distance(a: Square, b: Square) -> i32 {
    (file_of(a) as i32 - file_of(b) as i32).abs() + (rank_of(a) as i32 - rank_of(b) as i32).abs()
}

/// King-and-rook / king-and-queen mating terms, from light's point of view.
fn basic_endgame_bonus(position: &Position, phase: GamePhase) -> i32 {
    let (piece, king_weight) = match phase {
        GamePhase::KingRookVsKing => (PieceKind::Rook, 20),
        GamePhase::KingQueenVsKing => (PieceKind::Queen, 30),
        _ => return 0,
    };

    Color::ALL
        .into_iter()
        .find_map(|owner| {
            let piece_sq = lsb_square(position.bitboard(owner, piece))?;
            let our_king = position.king_square(owner)?;
            let enemy_king = position.king_square(owner.opposite())?;
            Some(mating_bonus(piece_sq, our_king, enemy_king, king_weight) * owner.sign())
        })
        .unwrap_or(0)
}

/// Drive the bare king to the edge, cut it off, and bring our king closer.
fn mating_bonus(piece_sq: Square, our_king: Square, enemy_king: Square, king_weight: i32) -> i32 {
    let rank = rank_of(enemy_king) as i32;
    let file = file_of(enemy_king) as i32;
    let rank_to_edge = rank.min(7 - rank);
    let file_to_edge = file.min(7 - file);

    let mut score = (6 - (rank_to_edge + file_to_edge)) * 20;

    if rank_of(piece_sq) as i32 == rank || file_of(piece_sq) as i32 == file {
        score += 50;
    }

    score += (14 - manhattan_distance(our_king, enemy_king)) * king_weight;

    // A piece next to the bare king can be taken.
    if manhattan_distance(piece_sq, enemy_king) < 2 {
        score -= 30;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(fen: &str) -> i32 {
        let mut position = Position::from_fen(fen).expect("FEN should parse");
        let before = position.clone();
        let value = PositionalScorer.score(&mut position).expect("evaluation should succeed");
        assert_eq!(position, before);
        value
    }

    #[test]
    fn starting_position_only_pays_for_opponent_mobility() {
        let mut position = Position::new_game();
        assert_eq!(PositionalScorer::static_score_white(&position), 0);
        assert_eq!(PositionalScorer.score(&mut position), Ok(-20 * MOBILITY_PENALTY));
    }

    #[test]
    fn mirrored_positions_score_negated_from_white() {
        for fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "4k3/8/8/8/8/8/8/R3K3 b - - 0 1",
        ] {
            let mut position = Position::from_fen(fen).expect("FEN should parse");
            let mut mirror = position.mirrored();

            let own = PositionalScorer.score(&mut position).expect("evaluation should succeed");
            let mirrored = PositionalScorer.score(&mut mirror).expect("evaluation should succeed");
            assert_eq!(own, mirrored, "{fen}");

            let white_view = own * position.side_to_move.sign();
            let mirrored_white_view = mirrored * mirror.side_to_move.sign();
            assert_eq!(white_view, -mirrored_white_view, "{fen}");
        }
    }

    #[test]
    fn material_scorer_follows_side_to_move() {
        let mut white = Position::from_fen("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1").expect("FEN should parse");
        let mut black = Position::from_fen("4k3/8/8/8/8/8/8/Q3K3 b - - 0 1").expect("FEN should parse");
        assert_eq!(MaterialScorer.score(&mut white), Ok(1000));
        assert_eq!(MaterialScorer.score(&mut black), Ok(-1000));
    }

    #[test]
    fn rook_mating_terms_reward_the_rook_owner() {
        let cornered = PositionalScorer::static_score_white(
            &Position::from_fen("7k/8/5K2/8/8/8/8/R7 w - - 0 1").expect("FEN should parse"),
        );
        let centered = PositionalScorer::static_score_white(
            &Position::from_fen("8/8/8/4k3/8/8/8/R3K3 w - - 0 1").expect("FEN should parse"),
        );
        assert!(cornered > centered);

        let black_rook = PositionalScorer::static_score_white(
            &Position::from_fen("r7/8/8/8/8/5k2/8/7K b - - 0 1").expect("FEN should parse"),
        );
        assert_eq!(black_rook, -cornered);
    }

    #[test]
    fn probing_replies_leaves_en_passant_intact() {
        let fen = "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3";
        score(fen);
        let mut position = Position::from_fen(fen).expect("FEN should parse");
        assert!(opponent_reply_count(&mut position).is_ok());
        assert_eq!(position.en_passant_square, Some(45));
    }
}
