//! Game-phase classification from piece counts.
//!
//! The evaluator uses the specific endgame phases to switch tables and add
//! mating heuristics; time management uses the broad phases to estimate how
//! many moves remain.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Opening,
    MiddleGame,
    EndGame,
    KingRookVsKing,
    KingQueenVsKing,
    KingPawnVsKing,
    KingBishopVsKing,
    KingBishopKnightVsKing,
    KingTwoBishopsVsKing,
}

impl GamePhase {
    /// One of the named bare-king material balances.
    #[inline]
    pub const fn is_basic_endgame(self) -> bool {
        !matches!(self, GamePhase::Opening | GamePhase::MiddleGame | GamePhase::EndGame)
    }
}

/// Classify `position`. Pure function of the piece bitboards.
pub fn game_phase(position: &Position) -> GamePhase {
    let total = position.piece_count();

    if total == 32 {
        return GamePhase::Opening;
    }

    if total <= 4 {
        if let Some(phase) = lone_king_phase(position) {
            return phase;
        }
        return GamePhase::EndGame;
    }

    let both_queens = Color::ALL
        .into_iter()
        .all(|color| position.count(color, PieceKind::Queen) >= 1);
    if total > 24 && both_queens {
        return GamePhase::MiddleGame;
    }

    GamePhase::EndGame
}

/// Named balance when one side has a bare king.
fn lone_king_phase(position: &Position) -> Option<GamePhase> {
    let strong = Color::ALL
        .into_iter()
        .find(|&color| position.occupancy_by_color[color.opposite().index()].count_ones() == 1)?;
    let extra = position.occupancy_by_color[strong.index()].count_ones() - 1;
    let count = |kind| position.count(strong, kind);

    match extra {
        1 if count(PieceKind::Rook) == 1 => Some(GamePhase::KingRookVsKing),
        1 if count(PieceKind::Queen) == 1 => Some(GamePhase::KingQueenVsKing),
        1 if count(PieceKind::Pawn) == 1 => Some(GamePhase::KingPawnVsKing),
        1 if count(PieceKind::Bishop) == 1 => Some(GamePhase::KingBishopVsKing),
        2 if count(PieceKind::Bishop) == 1 && count(PieceKind::Knight) == 1 => {
            Some(GamePhase::KingBishopKnightVsKing)
        }
        2 if count(PieceKind::Bishop) == 2 => Some(GamePhase::KingTwoBishopsVsKing),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phase(fen: &str) -> GamePhase {
        game_phase(&Position::from_fen(fen).expect("FEN should parse"))
    }

    #[test]
    fn broad_phases() {
        assert_eq!(game_phase(&Position::new_game()), GamePhase::Opening);
        assert_eq!(
            phase("rnbqkbnr/ppp2ppp/8/3pp3/8/8/PPP2PPP/RNBQKBNR w KQkq - 0 4"),
            GamePhase::MiddleGame
        );
        assert_eq!(
            phase("rnb1kbnr/ppp2ppp/8/3pp3/8/8/PPP2PPP/RNBQKBNR w KQkq - 0 4"),
            GamePhase::EndGame
        );
        assert_eq!(phase("4k3/pp6/8/8/8/8/PP6/4K3 w - - 0 40"), GamePhase::EndGame);
    }

    #[test]
    fn named_bare_king_balances() {
        assert_eq!(phase("4k3/8/8/8/8/8/8/R3K3 w - - 0 1"), GamePhase::KingRookVsKing);
        assert_eq!(phase("4k3/8/8/8/8/8/8/3qK3 w - - 0 1"), GamePhase::KingQueenVsKing);
        assert_eq!(phase("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1"), GamePhase::KingPawnVsKing);
        assert_eq!(phase("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1"), GamePhase::KingBishopVsKing);
        assert_eq!(phase("4k3/8/8/8/8/8/8/1NB1K3 w - - 0 1"), GamePhase::KingBishopKnightVsKing);
        assert_eq!(phase("4k3/8/8/8/8/8/8/2BBK3 w - - 0 1"), GamePhase::KingTwoBishopsVsKing);
        assert_eq!(phase("4k3/8/8/8/8/8/8/1N2K3 w - - 0 1"), GamePhase::EndGame);
        assert_eq!(phase("3rk3/8/8/8/8/8/8/R3K3 w - - 0 1"), GamePhase::EndGame);
        assert!(GamePhase::KingRookVsKing.is_basic_endgame());
        assert!(!GamePhase::EndGame.is_basic_endgame());
    }
}
