//! Per-move time budgeting.
//!
//! Callers pass raw clock data and the engine decides the final soft budget
//! for one move, using the game phase to estimate how many moves remain.

use std::time::Duration;

use crate::game_state::chess_types::{Color, Position};
use crate::search::game_phase::{game_phase, GamePhase};

/// Raw clock state, all times in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockParams {
    pub light_time_ms: Option<u64>,
    pub dark_time_ms: Option<u64>,
    pub light_inc_ms: Option<u64>,
    pub dark_inc_ms: Option<u64>,
    pub moves_to_go: Option<u16>,
    /// Fixed time per move; overrides every other field.
    pub move_time_ms: Option<u64>,
}

/// Soft budget for the side to move, or `None` when no clock was given.
pub fn resolve_time_budget(position: &Position, params: &ClockParams) -> Option<Duration> {
    if let Some(ms) = params.move_time_ms {
        return Some(Duration::from_millis(ms.max(1)));
    }

    let (remaining, increment) = match position.side_to_move {
        Color::Light => (params.light_time_ms, params.light_inc_ms),
        Color::Dark => (params.dark_time_ms, params.dark_inc_ms),
    };

    remaining.map(|remaining_ms| {
        let expected = params
            .moves_to_go
            .map(|mtg| u64::from(mtg.max(1)))
            .unwrap_or_else(|| expected_moves_left(game_phase(position)));
        Duration::from_millis(adaptive_budget_ms(remaining_ms, increment, expected))
    })
}

fn expected_moves_left(phase: GamePhase) -> u64 {
    if phase.is_basic_endgame() {
        return 12;
    }
    match phase {
        GamePhase::Opening => 40,
        GamePhase::MiddleGame => 28,
        _ => 18,
    }
}

fn adaptive_budget_ms(remaining_ms: u64, inc_ms: Option<u64>, expected_moves_left: u64) -> u64 {
    let reserve = (remaining_ms / 25).max(100).min(remaining_ms.saturating_sub(1));
    let usable = remaining_ms.saturating_sub(reserve);
    let base = usable / expected_moves_left.max(1);
    let inc_bonus = inc_ms.unwrap_or(0).saturating_mul(3) / 4;
    let panic = if remaining_ms < 2_000 { remaining_ms / 12 } else { 0 };
    let target = base.saturating_add(inc_bonus).saturating_add(panic);

    let min_budget = if remaining_ms < 1_000 { 5 } else { 15 };
    let max_budget = (remaining_ms / 4).max(1);
    target.clamp(min_budget.min(max_budget), max_budget).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_move_time_wins() {
        let params = ClockParams {
            light_time_ms: Some(60_000),
            move_time_ms: Some(250),
            ..ClockParams::default()
        };
        assert_eq!(
            resolve_time_budget(&Position::new_game(), &params),
            Some(Duration::from_millis(250))
        );
    }

    #[test]
    fn no_clock_means_no_budget() {
        assert_eq!(resolve_time_budget(&Position::new_game(), &ClockParams::default()), None);
    }

    #[test]
    fn budget_uses_the_side_to_move_clock() {
        let params = ClockParams {
            light_time_ms: Some(60_000),
            dark_time_ms: Some(4_000),
            ..ClockParams::default()
        };
        let white = resolve_time_budget(&Position::new_game(), &params).expect("white has a clock");
        let black_to_move =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").expect("FEN should parse");
        let black = resolve_time_budget(&black_to_move, &params).expect("black has a clock");

        // (60000 - 2400) / 40 in the opening
        assert_eq!(white, Duration::from_millis(1_440));
        assert!(black < white);
    }

    #[test]
    fn endgames_spend_more_per_move() {
        let params = ClockParams {
            light_time_ms: Some(60_000),
            ..ClockParams::default()
        };
        let opening = resolve_time_budget(&Position::new_game(), &params).expect("clock given");
        let endgame = resolve_time_budget(
            &Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").expect("FEN should parse"),
            &params,
        )
        .expect("clock given");
        assert!(endgame > opening);
        assert!(endgame <= Duration::from_millis(15_000));
    }

    #[test]
    fn bare_king_endings_expect_fewer_moves() {
        let params = ClockParams {
            light_time_ms: Some(60_000),
            ..ClockParams::default()
        };
        let pawn_ending = Position::from_fen("4k3/pp6/8/8/8/8/PP6/4K3 w - - 0 1").expect("FEN should parse");
        let rook_ending = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").expect("FEN should parse");

        // 57600 usable over 18 and 12 moves
        assert_eq!(resolve_time_budget(&pawn_ending, &params), Some(Duration::from_millis(3_200)));
        assert_eq!(resolve_time_budget(&rook_ending, &params), Some(Duration::from_millis(4_800)));
    }

    #[test]
    fn increment_and_low_clock_are_bounded() {
        let params = ClockParams {
            light_time_ms: Some(800),
            light_inc_ms: Some(100),
            moves_to_go: Some(10),
            ..ClockParams::default()
        };
        let budget = resolve_time_budget(&Position::new_game(), &params).expect("clock given");
        assert!(budget <= Duration::from_millis(200));
        assert!(budget >= Duration::from_millis(5));
    }
}
