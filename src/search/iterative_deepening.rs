//! Iterative deepening search with negamax alpha-beta pruning.
//!
//! One owned `Position` is threaded through the recursion with make/unmake.
//! Each depth iteration runs a full-window negamax with check extension,
//! late-move reduction, a transposition table and killer/history ordering,
//! then a capture-only quiescence search at the horizon. The wall clock is
//! only consulted between iterations, so a budget is a soft limit.

use std::time::{Duration, Instant};

use log::{debug, error, info};

use crate::errors::{PositionError, SearchError};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_legal_move, unmake_move};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{generate_pseudo_legal_captures, generate_pseudo_legal_moves};
use crate::moves::move_descriptions::{is_capture, is_promotion};
use crate::search::board_scoring::{BoardScorer, PositionalScorer, MATE_SCORE, MATE_THRESHOLD, SCORE_INFINITY};
use crate::search::move_ordering::order_moves;
use crate::search::search_context::{SearchContext, MAX_PLY};
use crate::search::transposition_table::{score_to_tt, Bound, TTEntry, TTStats, TranspositionTable};
use crate::utils::long_algebraic::{line_to_long_algebraic, move_to_long_algebraic};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    /// Soft limit checked before each new depth. `None` searches to
    /// `max_depth`.
    pub time_budget: Option<Duration>,
    pub use_transposition_table: bool,
    /// Moves searched at full depth before late-move reduction applies.
    pub full_depth_moves: usize,
    /// Remaining depth must exceed this for a move to be reduced.
    pub reduction_limit: u8,
    /// Entry bound for the transposition table; `None` grows without limit.
    pub tt_capacity: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            time_budget: None,
            use_transposition_table: true,
            full_depth_moves: 2,
            reduction_limit: 1,
            tt_capacity: None,
        }
    }
}

/// Summary of one completed iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthReport {
    pub depth: u8,
    pub score: i32,
    pub nodes: u64,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// `NO_MOVE` when the side to move has no legal move or depth was 0.
    pub best_move: Move,
    /// Side-to-move perspective.
    pub score: i32,
    pub depth: u8,
    pub nodes: u64,
    pub pv: Vec<Move>,
    pub elapsed: Duration,
    pub tt_stats: TTStats,
    pub depth_reports: Vec<DepthReport>,
}

impl SearchResult {
    #[inline]
    pub fn pv_text(&self) -> String {
        line_to_long_algebraic(&self.pv)
    }

    /// Score encodes a forced mate for either side.
    #[inline]
    pub fn is_mate_score(&self) -> bool {
        self.score.abs() > MATE_THRESHOLD
    }
}

/// Search from a fresh engine.
pub fn iterative_deepening_search(position: &Position, config: SearchConfig) -> Result<SearchResult, SearchError> {
    SearchEngine::new(config).search(position)
}

#[derive(Debug, Clone)]
pub struct SearchEngine<S: BoardScorer = PositionalScorer> {
    config: SearchConfig,
    scorer: S,
    tt: TranspositionTable,
    ctx: SearchContext,
    pv_line: Vec<Move>,
    follow_pv: bool,
}

impl SearchEngine<PositionalScorer> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(config, PositionalScorer)
    }
}

impl<S: BoardScorer> SearchEngine<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S) -> Self {
        let tt = match config.tt_capacity {
            Some(capacity) => TranspositionTable::with_capacity_limit(capacity),
            None => TranspositionTable::new(),
        };
        Self {
            config,
            scorer,
            tt,
            ctx: SearchContext::new(),
            pv_line: Vec::new(),
            follow_pv: false,
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[inline]
    pub fn transposition_table(&mut self) -> &mut TranspositionTable {
        &mut self.tt
    }

    pub fn clear_transposition_table(&mut self) {
        self.tt.clear();
    }

    /// Best move for the side to move in `position`, which is not modified.
    pub fn search(&mut self, position: &Position) -> Result<SearchResult, SearchError> {
        let started_at = Instant::now();
        let mut root = position.clone();
        self.ctx.reset();
        self.pv_line.clear();

        if self.config.max_depth == 0 {
            let score = self.evaluate(&mut root)?;
            return Ok(SearchResult {
                score,
                nodes: 1,
                elapsed: started_at.elapsed(),
                tt_stats: self.tt.stats(),
                ..SearchResult::default()
            });
        }

        let mut result = SearchResult::default();

        for depth in 1..=self.config.max_depth {
            if depth > 1 && self.config.time_budget.is_some_and(|budget| started_at.elapsed() >= budget) {
                break;
            }

            let nodes_before = self.ctx.nodes;
            self.ctx.ply = 0;
            self.follow_pv = true;

            let score = self.negamax(&mut root, depth, -SCORE_INFINITY, SCORE_INFINITY)?;
            let pv = self.ctx.principal_variation();

            let report = DepthReport {
                depth,
                score,
                nodes: self.ctx.nodes - nodes_before,
                elapsed: started_at.elapsed(),
            };
            debug!(
                "depth {} score {} nodes {} time {}ms pv {}",
                report.depth,
                report.score,
                report.nodes,
                report.elapsed.as_millis(),
                line_to_long_algebraic(&pv)
            );

            result.best_move = pv.first().copied().unwrap_or(NO_MOVE);
            result.score = score;
            result.depth = depth;
            result.depth_reports.push(report);
            self.pv_line.clone_from(&pv);
            result.pv = pv;

            if score.abs() > MATE_THRESHOLD {
                break;
            }
        }

        result.nodes = self.ctx.nodes;
        result.elapsed = started_at.elapsed();
        result.tt_stats = self.tt.stats();

        if result.best_move == NO_MOVE {
            info!("no legal move for {:?}; score {}", root.side_to_move, result.score);
        } else {
            info!(
                "bestmove {} score {} depth {} nodes {} time {}ms",
                move_to_long_algebraic(result.best_move),
                result.score,
                result.depth,
                result.nodes,
                result.elapsed.as_millis()
            );
        }

        Ok(result)
    }

    fn negamax(&mut self, position: &mut Position, depth: u8, mut alpha: i32, beta: i32) -> Result<i32, SearchError> {
        self.ctx.clear_pv_at_ply();
        let ply = self.ctx.ply;
        let key = position.zobrist_key;

        if ply > 0 && self.config.use_transposition_table {
            if let Some(score) = self.tt.probe_cutoff(key, depth, alpha, beta, ply) {
                return Ok(score);
            }
        }

        if depth == 0 {
            return self.quiescence(position, alpha, beta);
        }

        if ply >= MAX_PLY - 1 {
            return self.evaluate(position);
        }

        self.ctx.nodes += 1;

        let in_check = is_in_check(position, position.side_to_move);
        let search_depth = if in_check { depth.saturating_add(1) } else { depth };

        let mut moves = generate_pseudo_legal_moves(position);
        let pv_move = self.pv_move_at(ply);
        order_moves(position, &self.ctx, &mut moves, pv_move);
        self.follow_pv = pv_move != NO_MOVE && moves.first() == Some(&pv_move);

        let alpha_orig = alpha;
        let mut legal_moves = 0usize;

        for mv in moves {
            let Some(undo) = make_legal_move(position, mv).map_err(|err| self.corrupt(mv, err))? else {
                continue;
            };
            legal_moves += 1;

            let quiet = !is_capture(mv) && !is_promotion(mv);
            let reduce = legal_moves > self.config.full_depth_moves
                && search_depth > self.config.reduction_limit
                && !in_check
                && quiet;

            self.ctx.ply += 1;
            let outcome = self.search_child(position, search_depth, reduce, alpha, beta);
            self.ctx.ply -= 1;
            unmake_move(position, &undo);
            self.follow_pv = false;
            let score = outcome?;

            if score >= beta {
                if quiet {
                    self.ctx.record_killer(ply, mv);
                }
                self.store(key, depth, beta, Bound::Lower, ply);
                return Ok(beta);
            }

            if score > alpha {
                alpha = score;
                if quiet {
                    self.ctx.record_history(mv, search_depth);
                }
                self.ctx.update_pv(mv);
            }
        }

        if legal_moves == 0 {
            return Ok(if in_check { -MATE_SCORE + ply as i32 } else { 0 });
        }

        let bound = if alpha > alpha_orig { Bound::Exact } else { Bound::Upper };
        self.store(key, depth, alpha, bound, ply);
        Ok(alpha)
    }

    /// Reduced moves that beat alpha are searched again at full depth.
    fn search_child(
        &mut self,
        position: &mut Position,
        depth: u8,
        reduce: bool,
        alpha: i32,
        beta: i32,
    ) -> Result<i32, SearchError> {
        if reduce {
            let reduced = -self.negamax(position, depth.saturating_sub(2), -beta, -alpha)?;
            if reduced <= alpha {
                return Ok(reduced);
            }
        }
        Ok(-self.negamax(position, depth - 1, -beta, -alpha)?)
    }

    fn quiescence(&mut self, position: &mut Position, mut alpha: i32, beta: i32) -> Result<i32, SearchError> {
        self.ctx.nodes += 1;

        let stand_pat = self.evaluate(position)?;
        if self.ctx.ply >= MAX_PLY - 1 {
            return Ok(stand_pat);
        }
        if stand_pat >= beta {
            return Ok(beta);
        }
        alpha = alpha.max(stand_pat);

        let mut captures = generate_pseudo_legal_captures(position);
        order_moves(position, &self.ctx, &mut captures, NO_MOVE);

        for mv in captures {
            let Some(undo) = make_legal_move(position, mv).map_err(|err| self.corrupt(mv, err))? else {
                continue;
            };

            self.ctx.ply += 1;
            let outcome = self.quiescence(position, -beta, -alpha);
            self.ctx.ply -= 1;
            unmake_move(position, &undo);
            let score = -outcome?;

            if score >= beta {
                return Ok(beta);
            }
            alpha = alpha.max(score);
        }

        Ok(alpha)
    }

    #[inline]
    fn pv_move_at(&self, ply: usize) -> Move {
        if self.follow_pv {
            self.pv_line.get(ply).copied().unwrap_or(NO_MOVE)
        } else {
            NO_MOVE
        }
    }

    fn evaluate(&self, position: &mut Position) -> Result<i32, SearchError> {
        self.scorer.score(position).map_err(|source| {
            let fen = position.to_fen();
            error!("evaluation failed in {fen}: {source}");
            SearchError::Evaluation { fen, source }
        })
    }

    fn store(&mut self, key: u64, depth: u8, score: i32, bound: Bound, ply: usize) {
        if !self.config.use_transposition_table {
            return;
        }
        self.tt.store(TTEntry {
            key,
            depth,
            score: score_to_tt(score, ply),
            bound,
        });
    }

    fn corrupt(&self, mv: Move, source: PositionError) -> SearchError {
        let move_text = move_to_long_algebraic(mv);
        error!("position rejected {move_text} at ply {}: {source}", self.ctx.ply);
        SearchError::CorruptPosition { move_text, source }
    }
}
