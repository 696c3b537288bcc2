//! Command-line front end for the engine core.
//!
//! Usage:
//! `cargo run --release -- perft --depth 5`
//! `cargo run --release -- search --fen "<fen>" --depth 6 --movetime-ms 2000`
//! `RUST_LOG=debug cargo run --release -- search --moves e2e4 e7e5`

use clap::{Args, Parser, Subcommand};

use chess_core::engines::engine_api::{apply_user_move, status};
use chess_core::engines::time_management::{resolve_time_budget, ClockParams};
use chess_core::game_state::chess_rules::STARTING_POSITION_FEN;
use chess_core::game_state::chess_types::{Position, NO_MOVE};
use chess_core::move_generation::perft::{perft, perft_divide};
use chess_core::moves::attack_tables::{AttackTables, MAGIC_SEED};
use chess_core::moves::sliding_attacks::SliderKind;
use chess_core::search::board_scoring::{BoardScorer, PositionalScorer};
use chess_core::search::game_phase::game_phase;
use chess_core::search::iterative_deepening::{SearchConfig, SearchEngine};
use chess_core::utils::long_algebraic::move_to_long_algebraic;

#[derive(Parser, Debug)]
#[command(name = "chess_core", version, about = "Bitboard chess engine core")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct PositionArgs {
    /// Starting position; malformed input falls back to the initial position
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,

    /// Coordinate moves played from the FEN before running the command
    #[arg(long, num_args = 1.., value_delimiter = ' ')]
    moves: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count leaf nodes with a per-category breakdown
    Perft {
        #[command(flatten)]
        position: PositionArgs,
        #[arg(long, default_value_t = 4)]
        depth: u8,
    },
    /// Leaf counts below each root move
    Divide {
        #[command(flatten)]
        position: PositionArgs,
        #[arg(long, default_value_t = 3)]
        depth: u8,
    },
    /// Iterative-deepening search for the best move
    Search {
        #[command(flatten)]
        position: PositionArgs,
        #[arg(long, default_value_t = 6)]
        depth: u8,
        #[arg(long)]
        movetime_ms: Option<u64>,
        #[arg(long)]
        wtime: Option<u64>,
        #[arg(long)]
        btime: Option<u64>,
        #[arg(long)]
        winc: Option<u64>,
        #[arg(long)]
        binc: Option<u64>,
        #[arg(long)]
        movestogo: Option<u16>,
        /// Disable the transposition table
        #[arg(long)]
        no_tt: bool,
        /// Bound the transposition table to this many entries
        #[arg(long)]
        tt_entries: Option<usize>,
    },
    /// Static evaluation and game status
    Eval {
        #[command(flatten)]
        position: PositionArgs,
    },
    /// Search slider magics from a seed and print them as Rust constants
    Magics {
        #[arg(long, default_value_t = MAGIC_SEED)]
        seed: u64,
    },
}

fn load_position(args: &PositionArgs) -> Result<Position, String> {
    let mut position = Position::from_fen_or_default(&args.fen);
    for text in &args.moves {
        position = apply_user_move(&position, text).map_err(|e| e.to_string())?;
    }
    Ok(position)
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Perft { position, depth } => run_perft(&position, depth),
        Command::Divide { position, depth } => run_divide(&position, depth),
        Command::Search {
            position,
            depth,
            movetime_ms,
            wtime,
            btime,
            winc,
            binc,
            movestogo,
            no_tt,
            tt_entries,
        } => {
            let clock = ClockParams {
                light_time_ms: wtime,
                dark_time_ms: btime,
                light_inc_ms: winc,
                dark_inc_ms: binc,
                moves_to_go: movestogo,
                move_time_ms: movetime_ms,
            };
            let config = SearchConfig {
                max_depth: depth,
                use_transposition_table: !no_tt,
                tt_capacity: tt_entries,
                ..SearchConfig::default()
            };
            run_search(&position, config, &clock)
        }
        Command::Eval { position } => run_eval(&position),
        Command::Magics { seed } => run_magics(seed),
    }
}

fn run_perft(args: &PositionArgs, depth: u8) -> Result<(), String> {
    let mut position = load_position(args)?;
    for d in 1..=depth {
        let counts = perft(&mut position, d).map_err(|e| e.to_string())?;
        println!(
            "depth={d} nodes={} captures={} ep={} castles={} promotions={} checks={} mates={}",
            counts.nodes,
            counts.captures,
            counts.en_passant,
            counts.castles,
            counts.promotions,
            counts.checks,
            counts.checkmates
        );
    }
    Ok(())
}

fn run_divide(args: &PositionArgs, depth: u8) -> Result<(), String> {
    let mut position = load_position(args)?;
    let divide = perft_divide(&mut position, depth).map_err(|e| e.to_string())?;
    let mut total = 0;
    for (mv, nodes) in &divide {
        println!("{}: {nodes}", move_to_long_algebraic(*mv));
        total += nodes;
    }
    println!("moves={} nodes={total}", divide.len());
    Ok(())
}

fn run_search(args: &PositionArgs, mut config: SearchConfig, clock: &ClockParams) -> Result<(), String> {
    let position = load_position(args)?;
    config.time_budget = resolve_time_budget(&position, clock);

    let mut engine = SearchEngine::new(config);
    let result = engine.search(&position).map_err(|e| e.to_string())?;

    for report in &result.depth_reports {
        println!(
            "info depth {} score cp {} nodes {} time {}",
            report.depth,
            report.score,
            report.nodes,
            report.elapsed.as_millis()
        );
    }
    println!(
        "tt probes={} hits={} stores={} entries={}",
        result.tt_stats.probes,
        result.tt_stats.hits,
        result.tt_stats.stores,
        engine.transposition_table().len()
    );
    println!("pv {}", result.pv_text());

    let best = if result.best_move == NO_MOVE {
        "(none)".to_owned()
    } else {
        move_to_long_algebraic(result.best_move)
    };
    println!("bestmove {best}");
    Ok(())
}

fn run_eval(args: &PositionArgs) -> Result<(), String> {
    let mut position = load_position(args)?;
    let summary = status(&position);
    let white = PositionalScorer::static_score_white(&position);
    let side = PositionalScorer.score(&mut position).map_err(|e| e.to_string())?;

    println!("fen {}", position.to_fen());
    println!("phase {:?}", game_phase(&position));
    println!("static (white) {white}");
    println!("score (side to move) {side}");
    println!(
        "side {:?} in_check {} outcome {:?}",
        summary.side_to_move, summary.in_check, summary.outcome
    );
    Ok(())
}

fn run_magics(seed: u64) -> Result<(), String> {
    let tables = AttackTables::build(seed).map_err(|e| e.to_string())?;
    println!("// seed {seed:#018x}");
    for slider in SliderKind::ALL {
        println!("pub const {}_MAGICS: [u64; 64] = [", slider.name().to_uppercase());
        for row in tables.magics(slider).chunks(4) {
            let cells: Vec<String> = row.iter().map(|m| format!("{:#018x},", m.magic)).collect();
            println!("    {}", cells.join(" "));
        }
        println!("];");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_flags() {
        let cli = Cli::try_parse_from([
            "chess_core",
            "search",
            "--depth",
            "3",
            "--moves",
            "e2e4",
            "e7e5",
            "--movetime-ms",
            "50",
        ])
        .expect("arguments should parse");
        match cli.command {
            Command::Search {
                position,
                depth,
                movetime_ms,
                ..
            } => {
                assert_eq!(depth, 3);
                assert_eq!(movetime_ms, Some(50));
                assert_eq!(position.moves, vec!["e2e4".to_owned(), "e7e5".to_owned()]);
                assert_eq!(position.fen, STARTING_POSITION_FEN);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn loading_rejects_illegal_moves() {
        let args = PositionArgs {
            fen: STARTING_POSITION_FEN.to_owned(),
            moves: vec!["e2e5".to_owned()],
        };
        assert!(load_position(&args).is_err());
    }
}
