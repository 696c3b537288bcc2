//! Crate root module declarations for the chess engine core.
//!
//! This file exposes all subsystems (game state, attack tables, move
//! generation, search, the embedding API, and notation helpers) so the
//! binary, benches, and integration tests can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
    pub mod undo_state;
}

pub mod moves {
    pub mod attack_tables;
    pub mod leaper_attacks;
    pub mod magic_bitboards;
    pub mod magic_constants;
    pub mod move_descriptions;
    pub mod sliding_attacks;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod game_phase;
    pub mod iterative_deepening;
    pub mod move_ordering;
    pub mod piece_square_tables;
    pub mod search_context;
    pub mod transposition_table;
    pub mod zobrist;
}

pub mod engines {
    pub mod engine_api;
    pub mod time_management;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
}
