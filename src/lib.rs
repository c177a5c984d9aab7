//! Crate root module declarations for the Quince Chess engine project.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! search, engines, and utility helpers) so binaries, tests, and external
//! tooling can import stable module paths.

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_castling;
    pub mod legal_moves_normal;
    pub mod legal_moves_pawn;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod negamax;
}

pub mod engines {
    pub mod engine_negamax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod coordinates;
    pub mod engine_match_harness;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}
