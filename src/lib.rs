//! Crate root module declarations for the Sable chess engine.
//!
//! Exposes the top-level subsystems (game state, moves, move generation,
//! search, engines and utility helpers) so the self-play binary, tests and
//! benchmarks can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod material_count;
    pub mod undo_state;
}

pub mod moves {
    pub mod chess_move;
    pub mod move_descriptions;
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
    pub mod negamax;
    pub mod threading;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_negamax;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}
