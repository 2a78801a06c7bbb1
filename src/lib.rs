//! Crate root module declarations for the attack heatmap board.
//!
//! Exposes the bitboard rules engine, the visualizer core (attack maps, move
//! history, selection, toggles, scene composition), scene renderers, and the
//! terminal frontend so the binary, tests, and benches share module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod attack_tables;
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_pawn;
    pub mod legal_moves_pieces;
}

pub mod rules_engine {
    pub mod board_rules_engine;
    pub mod rules_engine_trait;
}

pub mod visualizer {
    pub mod attack_map;
    pub mod board_layout;
    pub mod display_toggles;
    pub mod interaction_controller;
    pub mod move_history;
    pub mod scene;
    pub mod selection;
}

pub mod render {
    pub mod scene_renderer;
    pub mod text_renderer;
}

pub mod frontend {
    pub mod terminal_commands;
    pub mod terminal_session;
    pub mod viewer_config;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
}
