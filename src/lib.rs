//! Crate root module declarations for the gamearena engine.
//!
//! This file exposes all top-level subsystems (arena state and registry,
//! board snapshots, movement rules, and utility helpers) so binaries,
//! tests, and external tooling can import stable module paths.

pub mod arena {
    pub mod arena_errors;
    pub mod arena_types;
    pub mod game_arena;
    pub mod snapshot;
    pub mod unit;
}

pub mod movement {
    pub mod king_safety;
    pub mod movement_rules;
    pub mod pawn_moves;
    pub mod slider_moves;
}

pub mod utils {
    pub mod match_harness;
    pub mod render_arena;
}
