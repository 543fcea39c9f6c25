//! Arena walkthrough plus a seeded random skirmish.
//!
//! Deploys a pawn rank per side, probes and plays a pawn charge, brings a
//! rook in behind it, renders the board, then hands an untouched arena to
//! the skirmish harness.
//!
//! Usage:
//!   cargo run --bin skirmish_demo
//!   cargo run --bin skirmish_demo -- --verbose

use gamearena::arena::arena_errors::ArenaError;
use gamearena::arena::arena_types::{Square, Vector};
use gamearena::arena::game_arena::GameArena;
use gamearena::arena::unit::UnitKind;
use gamearena::utils::match_harness::{play_skirmish, SkirmishConfig};
use gamearena::utils::render_arena::render_snapshot;

fn main() -> Result<(), ArenaError> {
    let verbose = std::env::args().any(|arg| arg == "--verbose" || arg == "-v");

    let mut arena = GameArena::new(8, 8);

    let mut bottom_pawns = Vec::new();
    for x in 0..8 {
        bottom_pawns.push(arena.recruit(
            1,
            Some(Square::new(x, 1)),
            UnitKind::Pawn {
                forward: Vector::new(0, 1),
            },
        )?);
        arena.recruit(
            2,
            Some(Square::new(x, 6)),
            UnitKind::Pawn {
                forward: Vector::new(0, -1),
            },
        )?;
    }

    let pawn = bottom_pawns[0];
    let pawn_moves = arena.valid_moves(pawn);
    println!("pawn {pawn} moves: {pawn_moves:?}");

    // Charge two squares and station a rook on the vacated file.
    arena.try_move_unit(pawn, pawn_moves[1])?;
    println!("pawn {pawn} moves after the charge: {:?}", arena.valid_moves(pawn));

    let rook = arena.recruit(1, Some(Square::new(0, 0)), UnitKind::Rook)?;
    println!("rook {rook} moves: {:?}", arena.valid_moves(rook));
    println!("{}", render_snapshot(&arena.take_snapshot()));

    let stats = play_skirmish(SkirmishConfig {
        max_plies: 40,
        seed: 42,
        verbose,
    })?;
    println!("{}", stats.report());

    Ok(())
}
