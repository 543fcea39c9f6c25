//! Seeded random skirmish harness.
//!
//! Deploys two full sides on an 8x8 board and plays bounded random plies
//! through the legality-checked move path. There is no win adjudication;
//! the harness exists to drive the whole engine end to end and to collect
//! statistics that are reproducible from a seed.

use chrono::Local;
use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, RngExt, SeedableRng};

use crate::arena::arena_errors::ArenaResult;
use crate::arena::arena_types::{PlayerId, Square, UnitId, Vector};
use crate::arena::game_arena::GameArena;
use crate::arena::unit::UnitKind;
use crate::utils::render_arena::render_snapshot;

pub const PLAYER_ONE: PlayerId = 1;
pub const PLAYER_TWO: PlayerId = 2;

/// Knobs for one skirmish.
#[derive(Debug, Clone)]
pub struct SkirmishConfig {
    /// Upper bound on plies; both sides together never exceed it.
    pub max_plies: u32,
    /// Seed for the move-picking rng. Equal seeds replay equal skirmishes.
    pub seed: u64,
    /// Print each ply and the final board to stdout.
    pub verbose: bool,
}

impl Default for SkirmishConfig {
    fn default() -> Self {
        SkirmishConfig {
            max_plies: 60,
            seed: 0,
            verbose: false,
        }
    }
}

/// What happened during one skirmish.
#[derive(Debug, Clone, Default)]
pub struct SkirmishStats {
    pub plies_played: u32,
    pub player_one_moves: u32,
    pub player_two_moves: u32,
    pub captures: u32,
    /// The side that ran out of legal moves and forfeited the remaining
    /// plies, when that happened before the ply budget ran out.
    pub stalled_player: Option<PlayerId>,
    /// One entry per executed ply: `unit_id: (x, y) -> (x, y)`.
    pub played: Vec<String>,
}

impl SkirmishStats {
    /// One-line summary suitable for logs.
    pub fn report(&self) -> String {
        let stalled = match self.stalled_player {
            Some(player) => player.to_string(),
            None => "none".to_string(),
        };
        format!(
            "date={} plies={} p1_moves={} p2_moves={} captures={} stalled={}",
            Local::now().format("%Y.%m.%d"),
            self.plies_played,
            self.player_one_moves,
            self.player_two_moves,
            self.captures,
            stalled
        )
    }
}

/// Deploy the standard skirmish formation for both players: a full pawn
/// rank each, backed by rooks, knights, bishops, a queen, and a king.
/// Returns the two rosters in recruitment order.
pub fn deploy_standard_sides(arena: &mut GameArena) -> ArenaResult<[Vec<UnitId>; 2]> {
    let (xmax, ymax) = arena.size();
    let back_rank = [
        UnitKind::Rook,
        UnitKind::Knight,
        UnitKind::Bishop,
        UnitKind::Queen,
        UnitKind::King,
        UnitKind::Bishop,
        UnitKind::Knight,
        UnitKind::Rook,
    ];

    let mut rosters: [Vec<UnitId>; 2] = [Vec::new(), Vec::new()];
    for x in 0..xmax {
        rosters[0].push(arena.recruit(
            PLAYER_ONE,
            Some(Square::new(x, 1)),
            UnitKind::Pawn {
                forward: Vector::new(0, 1),
            },
        )?);
        rosters[1].push(arena.recruit(
            PLAYER_TWO,
            Some(Square::new(x, ymax - 2)),
            UnitKind::Pawn {
                forward: Vector::new(0, -1),
            },
        )?);
    }
    for (x, kind) in back_rank.iter().enumerate() {
        rosters[0].push(arena.recruit(PLAYER_ONE, Some(Square::new(x as i32, 0)), *kind)?);
        rosters[1].push(arena.recruit(PLAYER_TWO, Some(Square::new(x as i32, ymax - 1)), *kind)?);
    }
    Ok(rosters)
}

/// Play one seeded skirmish and collect its statistics.
///
/// Sides alternate, player one first. Each ply picks a random unit of the
/// side to move among those with at least one valid move, then plays a
/// random entry of that unit's move list through
/// `GameArena::try_move_unit`. A side with no movable unit forfeits the
/// remaining plies and ends the skirmish.
pub fn play_skirmish(config: SkirmishConfig) -> ArenaResult<SkirmishStats> {
    let mut arena = GameArena::new(8, 8);
    let rosters = deploy_standard_sides(&mut arena)?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut stats = SkirmishStats::default();

    for ply in 0..config.max_plies {
        let side = (ply % 2) as usize;

        let movable: Vec<UnitId> = rosters[side]
            .iter()
            .copied()
            .filter(|&unit_id| !arena.valid_moves(unit_id).is_empty())
            .collect();
        let Some(&unit_id) = movable.as_slice().choose(&mut rng) else {
            stats.stalled_player = Some(if side == 0 { PLAYER_ONE } else { PLAYER_TWO });
            if config.verbose {
                println!("[skirmish] player {} has no moves, stopping", side + 1);
            }
            break;
        };

        let moves = arena.valid_moves(unit_id);
        let destination = moves[rng.random_range(0..moves.len())];
        if arena.is_occupied(destination) {
            // Own-side squares are never offered, so this is a capture.
            stats.captures += 1;
        }

        let origin = arena.find_square(unit_id)?;
        arena.try_move_unit(unit_id, destination)?;

        if side == 0 {
            stats.player_one_moves += 1;
        } else {
            stats.player_two_moves += 1;
        }
        stats.plies_played += 1;
        stats.played.push(format!(
            "{}: ({}, {}) -> ({}, {})",
            unit_id, origin.x, origin.y, destination.x, destination.y
        ));
        if config.verbose {
            println!(
                "[skirmish] ply {:>3} player {} unit {:>2} ({}, {}) -> ({}, {})",
                ply + 1,
                side + 1,
                unit_id,
                origin.x,
                origin.y,
                destination.x,
                destination.y
            );
        }
    }

    if config.verbose {
        println!("{}", render_snapshot(&arena.take_snapshot()));
    }
    Ok(stats)
}
