//! Per-kind dispatch for the two movement queries.
//!
//! Both entry points are pure functions of an origin and a snapshot. They
//! never fail: a unit with nowhere to go simply yields an empty list.

use crate::arena::arena_types::Square;
use crate::arena::snapshot::Snapshot;
use crate::arena::unit::{UnitKind, UnitRecord};
use crate::movement::king_safety::exclude_enemy_threats;
use crate::movement::pawn_moves::{pawn_reachable_squares, pawn_threat_range};
use crate::movement::slider_moves::{slider_reachable_squares, slider_threat_range};

/// Every square `unit` may legally move to from `origin`.
///
/// Kings additionally have every enemy-covered square removed from their
/// candidates; no other kind takes a safety filter.
pub fn reachable_squares(unit: UnitRecord, origin: Square, snapshot: &Snapshot) -> Vec<Square> {
    match unit.kind {
        UnitKind::Pawn { forward } => {
            pawn_reachable_squares(origin, forward, unit.has_been_moved, unit.owner, snapshot)
        }
        UnitKind::King => {
            let candidates = slider_reachable_squares(
                origin,
                unit.kind.directions(),
                unit.kind.step_limit(),
                unit.owner,
                snapshot,
            );
            exclude_enemy_threats(candidates, unit.owner, snapshot)
        }
        _ => slider_reachable_squares(
            origin,
            unit.kind.directions(),
            unit.kind.step_limit(),
            unit.owner,
            snapshot,
        ),
    }
}

/// Every square `unit` covers from `origin`, whoever stands there.
///
/// This is the capture-pressure view used to build the enemy threat union,
/// so the king contributes its raw one-step range without a safety filter.
pub fn threat_range(unit: UnitRecord, origin: Square, snapshot: &Snapshot) -> Vec<Square> {
    match unit.kind {
        UnitKind::Pawn { forward } => pawn_threat_range(origin, forward, snapshot),
        _ => slider_threat_range(
            origin,
            unit.kind.directions(),
            unit.kind.step_limit(),
            snapshot,
        ),
    }
}
