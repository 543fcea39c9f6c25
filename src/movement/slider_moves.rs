//! Straight-line movement: the shared walk behind knights, bishops,
//! rooks, queens, and the king's pre-safety candidates.

use crate::arena::arena_types::{PlayerId, Square, Vector};
use crate::arena::snapshot::Snapshot;

/// Every square a straight-walking unit covers from `origin`.
///
/// Each direction is walked independently, near squares first, until the
/// board edge, the first occupied square, or `step_limit` steps
/// (`0` lifts the limit). The first occupied square is included whoever
/// owns it: a unit covers its own side's units too, which is what keeps a
/// defended unit off the enemy king's move list.
pub fn slider_threat_range(
    origin: Square,
    directions: &[Vector],
    step_limit: u32,
    snapshot: &Snapshot,
) -> Vec<Square> {
    let mut covered = Vec::new();
    for &direction in directions {
        let mut square = origin.offset(direction);
        let mut step = 1u32;
        while step_limit == 0 || step <= step_limit {
            step += 1;
            let Some(node) = snapshot.node(square) else { break; };
            covered.push(square);
            if node.is_occupied() {
                break;
            }
            square = square.offset(direction);
        }
    }
    covered
}

/// Every square a straight-walking unit owned by `owner` may move to:
/// its threat range minus the squares its own side occupies.
pub fn slider_reachable_squares(
    origin: Square,
    directions: &[Vector],
    step_limit: u32,
    owner: PlayerId,
    snapshot: &Snapshot,
) -> Vec<Square> {
    let mut reachable = Vec::new();
    for square in slider_threat_range(origin, directions, step_limit, snapshot) {
        if let Some(node) = snapshot.node(square) {
            match node.unit {
                Some(unit) if unit.owner == owner => {}
                _ => reachable.push(square),
            }
        }
    }
    reachable
}
