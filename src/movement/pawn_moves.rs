//! Pawn movement: the forward march and the diagonal capture rule.

use crate::arena::arena_types::{PlayerId, Square, Vector};
use crate::arena::snapshot::Snapshot;

/// Every square a pawn owned by `owner` may move to from `origin`.
///
/// The march runs along `forward` for up to two squares while the pawn has
/// never moved (an unknown history counts as never moved) and one square
/// afterwards. Any occupant ends the march before the blocked square, so a
/// blocked first square also hides the second. Diagonal squares are added
/// after the march, and only when an enemy stands on them.
pub fn pawn_reachable_squares(
    origin: Square,
    forward: Vector,
    has_been_moved: Option<bool>,
    owner: PlayerId,
    snapshot: &Snapshot,
) -> Vec<Square> {
    let mut reachable = Vec::new();

    let max_steps = if has_been_moved == Some(true) { 1 } else { 2 };
    let mut square = origin.offset(forward);
    for _ in 0..max_steps {
        let Some(node) = snapshot.node(square) else { break; };
        if node.is_occupied() {
            break;
        }
        reachable.push(square);
        square = square.offset(forward);
    }

    for square in pawn_threat_range(origin, forward, snapshot) {
        let Some(node) = snapshot.node(square) else { continue; };
        let Some(unit) = node.unit else { continue; };
        if unit.owner != owner {
            reachable.push(square);
        }
    }

    reachable
}

/// The two squares a pawn covers: one step along `forward`, one file to
/// either side. Off-board squares are dropped; occupancy is ignored, so a
/// pawn guards its diagonals even while they are empty.
pub fn pawn_threat_range(origin: Square, forward: Vector, snapshot: &Snapshot) -> Vec<Square> {
    let mut covered = Vec::new();
    for dx in [-1, 1] {
        let square = origin.offset(Vector::new(dx, forward.dy));
        if snapshot.contains(square) {
            covered.push(square);
        }
    }
    covered
}
