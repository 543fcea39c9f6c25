//! Immutable full-board captures used by every move-legality query.
//!
//! A snapshot is taken in a single pass over the grid before any rule
//! evaluation starts, so a query can never observe a board that is being
//! mutated underneath it. Snapshots own all of their data and can be
//! handed to other threads or kept around after the arena has moved on;
//! a kept snapshot simply goes stale.

use crate::arena::arena_errors::{ArenaError, ArenaResult};
use crate::arena::arena_types::{Square, UnitId, NO_UNIT};
use crate::arena::unit::UnitRecord;

/// One captured cell: the occupying id plus a copy of that unit's record,
/// or `SnapshotNode::EMPTY` for a vacant square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotNode {
    pub unit_id: UnitId,
    pub unit: Option<UnitRecord>,
}

impl SnapshotNode {
    pub const EMPTY: SnapshotNode = SnapshotNode {
        unit_id: NO_UNIT,
        unit: None,
    };

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.unit_id != NO_UNIT
    }
}

/// A read-only view of the whole board at one instant.
#[derive(Debug, Clone)]
pub struct Snapshot {
    xmax: i32,
    ymax: i32,
    nodes: Vec<SnapshotNode>,
}

impl Snapshot {
    pub fn new(xmax: i32, ymax: i32, nodes: Vec<SnapshotNode>) -> Self {
        Self { xmax, ymax, nodes }
    }

    /// Number of files captured; valid x coordinates are `0..xmax`.
    #[inline]
    pub fn xmax(&self) -> i32 {
        self.xmax
    }

    /// Number of ranks captured; valid y coordinates are `0..ymax`.
    #[inline]
    pub fn ymax(&self) -> i32 {
        self.ymax
    }

    /// Whether the square lies inside the captured grid.
    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        square.x >= 0 && square.x < self.xmax && square.y >= 0 && square.y < self.ymax
    }

    /// The node at `square`, or `None` when the square is off the grid.
    /// Walks probe squares with this accessor and treat `None` as an edge.
    #[inline]
    pub fn node(&self, square: Square) -> Option<SnapshotNode> {
        if self.contains(square) {
            Some(self.nodes[(square.y * self.xmax + square.x) as usize])
        } else {
            None
        }
    }

    /// Strict cell accessor: errs with `ArenaError::OutOfBounds` instead
    /// of answering leniently the way `Snapshot::node` does.
    pub fn get_node(&self, x: i32, y: i32) -> ArenaResult<SnapshotNode> {
        let square = Square::new(x, y);
        self.node(square).ok_or(ArenaError::OutOfBounds(square))
    }
}

#[cfg(test)]
mod tests {
    use super::NO_UNIT;
    use crate::arena::arena_errors::ArenaError;
    use crate::arena::arena_types::Square;
    use crate::arena::game_arena::GameArena;
    use crate::arena::unit::UnitKind;

    #[test]
    fn snapshot_reports_dimensions_and_occupants() {
        let mut arena = GameArena::new(5, 3);
        let rook = arena
            .recruit(1, Some(Square::new(4, 2)), UnitKind::Rook)
            .expect("recruit should succeed");

        let snapshot = arena.take_snapshot();
        assert_eq!(snapshot.xmax(), 5);
        assert_eq!(snapshot.ymax(), 3);

        let node = snapshot.get_node(4, 2).expect("cell should be readable");
        assert_eq!(node.unit_id, rook);
        assert_eq!(node.unit.map(|unit| unit.owner), Some(1));

        let empty = snapshot.get_node(0, 0).expect("cell should be readable");
        assert_eq!(empty.unit_id, NO_UNIT);
        assert!(empty.unit.is_none());
        assert!(!empty.is_occupied());
    }

    #[test]
    fn get_node_rejects_out_of_range_coordinates() {
        let arena = GameArena::new(8, 8);
        let snapshot = arena.take_snapshot();

        assert_eq!(
            snapshot.get_node(-1, 0),
            Err(ArenaError::OutOfBounds(Square::new(-1, 0)))
        );
        assert_eq!(
            snapshot.get_node(3, 8),
            Err(ArenaError::OutOfBounds(Square::new(3, 8)))
        );
        assert!(snapshot.node(Square::new(8, 8)).is_none());
    }

    #[test]
    fn snapshots_do_not_observe_later_mutations() {
        let mut arena = GameArena::new(8, 8);
        let rook = arena
            .recruit(1, Some(Square::new(0, 0)), UnitKind::Rook)
            .expect("recruit should succeed");

        let before = arena.take_snapshot();
        arena
            .move_unit(rook, Square::new(5, 5))
            .expect("move should succeed");

        let stale = before.get_node(0, 0).expect("cell should be readable");
        assert_eq!(stale.unit_id, rook);

        let fresh = arena.take_snapshot();
        assert_eq!(
            fresh.get_node(0, 0).expect("cell should be readable").unit_id,
            NO_UNIT
        );
        assert_eq!(
            fresh.get_node(5, 5).expect("cell should be readable").unit_id,
            rook
        );
    }
}
