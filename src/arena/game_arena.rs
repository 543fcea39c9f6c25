//! The arena: a mutable occupancy grid plus an append-only unit registry.
//!
//! All mutation funnels through `GameArena::recruit` and
//! `GameArena::move_unit`. Legality queries never touch the live grid:
//! `GameArena::valid_moves` captures a fresh `Snapshot` and hands it to
//! the movement rules, so rules and board state stay decoupled.

use crate::arena::arena_errors::{ArenaError, ArenaResult};
use crate::arena::arena_types::{PlayerId, Square, UnitId, NO_UNIT};
use crate::arena::snapshot::{Snapshot, SnapshotNode};
use crate::arena::unit::{UnitKind, UnitRecord};
use crate::movement::movement_rules;

#[derive(Debug, Clone)]
pub struct GameArena {
    xmax: i32,
    ymax: i32,
    /// Row-major occupancy grid holding `NO_UNIT` for empty cells.
    grid: Vec<UnitId>,
    /// Every unit ever recruited, indexed by `id - 1`. Entries are never
    /// removed, so captured units keep their owner and kind.
    units: Vec<UnitRecord>,
    /// Current square per unit id, maintained in lockstep with `grid` so
    /// position lookups avoid a full-board scan. `None` while off board.
    positions: Vec<Option<Square>>,
}

impl GameArena {
    /// An empty board of `width` files by `height` ranks.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            xmax: width as i32,
            ymax: height as i32,
            grid: vec![NO_UNIT; (width as usize) * (height as usize)],
            units: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Board dimensions as `(xmax, ymax)`.
    #[inline]
    pub fn size(&self) -> (i32, i32) {
        (self.xmax, self.ymax)
    }

    /// Whether the square lies inside the grid.
    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        square.x >= 0 && square.x < self.xmax && square.y >= 0 && square.y < self.ymax
    }

    /// Whether `unit_id` was ever issued. Captured units stay valid and
    /// `NO_UNIT` never is.
    #[inline]
    pub fn is_valid_unit_id(&self, unit_id: UnitId) -> bool {
        unit_id >= 1 && (unit_id as usize) <= self.units.len()
    }

    #[inline]
    fn cell_index(&self, square: Square) -> usize {
        (square.y * self.xmax + square.x) as usize
    }

    #[inline]
    fn registry_index(unit_id: UnitId) -> usize {
        (unit_id - 1) as usize
    }

    /// Recruit a unit for `owner` and return its freshly issued id.
    ///
    /// With `Some(square)` the unit deploys immediately, capturing any
    /// occupant exactly as a move would; with `None` it joins the registry
    /// off board and waits for `GameArena::move_unit`. A square outside
    /// the grid is rejected before an id is issued, so a failed recruit
    /// leaves no trace in the registry.
    pub fn recruit(
        &mut self,
        owner: PlayerId,
        square: Option<Square>,
        kind: UnitKind,
    ) -> ArenaResult<UnitId> {
        if let Some(target) = square {
            if !self.contains(target) {
                return Err(ArenaError::OutOfBounds(target));
            }
        }

        let mut record = UnitRecord::new(owner, kind);
        record.has_been_moved = Some(false);
        self.units.push(record);
        self.positions.push(None);
        let unit_id = self.units.len() as UnitId;

        if let Some(target) = square {
            self.place(unit_id, target);
        }
        Ok(unit_id)
    }

    /// The player the unit fights for, on board or not.
    pub fn owner_of(&self, unit_id: UnitId) -> ArenaResult<PlayerId> {
        if !self.is_valid_unit_id(unit_id) {
            return Err(ArenaError::InvalidUnitId(unit_id));
        }
        Ok(self.units[Self::registry_index(unit_id)].owner)
    }

    /// Put `unit_id` on `square` unconditionally and mark it moved.
    ///
    /// This is the trusted primitive: no movement rule is consulted, and
    /// whatever occupies the destination is captured, friend or foe. It
    /// also re-places units that are currently off board, which is how a
    /// captured unit can return to play. Callers wanting the rules
    /// enforced use `GameArena::try_move_unit`.
    pub fn move_unit(&mut self, unit_id: UnitId, square: Square) -> ArenaResult<()> {
        if !self.is_valid_unit_id(unit_id) {
            return Err(ArenaError::InvalidUnitId(unit_id));
        }
        if !self.contains(square) {
            return Err(ArenaError::OutOfBounds(square));
        }
        self.place(unit_id, square);
        self.units[Self::registry_index(unit_id)].has_been_moved = Some(true);
        Ok(())
    }

    /// Like `GameArena::move_unit`, but the destination must be one of
    /// the unit's current valid moves.
    pub fn try_move_unit(&mut self, unit_id: UnitId, square: Square) -> ArenaResult<()> {
        if !self.is_valid_unit_id(unit_id) {
            return Err(ArenaError::InvalidUnitId(unit_id));
        }
        if !self.valid_moves(unit_id).contains(&square) {
            return Err(ArenaError::IllegalDestination(unit_id, square));
        }
        self.move_unit(unit_id, square)
    }

    /// Write `unit_id` into `square`, erasing its old cell and evicting
    /// any occupant of the destination. Grid and side index move together.
    /// Expects a valid id and an in-bounds square.
    fn place(&mut self, unit_id: UnitId, square: Square) {
        let registry_index = Self::registry_index(unit_id);
        if let Some(previous) = self.positions[registry_index] {
            let cell = self.cell_index(previous);
            self.grid[cell] = NO_UNIT;
        }

        let destination = self.cell_index(square);
        let victim = self.grid[destination];
        if victim != NO_UNIT {
            self.positions[Self::registry_index(victim)] = None;
        }
        self.grid[destination] = unit_id;
        self.positions[registry_index] = Some(square);
    }

    /// The square the unit currently occupies.
    pub fn find_square(&self, unit_id: UnitId) -> ArenaResult<Square> {
        if !self.is_valid_unit_id(unit_id) {
            return Err(ArenaError::InvalidUnitId(unit_id));
        }
        self.positions[Self::registry_index(unit_id)].ok_or(ArenaError::NotOnBoard(unit_id))
    }

    /// Whether the square holds a unit. Squares outside the grid simply
    /// report `false`; this probe never errs.
    pub fn is_occupied(&self, square: Square) -> bool {
        if !self.contains(square) {
            return false;
        }
        self.grid[self.cell_index(square)] != NO_UNIT
    }

    /// Capture the whole grid as an immutable `Snapshot` in one pass.
    /// Snapshots are never cached, so every caller sees the latest board.
    pub fn take_snapshot(&self) -> Snapshot {
        let nodes = self
            .grid
            .iter()
            .map(|&unit_id| {
                if unit_id == NO_UNIT {
                    SnapshotNode::EMPTY
                } else {
                    SnapshotNode {
                        unit_id,
                        unit: Some(self.units[Self::registry_index(unit_id)]),
                    }
                }
            })
            .collect();
        Snapshot::new(self.xmax, self.ymax, nodes)
    }

    /// Every square the unit may currently move to, in the deterministic
    /// order its movement rule walks them.
    ///
    /// Unknown ids and units that are off the board yield an empty list
    /// rather than an error, so callers can poll a whole roster without
    /// tracking which units are still alive.
    pub fn valid_moves(&self, unit_id: UnitId) -> Vec<Square> {
        if !self.is_valid_unit_id(unit_id) {
            return Vec::new();
        }
        let Some(origin) = self.positions[Self::registry_index(unit_id)] else {
            return Vec::new();
        };
        let unit = self.units[Self::registry_index(unit_id)];
        movement_rules::reachable_squares(unit, origin, &self.take_snapshot())
    }
}
