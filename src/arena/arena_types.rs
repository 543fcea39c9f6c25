//! Coordinate and identifier primitives shared across the arena engine.

use std::fmt;

/// Player number attached to every unit. Opaque to the engine: any `u32`
/// is a valid player and sides are only ever compared for equality.
pub type PlayerId = u32;

/// Identifier of a recruited unit. Ids are issued counting up from 1 and
/// are never reused, so they stay valid after the unit is captured.
pub type UnitId = u32;

/// Occupant of an empty board cell. Never issued to a real unit.
pub const NO_UNIT: UnitId = 0;

/// A board coordinate. Coordinates are signed so a walk can step one
/// square past an edge and have the probe fail cleanly.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub x: i32,
    pub y: i32,
}

impl Square {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The square one `direction` step away.
    #[inline]
    pub const fn offset(self, direction: Vector) -> Self {
        Self::new(self.x + direction.dx, self.y + direction.dy)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A movement delta, applied one step at a time while walking a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    pub dx: i32,
    pub dy: i32,
}

impl Vector {
    #[inline]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}
