//! Unit records and the direction tables behind each movement rule.

use crate::arena::arena_types::{PlayerId, Vector};

/// The four orthogonal rays walked by rooks.
pub const ROOK_DIRECTIONS: [Vector; 4] = [
    Vector::new(1, 0),
    Vector::new(0, 1),
    Vector::new(-1, 0),
    Vector::new(0, -1),
];

/// The four diagonal rays walked by bishops.
pub const BISHOP_DIRECTIONS: [Vector; 4] = [
    Vector::new(1, 1),
    Vector::new(-1, 1),
    Vector::new(-1, -1),
    Vector::new(1, -1),
];

/// All eight compass rays, shared by the queen and the king.
pub const ROYAL_DIRECTIONS: [Vector; 8] = [
    Vector::new(1, 0),
    Vector::new(1, 1),
    Vector::new(0, 1),
    Vector::new(-1, 1),
    Vector::new(-1, 0),
    Vector::new(-1, -1),
    Vector::new(0, -1),
    Vector::new(1, -1),
];

/// The eight L-shaped knight jumps.
pub const KNIGHT_JUMPS: [Vector; 8] = [
    Vector::new(2, 1),
    Vector::new(1, 2),
    Vector::new(-1, 2),
    Vector::new(-2, 1),
    Vector::new(-2, -1),
    Vector::new(-1, -2),
    Vector::new(1, -2),
    Vector::new(2, -1),
];

/// Movement rule of a unit. The set is closed and dispatch happens through
/// a single match, so adding a kind means touching the rules in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// Marches along `forward` only and captures on the forward diagonals.
    Pawn { forward: Vector },
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl UnitKind {
    /// Directions walked by the straight-line movement rule. The pawn has
    /// its own rule and yields no directions here.
    pub fn directions(&self) -> &'static [Vector] {
        match self {
            UnitKind::Pawn { .. } => &[],
            UnitKind::Knight => &KNIGHT_JUMPS,
            UnitKind::Bishop => &BISHOP_DIRECTIONS,
            UnitKind::Rook => &ROOK_DIRECTIONS,
            UnitKind::Queen | UnitKind::King => &ROYAL_DIRECTIONS,
        }
    }

    /// How many steps a single direction may be walked. `0` means the walk
    /// only stops at a board edge or an occupied square.
    pub fn step_limit(&self) -> u32 {
        match self {
            UnitKind::Bishop | UnitKind::Rook | UnitKind::Queen => 0,
            UnitKind::Pawn { .. } | UnitKind::Knight | UnitKind::King => 1,
        }
    }
}

/// A recruited unit. Registry entries are never deleted: capture takes a
/// unit off the grid but its record, owner, and id all stay valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitRecord {
    pub owner: PlayerId,
    /// `None` for a record that has never been through recruitment,
    /// `Some(true)` once the unit has moved. Pawns read this to decide
    /// whether the two-square charge is still available.
    pub has_been_moved: Option<bool>,
    pub kind: UnitKind,
}

impl UnitRecord {
    pub fn new(owner: PlayerId, kind: UnitKind) -> Self {
        Self {
            owner,
            has_been_moved: None,
            kind,
        }
    }
}
