//! Hex board geometry with axial coordinates

use serde::{Deserialize, Serialize};
use std::fmt;

/// Board radius (distance from center to edge)
pub const BOARD_RADIUS: i8 = 4;

/// Number of cells on a radius-4 hexagon
pub const CELL_COUNT: usize = 61;

/// Axial hex coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hex {
    pub q: i8,
    pub r: i8,
}

impl Hex {
    pub const fn new(q: i8, r: i8) -> Self {
        Self { q, r }
    }

    /// Third cube coordinate (q + r + s == 0), widened so any `Hex` has one
    pub const fn s(&self) -> i32 {
        -(self.q as i32) - self.r as i32
    }

    /// Check if this hex is on the board
    pub fn is_valid(&self) -> bool {
        in_bounds(self.q as i32, self.r as i32)
    }

    /// Distance from center (0,0)
    pub fn distance_to_center(&self) -> i32 {
        self.distance_to(Hex::new(0, 0))
    }

    /// Distance between two hexes
    pub fn distance_to(&self, other: Hex) -> i32 {
        let dq = (self.q as i32 - other.q as i32).abs();
        let dr = (self.r as i32 - other.r as i32).abs();
        let ds = (self.s() - other.s()).abs();
        (dq + dr + ds) / 2
    }

    /// Neighbor in `direction`, or `None` when it would leave the board
    pub fn step(&self, direction: u8) -> Option<Hex> {
        let (dq, dr) = DIRECTIONS[direction as usize % 6];
        let (q, r) = (self.q as i32 + dq as i32, self.r as i32 + dr as i32);
        in_bounds(q, r).then(|| Hex::new(q as i8, r as i8))
    }

    /// Build a hex from wide integers, rejecting anything off the board
    pub fn checked(q: i32, r: i32) -> Option<Hex> {
        in_bounds(q, r).then(|| Hex::new(q as i8, r as i8))
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

/// Bounds invariant: |q| <= 4, |r| <= 4, |s| <= 4
fn in_bounds(q: i32, r: i32) -> bool {
    let radius = BOARD_RADIUS as u32;
    q.unsigned_abs() <= radius && r.unsigned_abs() <= radius && (q + r).unsigned_abs() <= radius
}

/// Direction vectors in axial coordinates (dq, dr)
/// Index: 0=N, 1=NE, 2=SE, 3=S, 4=SW, 5=NW
pub const DIRECTIONS: [(i8, i8); 6] = [
    (0, -1),  // N
    (1, -1),  // NE
    (1, 0),   // SE
    (0, 1),   // S
    (-1, 1),  // SW
    (-1, 0),  // NW
];

/// Opposite direction index
pub const fn opposite(direction: u8) -> u8 {
    (direction + 3) % 6
}

/// The three line families as (forward, backward) direction pairs.
///
/// In cube form: {(+1,0,-1),(-1,0,+1)}, {(0,-1,+1),(0,+1,-1)},
/// {(-1,+1,0),(+1,-1,0)}.
pub const LINE_FAMILIES: [(u8, u8); 3] = [
    (2, 5), // SE / NW
    (3, 0), // S / N
    (1, 4), // NE / SW
];

/// All on-board hexes, row-major by r then q
pub fn all_hexes() -> impl Iterator<Item = Hex> {
    (-BOARD_RADIUS..=BOARD_RADIUS).flat_map(|r| {
        (-BOARD_RADIUS..=BOARD_RADIUS)
            .map(move |q| Hex::new(q, r))
            .filter(Hex::is_valid)
    })
}
