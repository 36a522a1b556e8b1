//! Board storage, players and moves

use crate::board::{all_hexes, Hex, CELL_COUNT};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Player to move on a 1-based turn: odd turns are White's
    pub fn for_turn(turn: u32) -> Self {
        if turn % 2 == 1 {
            Player::White
        } else {
            Player::Black
        }
    }
}

/// Contents of a cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupancy {
    #[default]
    Empty,
    Occupied(Player),
}

impl Occupancy {
    pub fn is_empty(self) -> bool {
        self == Occupancy::Empty
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Occupancy::Empty => None,
            Occupancy::Occupied(player) => Some(player),
        }
    }
}

/// A placed stone: where, by whom, and on which turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub hex: Hex,
    pub player: Player,
    pub turn: u32,
}

/// Board-level failures
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("{0} is not on the board")]
    OutOfBounds(Hex),

    #[error("{0} is already occupied")]
    CellOccupied(Hex),
}

// ============================================================================
// BOARD
// ============================================================================

/// The 61-cell board.
///
/// Every on-board hex has an entry from construction onwards; off-board hexes
/// have none and cannot be addressed. Stones are never removed.
///
/// `Board` has no interior synchronization: callers sharing one between
/// threads must serialize `place` and rule evaluation themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: FxHashMap<Hex, Occupancy>,
    stones: usize,
}

impl Board {
    pub fn new() -> Self {
        let mut cells = FxHashMap::default();
        cells.reserve(CELL_COUNT);
        for hex in all_hexes() {
            cells.insert(hex, Occupancy::Empty);
        }
        Self { cells, stones: 0 }
    }

    /// Whether `hex` is addressable on this board
    pub fn is_on_board(&self, hex: Hex) -> bool {
        self.cells.contains_key(&hex)
    }

    /// Contents of the cell at `hex`
    pub fn occupancy_at(&self, hex: Hex) -> Result<Occupancy, BoardError> {
        self.cells
            .get(&hex)
            .copied()
            .ok_or(BoardError::OutOfBounds(hex))
    }

    /// Put a stone for `player` on an empty cell
    pub fn place(&mut self, hex: Hex, player: Player) -> Result<(), BoardError> {
        let cell = self
            .cells
            .get_mut(&hex)
            .ok_or(BoardError::OutOfBounds(hex))?;
        if !cell.is_empty() {
            return Err(BoardError::CellOccupied(hex));
        }
        *cell = Occupancy::Occupied(player);
        self.stones += 1;
        Ok(())
    }

    /// Occupant of `hex` if it is on the board and taken
    pub fn player_at(&self, hex: Hex) -> Option<Player> {
        self.cells.get(&hex).and_then(|cell| cell.player())
    }

    /// All cells, row-major by r then q
    pub fn cells(&self) -> impl Iterator<Item = (Hex, Occupancy)> + '_ {
        all_hexes().map(move |hex| (hex, self.cells[&hex]))
    }

    /// Number of stones placed so far
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    pub fn is_full(&self) -> bool {
        self.stones == CELL_COUNT
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.cells().count(), CELL_COUNT);
        assert!(board.cells().all(|(_, cell)| cell.is_empty()));
        assert_eq!(board.stone_count(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_and_read_back() {
        let mut board = Board::new();
        board.place(Hex::new(1, -2), Player::White).unwrap();
        assert_eq!(
            board.occupancy_at(Hex::new(1, -2)),
            Ok(Occupancy::Occupied(Player::White))
        );
        assert_eq!(board.player_at(Hex::new(1, -2)), Some(Player::White));
        assert_eq!(board.stone_count(), 1);
    }

    #[test]
    fn test_place_out_of_bounds_does_not_mutate() {
        let mut board = Board::new();
        let before = board.clone();
        for hex in [Hex::new(5, 0), Hex::new(3, 2), Hex::new(-4, -4)] {
            assert_eq!(
                board.place(hex, Player::Black),
                Err(BoardError::OutOfBounds(hex))
            );
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_twice_fails_with_occupied() {
        let mut board = Board::new();
        let hex = Hex::new(0, 0);
        board.place(hex, Player::White).unwrap();
        let after_first = board.clone();
        assert_eq!(
            board.place(hex, Player::Black),
            Err(BoardError::CellOccupied(hex))
        );
        assert_eq!(board, after_first);
    }

    #[test]
    fn test_occupancy_off_board() {
        let board = Board::new();
        assert_eq!(
            board.occupancy_at(Hex::new(0, 5)),
            Err(BoardError::OutOfBounds(Hex::new(0, 5)))
        );
        assert!(!board.is_on_board(Hex::new(0, 5)));
        assert!(board.is_on_board(Hex::new(0, 4)));
    }

    #[test]
    fn test_turn_parity() {
        assert_eq!(Player::for_turn(1), Player::White);
        assert_eq!(Player::for_turn(2), Player::Black);
        assert_eq!(Player::for_turn(61), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BoardError::OutOfBounds(Hex::new(5, -1)).to_string(),
            "(5, -1) is not on the board"
        );
        assert_eq!(
            BoardError::CellOccupied(Hex::new(0, 0)).to_string(),
            "(0, 0) is already occupied"
        );
    }
}
