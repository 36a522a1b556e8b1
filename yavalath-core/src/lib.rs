//! Yavalath Core - Board model and line rule
//!
//! This crate provides the core game logic for Yavalath:
//! - Board geometry (radius-4 hex grid with axial coordinates)
//! - Pixel <-> axial conversion for pointer input
//! - Cell occupancy storage
//! - Line detection: four in a row wins, exactly three loses
//! - Turn bookkeeping for a single game
//!
//! The crate performs no I/O; hosts feed it pointer positions or cells and
//! present the returned results.

pub mod board;
pub mod layout;
pub mod game;
pub mod rules;
pub mod session;
pub mod config;

// Re-exports for convenient access
pub use board::{Hex, DIRECTIONS, LINE_FAMILIES, BOARD_RADIUS, CELL_COUNT};
pub use layout::{Layout, Point};
pub use game::{Board, BoardError, Move, Occupancy, Player};
pub use rules::{evaluate, scan_lines, LineRun, Outcome};
pub use session::{GameError, GameSession, GameStatus, HoverTarget, MoveReport};
pub use config::DisplayConfig;
