//! Yavalath line rule
//!
//! After a stone is placed, the three lines through it are measured:
//! - a run of four or more of the mover's stones wins
//! - otherwise a run of exactly three loses
//!
//! Nothing is decided before the fifth stone of the game.

use crate::board::{Hex, BOARD_RADIUS, LINE_FAMILIES};
use crate::game::{Board, Move, Player};
use serde::{Deserialize, Serialize};

/// First turn on which a move can end the game
pub const FIRST_DECISIVE_TURN: u32 = 5;

/// Run length that wins
pub const WIN_LENGTH: usize = 4;

/// Run length that loses
pub const LOSS_LENGTH: usize = 3;

/// Longest possible walk from a cell in one direction
const MAX_STEPS: usize = (2 * BOARD_RADIUS) as usize;

/// Effect of a move on the mover
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Continue,
    Win,
    Loss,
}

/// The mover's contiguous stones along one line family
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRun {
    /// Index into `LINE_FAMILIES`
    pub family: usize,
    /// Cells of the run in line order, including the played cell
    pub cells: Vec<Hex>,
}

// A run always holds the played cell, so it has no empty state
#[allow(clippy::len_without_is_empty)]
impl LineRun {
    pub fn len(&self) -> usize {
        self.cells.len()
    }
}

/// Count the mover's stones contiguous with `from`, walking in `direction`
fn walk(board: &Board, from: Hex, direction: u8, player: Player) -> Vec<Hex> {
    let mut run = Vec::new();
    let mut current = from;
    for _ in 0..MAX_STEPS {
        match current.step(direction) {
            Some(next) if board.player_at(next) == Some(player) => {
                run.push(next);
                current = next;
            }
            _ => break,
        }
    }
    run
}

/// Runs through `hex` for `player` along all three line families
pub fn scan_lines(board: &Board, hex: Hex, player: Player) -> [LineRun; 3] {
    std::array::from_fn(|family| {
        let (forward, backward) = LINE_FAMILIES[family];
        let mut cells = walk(board, hex, backward, player);
        cells.reverse();
        cells.push(hex);
        cells.extend(walk(board, hex, forward, player));
        LineRun { family, cells }
    })
}

/// Decide a move from its three runs; wins are checked across all families
/// before losses
pub fn verdict(runs: &[LineRun]) -> Outcome {
    if runs.iter().any(|run| run.len() >= WIN_LENGTH) {
        Outcome::Win
    } else if runs.iter().any(|run| run.len() == LOSS_LENGTH) {
        Outcome::Loss
    } else {
        Outcome::Continue
    }
}

/// Evaluate a move that has already been placed on `board`
pub fn evaluate(board: &Board, mv: &Move) -> Outcome {
    if mv.turn < FIRST_DECISIVE_TURN {
        return Outcome::Continue;
    }
    verdict(&scan_lines(board, mv.hex, mv.player))
}

/// The run that decided a move, if it was decisive
pub fn decisive_line(board: &Board, mv: &Move) -> Option<LineRun> {
    if mv.turn < FIRST_DECISIVE_TURN {
        return None;
    }
    let runs = scan_lines(board, mv.hex, mv.player);
    let deciding: fn(&LineRun) -> bool = match verdict(&runs) {
        Outcome::Continue => return None,
        Outcome::Win => |run: &LineRun| run.len() >= WIN_LENGTH,
        Outcome::Loss => |run: &LineRun| run.len() == LOSS_LENGTH,
    };
    runs.into_iter().find(|run| deciding(run))
}

// ============================================================================
// TESTS
// ============================================================================
