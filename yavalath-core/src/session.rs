//! Turn bookkeeping for one game

use crate::board::Hex;
use crate::game::{Board, BoardError, Move, Player};
use crate::layout::Layout;
use crate::rules::{self, LineRun, Outcome};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Game-level state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    /// The player completed a run of four or more
    Won(Player),
    /// The player completed a run of exactly three
    Lost(Player),
    /// Every cell filled without a decision
    Drawn,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Player credited with the game, if any
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::Lost(player) => Some(player.opponent()),
            GameStatus::InProgress | GameStatus::Drawn => None,
        }
    }
}

/// Reasons a move was not applied; none of them change the session
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("no cell at pixel ({x}, {y})")]
    NoCell { x: f64, y: f64 },

    #[error("game is over: {0:?}")]
    GameOver(GameStatus),
}

/// What an accepted move did
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveReport {
    pub mv: Move,
    pub outcome: Outcome,
    pub status: GameStatus,
}

/// Cell under the pointer as the current player sees it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverTarget {
    pub hex: Hex,
    pub owner: Option<Player>,
    /// A click here would be accepted
    pub playable: bool,
}

/// A single game: board, turn counter, status and history
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    turn: u32,
    status: GameStatus,
    history: Vec<Move>,
    decisive_line: Option<LineRun>,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: 1,
            status: GameStatus::InProgress,
            history: Vec::new(),
            decisive_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Turn number the next move will carry
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn current_player(&self) -> Player {
        Player::for_turn(self.turn)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Run that ended the game, if it ended on a line
    pub fn decisive_line(&self) -> Option<&LineRun> {
        self.decisive_line.as_ref()
    }

    /// Place the current player's stone at `hex`
    pub fn play(&mut self, hex: Hex) -> Result<MoveReport, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver(self.status));
        }

        let mv = Move {
            hex,
            player: self.current_player(),
            turn: self.turn,
        };
        self.board.place(hex, mv.player)?;

        let outcome = rules::evaluate(&self.board, &mv);
        self.status = match outcome {
            Outcome::Win => GameStatus::Won(mv.player),
            Outcome::Loss => GameStatus::Lost(mv.player),
            Outcome::Continue if self.board.is_full() => GameStatus::Drawn,
            Outcome::Continue => GameStatus::InProgress,
        };
        if outcome != Outcome::Continue {
            self.decisive_line = rules::decisive_line(&self.board, &mv);
        }

        self.history.push(mv);
        self.turn += 1;

        Ok(MoveReport {
            mv,
            outcome,
            status: self.status,
        })
    }

    /// Place the current player's stone under a pointer click
    pub fn click(&mut self, layout: &Layout, x: f64, y: f64) -> Result<MoveReport, GameError> {
        let hex = layout
            .pixel_to_axial(x, y)
            .ok_or(GameError::NoCell { x, y })?;
        self.play(hex)
    }

    /// Cell under the pointer, with its owner
    pub fn hover(&self, layout: &Layout, x: f64, y: f64) -> Option<HoverTarget> {
        let hex = layout.pixel_to_axial(x, y)?;
        let owner = self.board.player_at(hex);
        Some(HoverTarget {
            hex,
            owner,
            playable: owner.is_none() && !self.status.is_over(),
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
