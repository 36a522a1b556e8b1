//! Play command - hot-seat game driven by stdin
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_game(), report_result()
//! - Level 3: apply_line()
//! - Level 4: input parsing

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use yavalath_core::{GameSession, GameStatus, Hex, Layout, MoveReport};

use crate::render::render_board;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Read pixel clicks "x y" instead of cells "q r"
    #[arg(long)]
    pub pixels: bool,

    /// Display configuration JSON file (window size, cell radius)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not print the board after each move
    #[arg(long)]
    pub quiet: bool,
}

/// How stdin lines are interpreted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InputMode {
    Axial,
    Pixels,
}

/// One parsed stdin line
#[derive(Clone, Copy, Debug, PartialEq)]
enum Input {
    Cell(Hex),
    Click { x: f64, y: f64 },
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Load display config
/// 2. Play until the game ends or input runs out
/// 3. Report the result
pub fn run(args: PlayArgs) -> Result<()> {
    let config = crate::load_display_config(args.config.as_deref())?;
    let layout = config.layout();
    let mode = if args.pixels { InputMode::Pixels } else { InputMode::Axial };

    tracing::info!(
        "Starting game ({} input)",
        if args.pixels { "pixel" } else { "axial" }
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let session = play_game(stdin.lock(), &mut out, &layout, mode, !args.quiet)?;

    report_result(&session, &mut out)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Feed stdin lines into a fresh session until it ends
fn play_game<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    layout: &Layout,
    mode: InputMode,
    show_board: bool,
) -> Result<GameSession> {
    let mut session = GameSession::new();

    if show_board {
        write!(out, "{}", render_board(session.board(), None))?;
    }

    for line in input.lines() {
        let line = line?;
        let Some(report) = apply_line(&mut session, layout, mode, &line) else {
            continue;
        };

        tracing::info!(
            "Turn {}: {:?} plays {}",
            report.mv.turn,
            report.mv.player,
            report.mv.hex
        );
        if show_board {
            writeln!(out)?;
            write!(out, "{}", render_board(session.board(), session.decisive_line()))?;
        }
        if report.status.is_over() {
            break;
        }
    }

    Ok(session)
}

/// Print the final status line
fn report_result<W: Write>(session: &GameSession, out: &mut W) -> Result<()> {
    writeln!(out, "{}", result_line(session.status(), session.history().len()))?;
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Apply one input line; rejected input is logged and skipped
fn apply_line(
    session: &mut GameSession,
    layout: &Layout,
    mode: InputMode,
    line: &str,
) -> Option<MoveReport> {
    let input = match parse_line(line, mode) {
        Ok(Some(input)) => input,
        Ok(None) => return None,
        Err(msg) => {
            tracing::warn!("Ignoring input {:?}: {}", line, msg);
            return None;
        }
    };

    let result = match input {
        Input::Cell(hex) => session.play(hex),
        Input::Click { x, y } => session.click(layout, x, y),
    };

    match result {
        Ok(report) => Some(report),
        Err(err) => {
            tracing::warn!("Move rejected: {}", err);
            None
        }
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Parse "a b" or "a,b"; blank lines and `#` comments yield `None`
fn parse_line(line: &str, mode: InputMode) -> Result<Option<Input>, String> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    let [a, b] = parts.as_slice() else {
        return Err(format!("expected two numbers, got {}", parts.len()));
    };

    match mode {
        InputMode::Axial => {
            let q = a.parse::<i8>().map_err(|e| format!("bad q {:?}: {}", a, e))?;
            let r = b.parse::<i8>().map_err(|e| format!("bad r {:?}: {}", b, e))?;
            Ok(Some(Input::Cell(Hex::new(q, r))))
        }
        InputMode::Pixels => {
            let x = a.parse::<f64>().map_err(|e| format!("bad x {:?}: {}", a, e))?;
            let y = b.parse::<f64>().map_err(|e| format!("bad y {:?}: {}", b, e))?;
            Ok(Some(Input::Click { x, y }))
        }
    }
}

fn result_line(status: GameStatus, moves: usize) -> String {
    match status {
        GameStatus::InProgress => format!("Game unfinished after {} moves", moves),
        GameStatus::Won(player) => {
            format!("{:?} wins with four in a row after {} moves", player, moves)
        }
        GameStatus::Lost(player) => format!(
            "{:?} loses with three in a row after {} moves; {:?} wins",
            player,
            moves,
            player.opponent()
        ),
        GameStatus::Drawn => format!("Draw: board full after {} moves", moves),
    }
}

// ============================================================================
// TESTS
// ============================================================================
