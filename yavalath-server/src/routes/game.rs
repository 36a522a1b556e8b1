//! Game API endpoints
//!
//! A single hot-seat game: the browser sends clicks for whichever player is
//! to move and gets back the full game view.

use crate::state::ServerState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use yavalath_core::{
    BoardError, GameError, GameSession, GameStatus, Hex, HoverTarget, Move, MoveReport, Player,
};

/// One cell and its owner
#[derive(Serialize)]
pub struct CellState {
    pub q: i8,
    pub r: i8,
    pub owner: Option<Player>,
}

/// Everything the visualizer needs to draw the game
#[derive(Serialize)]
pub struct GameView {
    pub turn: u32,
    pub current_player: Player,
    pub status: GameStatus,
    pub winner: Option<Player>,
    pub cells: Vec<CellState>,
    pub decisive_line: Option<Vec<Hex>>,
    pub history: Vec<Move>,
}

impl GameView {
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            turn: session.turn(),
            current_player: session.current_player(),
            status: session.status(),
            winner: session.winner(),
            cells: session
                .board()
                .cells()
                .map(|(hex, cell)| CellState {
                    q: hex.q,
                    r: hex.r,
                    owner: cell.player(),
                })
                .collect(),
            decisive_line: session.decisive_line().map(|run| run.cells.clone()),
            history: session.history().to_vec(),
        }
    }
}

/// Result of an accepted move
#[derive(Serialize)]
pub struct MoveResponse {
    pub report: MoveReport,
    pub game: GameView,
}

/// Rejected move, mapped to an HTTP status
pub enum ApiError {
    Game(GameError),
    /// Axial coordinates too large to address any cell
    OffBoard { q: i32, r: i32 },
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        Self::Game(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            Self::OffBoard { q, r } => (
                StatusCode::BAD_REQUEST,
                "out_of_bounds",
                format!("({}, {}) is not on the board", q, r),
            ),
            Self::Game(err) => {
                let (status, kind) = match err {
                    GameError::Board(BoardError::OutOfBounds(_)) => {
                        (StatusCode::BAD_REQUEST, "out_of_bounds")
                    }
                    GameError::NoCell { .. } => (StatusCode::BAD_REQUEST, "no_cell"),
                    GameError::Board(BoardError::CellOccupied(_)) => {
                        (StatusCode::CONFLICT, "cell_occupied")
                    }
                    GameError::GameOver(_) => (StatusCode::CONFLICT, "game_over"),
                };
                (status, kind, err.to_string())
            }
        };
        tracing::debug!("Rejected move: {}", message);
        let body = Json(json!({
            "error": message,
            "kind": kind,
        }));
        (status, body).into_response()
    }
}

fn log_report(report: &MoveReport) {
    tracing::debug!(
        "Turn {}: {:?} plays {}",
        report.mv.turn,
        report.mv.player,
        report.mv.hex
    );
    if report.status.is_over() {
        tracing::info!("Game over after turn {}: {:?}", report.mv.turn, report.status);
    }
}

/// Get current game state
pub async fn get_game_state(State(state): State<Arc<ServerState>>) -> Json<GameView> {
    let game = state.game.read().unwrap();
    Json(GameView::from_session(&game))
}

/// Discard the current game and start a new one
pub async fn start_game(State(state): State<Arc<ServerState>>) -> Json<GameView> {
    let mut game = state.game.write().unwrap();
    *game = GameSession::new();
    tracing::info!("New game started");
    Json(GameView::from_session(&game))
}

/// Click request in window pixels
#[derive(Deserialize)]
pub struct ClickRequest {
    pub x: f64,
    pub y: f64,
}

/// Place a stone under a pointer click
pub async fn click(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<ClickRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    let mut game = state.game.write().unwrap();
    let report = game.click(&state.layout, req.x, req.y)?;
    log_report(&report);
    Ok(Json(MoveResponse {
        report,
        game: GameView::from_session(&game),
    }))
}

/// Placement request in axial coordinates
#[derive(Deserialize)]
pub struct PlaceRequest {
    pub q: i32,
    pub r: i32,
}

/// Place a stone on a cell
pub async fn place(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<PlaceRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    let hex = Hex::checked(req.q, req.r).ok_or(ApiError::OffBoard { q: req.q, r: req.r })?;
    let mut game = state.game.write().unwrap();
    let report = game.play(hex)?;
    log_report(&report);
    Ok(Json(MoveResponse {
        report,
        game: GameView::from_session(&game),
    }))
}

/// Hover query params
#[derive(Deserialize)]
pub struct HoverParams {
    pub x: f64,
    pub y: f64,
}

#[derive(Serialize)]
pub struct HoverResponse {
    pub target: Option<HoverTarget>,
}

/// Cell under the pointer, for highlighting
pub async fn hover(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<HoverParams>,
) -> Json<HoverResponse> {
    let game = state.game.read().unwrap();
    Json(HoverResponse {
        target: game.hover(&state.layout, params.x, params.y),
    })
}
