//! Status endpoint: server liveness plus a one-line summary of the game

use crate::state::ServerState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use yavalath_core::{GameStatus, Player, CELL_COUNT};

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub game: &'static str,
    pub game_status: GameStatus,
    /// Stones placed so far, out of `cells`
    pub stones: usize,
    pub cells: usize,
    pub to_move: Option<Player>,
}

pub async fn status_handler(State(state): State<Arc<ServerState>>) -> Json<StatusResponse> {
    let game = state.game.read().unwrap();
    let game_status = game.status();
    Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        game: "yavalath",
        game_status,
        stones: game.board().stone_count(),
        cells: CELL_COUNT,
        to_move: (!game_status.is_over()).then(|| game.current_player()),
    })
}
