//! Board geometry endpoint

use crate::state::ServerState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use yavalath_core::{board::all_hexes, Point, BOARD_RADIUS, DIRECTIONS, LINE_FAMILIES};

#[derive(Serialize)]
pub struct CellGeometry {
    pub q: i8,
    pub r: i8,
    pub center: Point,
    pub corners: [Point; 6],
}

#[derive(Serialize)]
pub struct BoardInfo {
    pub radius: i8,
    pub window_width: f64,
    pub window_height: f64,
    pub circumradius: f64,
    pub inradius: f64,
    pub cells: Vec<CellGeometry>,
    pub directions: Vec<[i8; 2]>,
    pub direction_names: Vec<&'static str>,
    pub line_families: Vec<[u8; 2]>,
}

/// Get board geometry in window pixels
pub async fn get_board(State(state): State<Arc<ServerState>>) -> Json<BoardInfo> {
    let layout = &state.layout;
    let cells = all_hexes()
        .map(|hex| CellGeometry {
            q: hex.q,
            r: hex.r,
            center: layout.axial_to_pixel(hex),
            corners: layout.corners(hex),
        })
        .collect();

    Json(BoardInfo {
        radius: BOARD_RADIUS,
        window_width: state.display.window_width,
        window_height: state.display.window_height,
        circumradius: layout.circumradius,
        inradius: layout.inradius(),
        cells,
        directions: DIRECTIONS.iter().map(|&(dq, dr)| [dq, dr]).collect(),
        direction_names: vec!["N", "NE", "SE", "S", "SW", "NW"],
        line_families: LINE_FAMILIES.iter().map(|&(a, b)| [a, b]).collect(),
    })
}
