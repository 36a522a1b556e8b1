//! Integration tests for yavalath-server API

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use yavalath_core::{DisplayConfig, Hex};
use yavalath_server::{create_router, ServerConfig, ServerState};

fn test_app() -> Router {
    let config = ServerConfig::default();
    let state = Arc::new(ServerState::new(config.display.clone()));
    create_router(&config, state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

async fn place(app: &Router, q: i32, r: i32) -> (StatusCode, Value) {
    send(app, "POST", "/api/game/place", Some(json!({ "q": q, "r": r }))).await
}

#[tokio::test]
async fn test_status_endpoint() {
    let app = test_app();
    let (status, json) = send(&app, "GET", "/api/status", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["game"], "yavalath");
    assert_eq!(json["game_status"], "InProgress");
    assert_eq!(json["stones"], 0);
    assert_eq!(json["cells"], 61);
    assert_eq!(json["to_move"], "White");

    let (status, _) = place(&app, 0, 0).await;
    assert_eq!(status, StatusCode::OK);
    let (_, json) = send(&app, "GET", "/api/status", None).await;
    assert_eq!(json["stones"], 1);
    assert_eq!(json["to_move"], "Black");
}

#[tokio::test]
async fn test_board_endpoint() {
    let app = test_app();
    let (status, json) = send(&app, "GET", "/api/board", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["radius"], 4);
    assert_eq!(json["cells"].as_array().unwrap().len(), 61);
    assert_eq!(json["directions"].as_array().unwrap().len(), 6);
    assert_eq!(json["line_families"].as_array().unwrap().len(), 3);

    // Center cell sits in the middle of the default 1200x800 window
    let center = json["cells"]
        .as_array()
        .unwrap()
        .iter()
        .find(|cell| cell["q"] == 0 && cell["r"] == 0)
        .unwrap();
    assert_eq!(center["center"]["x"], 600.0);
    assert_eq!(center["center"]["y"], 400.0);
}

#[tokio::test]
async fn test_initial_game_state() {
    let app = test_app();
    let (status, json) = send(&app, "GET", "/api/game/state", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["turn"], 1);
    assert_eq!(json["current_player"], "White");
    assert_eq!(json["status"], "InProgress");
    assert!(json["winner"].is_null());
    assert_eq!(json["cells"].as_array().unwrap().len(), 61);
    assert!(json["history"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_click_places_stone() {
    let app = test_app();
    let layout = DisplayConfig::default().layout();
    let p = layout.axial_to_pixel(Hex::new(1, -1));

    let (status, json) = send(
        &app,
        "POST",
        "/api/game/click",
        Some(json!({ "x": p.x, "y": p.y })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["report"]["mv"]["hex"], json!({ "q": 1, "r": -1 }));
    assert_eq!(json["report"]["mv"]["player"], "White");
    assert_eq!(json["report"]["outcome"], "Continue");
    assert_eq!(json["game"]["turn"], 2);
    assert_eq!(json["game"]["current_player"], "Black");
}

#[tokio::test]
async fn test_rejected_moves() {
    let app = test_app();

    let (status, json) = send(
        &app,
        "POST",
        "/api/game/click",
        Some(json!({ "x": 1.0, "y": 1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["kind"], "no_cell");

    let (status, json) = place(&app, 5, 0).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["kind"], "out_of_bounds");

    // Coordinates past any cell are reported the same way
    let (status, json) = place(&app, 200, 0).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["kind"], "out_of_bounds");
    assert_eq!(json["error"], "(200, 0) is not on the board");

    let (status, json) = place(&app, -1000, i32::MAX).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["kind"], "out_of_bounds");

    let (status, _) = place(&app, 0, 0).await;
    assert_eq!(status, StatusCode::OK);
    let (status, json) = place(&app, 0, 0).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["kind"], "cell_occupied");

    // Nothing above advanced the turn except the one accepted move
    let (_, json) = send(&app, "GET", "/api/game/state", None).await;
    assert_eq!(json["turn"], 2);
}

#[tokio::test]
async fn test_game_ends_and_restarts() {
    let app = test_app();

    // White completes exactly three on turn 5 and loses
    for (q, r) in [(0, 0), (-3, 3), (1, 0), (-3, 1), (2, 0)] {
        let (status, _) = place(&app, q, r).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, json) = send(&app, "GET", "/api/status", None).await;
    assert!(json["to_move"].is_null());

    let (_, json) = send(&app, "GET", "/api/game/state", None).await;
    assert_eq!(json["status"], json!({ "Lost": "White" }));
    assert_eq!(json["winner"], "Black");
    assert_eq!(json["decisive_line"].as_array().unwrap().len(), 3);

    let (status, json) = place(&app, 4, -4).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["kind"], "game_over");

    let (status, json) = send(&app, "POST", "/api/game/start", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["turn"], 1);
    assert_eq!(json["status"], "InProgress");
}

#[tokio::test]
async fn test_hover() {
    let app = test_app();

    let (status, json) = send(&app, "GET", "/api/game/hover?x=600&y=400", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["target"]["hex"], json!({ "q": 0, "r": 0 }));
    assert!(json["target"]["owner"].is_null());
    assert_eq!(json["target"]["playable"], true);

    let (status, _) = place(&app, 0, 0).await;
    assert_eq!(status, StatusCode::OK);
    let (_, json) = send(&app, "GET", "/api/game/hover?x=600&y=400", None).await;
    assert_eq!(json["target"]["owner"], "White");
    assert_eq!(json["target"]["playable"], false);

    let (_, json) = send(&app, "GET", "/api/game/hover?x=0&y=0", None).await;
    assert!(json["target"].is_null());
}
