//! Axum HTTP server: 3 read endpoints over the shared forecast engine.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Service banner + latest session id |
//! | GET | `/api/taixiu` | Latest round record with forecast |
//! | GET | `/api/history` | Full bounded round history, oldest first |
//!
//! All endpoints serve whatever is in memory right now; there are no error
//! responses on the read path.

use std::sync::Arc;

use axum::{
    extract::State,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::constants::SOURCE_ID;
use crate::engine::ForecastEngine;

pub type AppState = Arc<ForecastEngine>;

pub fn create_router(engine: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_status))
        .route("/api/taixiu", get(handle_latest))
        .route("/api/history", get(handle_history))
        .layer(cors)
        .with_state(engine)
}

async fn handle_status(State(engine): State<AppState>) -> Json<serde_json::Value> {
    let session = engine.latest_snapshot().map(|r| r.session).unwrap_or(0);
    Json(serde_json::json!({
        "status": "HITCLUB Tài Xỉu đang chạy",
        "phien": session,
    }))
}

async fn handle_latest(State(engine): State<AppState>) -> impl IntoResponse {
    match engine.latest_snapshot() {
        Some(record) => Json(record).into_response(),
        None => Json(empty_snapshot()).into_response(),
    }
}

async fn handle_history(State(engine): State<AppState>) -> impl IntoResponse {
    Json(engine.full_history())
}

/// Wire shape served before the first round arrives (the legacy zero
/// record, kept for consumers that expect every field present).
fn empty_snapshot() -> serde_json::Value {
    serde_json::json!({
        "id": SOURCE_ID,
        "Phien": 0,
        "Xuc_xac_1": 0,
        "Xuc_xac_2": 0,
        "Xuc_xac_3": 0,
        "Tong": 0,
        "Ket_qua": "",
        "Pattern": "",
        "Du_doan": "",
        "Do_tin_cay": "",
        "Streak": "",
    })
}
