//! Integration tests for the HTTP API endpoints.
//!
//! Uses axum's oneshot pattern (via tower::ServiceExt) — no TCP binding
//! needed. Each test gets its own engine backed by a JSON store in a
//! temporary directory.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use taixiu::engine::ForecastEngine;
use taixiu::server::create_router;
use taixiu::storage::JsonFileStore;

fn setup() -> (tempfile::TempDir, Arc<ForecastEngine>) {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path().join("history.json")));
    (dir, Arc::new(ForecastEngine::with_store(store)))
}

/// Parse response body as JSON.
async fn body_json(body: Body) -> serde_json::Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(engine: Arc<ForecastEngine>, path: &str) -> (StatusCode, serde_json::Value) {
    let resp = create_router(engine)
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    (status, body_json(resp.into_body()).await)
}

// ── GET / ────────────────────────────────────────────────────────────

#[tokio::test]
async fn status_reports_the_latest_session() {
    let (_dir, engine) = setup();
    let (status, json) = get(engine.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["phien"], 0);

    engine.ingest(123, 2, 3, 4);
    let (_, json) = get(engine, "/").await;
    assert_eq!(json["phien"], 123);
}

// ── GET /api/taixiu ──────────────────────────────────────────────────

#[tokio::test]
async fn latest_is_the_zero_record_before_any_round() {
    let (_dir, engine) = setup();
    let (status, json) = get(engine, "/api/taixiu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], "binhtool90");
    assert_eq!(json["Phien"], 0);
    assert_eq!(json["Ket_qua"], "");
    assert_eq!(json["Pattern"], "");
}

#[tokio::test]
async fn latest_serves_the_full_wire_shape() {
    let (_dir, engine) = setup();
    engine.ingest(77, 6, 6, 6);

    let (status, json) = get(engine, "/api/taixiu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], "binhtool90");
    assert_eq!(json["Phien"], 77);
    assert_eq!(json["Xuc_xac_1"], 6);
    assert_eq!(json["Tong"], 18);
    assert_eq!(json["Ket_qua"], "Tài");
    assert_eq!(json["Pattern"], "t");
    assert_eq!(json["Streak"], "Tài (1)");
    assert!(json["Du_doan"].as_str().is_some());
    assert!(json["Do_tin_cay"].as_str().unwrap().ends_with('%'));
}

// ── GET /api/history ─────────────────────────────────────────────────

#[tokio::test]
async fn history_lists_rounds_oldest_first() {
    let (_dir, engine) = setup();
    engine.ingest(1, 1, 1, 1);
    engine.ingest(2, 6, 6, 6);
    engine.ingest(3, 2, 2, 2);

    let (status, json) = get(engine, "/api/history").await;
    assert_eq!(status, StatusCode::OK);
    let rounds = json.as_array().unwrap();
    assert_eq!(rounds.len(), 3);
    assert_eq!(rounds[0]["Phien"], 1);
    assert_eq!(rounds[0]["Ket_qua"], "Xỉu");
    assert_eq!(rounds[2]["Phien"], 3);
}

#[tokio::test]
async fn unknown_path_is_404() {
    let (_dir, engine) = setup();
    let resp = create_router(engine)
        .oneshot(Request::get("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
