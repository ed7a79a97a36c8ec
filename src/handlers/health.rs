use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::AppState;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "wellness-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn readyz(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    // The in-memory store cannot really fail, but the probe keeps the same
    // contract a spreadsheet-backed store will need.
    let _ = state.store.logs_for_user(Uuid::nil()).await;

    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "checks": { "store": "ok" },
        })),
    )
}
