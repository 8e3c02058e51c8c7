//! Public endpoints: reachable without any credential.

use axum::Json;
use serde_json::{Value, json};

pub async fn home() -> Json<Value> {
    Json(json!({
        "message": "authgate up",
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn info() -> Json<Value> {
    Json(json!({
        "message": "public information, no authentication required",
    }))
}
