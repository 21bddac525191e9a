use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::handlers;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/api/health", get(health_check))
        // Agent webhook API
        .route("/api/agent/query", post(handlers::agent_query))
        .route("/api/agent/action", post(handlers::agent_action))
        .route("/api/agent/status", get(handlers::agent_status))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
