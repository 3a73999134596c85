use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/api/health", get(health_check))

        // REST API routes
        .route("/api/translate", post(handlers::translate))

        // Browser form assets
        .fallback_service(ServeDir::new("web"))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}
