//! Liveness endpoint. Reads the session count, mutates nothing.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::ports::SessionStore;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthData {
    pub status: &'static str,
    pub active_sessions: usize,
}

/// GET /health - Liveness payload
pub async fn health(State(store): State<Arc<dyn SessionStore>>) -> Json<HealthData> {
    Json(HealthData {
        status: "ok",
        active_sessions: store.len(),
    })
}

/// Creates the health router.
pub fn health_routes(store: Arc<dyn SessionStore>) -> Router {
    Router::new().route("/health", get(health)).with_state(store)
}
