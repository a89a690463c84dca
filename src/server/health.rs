//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health - Status with bundle check

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy`, or `degraded` when the bundle is missing
    pub status: String,
    pub bundle: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let bundle_ok = state.bundle_present();

    Json(HealthResponse {
        status: if bundle_ok { "healthy" } else { "degraded" }.to_string(),
        bundle: if bundle_ok { "ok" } else { "missing" }.to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
