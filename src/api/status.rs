//! Introspection and liveness endpoints.

use crate::api::GatewayState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EnvironmentResponse {
    pub environment: String,
    pub live: bool,
}

/// GET /api/paystack/environment
pub async fn environment(State(state): State<GatewayState>) -> Json<EnvironmentResponse> {
    Json(EnvironmentResponse {
        environment: state.gateway.active_environment_name().to_string(),
        live: state.gateway.is_live(),
    })
}

/// GET /health and GET /health/live — no external dependencies, so
/// liveness and health coincide.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// GET /
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "paygate-backend",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
