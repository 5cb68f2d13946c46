//! Inbound gateway notifications.
//!
//! The signature is checked against the raw body bytes before any parsing;
//! an unauthenticated delivery is a 401, never a processing error.

use crate::api::GatewayState;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{info, warn};

const SIGNATURE_HEADER: &str = "x-paystack-signature";

/// POST /webhooks/paystack
pub async fn handle_webhook(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let Some(signature) = signature else {
        warn!("Missing webhook signature header");
        return (StatusCode::UNAUTHORIZED, "Missing signature").into_response();
    };

    if !state.gateway.verify_webhook(&body, &signature) {
        warn!("Invalid webhook signature");
        return (StatusCode::UNAUTHORIZED, "Invalid signature").into_response();
    }

    // Only now is the payload trusted enough to parse.
    match state.gateway.parse_webhook_event(&body) {
        Ok(event) => {
            info!(
                event = %event.event_type,
                reference = event.reference.as_deref().unwrap_or("-"),
                status = event.status.as_deref().unwrap_or("-"),
                "Webhook received"
            );
            (StatusCode::OK, Json(serde_json::json!({"status": "ok"}))).into_response()
        }
        Err(e) => {
            warn!(error = %e, "Authenticated webhook carried malformed JSON");
            (StatusCode::BAD_REQUEST, "Invalid JSON").into_response()
        }
    }
}
