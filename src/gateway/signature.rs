//! Webhook payload authentication.
//!
//! The gateway signs each notification with HMAC-SHA512 over the raw
//! request body, hex-encoded in the `x-paystack-signature` header.
//! Verification operates on the exact raw bytes; parsing happens strictly
//! after a positive verdict. A failed check is a boolean, not an error.

use crate::gateway::error::{GatewayError, GatewayResult};
use crate::gateway::types::WebhookEvent;
use hmac::{Hmac, Mac};
use serde_json::Value as JsonValue;
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Verify that `signature_hex` is the HMAC-SHA512 of `payload` under
/// `secret`. The comparison is constant-time.
pub fn verify_signature(payload: &[u8], secret: &str, signature_hex: &str) -> bool {
    let mut mac = match HmacSha512::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    mac.update(payload);
    let computed = hex::encode(mac.finalize().into_bytes());
    constant_time_eq(computed.as_bytes(), signature_hex.trim().as_bytes())
}

/// Byte equality without early exit, so comparison time does not leak how
/// many leading bytes matched.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b.iter())
        .fold(0_u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

/// Parse an authenticated notification. Callers must only invoke this after
/// `verify_signature` returned true.
pub fn parse_event(payload: &[u8]) -> GatewayResult<WebhookEvent> {
    let parsed: JsonValue =
        serde_json::from_slice(payload).map_err(|e| GatewayError::InvalidRequest {
            message: format!("invalid webhook JSON payload: {}", e),
            field: Some("payload".to_string()),
        })?;

    let event_type = parsed
        .get("event")
        .and_then(|v| v.as_str())
        .unwrap_or("unknown")
        .to_string();
    let reference = parsed
        .get("data")
        .and_then(|v| v.get("reference"))
        .and_then(|v| v.as_str())
        .map(|v| v.to_string());
    let status = parsed
        .get("data")
        .and_then(|v| v.get("status"))
        .and_then(|v| v.as_str())
        .map(|v| v.to_string());

    Ok(WebhookEvent {
        event_type,
        reference,
        status,
        payload: parsed,
        received_at: chrono::Utc::now().to_rfc3339(),
    })
}
