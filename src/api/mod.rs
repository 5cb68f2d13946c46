//! HTTP boundary: routing-layer handlers and shared response shapes.

pub mod payments;
pub mod status;
pub mod transfers;
pub mod webhooks;

use crate::gateway::service::PaystackGateway;
use crate::gateway::types::GatewayEnvelope;
use serde::Serialize;
use std::sync::Arc;

#[derive(Clone)]
pub struct GatewayState {
    pub gateway: Arc<PaystackGateway>,
}

/// Success envelope echoed to API callers: the gateway's message and data
/// plus the environment the call ran against.
#[derive(Debug, Serialize)]
pub struct OperationResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
    pub environment: String,
}

impl<T> OperationResponse<T> {
    pub fn from_envelope(envelope: GatewayEnvelope<T>, state: &GatewayState) -> Self {
        Self {
            success: envelope.status,
            message: envelope.message,
            data: envelope.data,
            environment: state.gateway.active_environment_name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_response_serializes_with_environment() {
        let response = OperationResponse {
            success: true,
            message: "ok".to_string(),
            data: serde_json::json!({"reference": "TXN_1"}),
            environment: "sandbox".to_string(),
        };
        let json = serde_json::to_value(&response).expect("serialization should succeed");
        assert_eq!(json["success"], true);
        assert_eq!(json["environment"], "sandbox");
        assert_eq!(json["data"]["reference"], "TXN_1");
    }
}
