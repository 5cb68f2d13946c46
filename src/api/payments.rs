//! Collection endpoints: initialize and verify.

use crate::api::{GatewayState, OperationResponse};
use crate::gateway::error::{GatewayError, GatewayResult};
use crate::gateway::types::{ChargeIntent, InitializeData, VerifyData};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

/// POST /api/paystack/initialize
pub async fn initialize_payment(
    State(state): State<GatewayState>,
    Json(intent): Json<ChargeIntent>,
) -> Result<Json<OperationResponse<InitializeData>>, GatewayError> {
    let envelope = state.gateway.initialize_collection(intent).await?;
    Ok(Json(OperationResponse::from_envelope(envelope, &state)))
}

/// GET /api/paystack/verify/{reference}
pub async fn verify_payment(
    State(state): State<GatewayState>,
    Path(reference): Path<String>,
) -> Result<Json<OperationResponse<VerifyData>>, GatewayError> {
    let envelope = state.gateway.verify_collection(&reference).await?;
    Ok(Json(OperationResponse::from_envelope(envelope, &state)))
}

/// Redirect-landing query parameters. The gateway sends the customer back
/// with either `reference` or `trxref` depending on checkout flavor.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub trxref: Option<String>,
}

fn callback_reference(params: CallbackParams) -> GatewayResult<String> {
    params
        .reference
        .or(params.trxref)
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .ok_or(GatewayError::InvalidRequest {
            message: "no reference provided".to_string(),
            field: Some("reference".to_string()),
        })
}

/// GET /api/paystack/callback — where the customer lands after checkout.
/// Verifies the echoed reference so the merchant page can render the
/// outcome immediately.
pub async fn payment_callback(
    State(state): State<GatewayState>,
    Query(params): Query<CallbackParams>,
) -> Result<Json<OperationResponse<VerifyData>>, GatewayError> {
    let reference = callback_reference(params)?;
    let envelope = state.gateway.verify_collection(&reference).await?;
    Ok(Json(OperationResponse::from_envelope(envelope, &state)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_prefers_reference_over_trxref() {
        let reference = callback_reference(CallbackParams {
            reference: Some("TXN_A".to_string()),
            trxref: Some("TXN_B".to_string()),
        })
        .expect("reference should resolve");
        assert_eq!(reference, "TXN_A");
    }

    #[test]
    fn callback_falls_back_to_trxref() {
        let reference = callback_reference(CallbackParams {
            reference: None,
            trxref: Some("TXN_B".to_string()),
        })
        .expect("trxref should resolve");
        assert_eq!(reference, "TXN_B");
    }

    #[test]
    fn callback_without_any_reference_is_a_bad_request() {
        for params in [
            CallbackParams {
                reference: None,
                trxref: None,
            },
            CallbackParams {
                reference: Some("  ".to_string()),
                trxref: None,
            },
        ] {
            let err = callback_reference(params).expect_err("missing reference must fail");
            assert!(matches!(err, GatewayError::InvalidRequest { .. }));
            assert_eq!(err.http_status_code(), 400);
        }
    }
}
