//! Payout endpoints: recipient registration and transfer initiation.

use crate::api::{GatewayState, OperationResponse};
use crate::gateway::error::GatewayError;
use crate::gateway::types::{RecipientData, RecipientIntent, TransferData, TransferIntent};
use axum::{extract::State, Json};

/// POST /api/paystack/recipient
pub async fn create_recipient(
    State(state): State<GatewayState>,
    Json(intent): Json<RecipientIntent>,
) -> Result<Json<OperationResponse<RecipientData>>, GatewayError> {
    let envelope = state.gateway.create_recipient(intent).await?;
    Ok(Json(OperationResponse::from_envelope(envelope, &state)))
}

/// POST /api/paystack/transfer
pub async fn initiate_transfer(
    State(state): State<GatewayState>,
    Json(intent): Json<TransferIntent>,
) -> Result<Json<OperationResponse<TransferData>>, GatewayError> {
    let envelope = state.gateway.initiate_transfer(intent).await?;
    Ok(Json(OperationResponse::from_envelope(envelope, &state)))
}
