//! Caller intents and gateway wire DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Payout destination kind accepted by the gateway.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecipientType {
    MobileMoney,
    Nuban,
}

/// Customer-initiated charge. Amounts arrive as decimal strings in major
/// units; `callback_url` may be supplied by callers but is never honored
/// (the operator-configured URL always wins).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeIntent {
    pub email: String,
    pub amount: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub channels: Option<Vec<String>>,
    #[serde(default)]
    pub callback_url: Option<String>,
}

/// Merchant-initiated payout to a previously registered recipient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferIntent {
    pub recipient_code: String,
    pub amount: String,
    pub reason: String,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Registration of a payout destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipientIntent {
    #[serde(rename = "type")]
    pub recipient_type: RecipientType,
    pub name: String,
    pub account_number: String,
    pub bank_code: String,
    #[serde(default)]
    pub currency: Option<String>,
}

/// The uniform envelope every gateway reply follows regardless of endpoint.
/// `status` is the gateway's logical verdict and must be checked even on a
/// transport-level 2xx.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayEnvelope<T> {
    pub status: bool,
    pub message: String,
    pub data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeData {
    pub authorization_url: String,
    pub access_code: String,
    pub reference: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyData {
    pub reference: String,
    pub status: String,
    pub amount: i64,
    pub currency: String,
    pub channel: String,
    #[serde(default)]
    pub gateway_response: Option<String>,
    #[serde(default)]
    pub paid_at: Option<String>,
    #[serde(default)]
    pub customer: Option<CustomerData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerData {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub customer_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipientData {
    pub recipient_code: String,
    #[serde(rename = "type")]
    pub recipient_type: String,
    pub name: String,
    pub currency: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferData {
    pub transfer_code: String,
    pub reference: String,
    pub amount: i64,
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub reason: Option<String>,
}

/// A gateway notification, parsed only after its signature has been
/// verified against the raw payload bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub event_type: String,
    pub reference: Option<String>,
    pub status: Option<String>,
    pub payload: JsonValue,
    pub received_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_deserializes_from_gateway_json() {
        let payload = serde_json::json!({
            "status": true,
            "message": "Authorization URL created",
            "data": {
                "authorization_url": "https://checkout.example.com/abc",
                "access_code": "access_abc",
                "reference": "TXN_0123456789ABCDEF"
            }
        });
        let envelope: GatewayEnvelope<InitializeData> =
            serde_json::from_value(payload).expect("deserialization should succeed");
        assert!(envelope.status);
        assert_eq!(envelope.data.reference, "TXN_0123456789ABCDEF");
    }

    #[test]
    fn verify_data_tolerates_missing_optional_fields() {
        let payload = serde_json::json!({
            "reference": "TXN_1",
            "status": "success",
            "amount": 10000,
            "currency": "NGN",
            "channel": "card"
        });
        let data: VerifyData =
            serde_json::from_value(payload).expect("deserialization should succeed");
        assert!(data.paid_at.is_none());
        assert!(data.customer.is_none());
    }

    #[test]
    fn recipient_type_uses_wire_names() {
        let intent: RecipientIntent = serde_json::from_value(serde_json::json!({
            "type": "mobile_money",
            "name": "Ada",
            "account_number": "0123456789",
            "bank_code": "058"
        }))
        .expect("deserialization should succeed");
        assert_eq!(intent.recipient_type, RecipientType::MobileMoney);
        assert!(intent.currency.is_none());
    }
}
