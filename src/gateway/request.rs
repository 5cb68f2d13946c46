//! Gateway request body construction.
//!
//! Defaults (currency, channel allow-list) are applied here, not upstream.
//! The collection callback URL is always the operator-configured value; a
//! caller-supplied URL is ignored so a compromised caller cannot redirect
//! the checkout flow.

use crate::gateway::error::{GatewayError, GatewayResult};
use crate::gateway::money::{parse_amount, to_minor_units};
use crate::gateway::types::{ChargeIntent, RecipientIntent, RecipientType, TransferIntent};
use serde::Serialize;

pub const DEFAULT_CURRENCY: &str = "NGN";
pub const DEFAULT_CHANNELS: [&str; 3] = ["mobile_money", "card", "bank"];

/// Transfers are always funded from the merchant balance.
const TRANSFER_SOURCE: &str = "balance";

#[derive(Debug, Clone, Serialize)]
pub struct InitializeBody {
    pub email: String,
    pub amount: i64,
    pub currency: String,
    pub reference: String,
    pub callback_url: String,
    pub channels: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecipientBody {
    #[serde(rename = "type")]
    pub recipient_type: RecipientType,
    pub name: String,
    pub account_number: String,
    pub bank_code: String,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferBody {
    pub source: &'static str,
    pub amount: i64,
    pub recipient: String,
    pub reason: String,
    pub currency: String,
    pub reference: String,
}

fn require(value: &str, field: &str) -> GatewayResult<()> {
    if value.trim().is_empty() {
        return Err(GatewayError::InvalidRequest {
            message: format!("{} is required", field),
            field: Some(field.to_string()),
        });
    }
    Ok(())
}

fn currency_or_default(currency: &Option<String>) -> String {
    currency
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CURRENCY)
        .to_string()
}

pub fn build_initialize(
    intent: &ChargeIntent,
    reference: &str,
    operator_callback_url: &str,
) -> GatewayResult<InitializeBody> {
    require(&intent.email, "email")?;
    let amount = to_minor_units(&parse_amount(&intent.amount)?)?;

    let channels = match &intent.channels {
        Some(channels) if !channels.is_empty() => channels.clone(),
        _ => DEFAULT_CHANNELS.iter().map(|c| c.to_string()).collect(),
    };

    Ok(InitializeBody {
        email: intent.email.clone(),
        amount,
        currency: currency_or_default(&intent.currency),
        reference: reference.to_string(),
        // Not intent.callback_url: only the operator decides where the
        // customer lands after checkout.
        callback_url: operator_callback_url.to_string(),
        channels,
    })
}

pub fn build_recipient(intent: &RecipientIntent) -> GatewayResult<RecipientBody> {
    require(&intent.name, "name")?;
    require(&intent.account_number, "account_number")?;
    require(&intent.bank_code, "bank_code")?;

    Ok(RecipientBody {
        recipient_type: intent.recipient_type,
        name: intent.name.clone(),
        account_number: intent.account_number.clone(),
        bank_code: intent.bank_code.clone(),
        currency: currency_or_default(&intent.currency),
    })
}

pub fn build_transfer(intent: &TransferIntent, reference: &str) -> GatewayResult<TransferBody> {
    require(&intent.recipient_code, "recipient_code")?;
    let amount = to_minor_units(&parse_amount(&intent.amount)?)?;

    Ok(TransferBody {
        source: TRANSFER_SOURCE,
        amount,
        recipient: intent.recipient_code.clone(),
        reason: intent.reason.clone(),
        currency: currency_or_default(&intent.currency),
        reference: reference.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charge_intent() -> ChargeIntent {
        ChargeIntent {
            email: "customer@example.com".to_string(),
            amount: "49.99".to_string(),
            currency: None,
            channels: None,
            callback_url: None,
        }
    }

    #[test]
    fn initialize_applies_currency_and_channel_defaults() {
        let body = build_initialize(&charge_intent(), "TXN_1", "https://merchant.example.com/cb")
            .expect("build should succeed");
        assert_eq!(body.amount, 4_999);
        assert_eq!(body.currency, "NGN");
        assert_eq!(body.channels, vec!["mobile_money", "card", "bank"]);
    }

    #[test]
    fn caller_supplied_callback_url_is_ignored() {
        let mut intent = charge_intent();
        intent.callback_url = Some("https://attacker.example.com/steal".to_string());
        let body = build_initialize(&intent, "TXN_1", "https://merchant.example.com/cb")
            .expect("build should succeed");
        assert_eq!(body.callback_url, "https://merchant.example.com/cb");
    }

    #[test]
    fn explicit_channels_and_currency_are_kept() {
        let mut intent = charge_intent();
        intent.currency = Some("GHS".to_string());
        intent.channels = Some(vec!["card".to_string()]);
        let body = build_initialize(&intent, "TXN_1", "https://merchant.example.com/cb")
            .expect("build should succeed");
        assert_eq!(body.currency, "GHS");
        assert_eq!(body.channels, vec!["card"]);
    }

    #[test]
    fn initialize_requires_email() {
        let mut intent = charge_intent();
        intent.email = "  ".to_string();
        let err = build_initialize(&intent, "TXN_1", "https://merchant.example.com/cb")
            .expect_err("blank email should fail");
        assert!(matches!(err, GatewayError::InvalidRequest { .. }));
    }

    #[test]
    fn transfer_body_carries_balance_source_and_minor_units() {
        let intent = TransferIntent {
            recipient_code: "RCP_abc".to_string(),
            amount: "100.00".to_string(),
            reason: "salary".to_string(),
            currency: None,
        };
        let body = build_transfer(&intent, "TXN_2").expect("build should succeed");
        assert_eq!(body.source, "balance");
        assert_eq!(body.amount, 10_000);
        assert_eq!(body.currency, "NGN");
        assert_eq!(body.reference, "TXN_2");
    }

    #[test]
    fn recipient_requires_bank_details() {
        let intent = RecipientIntent {
            recipient_type: RecipientType::Nuban,
            name: "Ada".to_string(),
            account_number: String::new(),
            bank_code: "058".to_string(),
            currency: None,
        };
        let err = build_recipient(&intent).expect_err("missing account number should fail");
        assert!(matches!(
            err,
            GatewayError::InvalidRequest { field: Some(ref f), .. } if f == "account_number"
        ));
    }

    #[test]
    fn wire_field_names_match_gateway_contract() {
        let body = build_recipient(&RecipientIntent {
            recipient_type: RecipientType::MobileMoney,
            name: "Ada".to_string(),
            account_number: "0123456789".to_string(),
            bank_code: "058".to_string(),
            currency: None,
        })
        .expect("build should succeed");
        let json = serde_json::to_value(&body).expect("serialization should succeed");
        assert_eq!(json["type"], "mobile_money");
        assert_eq!(json["account_number"], "0123456789");
        assert_eq!(json["bank_code"], "058");
    }
}
