//! Major-unit to minor-unit conversion for gateway amounts.
//!
//! The gateway transmits amounts as minor-unit integers (kobo for NGN).
//! Monetary values stay in `BigDecimal` end to end; they are never routed
//! through binary floating point.

use crate::gateway::error::{GatewayError, GatewayResult};
use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive, Zero};
use std::str::FromStr;

/// Minor units per major unit (kobo per naira).
const MINOR_UNIT_FACTOR: i64 = 100;

/// Parse a caller-supplied decimal amount string.
pub fn parse_amount(raw: &str) -> GatewayResult<BigDecimal> {
    BigDecimal::from_str(raw.trim()).map_err(|_| GatewayError::InvalidAmount {
        message: format!("not a decimal amount: {}", raw),
    })
}

/// Convert a positive major-unit amount to the gateway's minor-unit integer.
///
/// Rejects non-positive amounts. Rounds half-up, so any amount with at most
/// two decimal digits converts exactly.
pub fn to_minor_units(amount: &BigDecimal) -> GatewayResult<i64> {
    if amount <= &BigDecimal::zero() {
        return Err(GatewayError::InvalidAmount {
            message: "amount must be greater than zero".to_string(),
        });
    }

    let minor = (amount * BigDecimal::from(MINOR_UNIT_FACTOR))
        .with_scale_round(0, RoundingMode::HalfUp);
    minor.to_i64().ok_or_else(|| GatewayError::InvalidAmount {
        message: "amount out of range".to_string(),
    })
}
