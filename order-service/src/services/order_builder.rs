//! Order request validation and gateway payload construction.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::dtos::{AmountInput, CreateOrderRequest};
use crate::models::{receipt_at, OrderNotes, OrderPayload, CURRENCY_INR};

pub const INVALID_AMOUNT_MESSAGE: &str = "Valid amount (₹) is required";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", INVALID_AMOUNT_MESSAGE)]
    InvalidAmount,
}

/// Validate `amount` and convert it to minor units, rounding half away from
/// zero. Absent, non-numeric, non-finite, zero and negative amounts fail, as
/// do amounts whose minor-unit value does not fit the gateway's integer field.
pub fn amount_in_minor_units(amount: Option<&AmountInput>) -> Result<u64, ValidationError> {
    let amount = amount
        .and_then(AmountInput::to_number)
        .ok_or(ValidationError::InvalidAmount)?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(ValidationError::InvalidAmount);
    }

    let minor = (amount * 100.0).round();
    if minor > u64::MAX as f64 {
        return Err(ValidationError::InvalidAmount);
    }

    Ok(minor as u64)
}

/// Build the gateway payload for `request` as of `now`.
pub fn build_order_payload(
    request: &CreateOrderRequest,
    now: DateTime<Utc>,
) -> Result<OrderPayload, ValidationError> {
    let amount = amount_in_minor_units(request.amount.as_ref())?;

    Ok(OrderPayload {
        amount,
        currency: CURRENCY_INR.to_string(),
        receipt: receipt_at(now),
        notes: OrderNotes {
            activity: request.activity.clone().unwrap_or_default(),
            date: request.date.clone().unwrap_or_default(),
            slots: request
                .slots
                .as_ref()
                .map(|s| s.joined())
                .unwrap_or_default(),
        },
    })
}
