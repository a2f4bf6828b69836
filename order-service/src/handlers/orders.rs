//! Order creation handler.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Utc;
use service_core::error::AppError;

use crate::{
    dtos::CreateOrderRequest,
    services::{build_order_payload, metrics},
    AppState,
};

pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
pub const GATEWAY_FAILURE_MESSAGE: &str = "Failed to create Razorpay order";

/// Validate the request, create the order with the gateway and relay the
/// gateway's order object unchanged.
pub async fn create_order(
    State(state): State<AppState>,
    body: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(request) = body.map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "Rejected create-order body");
        metrics::record_validation_failure();
        AppError::BadRequest(INVALID_BODY_MESSAGE.to_string())
    })?;

    let payload = build_order_payload(&request, Utc::now()).map_err(|e| {
        tracing::debug!(amount = ?request.amount, "Rejected create-order amount");
        metrics::record_validation_failure();
        AppError::BadRequest(e.to_string())
    })?;

    tracing::info!(
        amount = payload.amount,
        currency = %payload.currency,
        receipt = %payload.receipt,
        "Creating gateway order"
    );

    let order = state.gateway.create_order(&payload).await.map_err(|e| {
        tracing::error!(error = %e, receipt = %payload.receipt, "Failed to create Razorpay order");
        metrics::record_gateway_failure(e.kind());
        AppError::Upstream(GATEWAY_FAILURE_MESSAGE.to_string())
    })?;

    metrics::record_order_created(&payload.currency, payload.amount);

    Ok(Json(order))
}
