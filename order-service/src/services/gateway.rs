use async_trait::async_trait;
use thiserror::Error;

use crate::models::OrderPayload;

/// Failure of the downstream payment gateway, whatever the cause.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("payment gateway credentials not configured")]
    NotConfigured,

    #[error("payment gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("payment gateway rejected the order ({status}): {code} - {description}")]
    Rejected {
        status: u16,
        code: String,
        description: String,
    },

    #[error("payment gateway returned an unreadable response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GatewayError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::NotConfigured => "not_configured",
            GatewayError::Transport(_) => "transport",
            GatewayError::Rejected { .. } => "rejected",
            GatewayError::Decode(_) => "decode",
        }
    }
}

/// Capability to create orders with a payment gateway.
///
/// The returned value is the gateway's order object, relayed to the caller
/// without interpretation.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_order(&self, payload: &OrderPayload) -> Result<serde_json::Value, GatewayError>;
}
