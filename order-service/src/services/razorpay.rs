//! Razorpay payment gateway client.
//!
//! Implements order creation against Razorpay's Orders API.

use crate::config::RazorpayConfig;
use crate::models::OrderPayload;
use crate::services::gateway::{GatewayError, PaymentGateway};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Deserialize;

/// Razorpay client for interacting with the Razorpay API.
#[derive(Clone)]
pub struct RazorpayClient {
    client: Client,
    config: RazorpayConfig,
}

/// Razorpay API error response.
#[derive(Debug, Deserialize)]
pub struct RazorpayError {
    pub error: RazorpayErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct RazorpayErrorDetail {
    pub code: String,
    pub description: String,
    pub source: Option<String>,
    pub step: Option<String>,
    pub reason: Option<String>,
}

impl RazorpayClient {
    pub fn new(config: RazorpayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Check if Razorpay is configured (credentials are set).
    pub fn is_configured(&self) -> bool {
        self.config.has_credentials()
    }

    fn orders_url(&self) -> String {
        format!("{}/orders", self.config.api_base_url)
    }
}

/// Map a non-2xx Razorpay response body to a gateway error. Bodies that are
/// not Razorpay's error envelope are reported as `UNKNOWN` with the raw text.
fn rejection(status: u16, body: &str) -> GatewayError {
    match serde_json::from_str::<RazorpayError>(body) {
        Ok(err) => GatewayError::Rejected {
            status,
            code: err.error.code,
            description: err.error.description,
        },
        Err(_) => GatewayError::Rejected {
            status,
            code: "UNKNOWN".to_string(),
            description: body.to_string(),
        },
    }
}

#[async_trait]
impl PaymentGateway for RazorpayClient {
    async fn create_order(&self, payload: &OrderPayload) -> Result<serde_json::Value, GatewayError> {
        if !self.is_configured() {
            return Err(GatewayError::NotConfigured);
        }

        let response = self
            .client
            .post(self.orders_url())
            .basic_auth(
                &self.config.key_id,
                Some(self.config.key_secret.expose_secret()),
            )
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = %status, body = %body, "Razorpay create_order response");

        if !status.is_success() {
            let err = rejection(status.as_u16(), &body);
            tracing::error!(error = %err, "Razorpay order creation failed");
            return Err(err);
        }

        let order: serde_json::Value = serde_json::from_str(&body)?;
        tracing::info!(
            order_id = order.get("id").and_then(|v| v.as_str()).unwrap_or("-"),
            amount = payload.amount,
            receipt = %payload.receipt,
            "Razorpay order created"
        );

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderNotes;
    use secrecy::Secret;

    fn test_config(key_id: &str, key_secret: &str) -> RazorpayConfig {
        RazorpayConfig {
            key_id: key_id.to_string(),
            key_secret: Secret::new(key_secret.to_string()),
            api_base_url: "https://api.razorpay.com/v1".to_string(),
        }
    }

    #[test]
    fn test_is_configured() {
        assert!(RazorpayClient::new(test_config("rzp_test_123", "test_secret")).is_configured());
        assert!(!RazorpayClient::new(test_config("", "")).is_configured());
        assert!(!RazorpayClient::new(test_config("rzp_test_123", "")).is_configured());
    }

    #[test]
    fn test_orders_url() {
        let client = RazorpayClient::new(test_config("rzp_test_123", "test_secret"));
        assert_eq!(client.orders_url(), "https://api.razorpay.com/v1/orders");
    }

    #[test]
    fn test_rejection_parses_error_envelope() {
        let body = r#"{"error":{"code":"BAD_REQUEST_ERROR","description":"Authentication failed","source":"NA","step":"NA","reason":"NA"}}"#;

        match rejection(401, body) {
            GatewayError::Rejected {
                status,
                code,
                description,
            } => {
                assert_eq!(status, 401);
                assert_eq!(code, "BAD_REQUEST_ERROR");
                assert_eq!(description, "Authentication failed");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejection_keeps_raw_body() {
        match rejection(502, "upstream exploded") {
            GatewayError::Rejected {
                code, description, ..
            } => {
                assert_eq!(code, "UNKNOWN");
                assert_eq!(description, "upstream exploded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_client_fails_without_network() {
        let client = RazorpayClient::new(test_config("", ""));
        let payload = OrderPayload {
            amount: 100,
            currency: "INR".to_string(),
            receipt: "receipt_order_1".to_string(),
            notes: OrderNotes::default(),
        };

        let result = client.create_order(&payload).await;
        assert!(matches!(result, Err(GatewayError::NotConfigured)));
    }
}
