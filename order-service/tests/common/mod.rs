#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use order_service::config::Config;
use order_service::models::OrderPayload;
use order_service::services::{GatewayError, PaymentGateway};
use order_service::startup::{build_router, Application};
use order_service::AppState;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;

pub const TEST_KEY_ID: &str = "rzp_test_key";
pub const TEST_KEY_SECRET: &str = "rzp_test_secret";
pub const TEST_ORDER_ID: &str = "order_TEST123";

/// Config as the service would read it from `vars`, with test credentials.
pub fn test_config(vars: &[(&str, &str)]) -> Config {
    let mut env: HashMap<String, String> = HashMap::from([
        ("HOST".to_string(), "127.0.0.1".to_string()),
        ("PORT".to_string(), "0".to_string()),
        ("RAZORPAY_KEY_ID".to_string(), TEST_KEY_ID.to_string()),
        ("RAZORPAY_KEY_SECRET".to_string(), TEST_KEY_SECRET.to_string()),
    ]);
    for (k, v) in vars {
        env.insert(k.to_string(), v.to_string());
    }

    Config::from_lookup(|key| env.get(key).cloned()).expect("Failed to build test config")
}

/// In-memory gateway that records every payload it receives.
pub struct RecordingGateway {
    calls: Mutex<Vec<OrderPayload>>,
    fail: bool,
}

impl RecordingGateway {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn calls(&self) -> Vec<OrderPayload> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
    async fn create_order(&self, payload: &OrderPayload) -> Result<Value, GatewayError> {
        self.calls.lock().unwrap().push(payload.clone());

        if self.fail {
            return Err(GatewayError::Rejected {
                status: 401,
                code: "BAD_REQUEST_ERROR".to_string(),
                description: "Authentication failed".to_string(),
            });
        }

        Ok(json!({
            "id": TEST_ORDER_ID,
            "entity": "order",
            "amount": payload.amount,
            "amount_paid": 0,
            "amount_due": payload.amount,
            "currency": payload.currency,
            "receipt": payload.receipt,
            "status": "created",
            "attempts": 0,
            "notes": payload.notes,
            "created_at": 1718000000
        }))
    }
}

pub fn router_with(gateway: Arc<RecordingGateway>) -> Router {
    build_router(AppState::new(test_config(&[]), gateway))
}

/// POST a raw JSON body to `/create-order` and decode the JSON response.
pub async fn post_create_order(app: Router, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/create-order")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).expect("Response body is not JSON");

    (status, json)
}

/// A running server backed by the real Razorpay client.
pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn the application with the Razorpay client pointed at `gateway_base_url`.
    pub async fn spawn(gateway_base_url: &str) -> Self {
        let config = test_config(&[("RAZORPAY_API_BASE_URL", gateway_base_url)]);

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}
