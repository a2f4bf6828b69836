pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use std::sync::Arc;

use config::Config;
use services::PaymentGateway;

/// Shared application state, cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gateway: Arc<dyn PaymentGateway>,
}

impl AppState {
    pub fn new(config: Config, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            config: Arc::new(config),
            gateway,
        }
    }
}
