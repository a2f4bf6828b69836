use anyhow::{Context, Result};
use dotenvy::dotenv;
use secrecy::{ExposeSecret, Secret};
use service_core::middleware::cors::AllowedOrigins;
use std::env;

pub const DEFAULT_RAZORPAY_API_BASE_URL: &str = "https://api.razorpay.com/v1";

#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub razorpay: RazorpayConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
    pub service_name: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct RazorpayConfig {
    pub key_id: String,
    pub key_secret: Secret<String>,
    pub api_base_url: String,
}

impl RazorpayConfig {
    pub fn has_credentials(&self) -> bool {
        !self.key_id.is_empty() && !self.key_secret.expose_secret().is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: AllowedOrigins,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

impl Config {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port = var("PORT", "5000")
            .trim()
            .parse()
            .context("PORT must be a valid port number")?;

        let allowed_origins = AllowedOrigins::parse(&var("FRONTEND_ORIGIN", "*"))?;

        let api_base_url = var("RAZORPAY_API_BASE_URL", DEFAULT_RAZORPAY_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            server: ServerConfig { host, port },
            razorpay: RazorpayConfig {
                key_id: var("RAZORPAY_KEY_ID", ""),
                key_secret: Secret::new(var("RAZORPAY_KEY_SECRET", "")),
                api_base_url,
            },
            cors: CorsConfig { allowed_origins },
            environment: Environment::parse(&var("APP_ENV", "development")),
            service_name: var("SERVICE_NAME", "order-service"),
            log_level: var("LOG_LEVEL", "info,order_service=debug"),
            otlp_endpoint: lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|s| !s.is_empty()),
        })
    }

    /// Startup credential check. Missing gateway credentials are only fatal in
    /// production; elsewhere the first order request fails instead.
    pub fn check_credentials(&self) -> Result<()> {
        if self.razorpay.has_credentials() {
            return Ok(());
        }

        tracing::warn!("Razorpay credentials are missing (RAZORPAY_KEY_ID / RAZORPAY_KEY_SECRET)");

        if self.environment == Environment::Production {
            anyhow::bail!("cannot start without Razorpay credentials in production");
        }

        Ok(())
    }
}
