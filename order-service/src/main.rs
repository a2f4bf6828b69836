use order_service::{config::Config, services::init_metrics, startup::Application};
use service_core::error::AppError;
use service_core::observability::{init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration - fail fast if invalid
    let config = Config::from_env().map_err(AppError::ConfigError)?;

    init_tracing(
        &config.service_name,
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    );

    init_metrics().map_err(AppError::InternalError)?;

    tracing::info!(
        service = %config.service_name,
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.environment,
        "Starting order service"
    );

    if let Err(e) = config.check_credentials() {
        tracing::error!(error = %e, "Refusing to start");
        return Err(AppError::ConfigError(e));
    }

    let application = Application::build(config).await?;
    let result = application.run_until_stopped().await;

    shutdown_tracing();
    result
}
