use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Only the first call has an effect.
pub fn init_metrics() -> anyhow::Result<()> {
    if METRICS_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new().install_recorder()?;
    let _ = METRICS_HANDLE.set(handle);

    Ok(())
}

pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

pub fn record_order_created(currency: &str, amount_minor: u64) {
    counter!("orders_created_total", "currency" => currency.to_string()).increment(1);
    counter!("order_amount_minor_total", "currency" => currency.to_string())
        .increment(amount_minor);
}

pub fn record_validation_failure() {
    counter!("order_validation_failures_total").increment(1);
}

pub fn record_gateway_failure(kind: &'static str) {
    counter!("gateway_failures_total", "kind" => kind).increment(1);
}

