//! Metrics collection and exposition.
//!
//! # Metrics
//! - `shell_navigations_total` (counter): rendered pages by route name
//! - `shell_selection_updates_total` (counter): selection store writes

use std::net::SocketAddr;

use metrics::counter;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Route label used when the matched route has no name.
pub const UNNAMED_ROUTE: &str = "unnamed";

/// Install the Prometheus recorder and its HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_navigation(route: Option<&str>) {
    let route = route.unwrap_or(UNNAMED_ROUTE).to_string();
    counter!("shell_navigations_total", "route" => route).increment(1);
}

pub fn record_selection_update() {
    counter!("shell_selection_updates_total").increment(1);
}
