//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define router metrics (requests, latency)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `edge_requests_total` (counter): requests by destination, outcome, status
//! - `edge_request_duration_seconds` (histogram): latency by destination

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::http::Outcome;
use crate::routing::Destination;

/// Install the Prometheus recorder and its scrape listener on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;

    ::metrics::describe_counter!(
        "edge_requests_total",
        "Requests handled, by destination, outcome and response status"
    );
    ::metrics::describe_histogram!(
        "edge_request_duration_seconds",
        ::metrics::Unit::Seconds,
        "Time from receiving a request to having its response"
    );

    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one handled request.
pub fn record_request(destination: Destination, outcome: Outcome, status: u16, start: Instant) {
    ::metrics::counter!(
        "edge_requests_total",
        "destination" => destination.as_str(),
        "outcome" => outcome.as_str(),
        "status" => status.to_string()
    )
    .increment(1);

    ::metrics::histogram!(
        "edge_request_duration_seconds",
        "destination" => destination.as_str()
    )
    .record(start.elapsed().as_secs_f64());
}
