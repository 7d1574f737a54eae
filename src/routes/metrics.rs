use axum::extract::State;
use axum::routing::get;
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;

/// Register descriptions for every metric the scan path records.
pub fn describe() {
    metrics::describe_counter!("scan_requests_total", "Total scan requests received");
    metrics::describe_counter!(
        "scan_rejected_total",
        "Scan requests rejected for missing image content"
    );
    metrics::describe_counter!(
        "scan_placements_total",
        "Successful scans by derived placement"
    );
    metrics::describe_counter!(
        "vision_api_failures_total",
        "Vision API calls that failed for any reason"
    );
    metrics::describe_histogram!(
        "vision_api_duration_seconds",
        "Latency of successful Vision API annotate calls"
    );
}

/// GET /metrics — Prometheus text exposition format.
pub async fn prometheus_metrics(State(handle): State<PrometheusHandle>) -> String {
    handle.render()
}

pub fn router(handle: PrometheusHandle) -> Router {
    Router::new()
        .route("/metrics", get(prometheus_metrics))
        .with_state(handle)
}
