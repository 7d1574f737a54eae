use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::EnvFilter;

use vision_scan_gateway::app_state::AppState;
use vision_scan_gateway::config::AppConfig;
use vision_scan_gateway::routes;
use vision_scan_gateway::services::vision::GoogleVisionClient;

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing vision scan gateway");

    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    routes::metrics::describe();

    tracing::info!(endpoint = %config.google_vision_endpoint, "Initializing Google Cloud Vision client");
    let vision_client =
        GoogleVisionClient::new(&config).expect("Failed to initialize Vision API client");

    let state = AppState::new(vision_client);

    let app = routes::router(state, config.max_body_bytes)
        .merge(routes::metrics::router(prometheus_handle));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Vision backend listening on port {}", config.port());

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
