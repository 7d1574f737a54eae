use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET / — plain-text liveness check.
pub async fn liveness() -> &'static str {
    "Vision backend running"
}

/// GET /health — JSON health with build version. The gateway holds no
/// connections of its own, so there is nothing further to probe.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
