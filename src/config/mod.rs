use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:8080").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Google Cloud Vision `images:annotate` endpoint
    #[serde(default = "default_vision_endpoint")]
    pub google_vision_endpoint: String,

    /// Google Cloud API key, sent as the `key` query parameter
    #[serde(default)]
    pub google_api_key: Option<String>,

    /// OAuth2 access token, sent as bearer auth
    #[serde(default)]
    pub google_access_token: Option<String>,

    /// Per-call timeout for the Vision API in seconds
    #[serde(default = "default_vision_timeout_secs")]
    pub vision_timeout_secs: u64,

    /// Maximum accepted request body size in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_vision_endpoint() -> String {
    "https://vision.googleapis.com/v1/images:annotate".to_string()
}

fn default_vision_timeout_secs() -> u64 {
    30
}

fn default_max_body_bytes() -> usize {
    10 * 1024 * 1024
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Port component of `bind_addr`, for the startup banner.
    pub fn port(&self) -> &str {
        self.bind_addr
            .rsplit_once(':')
            .map(|(_, port)| port)
            .unwrap_or(&self.bind_addr)
    }
}
