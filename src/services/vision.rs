use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::config::AppConfig;
use crate::models::annotation::{BatchAnnotateImagesRequest, BatchAnnotateImagesResponse, ImageAnnotation};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Label and text detection over a base64-encoded image.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageAnnotator: Send + Sync {
    async fn annotate(&self, image_base64: &str) -> Result<ImageAnnotation, VisionError>;
}

/// Client for the Google Cloud Vision `images:annotate` REST endpoint.
pub struct GoogleVisionClient {
    http: Client,
    endpoint: String,
    api_key: Option<String>,
    access_token: Option<String>,
}

impl GoogleVisionClient {
    pub fn new(config: &AppConfig) -> Result<Self, VisionError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.vision_timeout_secs))
            .build()?;

        if config.google_api_key.is_none() && config.google_access_token.is_none() {
            tracing::warn!("No Google credentials configured; Vision API calls will be unauthenticated");
        }

        Ok(Self {
            http,
            endpoint: config.google_vision_endpoint.clone(),
            api_key: config.google_api_key.clone(),
            access_token: config.google_access_token.clone(),
        })
    }
}

#[async_trait]
impl ImageAnnotator for GoogleVisionClient {
    async fn annotate(&self, image_base64: &str) -> Result<ImageAnnotation, VisionError> {
        let mut request = self
            .http
            .post(&self.endpoint)
            .json(&BatchAnnotateImagesRequest::labels_and_text(image_base64));

        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VisionError::Status { status, body });
        }

        let batch: BatchAnnotateImagesResponse = response.json().await?;
        let mut first = batch
            .responses
            .into_iter()
            .next()
            .ok_or(VisionError::EmptyResponse)?;

        if let Some(err) = first.error.take() {
            return Err(VisionError::Api {
                code: err.code,
                message: err.message,
            });
        }

        Ok(first.into())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    #[error("Vision API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Vision API image error {code}: {message}")]
    Api { code: i32, message: String },

    #[error("Vision API returned no annotation response")]
    EmptyResponse,
}

// Request URLs stay out of error text so they never reach the logs.
impl From<reqwest::Error> for VisionError {
    fn from(e: reqwest::Error) -> Self {
        VisionError::Http(e.without_url())
    }
}
