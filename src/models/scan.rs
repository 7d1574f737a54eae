use garde::Validate;
use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

/// Body of `POST /api/scan`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    #[garde(required, length(min = 1))]
    pub image_base64: Option<String>,
}

impl ScanRequest {
    pub fn new(image_base64: impl Into<String>) -> Self {
        Self {
            image_base64: Some(image_base64.into()),
        }
    }

    /// Image content to forward, `None` when absent or empty.
    ///
    /// A `data:<mime>;base64,` URL is reduced to its payload; any other
    /// string is forwarded exactly as sent.
    pub fn image_content(&self) -> Option<&str> {
        let raw = self.image_base64.as_deref().filter(|raw| !raw.is_empty())?;
        Some(strip_data_url(raw))
    }
}

fn strip_data_url(raw: &str) -> &str {
    raw.strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .map_or(raw, |(_, payload)| payload)
}

/// Coarse storage context suggested by an image's labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, IntoStaticStr)]
pub enum Placement {
    #[serde(rename = "medical cabinet")]
    #[strum(serialize = "medical cabinet")]
    MedicalCabinet,

    #[serde(rename = "food storage")]
    #[strum(serialize = "food storage")]
    FoodStorage,

    #[serde(rename = "unknown")]
    #[strum(serialize = "unknown")]
    Unknown,
}

/// Successful response of `POST /api/scan`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanResult {
    pub labels: Vec<String>,
    pub text: String,
    pub placement: Placement,
}

/// JSON error body shared by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
