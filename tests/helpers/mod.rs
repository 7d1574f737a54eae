//! Test helper utilities for E2E testing

use serde::{Deserialize, Serialize};

/// Response from POST /api/scan on success
#[derive(Debug, Serialize, Deserialize)]
pub struct ScanResponse {
    pub labels: Vec<String>,
    pub text: String,
    pub placement: String,
}

/// Error body shared by 400 and 500 responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// POST a raw JSON body to the scan endpoint
pub async fn post_scan(
    client: &reqwest::Client,
    base_url: &str,
    body: &str,
) -> Result<reqwest::Response, Box<dyn std::error::Error>> {
    let response = client
        .post(format!("{}/api/scan", base_url))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .send()
        .await?;
    Ok(response)
}

/// Scan a base64 image and decode the success body
pub async fn scan_image(
    client: &reqwest::Client,
    base_url: &str,
    image_base64: &str,
) -> Result<ScanResponse, Box<dyn std::error::Error>> {
    let body = serde_json::json!({ "imageBase64": image_base64 }).to_string();
    let response = post_scan(client, base_url, &body).await?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await?;
        return Err(format!("Scan failed with status {}: {}", status, error_text).into());
    }

    Ok(response.json::<ScanResponse>().await?)
}

/// Assert a scan response is well-formed
pub fn assert_scan_response(response: &ScanResponse) {
    assert!(
        response.labels.len() <= 5,
        "Vision API should return at most 5 labels, got {}",
        response.labels.len()
    );
    assert!(
        ["medical cabinet", "food storage", "unknown"].contains(&response.placement.as_str()),
        "Unexpected placement: {}",
        response.placement
    );
}
