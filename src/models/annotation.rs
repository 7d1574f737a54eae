//! Wire types for the Google Cloud Vision `images:annotate` REST call.
//!
//! Every response field is optional on the wire; defaults are applied
//! when converting into [`ImageAnnotation`].

use serde::{Deserialize, Serialize};

/// Results requested per feature.
pub const MAX_RESULTS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureType {
    LabelDetection,
    TextDetection,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: FeatureType,
    pub max_results: u32,
}

#[derive(Debug, Serialize)]
pub struct Image<'a> {
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct AnnotateImageRequest<'a> {
    pub image: Image<'a>,
    pub features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
pub struct BatchAnnotateImagesRequest<'a> {
    pub requests: Vec<AnnotateImageRequest<'a>>,
}

impl<'a> BatchAnnotateImagesRequest<'a> {
    /// Single-image request for label and text detection.
    pub fn labels_and_text(content: &'a str) -> Self {
        Self {
            requests: vec![AnnotateImageRequest {
                image: Image { content },
                features: vec![
                    Feature {
                        kind: FeatureType::LabelDetection,
                        max_results: MAX_RESULTS,
                    },
                    Feature {
                        kind: FeatureType::TextDetection,
                        max_results: MAX_RESULTS,
                    },
                ],
            }],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct BatchAnnotateImagesResponse {
    #[serde(default)]
    pub responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageResponse {
    pub label_annotations: Option<Vec<EntityAnnotation>>,
    pub text_annotations: Option<Vec<EntityAnnotation>>,
    pub error: Option<ApiStatus>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EntityAnnotation {
    pub description: Option<String>,
}

/// Per-image error object (`google.rpc.Status`).
#[derive(Debug, Default, Deserialize)]
pub struct ApiStatus {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

/// Labels and primary text block extracted from an annotation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageAnnotation {
    pub labels: Vec<String>,
    pub text: String,
}

impl From<AnnotateImageResponse> for ImageAnnotation {
    fn from(resp: AnnotateImageResponse) -> Self {
        let labels = resp
            .label_annotations
            .unwrap_or_default()
            .into_iter()
            .filter_map(|label| label.description)
            .collect();

        let text = resp
            .text_annotations
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|block| block.description)
            .unwrap_or_default();

        Self { labels, text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = BatchAnnotateImagesRequest::labels_and_text("aGVsbG8=");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "requests": [{
                    "image": { "content": "aGVsbG8=" },
                    "features": [
                        { "type": "LABEL_DETECTION", "maxResults": 5 },
                        { "type": "TEXT_DETECTION", "maxResults": 5 }
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_full_response_conversion() {
        let raw = r#"{
            "responses": [{
                "labelAnnotations": [
                    {"mid": "/m/01", "description": "Medicine cabinet", "score": 0.93},
                    {"mid": "/m/02", "description": "Furniture", "score": 0.81}
                ],
                "textAnnotations": [
                    {"locale": "en", "description": "Aspirin"},
                    {"description": "Asp"}
                ]
            }]
        }"#;
        let mut batch: BatchAnnotateImagesResponse = serde_json::from_str(raw).unwrap();
        let annotation = ImageAnnotation::from(batch.responses.remove(0));

        assert_eq!(annotation.labels, vec!["Medicine cabinet", "Furniture"]);
        assert_eq!(annotation.text, "Aspirin");
    }

    #[test]
    fn test_missing_label_annotations_yield_empty_labels() {
        let resp: AnnotateImageResponse =
            serde_json::from_str(r#"{"textAnnotations":[{"description":"Hi"}]}"#).unwrap();
        let annotation = ImageAnnotation::from(resp);
        assert!(annotation.labels.is_empty());
        assert_eq!(annotation.text, "Hi");
    }

    #[test]
    fn test_empty_text_annotations_yield_empty_text() {
        let resp: AnnotateImageResponse = serde_json::from_str(
            r#"{"labelAnnotations":[{"description":"Food"}],"textAnnotations":[]}"#,
        )
        .unwrap();
        let annotation = ImageAnnotation::from(resp);
        assert_eq!(annotation.labels, vec!["Food"]);
        assert_eq!(annotation.text, "");
    }

    #[test]
    fn test_empty_response_object() {
        let batch: BatchAnnotateImagesResponse =
            serde_json::from_str(r#"{"responses":[{}]}"#).unwrap();
        let resp = batch.responses.into_iter().next().unwrap();
        assert!(resp.error.is_none());
        assert_eq!(ImageAnnotation::from(resp), ImageAnnotation::default());
    }

    #[test]
    fn test_per_image_error_parses() {
        let batch: BatchAnnotateImagesResponse = serde_json::from_str(
            r#"{"responses":[{"error":{"code":3,"message":"Bad image data."}}]}"#,
        )
        .unwrap();
        let status = batch.responses[0].error.as_ref().unwrap();
        assert_eq!(status.code, 3);
        assert_eq!(status.message, "Bad image data.");
    }
}
