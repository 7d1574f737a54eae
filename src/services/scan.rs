use std::time::Instant;

use garde::Validate;
use tracing::{debug, error, info};

use crate::models::scan::{ScanRequest, ScanResult};
use crate::services::placement;
use crate::services::vision::{ImageAnnotator, VisionError};

/// Errors surfaced to clients of the scan endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("No image provided")]
    NoImage,

    #[error("Vision API failed")]
    Vision(#[source] VisionError),
}

/// Annotate an image and derive its placement.
///
/// Rejects requests without image content before touching the annotator.
/// Annotator failures are logged here and collapse into
/// [`ScanError::Vision`]; there is no retry and no partial result.
pub async fn scan_image(
    annotator: &dyn ImageAnnotator,
    request: &ScanRequest,
) -> Result<ScanResult, ScanError> {
    metrics::counter!("scan_requests_total").increment(1);

    let content = match (request.validate(), request.image_content()) {
        (Ok(()), Some(content)) => content,
        _ => {
            debug!("Rejecting scan request without image content");
            metrics::counter!("scan_rejected_total").increment(1);
            return Err(ScanError::NoImage);
        }
    };

    let start = Instant::now();
    let annotation = annotator.annotate(content).await.map_err(|e| {
        error!(error = %e, "Vision API call failed");
        metrics::counter!("vision_api_failures_total").increment(1);
        ScanError::Vision(e)
    })?;
    metrics::histogram!("vision_api_duration_seconds").record(start.elapsed().as_secs_f64());

    let placement = placement::classify(annotation.labels.as_slice());
    let placement_label: &'static str = placement.into();
    metrics::counter!("scan_placements_total", "placement" => placement_label).increment(1);

    info!(
        labels = annotation.labels.len(),
        %placement,
        "Image scanned"
    );

    Ok(ScanResult {
        labels: annotation.labels,
        text: annotation.text,
        placement,
    })
}
