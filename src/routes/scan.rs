use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::app_state::AppState;
use crate::models::scan::{ErrorResponse, ScanRequest, ScanResult};
use crate::services::scan::{scan_image, ScanError};

impl IntoResponse for ScanError {
    fn into_response(self) -> Response {
        let status = match self {
            ScanError::NoImage => StatusCode::BAD_REQUEST,
            ScanError::Vision(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// POST /api/scan — annotate a base64 image and classify its placement.
///
/// An unreadable body (wrong content type, malformed JSON) counts as no
/// image; only an oversized body keeps its own 413 rejection.
pub async fn scan(
    State(state): State<AppState>,
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> Result<Json<ScanResult>, Response> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return Err(rejection.into_response());
        }
        Err(rejection) => {
            tracing::debug!(%rejection, "Unreadable scan request body");
            ScanRequest::default()
        }
    };

    scan_image(state.annotator.as_ref(), &request)
        .await
        .map(Json)
        .map_err(IntoResponse::into_response)
}
