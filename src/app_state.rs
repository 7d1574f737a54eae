use std::sync::Arc;

use crate::services::vision::ImageAnnotator;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub annotator: Arc<dyn ImageAnnotator>,
}

impl AppState {
    pub fn new(annotator: impl ImageAnnotator + 'static) -> Self {
        Self {
            annotator: Arc::new(annotator),
        }
    }
}
