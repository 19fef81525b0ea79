use std::sync::Arc;

use crate::interview::service::InterviewService;
use crate::interview::store::ReviewStore;
use crate::llm_client::GenerationService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub interviews: InterviewService,
    /// Pluggable review store. Default: PgReviewStore; tests swap in fakes.
    pub reviews: Arc<dyn ReviewStore>,
}

impl AppState {
    pub fn new(llm: Arc<dyn GenerationService>, reviews: Arc<dyn ReviewStore>) -> Self {
        Self {
            interviews: InterviewService::new(llm),
            reviews,
        }
    }
}
