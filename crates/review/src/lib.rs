//! Review orchestration.
//!
//! `Reviewer` is the single entry point for a review action: it assembles
//! the prompt, enforces the aggregate payload ceiling before any network
//! traffic, issues exactly one request to the configured backend, and maps
//! every failure into the surface error taxonomy. No retries — a
//! user-triggered re-invocation is the only recovery path.

pub mod prompt;

use reviewclaw_core::error::{ProviderError, ReviewError};
use reviewclaw_core::generator::{GenerationRequest, TextGenerator};
use reviewclaw_core::review::ReviewRequest;
use std::sync::Arc;
use tracing::{debug, info};

pub use prompt::{REVIEW_RUBRIC, build_prompt, split_prompt};

/// Orchestrates one review call at a time.
pub struct Reviewer {
    generator: Arc<dyn TextGenerator>,
    model: String,
    max_payload_bytes: usize,
    // Serializes concurrent review() calls: one outstanding request.
    in_flight: tokio::sync::Mutex<()>,
}

impl Reviewer {
    /// `max_payload_bytes` is the aggregate prompt ceiling; the single
    /// source of truth for the production value is `ReviewConfig`.
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        model: impl Into<String>,
        max_payload_bytes: usize,
    ) -> Self {
        Self {
            generator,
            model: model.into(),
            max_payload_bytes,
            in_flight: tokio::sync::Mutex::new(()),
        }
    }

    /// Run one review. Returns the model's Markdown text unmodified.
    pub async fn review(&self, request: &ReviewRequest) -> Result<String, ReviewError> {
        let _permit = self.in_flight.lock().await;

        if request.files.is_empty() {
            return Err(ReviewError::NoFilesSelected);
        }

        let blob = prompt::build_prompt(&request.project_name, &request.files);
        let size = blob.len();
        if size > self.max_payload_bytes {
            debug!(size, limit = self.max_payload_bytes, "Prompt over payload ceiling");
            return Err(ReviewError::PayloadTooLarge {
                size,
                limit: self.max_payload_bytes,
            });
        }

        info!(
            project = %request.project_name,
            files = request.files.len(),
            payload_bytes = size,
            "Requesting review"
        );

        let response = self
            .generator
            .generate(GenerationRequest {
                model: self.model.clone(),
                contents: blob,
                system_instruction: Some(REVIEW_RUBRIC.to_string()),
            })
            .await
            .map_err(classify)?;

        Ok(response.text)
    }
}

/// Map a backend failure into the surface taxonomy.
///
/// The service reports auth problems inconsistently (status vs. message), so
/// 400-class messages are inspected for an authentication signature before
/// falling back to a generic remote failure.
fn classify(err: ProviderError) -> ReviewError {
    match err {
        ProviderError::AuthenticationFailed(message) => ReviewError::AuthRejected(message),
        ProviderError::ApiError {
            status_code,
            message,
        } => {
            let lower = message.to_lowercase();
            if lower.contains("api key") || lower.contains("unauthenticated") {
                ReviewError::AuthRejected(message)
            } else if status_code == 413
                || ((400..500).contains(&status_code)
                    && (lower.contains("payload") || lower.contains("too large")))
            {
                ReviewError::PayloadRejected(message)
            } else {
                ReviewError::RemoteFailure(format!("{message} (status {status_code})"))
            }
        }
        ProviderError::Network(message) => ReviewError::RemoteFailure(message),
        ProviderError::InvalidResponse(message) => ReviewError::Unknown(message),
    }
}
