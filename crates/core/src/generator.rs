//! TextGenerator trait — the abstraction over remote completion backends.
//!
//! A TextGenerator knows how to send one assembled prompt to a hosted model
//! and return its free-form text. One implementation ships (Gemini, in
//! `reviewclaw-providers`); tests substitute mocks.

use crate::error::ProviderError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The model to use (e.g., "gemini-2.5-pro").
    pub model: String,

    /// The primary user-content payload.
    pub contents: String,

    /// Fixed system-level instruction, carried on the service's dedicated
    /// side channel rather than inline in the contents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<String>,
}

/// A complete response from a backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// The generated text, unmodified. Typically Markdown prose.
    pub text: String,

    /// Which model actually responded (may differ from requested).
    pub model: String,
}

/// The remote service boundary.
///
/// Exactly one request per review action; no streaming, no retries. The
/// caller owns admission control — by the time a request reaches a generator
/// it has already passed the payload ceiling.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// A human-readable name for this backend (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send one request and return the complete response.
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> std::result::Result<GenerationResponse, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serialization_omits_absent_instruction() {
        let req = GenerationRequest {
            model: "gemini-2.5-pro".into(),
            contents: "hello".into(),
            system_instruction: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("system_instruction"));

        let req = GenerationRequest {
            system_instruction: Some("You are a reviewer".into()),
            ..req
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("system_instruction"));
    }
}
