//! The review request — one per user-triggered review action.

use crate::file::AcceptedFile;
use serde::{Deserialize, Serialize};

/// Placeholder used when the selection layer provides no folder name.
pub const UNTITLED_PROJECT: &str = "untitled project";

/// Everything the assembler needs for one review call. Ephemeral — built
/// once per action and discarded with the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// Display name of the project under review.
    pub project_name: String,
    /// Accepted files in admission order.
    pub files: Vec<AcceptedFile>,
}

impl ReviewRequest {
    pub fn new(project_name: Option<String>, files: Vec<AcceptedFile>) -> Self {
        Self {
            project_name: project_name.unwrap_or_else(|| UNTITLED_PROJECT.to_string()),
            files,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_name_falls_back_to_placeholder() {
        let req = ReviewRequest::new(None, Vec::new());
        assert_eq!(req.project_name, UNTITLED_PROJECT);
    }

    #[test]
    fn explicit_name_is_kept() {
        let req = ReviewRequest::new(Some("my-app".into()), Vec::new());
        assert_eq!(req.project_name, "my-app");
    }
}
