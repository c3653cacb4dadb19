//! `reviewclaw review` — run one review over a folder and print the result.

use crate::walker;
use reviewclaw_admission::AdmissionPipeline;
use reviewclaw_config::AppConfig;
use reviewclaw_core::error::ReviewError;
use reviewclaw_core::review::ReviewRequest;
use reviewclaw_providers::GeminiProvider;
use reviewclaw_review::Reviewer;
use std::path::Path;
use std::sync::Arc;

pub async fn run(
    path: &Path,
    name: Option<String>,
    model: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    if !path.is_dir() {
        return Err(format!("Not a folder: {}", path.display()).into());
    }

    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    // Check for API key early — give a clear error before any scanning
    let Some(api_key) = config.api_key.clone() else {
        eprintln!();
        eprintln!("  ERROR: No API key configured!");
        eprintln!();
        eprintln!("  Set one of these environment variables:");
        eprintln!("    GEMINI_API_KEY      (recommended)");
        eprintln!("    GOOGLE_API_KEY");
        eprintln!("    REVIEWCLAW_API_KEY");
        eprintln!();
        eprintln!("  Or add it to your config file:");
        eprintln!("    {}", AppConfig::config_dir().join("config.toml").display());
        eprintln!();
        return Err(Box::new(ReviewError::MissingApiKey));
    };

    let descriptors = walker::collect_descriptors(path, config.admission.max_file_bytes);
    let pipeline = AdmissionPipeline::new(&config.admission);
    let outcome = pipeline.admit(descriptors);

    let summary = outcome.summary();
    eprintln!(
        "  {} files accepted, {} skipped{}",
        outcome.accepted.len(),
        summary.total(),
        if outcome.truncated > 0 {
            format!(", {} beyond the count cap", outcome.truncated)
        } else {
            String::new()
        }
    );

    let project_name = name.or_else(|| {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
    });
    let request = ReviewRequest::new(project_name, outcome.accepted);

    let provider = Arc::new(GeminiProvider::new(api_key));
    let reviewer = Reviewer::new(
        provider,
        model.unwrap_or(config.model),
        config.review.max_payload_bytes,
    );

    eprintln!("  Reviewing...");
    let review = reviewer.review(&request).await?;
    println!("{review}");

    Ok(())
}
