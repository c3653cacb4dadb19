//! `reviewclaw scan` — preview a folder selection without any network call.

use crate::walker;
use reviewclaw_admission::AdmissionPipeline;
use reviewclaw_config::AppConfig;
use std::path::Path;

pub fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !path.is_dir() {
        return Err(format!("Not a folder: {}", path.display()).into());
    }

    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let descriptors = walker::collect_descriptors(path, config.admission.max_file_bytes);
    let total = descriptors.len();

    let pipeline = AdmissionPipeline::new(&config.admission);
    let outcome = pipeline.admit(descriptors);

    println!("Scanned {} files under {}", total, path.display());
    println!();
    println!("Accepted ({}):", outcome.accepted.len());
    for file in &outcome.accepted {
        println!("  {}", file.path);
    }

    let summary = outcome.summary();
    if !summary.is_empty() {
        println!();
        println!("Skipped ({}):", summary.total());
        for (reason, count) in &summary.counts {
            println!("  {reason}: {count}");
        }
    }

    if outcome.truncated > 0 {
        println!();
        println!(
            "{} files beyond the {}-file cap were not evaluated.",
            outcome.truncated, config.admission.max_files
        );
    }

    Ok(())
}
