//! The admission pipeline itself.
//!
//! `admit` evaluates each descriptor against the configured stages in strict
//! precedence and returns accepted files plus a skip ledger. A bad file only
//! removes itself — the pipeline never fails for a single descriptor.

use crate::matcher::IgnorePattern;
use reviewclaw_config::AdmissionConfig;
use reviewclaw_core::file::{AcceptedFile, FileDescriptor, SkipReason, SkipRecord, SkipSummary};
use tracing::debug;

/// Result of one pipeline run.
#[derive(Debug, Clone)]
pub struct AdmissionOutcome {
    /// Files that passed every stage, in input order.
    pub accepted: Vec<AcceptedFile>,
    /// Skip ledger: one record per excluded file, exactly one reason each.
    pub skipped: Vec<SkipRecord>,
    /// Descriptors beyond the count cap. Not evaluated, not in the ledger.
    pub truncated: usize,
}

impl AdmissionOutcome {
    /// Counts per skip reason, for display.
    pub fn summary(&self) -> SkipSummary {
        SkipSummary::from_records(&self.skipped)
    }
}

/// The compiled pipeline. Stateless across runs — create once, reuse freely.
pub struct AdmissionPipeline {
    max_files: usize,
    max_file_bytes: u64,
    allowed: Vec<String>,
    rules: Vec<IgnorePattern>,
}

impl AdmissionPipeline {
    /// Compile the configured string rules into typed matchers.
    pub fn new(config: &AdmissionConfig) -> Self {
        Self {
            max_files: config.max_files,
            max_file_bytes: config.max_file_bytes,
            allowed: config.allowed.clone(),
            rules: config.ignore.iter().map(|s| IgnorePattern::parse(s)).collect(),
        }
    }

    /// Run the pipeline over an ordered descriptor list.
    ///
    /// Stage order per file, first match wins: count cap, size cap, ignore
    /// rules, allow-list, UTF-8 decode.
    pub fn admit(&self, descriptors: Vec<FileDescriptor>) -> AdmissionOutcome {
        let truncated = descriptors.len().saturating_sub(self.max_files);
        if truncated > 0 {
            debug!(truncated, max_files = self.max_files, "Selection over count cap, truncating");
        }

        let mut accepted = Vec::new();
        let mut skipped = Vec::new();

        for descriptor in descriptors.into_iter().take(self.max_files) {
            match self.evaluate(descriptor) {
                Ok(file) => accepted.push(file),
                Err(record) => {
                    debug!(path = %record.path, reason = record.reason.label(), "Skipping file");
                    skipped.push(record);
                }
            }
        }

        AdmissionOutcome {
            accepted,
            skipped,
            truncated,
        }
    }

    fn evaluate(&self, descriptor: FileDescriptor) -> Result<AcceptedFile, SkipRecord> {
        let path = normalize_path(&descriptor.path);

        if descriptor.size > self.max_file_bytes {
            return Err(SkipRecord {
                path,
                reason: SkipReason::SizeExceeded,
            });
        }

        if let Some(rule) = self.rules.iter().find(|r| r.matches(&path)) {
            return Err(SkipRecord {
                reason: SkipReason::IgnoredPattern {
                    pattern: rule.pattern().to_string(),
                },
                path,
            });
        }

        if !self.is_allowed(&path) {
            let reason = if file_extension(&path).is_some() {
                SkipReason::ExtensionNotAllowed
            } else {
                SkipReason::ExtensionlessNotAllowlisted
            };
            return Err(SkipRecord { path, reason });
        }

        match String::from_utf8(descriptor.bytes) {
            Ok(content) => Ok(AcceptedFile { path, content }),
            Err(_) => Err(SkipRecord {
                path,
                reason: SkipReason::UnreadableAsText,
            }),
        }
    }

    /// Bare filename OR extension must exactly match an allow-list entry.
    fn is_allowed(&self, path: &str) -> bool {
        let bare = bare_filename(path);
        if self.allowed.iter().any(|entry| entry == bare) {
            return true;
        }
        match file_extension(path) {
            Some(ext) => self.allowed.iter().any(|entry| *entry == ext),
            None => false,
        }
    }
}

/// Convert any input separator to `/`.
pub fn normalize_path(raw: &str) -> String {
    raw.replace('\\', "/")
}

/// Substring after the last `/`.
fn bare_filename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Extension from the last `.` of the bare filename, lower-cased, leading
/// dot included. `None` when the bare filename has no dot.
fn file_extension(path: &str) -> Option<String> {
    let bare = bare_filename(path);
    bare.rfind('.').map(|idx| bare[idx..].to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewclaw_config::AdmissionConfig;

    fn pipeline() -> AdmissionPipeline {
        AdmissionPipeline::new(&AdmissionConfig::default())
    }

    fn text_file(path: &str, content: &str) -> FileDescriptor {
        FileDescriptor::new(path, content.as_bytes().to_vec())
    }

    #[test]
    fn accepted_order_is_subsequence_of_input() {
        let descriptors = vec![
            text_file("src/a.ts", "let a = 1;"),
            text_file("image.png", "not really an image"),
            text_file("src/b.ts", "let b = 2;"),
            text_file("README", "# readme"),
        ];

        let outcome = pipeline().admit(descriptors);
        let paths: Vec<&str> = outcome.accepted.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["src/a.ts", "src/b.ts", "README"]);
    }

    #[test]
    fn oversized_file_skipped_regardless_of_extension() {
        let mut fd = text_file("src/huge.ts", "x");
        fd.size = 2 * 1024 * 1024 + 1;

        let outcome = pipeline().admit(vec![fd]);
        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.skipped[0].reason, SkipReason::SizeExceeded);
    }

    #[test]
    fn file_at_exact_size_cap_passes() {
        let mut fd = text_file("src/big.ts", "x");
        fd.size = 2 * 1024 * 1024;

        let outcome = pipeline().admit(vec![fd]);
        assert_eq!(outcome.accepted.len(), 1);
    }

    #[test]
    fn node_modules_always_ignored() {
        let outcome = pipeline().admit(vec![text_file("node_modules/x/y.js", "exports = {}")]);
        assert!(outcome.accepted.is_empty());
        match &outcome.skipped[0].reason {
            SkipReason::IgnoredPattern { pattern } => assert_eq!(pattern, "/node_modules/"),
            other => panic!("expected ignored-pattern, got {other:?}"),
        }
    }

    #[test]
    fn size_cap_wins_over_ignore_rules() {
        let mut fd = text_file("node_modules/big.js", "x");
        fd.size = 5 * 1024 * 1024;

        let outcome = pipeline().admit(vec![fd]);
        assert_eq!(outcome.skipped[0].reason, SkipReason::SizeExceeded);
    }

    #[test]
    fn bare_readme_accepted_unknown_bare_name_skipped() {
        let outcome = pipeline().admit(vec![
            text_file("README", "# hello"),
            text_file("NOTES", "scratch"),
        ]);

        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.accepted[0].path, "README");
        assert_eq!(
            outcome.skipped[0].reason,
            SkipReason::ExtensionlessNotAllowlisted
        );
    }

    #[test]
    fn python_accepted_png_ignored_before_allowlist() {
        let outcome = pipeline().admit(vec![
            text_file("app.py", "print('hi')"),
            text_file("image.png", "fake"),
        ]);

        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.accepted[0].path, "app.py");
        // `.png` never reaches the allow-list — the ignore rule fires first.
        assert_eq!(outcome.skipped[0].reason.label(), "ignored-pattern");
    }

    #[test]
    fn unknown_extension_skipped_with_extension_reason() {
        let outcome = pipeline().admit(vec![text_file(".env.example", "KEY=value")]);
        assert_eq!(outcome.skipped[0].reason, SkipReason::ExtensionNotAllowed);
    }

    #[test]
    fn env_file_skipped_as_ignored_pattern() {
        let outcome = pipeline().admit(vec![text_file("config/.env", "SECRET=1")]);
        match &outcome.skipped[0].reason {
            SkipReason::IgnoredPattern { pattern } => assert_eq!(pattern, ".env"),
            other => panic!("expected ignored-pattern, got {other:?}"),
        }
    }

    #[test]
    fn binary_content_skipped_as_unreadable() {
        let fd = FileDescriptor::new("src/data.json", vec![0xff, 0xfe, 0x00, 0x80]);
        let outcome = pipeline().admit(vec![fd]);
        assert_eq!(outcome.skipped[0].reason, SkipReason::UnreadableAsText);
    }

    #[test]
    fn backslash_paths_are_normalized() {
        let outcome = pipeline().admit(vec![text_file("src\\windows\\main.rs", "fn main() {}")]);
        assert_eq!(outcome.accepted[0].path, "src/windows/main.rs");

        let outcome = pipeline().admit(vec![text_file("node_modules\\x\\y.js", "x")]);
        assert_eq!(outcome.skipped[0].reason.label(), "ignored-pattern");
    }

    #[test]
    fn count_cap_truncates_without_skip_records() {
        let config = AdmissionConfig {
            max_files: 2,
            ..Default::default()
        };
        let pipeline = AdmissionPipeline::new(&config);

        let outcome = pipeline.admit(vec![
            text_file("a.rs", "1"),
            text_file("b.rs", "2"),
            text_file("c.rs", "3"),
            text_file("d.rs", "4"),
        ]);

        assert_eq!(outcome.accepted.len(), 2);
        assert!(outcome.skipped.is_empty());
        assert_eq!(outcome.truncated, 2);
    }

    #[test]
    fn every_skip_has_exactly_one_reason() {
        let mut huge = text_file("assets/big.png", "x");
        huge.size = 10 * 1024 * 1024;

        let outcome = pipeline().admit(vec![
            huge,
            text_file("logo.png", "x"),
            text_file("NOTES", "x"),
            text_file("blob.xyz", "x"),
        ]);

        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.skipped.len(), 4);
        let summary = outcome.summary();
        assert_eq!(summary.counts["size-exceeded"], 1);
        assert_eq!(summary.counts["ignored-pattern"], 1);
        assert_eq!(summary.counts["extensionless-not-allowlisted"], 1);
        assert_eq!(summary.counts["extension-not-allowed"], 1);
        assert_eq!(summary.total(), 4);
    }

    #[test]
    fn end_to_end_selection_scenario() {
        let outcome = pipeline().admit(vec![
            text_file("src/a.ts", "export const a = 1;"),
            text_file("node_modules/x/y.js", "module.exports = {};"),
            text_file("README", "# project"),
        ]);

        let paths: Vec<&str> = outcome.accepted.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["src/a.ts", "README"]);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].path, "node_modules/x/y.js");
        assert_eq!(outcome.skipped[0].reason.label(), "ignored-pattern");
    }

    #[test]
    fn deterministic_for_identical_input() {
        let build = || {
            vec![
                text_file("src/a.ts", "a"),
                text_file("image.png", "b"),
                text_file("README", "c"),
            ]
        };

        let p = pipeline();
        let first = p.admit(build());
        let second = p.admit(build());
        assert_eq!(first.accepted, second.accepted);
        assert_eq!(first.skipped, second.skipped);
    }

    #[test]
    fn json_extension_always_allowed() {
        let outcome = pipeline().admit(vec![
            text_file("package.json", "{}"),
            text_file("data/obscure-name.json", "{\"k\":1}"),
        ]);
        assert_eq!(outcome.accepted.len(), 2);
    }
}
