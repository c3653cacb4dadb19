//! File admission pipeline for ReviewClaw.
//!
//! Decides which files of a selected folder are eligible for review:
//! count cap, per-file size cap, ignore rules, allow-list, UTF-8 decode —
//! in that precedence, first match wins. Deterministic: identical input
//! order and content always produce identical output.

pub mod matcher;
pub mod pipeline;

pub use matcher::IgnorePattern;
pub use pipeline::{AdmissionOutcome, AdmissionPipeline};
