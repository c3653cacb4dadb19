//! File descriptors, accepted files, and the skip ledger.
//!
//! These types flow through the admission pipeline: raw descriptors in,
//! accepted files plus skip records out. All of them are owned by the
//! invocation that creates them — nothing here is cached or persisted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A candidate file handed to the admission pipeline by the selection layer.
///
/// The caller has already read the raw bytes; the pipeline never touches the
/// filesystem itself. `path` is relative to the selected folder and may use
/// any separator on input — the pipeline normalizes to `/`.
#[derive(Debug, Clone)]
pub struct FileDescriptor {
    /// Relative path within the selected folder.
    pub path: String,
    /// Size in bytes, from filesystem metadata.
    pub size: u64,
    /// Raw content as read from disk.
    pub bytes: Vec<u8>,
}

impl FileDescriptor {
    pub fn new(path: impl Into<String>, bytes: Vec<u8>) -> Self {
        let size = bytes.len() as u64;
        Self {
            path: path.into(),
            size,
            bytes,
        }
    }
}

/// A file that passed every admission stage and decoded as UTF-8 text.
///
/// Ordering is meaningful: accepted files keep the traversal order of the
/// input descriptors, which determines prompt section order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedFile {
    /// Slash-normalized relative path.
    pub path: String,
    /// Decoded text content.
    pub content: String,
}

/// Why a file was excluded. Closed set — diagnostic only, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// File exceeds the per-file byte cap.
    SizeExceeded,
    /// Path matched an ignore rule; records which pattern fired.
    IgnoredPattern { pattern: String },
    /// Bytes did not decode as UTF-8 text.
    UnreadableAsText,
    /// Has an extension, but the extension is not allow-listed.
    ExtensionNotAllowed,
    /// No extension and the bare filename is not allow-listed.
    ExtensionlessNotAllowlisted,
}

impl SkipReason {
    /// Stable label used for summary grouping and display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SizeExceeded => "size-exceeded",
            Self::IgnoredPattern { .. } => "ignored-pattern",
            Self::UnreadableAsText => "unreadable-as-text",
            Self::ExtensionNotAllowed => "extension-not-allowed",
            Self::ExtensionlessNotAllowlisted => "extensionless-not-allowlisted",
        }
    }
}

/// One entry in the skip ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipRecord {
    pub path: String,
    pub reason: SkipReason,
}

/// Counts per skip reason, for user-facing summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipSummary {
    pub counts: BTreeMap<String, usize>,
}

impl SkipSummary {
    /// Aggregate a skip ledger into counts per reason label.
    pub fn from_records(records: &[SkipRecord]) -> Self {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for record in records {
            *counts.entry(record.reason.label().to_string()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
