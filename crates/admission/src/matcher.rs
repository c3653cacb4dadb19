//! Typed ignore-rule matchers.
//!
//! Configured rules come in as plain strings; `IgnorePattern::parse` sorts
//! each into one of three shapes, and `matches` dispatches on the shape.
//! Paths must already be slash-normalized before matching.

/// One compiled ignore rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnorePattern {
    /// `/name/` — matches when the path, wrapped in slashes itself, contains
    /// the pattern as a substring. The slash wrapping anchors whole segments:
    /// a segment that merely contains the name does not match.
    Directory { pattern: String },

    /// `*.ext` — case-insensitive suffix match on the extension.
    Extension { pattern: String, suffix: String },

    /// Anything else — case-insensitive literal suffix match. Covers exact
    /// filenames like `.DS_Store` and sensitive dotfiles like `.env`.
    Suffix { pattern: String, suffix: String },
}

impl IgnorePattern {
    /// Classify a raw configured rule.
    pub fn parse(raw: &str) -> Self {
        if raw.len() > 1 && raw.starts_with('/') && raw.ends_with('/') {
            Self::Directory {
                pattern: raw.to_string(),
            }
        } else if let Some(rest) = raw.strip_prefix('*') {
            Self::Extension {
                pattern: raw.to_string(),
                suffix: rest.to_lowercase(),
            }
        } else {
            Self::Suffix {
                pattern: raw.to_string(),
                suffix: raw.to_lowercase(),
            }
        }
    }

    /// Test a slash-normalized relative path against this rule.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Directory { pattern } => {
                let wrapped = format!("/{path}/");
                wrapped.contains(pattern.as_str())
            }
            Self::Extension { suffix, .. } | Self::Suffix { suffix, .. } => {
                path.to_lowercase().ends_with(suffix.as_str())
            }
        }
    }

    /// The rule as configured, for skip-ledger reporting.
    pub fn pattern(&self) -> &str {
        match self {
            Self::Directory { pattern }
            | Self::Extension { pattern, .. }
            | Self::Suffix { pattern, .. } => pattern,
        }
    }
}
