//! Configuration loading, validation, and management for ReviewClaw.
//!
//! Loads configuration from `~/.reviewclaw/config.toml` with environment
//! variable overrides. All admission limits and pattern lists live here as
//! explicit, serde-defaulted fields rather than module globals, so tests can
//! construct configs with overridden limits.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.reviewclaw/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gemini API key. Usually supplied via environment instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model used for reviews.
    #[serde(default = "default_model")]
    pub model: String,

    /// File admission settings.
    #[serde(default)]
    pub admission: AdmissionConfig,

    /// Review request settings.
    #[serde(default)]
    pub review: ReviewConfig,
}

fn default_model() -> String {
    "gemini-2.5-pro".into()
}

/// Redact a secret string for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &redact(&self.api_key))
            .field("model", &self.model)
            .field("admission", &self.admission)
            .field("review", &self.review)
            .finish()
    }
}

/// Settings for the file admission pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdmissionConfig {
    /// Only the first N descriptors of a selection are evaluated.
    #[serde(default = "default_max_files")]
    pub max_files: usize,

    /// Per-file byte cap; larger files are skipped.
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,

    /// Allow-list entries: extensions with leading dot (lower-case) and
    /// extensionless well-known filenames (exact match).
    #[serde(default = "default_allowed")]
    pub allowed: Vec<String>,

    /// Ignore rules, evaluated in order. Three shapes: `/dir/` (directory
    /// segment), `*.ext` (extension suffix), anything else (literal suffix).
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            max_files: default_max_files(),
            max_file_bytes: default_max_file_bytes(),
            allowed: default_allowed(),
            ignore: default_ignore(),
        }
    }
}

fn default_max_files() -> usize {
    500
}

fn default_max_file_bytes() -> u64 {
    2 * 1024 * 1024
}

fn default_allowed() -> Vec<String> {
    [
        // Source
        ".ts", ".tsx", ".js", ".jsx", ".mjs", ".cjs", ".py", ".rb", ".go", ".rs", ".java",
        ".kt", ".swift", ".c", ".h", ".cpp", ".hpp", ".cc", ".cs", ".php", ".dart", ".ex",
        ".exs", ".erl", ".hs", ".lua", ".r", ".scala", ".clj", ".sql", ".graphql", ".gql",
        ".proto",
        // Web
        ".html", ".htm", ".css", ".scss", ".less", ".sass", ".vue", ".svelte",
        // Config / data
        ".json", ".yaml", ".yml", ".toml", ".ini", ".cfg", ".conf", ".xml", ".properties",
        ".gradle",
        // Docs
        ".md", ".markdown", ".txt", ".rst",
        // Scripts
        ".sh", ".bash", ".zsh", ".ps1", ".bat",
        // Extensionless well-known filenames
        "README", "LICENSE", "LICENCE", "NOTICE", "CHANGELOG", "AUTHORS", "CODEOWNERS",
        "Makefile", "Dockerfile", "Jenkinsfile", "Procfile", "Gemfile", "Rakefile",
        "Vagrantfile", "Brewfile",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_ignore() -> Vec<String> {
    [
        // Directory segments
        "/node_modules/", "/.git/", "/dist/", "/build/", "/out/", "/target/", "/vendor/",
        "/.next/", "/.nuxt/", "/.venv/", "/venv/", "/__pycache__/", "/coverage/", "/.idea/",
        "/.vscode/",
        // Binary / media extensions
        "*.png", "*.jpg", "*.jpeg", "*.gif", "*.ico", "*.webp", "*.bmp", "*.tiff", "*.svg",
        "*.mp3", "*.mp4", "*.wav", "*.avi", "*.mov", "*.zip", "*.tar", "*.gz", "*.rar",
        "*.7z", "*.pdf", "*.exe", "*.dll", "*.so", "*.dylib", "*.bin", "*.woff", "*.woff2",
        "*.ttf", "*.otf", "*.eot", "*.pyc", "*.class", "*.o", "*.a",
        // Generated / noisy text
        "*.map", "*.min.js", "*.min.css", "*.log",
        // Literal suffixes (exact filenames and sensitive dotfiles)
        ".DS_Store", "Thumbs.db", ".env", ".env.local", ".env.development",
        ".env.production",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Settings for the prompt assembler and remote call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// Aggregate byte ceiling for the assembled prompt. Conservative margin
    /// under the model's ~1M-token budget at roughly 4 bytes per token.
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: default_max_payload_bytes(),
        }
    }
}

fn default_max_payload_bytes() -> usize {
    3_800_000
}

impl AppConfig {
    /// Load configuration from the default path (~/.reviewclaw/config.toml).
    ///
    /// Also checks environment variables for the API key:
    /// - `REVIEWCLAW_API_KEY` (highest priority)
    /// - `GEMINI_API_KEY`
    /// - `GOOGLE_API_KEY`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        // Environment variable overrides (highest priority)
        if config.api_key.is_none() {
            config.api_key = std::env::var("REVIEWCLAW_API_KEY")
                .ok()
                .or_else(|| std::env::var("GEMINI_API_KEY").ok())
                .or_else(|| std::env::var("GOOGLE_API_KEY").ok());
        }

        if let Ok(model) = std::env::var("REVIEWCLAW_MODEL") {
            config.model = model;
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".reviewclaw")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.admission.max_files == 0 {
            return Err(ConfigError::ValidationError(
                "admission.max_files must be greater than 0".into(),
            ));
        }
        if self.review.max_payload_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "review.max_payload_bytes must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Check if an API key is available (from config or environment).
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            admission: AdmissionConfig::default(),
            review: ReviewConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}
