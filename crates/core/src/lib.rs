//! # ReviewClaw Core
//!
//! Domain types, traits, and error definitions for the ReviewClaw code
//! reviewer. This crate has **zero framework dependencies** — it defines the
//! domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The remote text-generation backend is defined as a trait here; the HTTP
//! implementation lives in `reviewclaw-providers`. This enables:
//! - Swapping backends via configuration
//! - Easy testing with mock/stub generators
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod file;
pub mod generator;
pub mod review;

// Re-export key types at crate root for ergonomics
pub use error::{ProviderError, ReviewError};
pub use file::{AcceptedFile, FileDescriptor, SkipReason, SkipRecord, SkipSummary};
pub use generator::{GenerationRequest, GenerationResponse, TextGenerator};
pub use review::ReviewRequest;
