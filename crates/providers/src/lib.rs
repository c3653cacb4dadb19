//! Remote text-generation backends.
//!
//! One implementation ships: Google's Gemini `generateContent` API. The
//! `TextGenerator` trait it implements lives in `reviewclaw-core`.

pub mod gemini;

pub use gemini::GeminiProvider;
