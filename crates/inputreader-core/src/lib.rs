//! inputreader-core: line-based prompts and numbered selections
//!
//! This crate provides [`InputReader`], a session over any buffered input and
//! any writer that can ask free-text questions and run numbered selections
//! with re-prompting on invalid answers.

/// Error types for reader operations
pub mod error;

/// Per-call selection configuration
pub mod config;

/// Prompt rendering, diagnostics and quoting
pub mod format;

/// The prompt reader session
pub mod reader;

/// Interaction seam implemented by the reader
pub mod interaction;

// Re-exports for convenience
pub use config::InputOptions;
pub use error::{ReaderError, ReaderResult};
pub use format::{Diagnostic, quote};
pub use interaction::Prompter;
pub use reader::InputReader;
