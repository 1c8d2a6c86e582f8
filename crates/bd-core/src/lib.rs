//! # bd-core
//!
//! Error definitions, process-wide settings, and shared patterns for bizday.
//!
//! Every other crate in the workspace reports failures through
//! [`Error`] and reads "today" through [`Settings`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Design patterns: singleton.
pub mod patterns;

/// Global library settings (evaluation date).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationDate, Settings};
