//! Error types for the typewriter runtime
//!
//! Only two conditions are loud: dispatching before a transport has been
//! configured, and a schema violation under the strict policy. Everything
//! else logs and lets the caller's main path continue.

use thiserror::Error;

use crate::violation::SchemaViolation;

/// Result type for dispatch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers of the generated client
#[derive(Debug, Error)]
pub enum Error {
    /// A dispatch was attempted before any transport was configured
    #[error(
        "no analytics transport is configured; call `Typewriter::configure` with \
         `TypewriterOptions {{ transport: Some(..), .. }}` before tracking events"
    )]
    MissingTransport,

    /// A message failed schema validation under the strict policy
    #[error("message for event '{event}' does not conform to its schema ({} violation(s))", violations.len())]
    SchemaViolations {
        /// Name of the event whose schema was violated
        event: String,
        /// Every violation found (validation is not fail-fast)
        violations: Vec<SchemaViolation>,
    },

    /// A message could not be serialized for validation
    #[error("failed to serialize message: {0}")]
    Serialization(#[from] serde_json::Error),
}
