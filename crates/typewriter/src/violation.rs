//! Violation reporting policy
//!
//! What happens when a message does not match its event schema. The default
//! policy is selected by the `strict` configuration flag: strict fails the
//! dispatch (so test suites surface schema drift as failures), lenient logs a
//! structured warning and lets the message through. A caller-supplied handler
//! fully replaces the default.
//!
//! This module is always compiled, even when the validator itself is not, so
//! the dispatch path is identical with and without the `validation` feature.

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::error::{Error, Result};
use crate::message::TrackMessage;

/// One schema non-conformance, as reported by the validator.
///
/// Verbose by design: each violation names where in the message it occurred,
/// which schema keyword was violated, and a human-readable description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaViolation {
    /// JSON Pointer to the violating part of the message
    pub path: String,

    /// Schema keyword that was violated (`type`, `required`, ...)
    pub keyword: String,

    /// Human-readable description of the violation
    pub message: String,
}

/// Caller-supplied replacement for the default violation policy.
///
/// Invoked synchronously with the pre-decoration message and the full
/// violation list. Returning an error aborts the dispatch before any
/// transport call; returning `Ok(())` lets it proceed.
pub type ViolationHandler = Arc<dyn Fn(&TrackMessage, &[SchemaViolation]) -> Result<()> + Send + Sync>;

/// Apply the violation policy for one non-conforming message.
///
/// Used by the dispatcher; public so hand-rolled dynamic surfaces can apply
/// the same policy.
pub fn report(
    message: &TrackMessage,
    violations: Vec<SchemaViolation>,
    handler: Option<&ViolationHandler>,
    strict: bool,
) -> Result<()> {
    if let Some(handler) = handler {
        return handler(message, &violations);
    }

    if strict {
        return Err(Error::SchemaViolations {
            event: message.event.clone(),
            violations,
        });
    }

    warn!(
        event = %message.event,
        violations = %serde_json::to_string(&violations).unwrap_or_default(),
        "message does not conform to the schema for this event; fix the call \
         site or regenerate the client from an updated tracking plan"
    );
    Ok(())
}
