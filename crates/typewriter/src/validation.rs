//! Development-mode schema validation
//!
//! Validates a message against the JSON Schema its event was authored with,
//! collecting every error rather than failing fast. The whole module (and the
//! `jsonschema` dependency behind it) is gated on the `validation` feature so
//! production builds compile it out; what to do with the violations is the
//! [`crate::violation`] module's business, which is always compiled.

use jsonschema::{Draft, ValidationError};
use serde_json::Value;
use tracing::warn;

use crate::violation::SchemaViolation;

/// Validate `message` against `schema`, returning every violation found.
///
/// An empty list means the message conforms. Schemas are authored against
/// draft-04/06; the validator is pinned to draft 6. A schema that fails to
/// compile is logged and skipped - generated schemas are trusted input, and
/// a broken one must not take the caller's main path down with it.
pub fn validate(message: &Value, schema: &Value) -> Vec<SchemaViolation> {
    let validator = match jsonschema::options().with_draft(Draft::Draft6).build(schema) {
        Ok(validator) => validator,
        Err(error) => {
            warn!(error = %error, "event schema failed to compile, skipping validation");
            return Vec::new();
        }
    };

    validator.iter_errors(message).map(to_violation).collect()
}

/// Convert one `jsonschema` error into the verbose violation record.
fn to_violation(error: ValidationError<'_>) -> SchemaViolation {
    let path = match error.instance_path.to_string() {
        p if p.is_empty() => "/".to_string(),
        p => p,
    };
    let keyword = error
        .schema_path
        .to_string()
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string();

    SchemaViolation {
        path,
        keyword,
        message: error.to_string(),
    }
}
