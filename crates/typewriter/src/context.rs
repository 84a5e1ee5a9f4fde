//! Context decoration
//!
//! Every outgoing message carries a `context.typewriter` object naming the
//! client's source language and build version, so downstream tooling can tell
//! which generated client produced an event. Decoration happens after
//! validation (schemas describe the authored message, not the decorated one)
//! and exactly once per dispatch.

use serde_json::json;

use crate::message::TrackMessage;

/// Source-language tag stamped into `context.typewriter`
pub const LANGUAGE: &str = "rust";

/// Client build version stamped into `context.typewriter`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Return a copy of `message` with `context.typewriter` set to the fixed
/// provenance object.
///
/// The input is never mutated. Every caller-supplied context key passes
/// through unchanged; only a caller-supplied `typewriter` key is overwritten.
/// Idempotent on everything except that one key.
pub fn decorate(message: &TrackMessage) -> TrackMessage {
    let mut decorated = message.clone();
    decorated.context.insert(
        "typewriter".to_string(),
        json!({
            "language": LANGUAGE,
            "version": VERSION,
        }),
    );
    decorated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{Identity, TrackOptions};
    use serde_json::{Map, Value, json};

    fn message_with_context(context: Map<String, Value>) -> TrackMessage {
        TrackMessage::new(
            "Order Completed",
            Map::new(),
            Identity::user("u1"),
            TrackOptions {
                context,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_decorate_injects_typewriter_object() {
        let message = message_with_context(Map::new());
        let decorated = decorate(&message);

        let typewriter = &decorated.context["typewriter"];
        assert_eq!(typewriter["language"], LANGUAGE);
        assert_eq!(typewriter["version"], VERSION);
    }

    #[test]
    fn test_decorate_preserves_caller_context() {
        let mut context = Map::new();
        context.insert("locale".to_string(), json!("en-US"));
        context.insert("app".to_string(), json!({ "name": "storefront" }));

        let message = message_with_context(context);
        let decorated = decorate(&message);

        assert_eq!(decorated.context["locale"], "en-US");
        assert_eq!(decorated.context["app"]["name"], "storefront");
    }

    #[test]
    fn test_decorate_overwrites_caller_typewriter_key() {
        let mut context = Map::new();
        context.insert("typewriter".to_string(), json!({ "language": "spoofed" }));

        let decorated = decorate(&message_with_context(context));
        assert_eq!(decorated.context["typewriter"]["language"], LANGUAGE);
    }

    #[test]
    fn test_decorate_does_not_mutate_input() {
        let message = message_with_context(Map::new());
        let _ = decorate(&message);
        assert!(message.context.is_empty());
    }

    #[test]
    fn test_decorate_is_idempotent() {
        let message = message_with_context(Map::new());
        let once = decorate(&message);
        let twice = decorate(&once);

        assert_eq!(
            serde_json::to_value(&once).unwrap(),
            serde_json::to_value(&twice).unwrap()
        );
    }
}
