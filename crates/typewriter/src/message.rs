//! Message model for analytics dispatch
//!
//! A [`TrackMessage`] is built once per dispatch from the caller's inputs and
//! the event name the generated dispatcher injects. It serializes with the
//! camelCase keys the authored schemas describe (`userId`, `anonymousId`).

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Who the event is about.
///
/// Exactly one of a user ID or an anonymous ID - the enum makes the
/// either/or invariant a type-level fact rather than a runtime check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Identity {
    /// A known, identified user
    #[serde(rename = "userId")]
    UserId(String),

    /// An anonymous visitor
    #[serde(rename = "anonymousId")]
    AnonymousId(String),
}

impl Identity {
    /// Create an identity for a known user
    pub fn user(id: impl Into<String>) -> Self {
        Self::UserId(id.into())
    }

    /// Create an identity for an anonymous visitor
    pub fn anonymous(id: impl Into<String>) -> Self {
        Self::AnonymousId(id.into())
    }
}

/// Per-call options supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct TrackOptions {
    /// Event timestamp; the transport stamps its own if absent
    pub timestamp: Option<DateTime<Utc>>,

    /// Destination selection map, passed through to the transport
    pub integrations: Map<String, Value>,

    /// Caller-supplied context groups (app, device, page, ...)
    pub context: Map<String, Value>,
}

/// A single analytics message, one per dispatch.
#[derive(Debug, Clone, Serialize)]
pub struct TrackMessage {
    /// Event name, injected by the dispatcher (never caller-supplied)
    pub event: String,

    /// Event-specific properties (the schema-validated shape)
    pub properties: Map<String, Value>,

    /// Serializes flat as either `userId` or `anonymousId`
    #[serde(flatten)]
    pub identity: Identity,

    /// Caller-supplied timestamp, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Destination selection map
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub integrations: Map<String, Value>,

    /// Contextual key/value groups; the dispatcher injects
    /// `context.typewriter` after validation
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub context: Map<String, Value>,
}

impl TrackMessage {
    /// Assemble a message from the caller's inputs and the injected event name.
    pub fn new(
        event: impl Into<String>,
        properties: Map<String, Value>,
        identity: Identity,
        options: TrackOptions,
    ) -> Self {
        Self {
            event: event.into(),
            properties,
            identity,
            timestamp: options.timestamp,
            integrations: options.integrations,
            context: options.context,
        }
    }
}
