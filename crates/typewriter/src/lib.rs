//! Typewriter runtime
//!
//! Dispatch and validation core for generated analytics clients. A code
//! generator emits one typed function per event in a tracking plan; those
//! functions all funnel into this crate, which:
//!
//! - **Validates** the message against the event's bundled JSON Schema
//!   (development builds only, see the `validation` feature)
//! - **Decorates** the message context with fixed provenance metadata
//! - **Forwards** the decorated message to an opaque [`Transport`]
//! - **Degrades gracefully** on calls to event names outside the generated
//!   surface, warning and firing a synthetic telemetry event instead of
//!   failing the caller
//!
//! # Architecture
//!
//! ```text
//! caller ──▶ generated dispatcher ──▶ Typewriter::dispatch
//!                  │ (unknown name)         │ validate (dev builds)
//!                  ▼                        │ decorate context
//!         Typewriter::unknown_call ────────▶│
//!                                           ▼
//!                                   Transport::track(..)
//! ```
//!
//! # Quick start
//!
//! ```
//! use std::sync::Arc;
//! use serde_json::{Map, json};
//! use typewriter::{Identity, TrackOptions, Typewriter, TypewriterOptions};
//! use typewriter::test::RecordingTransport;
//!
//! let transport = Arc::new(RecordingTransport::new());
//! let client = Typewriter::new();
//! client.configure(TypewriterOptions {
//!     transport: Some(transport.clone()),
//!     ..Default::default()
//! });
//!
//! let mut properties = Map::new();
//! properties.insert("orderId".to_string(), json!("A1"));
//! client
//!     .dispatch(
//!         "Order Completed",
//!         properties,
//!         Identity::user("u1"),
//!         TrackOptions::default(),
//!         None,
//!         None,
//!     )
//!     .unwrap();
//!
//! assert_eq!(transport.calls()[0].event, "Order Completed");
//! ```
//!
//! # Production builds
//!
//! The validator and the `jsonschema` dependency behind it are compiled out
//! with `default-features = false`; the dispatch path is otherwise identical.

pub mod client;
pub mod context;
pub mod error;
pub mod message;
pub mod transport;
#[cfg(feature = "validation")]
pub mod validation;
pub mod violation;


// Re-export main types at crate root for convenience
pub use client::{Typewriter, TypewriterOptions, UNKNOWN_EVENT};
pub use error::{Error, Result};
pub use message::{Identity, TrackMessage, TrackOptions};
pub use transport::{TrackCallback, Transport, TransportError};
pub use violation::{SchemaViolation, ViolationHandler};
