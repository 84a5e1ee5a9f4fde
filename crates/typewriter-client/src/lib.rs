//! Generated analytics client for the e-commerce tracking plan
//!
//! This client was generated from a tracking plan; regenerate it rather than
//! editing by hand. It layers a typed surface over the [`typewriter`]
//! runtime:
//!
//! - [`events`] - one property struct per event in the plan
//! - [`schemas`] - the plan's JSON Schemas, bundled for development builds
//! - [`analytics`] - the [`Analytics`] client with one method per event and
//!   a dynamic lookup-or-fallback `track` entry point
//!
//! # Quick start
//!
//! ```
//! use std::sync::Arc;
//! use typewriter::{Identity, TypewriterOptions};
//! use typewriter::test::RecordingTransport;
//! use typewriter_client::{Analytics, OrderCompleted};
//!
//! let transport = Arc::new(RecordingTransport::new());
//! let analytics = Analytics::new();
//! analytics.configure(TypewriterOptions {
//!     transport: Some(transport.clone()),
//!     ..Default::default()
//! });
//!
//! analytics
//!     .order_completed(
//!         OrderCompleted {
//!             order_id: "A1".to_string(),
//!             total: Some(39.99),
//!             currency: Some("USD".to_string()),
//!         },
//!         Identity::user("u1"),
//!         None,
//!         None,
//!     )
//!     .unwrap();
//!
//! assert_eq!(transport.calls()[0].event, "Order Completed");
//! ```

pub mod analytics;
pub mod events;
#[cfg(feature = "validation")]
pub mod schemas;

pub use analytics::{Analytics, EVENTS};
pub use events::{CartViewed, OrderCompleted, ProductViewed, UserSignedUp};

// Re-export the runtime types callers need at the call site.
pub use typewriter::{Identity, TrackCallback, TrackOptions, TypewriterOptions};
