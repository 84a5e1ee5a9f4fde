//! Generated dispatch surface for the e-commerce tracking plan
//!
//! This file is generated from the tracking plan. Do not edit by hand;
//! regenerate it when the plan changes.
//!
//! One method per event, each funneling into the runtime's dispatch core.
//! The dynamic [`Analytics::track`] entry point routes by membership test
//! against [`EVENTS`] and falls back to the runtime's unknown-call handling
//! for anything outside the plan.

use serde::Serialize;
use serde_json::{Map, Value};

use typewriter::{
    Identity, Result, TrackCallback, TrackOptions, Typewriter, TypewriterOptions,
};

use crate::events::{CartViewed, OrderCompleted, ProductViewed, UserSignedUp};

/// Every event name the generator knows about, sorted.
pub const EVENTS: &[&str] = &[
    "Cart Viewed",
    "Order Completed",
    "Product Viewed",
    "User Signed Up",
];

/// The generated analytics client.
///
/// Construct once, configure with a transport, then call the event methods
/// from anywhere; the client is safe to share across threads.
#[derive(Default)]
pub struct Analytics {
    client: Typewriter,
}

impl Analytics {
    /// Create an unconfigured client.
    pub fn new() -> Self {
        Self {
            client: Typewriter::new(),
        }
    }

    /// Configure the underlying runtime (transport, violation policy).
    ///
    /// Callable any number of times; omitted fields keep their prior values.
    pub fn configure(&self, options: TypewriterOptions) {
        self.client.configure(options);
    }

    /// True once a transport has been configured.
    pub fn is_configured(&self) -> bool {
        self.client.is_configured()
    }

    /// A customer opened their shopping cart.
    pub fn cart_viewed(
        &self,
        properties: CartViewed,
        identity: Identity,
        options: Option<TrackOptions>,
        callback: Option<TrackCallback>,
    ) -> Result<()> {
        self.dispatch("Cart Viewed", properties_of(properties)?, identity, options, callback)
    }

    /// A customer completed checkout.
    pub fn order_completed(
        &self,
        properties: OrderCompleted,
        identity: Identity,
        options: Option<TrackOptions>,
        callback: Option<TrackCallback>,
    ) -> Result<()> {
        self.dispatch("Order Completed", properties_of(properties)?, identity, options, callback)
    }

    /// A customer viewed a product detail page.
    pub fn product_viewed(
        &self,
        properties: ProductViewed,
        identity: Identity,
        options: Option<TrackOptions>,
        callback: Option<TrackCallback>,
    ) -> Result<()> {
        self.dispatch("Product Viewed", properties_of(properties)?, identity, options, callback)
    }

    /// A visitor created an account.
    pub fn user_signed_up(
        &self,
        properties: UserSignedUp,
        identity: Identity,
        options: Option<TrackOptions>,
        callback: Option<TrackCallback>,
    ) -> Result<()> {
        self.dispatch("User Signed Up", properties_of(properties)?, identity, options, callback)
    }

    /// Dispatch by event name.
    ///
    /// Names in [`EVENTS`] dispatch like their typed counterparts, validated
    /// against the bundled schema in development builds. Anything else is an
    /// unknown call: the runtime logs a warning with the attempted name,
    /// fires a best-effort `"Unknown Analytics Call Fired"` event if a
    /// transport is configured, and the remaining arguments are dropped.
    /// Unknown names never produce an error.
    pub fn track(
        &self,
        event: &str,
        properties: Map<String, Value>,
        identity: Identity,
        options: Option<TrackOptions>,
        callback: Option<TrackCallback>,
    ) -> Result<()> {
        if EVENTS.contains(&event) {
            self.dispatch(event, properties, identity, options, callback)
        } else {
            self.client.unknown_call(event);
            Ok(())
        }
    }

    fn dispatch(
        &self,
        event: &str,
        properties: Map<String, Value>,
        identity: Identity,
        options: Option<TrackOptions>,
        callback: Option<TrackCallback>,
    ) -> Result<()> {
        #[cfg(feature = "validation")]
        let schema = crate::schemas::schema_for(event);
        #[cfg(not(feature = "validation"))]
        let schema = None;

        self.client.dispatch(
            event,
            properties,
            identity,
            options.unwrap_or_default(),
            schema,
            callback,
        )
    }
}

/// Serialize a generated properties struct into the runtime's property map.
fn properties_of<T: Serialize>(properties: T) -> Result<Map<String, Value>> {
    match serde_json::to_value(properties)? {
        Value::Object(map) => Ok(map),
        // Generated property types always serialize to objects.
        _ => Ok(Map::new()),
    }
}
