//! The typewriter client
//!
//! [`Typewriter`] owns everything dispatch needs: the transport handle, the
//! violation handler and the strict flag. There is no process-wide singleton;
//! generated surfaces hold a client instance and call through it. The
//! bindings live behind an [`ArcSwap`] so reconfiguration can race with
//! concurrent dispatch from any number of threads.

use std::sync::Arc;

use arc_swap::ArcSwap;
use serde_json::{Map, Value, json};
use tracing::warn;

use crate::context;
use crate::error::{Error, Result};
use crate::message::{Identity, TrackMessage, TrackOptions};
use crate::transport::{TrackCallback, Transport};
use crate::violation::ViolationHandler;

/// Event name of the synthetic message fired for unknown calls
pub const UNKNOWN_EVENT: &str = "Unknown Analytics Call Fired";

/// Sentinel anonymous ID carried by unknown-call messages
const UNKNOWN_CALL_IDENTITY: &str = "typewriter";

/// Configuration for a [`Typewriter`] client.
///
/// Every field is optional per call: `configure` applies only the fields
/// that are set and leaves the rest of the bindings untouched, so a boot-time
/// `configure` can be refined later without re-stating everything.
#[derive(Default)]
pub struct TypewriterOptions {
    /// Transport to dispatch through (set or replace)
    pub transport: Option<Arc<dyn Transport>>,

    /// Replacement for the default violation policy
    pub on_violation: Option<ViolationHandler>,

    /// Whether schema violations fail the dispatch (default: lenient)
    pub strict: Option<bool>,
}

/// Resolved bindings, swapped atomically as one unit.
#[derive(Default)]
struct Bindings {
    transport: Option<Arc<dyn Transport>>,
    on_violation: Option<ViolationHandler>,
    strict: bool,
}

/// Runtime dispatch core for a generated analytics client.
pub struct Typewriter {
    bindings: ArcSwap<Bindings>,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Typewriter {
    /// Create an unconfigured client.
    ///
    /// Dispatching before [`Typewriter::configure`] has installed a transport
    /// fails with [`Error::MissingTransport`].
    pub fn new() -> Self {
        Self {
            bindings: ArcSwap::from_pointee(Bindings::default()),
        }
    }

    /// Apply `options` to the bindings.
    ///
    /// Callable any number of times; omitted fields retain their previous
    /// values. Safe to call while other threads are dispatching - in-flight
    /// dispatches finish against the bindings they loaded.
    pub fn configure(&self, options: TypewriterOptions) {
        self.bindings.rcu(|current| {
            Arc::new(Bindings {
                transport: options
                    .transport
                    .clone()
                    .or_else(|| current.transport.clone()),
                on_violation: options
                    .on_violation
                    .clone()
                    .or_else(|| current.on_violation.clone()),
                strict: options.strict.unwrap_or(current.strict),
            })
        });
    }

    /// True once a transport has been configured.
    pub fn is_configured(&self) -> bool {
        self.bindings.load().transport.is_some()
    }

    /// Dispatch one event.
    ///
    /// The generated surface injects `event` and the event's bundled
    /// `schema`; everything else comes from the caller. Steps: require a
    /// transport, build the message, validate it (development builds, when a
    /// schema is supplied), decorate the context, hand off to the transport
    /// with the caller's callback untouched.
    pub fn dispatch(
        &self,
        event: &str,
        properties: Map<String, Value>,
        identity: Identity,
        options: TrackOptions,
        schema: Option<&Value>,
        callback: Option<TrackCallback>,
    ) -> Result<()> {
        let bindings = self.bindings.load_full();
        let transport = bindings
            .transport
            .clone()
            .ok_or(Error::MissingTransport)?;

        let message = TrackMessage::new(event, properties, identity, options);

        #[cfg(feature = "validation")]
        if let Some(schema) = schema {
            let instance = serde_json::to_value(&message)?;
            let violations = crate::validation::validate(&instance, schema);
            if !violations.is_empty() {
                crate::violation::report(
                    &message,
                    violations,
                    bindings.on_violation.as_ref(),
                    bindings.strict,
                )?;
            }
        }
        #[cfg(not(feature = "validation"))]
        let _ = schema;

        transport.track(context::decorate(&message), callback);
        Ok(())
    }

    /// Handle a call to an event name outside the generated surface.
    ///
    /// Logs a warning naming the unresolved call, then - if a transport is
    /// configured - fires a best-effort [`UNKNOWN_EVENT`] message carrying
    /// the attempted name. Never fails: a mistyped event name must not crash
    /// the caller's main path.
    pub fn unknown_call(&self, method: &str) {
        warn!(
            method = %method,
            "analytics call does not match any event in the tracking plan; \
             regenerate the client, or add the event to the plan"
        );

        let Some(transport) = self.bindings.load().transport.clone() else {
            return;
        };

        let mut properties = Map::new();
        properties.insert("method".to_string(), json!(method));

        let message = TrackMessage::new(
            UNKNOWN_EVENT,
            properties,
            Identity::anonymous(UNKNOWN_CALL_IDENTITY),
            TrackOptions::default(),
        );
        transport.track(context::decorate(&message), None);
    }
}
