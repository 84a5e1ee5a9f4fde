//! Transport seam
//!
//! The runtime treats the analytics SDK underneath it as an opaque sink: one
//! `track` call per dispatch, fire-and-forget. Completion is signaled only
//! through the caller's callback, which the runtime hands over untouched and
//! never awaits. Retry, batching and backoff all live behind this trait.

use crate::message::TrackMessage;

/// Error type delivered to track callbacks by the transport
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Completion callback, passed through from the caller to the transport
pub type TrackCallback = Box<dyn FnOnce(std::result::Result<(), TransportError>) + Send>;

/// The sink every dispatch ends in.
///
/// Implementations must not assume they are called from a single thread;
/// dispatch is reentrant and may run concurrently from many call sites.
pub trait Transport: Send + Sync {
    /// Deliver one decorated message.
    ///
    /// The runtime does not inspect, wrap or retry transport-level failures;
    /// report them through `callback` if one was supplied.
    fn track(&self, message: TrackMessage, callback: Option<TrackCallback>);
}
