//! Event delivery bridge.
//!
//! Remote transport commands reach the application as named events
//! (`onRemotePlay`, `onRemoteSeekForward`, ...) emitted by the host. The core
//! registers listeners through [`EventEmitter`] and hands the resulting
//! [`Subscription`] straight back to its caller.

use std::fmt;
use std::sync::Arc;

/// Listener invoked when a remote command event fires.
///
/// The payload carries the command's numeric argument when it has one
/// (seek interval, playback rate, target position) and `None` otherwise.
pub type RemoteCommandCallback = Arc<dyn Fn(Option<f64>) + Send + Sync>;

/// Handle to one registered listener.
///
/// Whoever holds the handle owns the right to unregister the listener.
/// [`remove`](Subscription::remove) is idempotent: only the first call has an
/// effect. Dropping a handle without calling `remove` leaves the listener
/// registered.
pub trait Subscription: Send + Sync {
    /// Channel the listener is registered on.
    fn channel(&self) -> &str;

    /// Unregister the listener.
    fn remove(&self);

    /// `false` once [`remove`](Subscription::remove) has been called.
    fn is_active(&self) -> bool;
}

impl fmt::Debug for dyn Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("channel", &self.channel())
            .field("active", &self.is_active())
            .finish()
    }
}

/// Shared event-delivery collaborator.
///
/// Registrations are additive: adding a second listener on a channel never
/// replaces the first.
pub trait EventEmitter: Send + Sync {
    /// Register `callback` on `channel`.
    fn add_listener(&self, channel: &str, callback: RemoteCommandCallback)
        -> Box<dyn Subscription>;
}
