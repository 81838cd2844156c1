//! # Event Delivery
//!
//! In-process implementation of the [`EventEmitter`] bridge.
//!
//! ## Overview
//!
//! Remote transport commands arrive from the platform as named events
//! (`onRemotePlay`, `onRemoteChangePlaybackPosition`, ...). The host's
//! native layer calls [`LocalEventEmitter::emit`] with the channel name and
//! optional numeric payload; every listener registered on that channel is
//! invoked synchronously, in registration order.
//!
//! ```text
//! ┌──────────────┐  emit("onRemotePlay")  ┌───────────────────┐   callback   ┌──────────┐
//! │ Native layer ├───────────────────────>│ LocalEventEmitter ├─────────────>│ Listener │
//! └──────────────┘                        │  (channel → Vec)  │              └──────────┘
//!                                         └───────────────────┘
//! ```
//!
//! ## Listeners
//!
//! Registrations are additive. Adding a listener returns a
//! [`ListenerSubscription`]; calling [`Subscription::remove`] unregisters it
//! and further calls are no-ops. Dropping the subscription does **not**
//! unregister the listener.
//!
//! ```rust
//! use bridge_traits::events::EventEmitter;
//! use core_runtime::events::LocalEventEmitter;
//! use std::sync::Arc;
//!
//! let emitter = LocalEventEmitter::default();
//! let subscription = emitter.add_listener("onRemotePlay", Arc::new(|_| println!("play")));
//!
//! assert_eq!(emitter.emit("onRemotePlay", None), 1);
//! subscription.remove();
//! assert_eq!(emitter.emit("onRemotePlay", None), 0);
//! ```
//!
//! ## Thread Safety
//!
//! The emitter is `Clone + Send + Sync`; clones share the same registry.
//! Callbacks run outside the registry lock, so a listener may add or remove
//! subscriptions from inside its own callback.

use bridge_traits::events::{EventEmitter, RemoteCommandCallback, Subscription};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tracing::{debug, trace};

type ListenerId = u64;

struct Listener {
    id: ListenerId,
    callback: RemoteCommandCallback,
}

#[derive(Default)]
struct ListenerRegistry {
    next_id: AtomicU64,
    channels: RwLock<HashMap<String, Vec<Listener>>>,
}

impl ListenerRegistry {
    fn insert(&self, channel: &str, callback: RemoteCommandCallback) -> ListenerId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.channels
            .write()
            .entry(channel.to_string())
            .or_default()
            .push(Listener { id, callback });
        id
    }

    fn remove(&self, channel: &str, id: ListenerId) -> bool {
        let mut channels = self.channels.write();
        let Some(listeners) = channels.get_mut(channel) else {
            return false;
        };

        let before = listeners.len();
        listeners.retain(|listener| listener.id != id);
        let removed = listeners.len() != before;

        if listeners.is_empty() {
            channels.remove(channel);
        }

        removed
    }

    fn snapshot(&self, channel: &str) -> Vec<RemoteCommandCallback> {
        self.channels
            .read()
            .get(channel)
            .map(|listeners| {
                listeners
                    .iter()
                    .map(|listener| Arc::clone(&listener.callback))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn count(&self, channel: &str) -> usize {
        self.channels.read().get(channel).map_or(0, Vec::len)
    }
}

/// Default in-process [`EventEmitter`].
#[derive(Clone)]
pub struct LocalEventEmitter {
    registry: Arc<ListenerRegistry>,
}

impl LocalEventEmitter {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(ListenerRegistry::default()),
        }
    }

    /// Delivers an event to every listener registered on `channel`.
    ///
    /// Returns the number of listeners invoked. Emitting on a channel with no
    /// listeners is not an error.
    pub fn emit(&self, channel: &str, value: Option<f64>) -> usize {
        let callbacks = self.registry.snapshot(channel);
        trace!(channel, ?value, listeners = callbacks.len(), "Emitting event");

        for callback in &callbacks {
            callback(value);
        }

        callbacks.len()
    }

    /// Number of live listeners on `channel`.
    pub fn listener_count(&self, channel: &str) -> usize {
        self.registry.count(channel)
    }

    /// Channels that currently have at least one listener, sorted.
    pub fn channels(&self) -> Vec<String> {
        let mut channels: Vec<String> = self.registry.channels.read().keys().cloned().collect();
        channels.sort();
        channels
    }
}

impl Default for LocalEventEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LocalEventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalEventEmitter")
            .field("channels", &self.channels())
            .finish()
    }
}

impl EventEmitter for LocalEventEmitter {
    fn add_listener(
        &self,
        channel: &str,
        callback: RemoteCommandCallback,
    ) -> Box<dyn Subscription> {
        let id = self.registry.insert(channel, callback);
        debug!(channel, listener_id = id, "Listener added");

        Box::new(ListenerSubscription {
            registry: Arc::downgrade(&self.registry),
            channel: channel.to_string(),
            id,
            active: AtomicBool::new(true),
        })
    }
}

/// Subscription handle returned by [`LocalEventEmitter`].
///
/// Holds a weak reference to the registry: if the emitter is gone,
/// `remove()` only flips the handle to inactive.
pub struct ListenerSubscription {
    registry: Weak<ListenerRegistry>,
    channel: String,
    id: ListenerId,
    active: AtomicBool,
}

impl Subscription for ListenerSubscription {
    fn channel(&self) -> &str {
        &self.channel
    }

    fn remove(&self) {
        if !self.active.swap(false, Ordering::AcqRel) {
            return;
        }

        if let Some(registry) = self.registry.upgrade() {
            let removed = registry.remove(&self.channel, self.id);
            debug!(channel = %self.channel, listener_id = self.id, removed, "Listener removed");
        }
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

impl fmt::Debug for ListenerSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSubscription")
            .field("channel", &self.channel)
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
