//! # Remote Control Command Router
//!
//! Maps transport commands (play, pause, seek, ...) to the platform's
//! remote-command center and to the event channels on which the host
//! delivers them.
//!
//! ## Routing
//!
//! [`AudioManager::enable_remote_command`] does three things, in order:
//!
//! 1. Always forwards the enable/disable toggle to the audio subsystem, using
//!    the raw wire identifier, even when the name is not recognized.
//! 2. Stops with `Ok(None)` unless enabling with a callback.
//! 3. Looks the name up in the command table. A miss is logged at `ERROR`
//!    and yields `Ok(None)`. A hit registers the callback on the command's
//!    event channel and returns the emitter's subscription handle untouched.
//!
//! The router keeps no record of subscriptions. Enabling the same command
//! twice with two callbacks leaves two live listeners; callers release the
//! previous handle themselves before re-registering.
//!
//! ```ignore
//! use core_session::{AudioManager, RemoteCommandName};
//!
//! let subscription = manager.on_remote_command(RemoteCommandName::SeekForward, |interval| {
//!     println!("seek forward by {:?}s", interval);
//! })?;
//!
//! // later
//! if let Some(subscription) = subscription {
//!     subscription.remove();
//! }
//! manager.disable_remote_command(RemoteCommandName::SeekForward)?;
//! ```

use crate::error::{Result, SessionError};
use crate::manager::AudioManager;
use bridge_traits::events::{RemoteCommandCallback, Subscription};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, error};

/// Transport commands a lock screen or external control surface can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RemoteCommandName {
    Play,
    Pause,
    Stop,
    TogglePlayPause,
    ChangePlaybackRate,
    NextTrack,
    PreviousTrack,
    SkipForward,
    SkipBackward,
    SeekForward,
    SeekBackward,
    ChangePlaybackPosition,
}

/// Wire identifier and event channel per command, indexed by discriminant.
const REMOTE_COMMANDS: [(RemoteCommandName, &str, &str); 12] = [
    (RemoteCommandName::Play, "play", "onRemotePlay"),
    (RemoteCommandName::Pause, "pause", "onRemotePause"),
    (RemoteCommandName::Stop, "stop", "onRemoteStop"),
    (
        RemoteCommandName::TogglePlayPause,
        "togglePlayPause",
        "onRemoteTogglePlayPause",
    ),
    (
        RemoteCommandName::ChangePlaybackRate,
        "changePlaybackRate",
        "onRemoteChangePlaybackRate",
    ),
    (RemoteCommandName::NextTrack, "nextTrack", "onRemoteNextTrack"),
    (
        RemoteCommandName::PreviousTrack,
        "previousTrack",
        "onRemotePreviousTrack",
    ),
    (
        RemoteCommandName::SkipForward,
        "skipForward",
        "onRemoteSkipForward",
    ),
    (
        RemoteCommandName::SkipBackward,
        "skipBackward",
        "onRemoteSkipBackward",
    ),
    (
        RemoteCommandName::SeekForward,
        "seekForward",
        "onRemoteSeekForward",
    ),
    (
        RemoteCommandName::SeekBackward,
        "seekBackward",
        "onRemoteSeekBackward",
    ),
    (
        RemoteCommandName::ChangePlaybackPosition,
        "changePlaybackPosition",
        "onRemoteChangePlaybackPosition",
    ),
];

impl RemoteCommandName {
    /// Every command, in declaration order.
    pub const ALL: [RemoteCommandName; 12] = [
        RemoteCommandName::Play,
        RemoteCommandName::Pause,
        RemoteCommandName::Stop,
        RemoteCommandName::TogglePlayPause,
        RemoteCommandName::ChangePlaybackRate,
        RemoteCommandName::NextTrack,
        RemoteCommandName::PreviousTrack,
        RemoteCommandName::SkipForward,
        RemoteCommandName::SkipBackward,
        RemoteCommandName::SeekForward,
        RemoteCommandName::SeekBackward,
        RemoteCommandName::ChangePlaybackPosition,
    ];

    /// Identifier sent to the audio subsystem (`"togglePlayPause"`, ...).
    pub fn as_str(self) -> &'static str {
        REMOTE_COMMANDS[self as usize].1
    }

    /// Event channel the host emits this command on (`"onRemotePlay"`, ...).
    pub fn event_channel(self) -> &'static str {
        REMOTE_COMMANDS[self as usize].2
    }

    /// Parses a wire identifier, `None` when it is not a known command.
    pub fn from_wire(name: &str) -> Option<Self> {
        REMOTE_COMMANDS
            .iter()
            .find(|(_, wire, _)| *wire == name)
            .map(|(command, _, _)| *command)
    }

    /// Reverse lookup for hosts that receive platform events by channel.
    pub fn from_event_channel(channel: &str) -> Option<Self> {
        REMOTE_COMMANDS
            .iter()
            .find(|(_, _, event)| *event == channel)
            .map(|(command, _, _)| *command)
    }
}

impl AsRef<str> for RemoteCommandName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RemoteCommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RemoteCommandName {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_wire(s).ok_or_else(|| SessionError::UnsupportedCommand(s.to_string()))
    }
}

/// Event channel for a wire identifier; the single table-miss check.
fn event_channel_for(name: &str) -> Option<&'static str> {
    RemoteCommandName::from_wire(name).map(RemoteCommandName::event_channel)
}

/// Command delivered on `channel`, if it is one of the remote command channels.
pub fn remote_command_for_channel(channel: &str) -> Option<RemoteCommandName> {
    RemoteCommandName::from_event_channel(channel)
}

impl AudioManager {
    /// Enable or disable a remote command and optionally listen for it.
    ///
    /// Returns `Ok(Some(subscription))` only when `enabled` is true, a
    /// callback is supplied and `name` is a known command. Unknown names are
    /// still forwarded to the audio subsystem and yield `Ok(None)`; they are
    /// logged only when a listener was requested.
    ///
    /// # Errors
    ///
    /// Only failures reported by the audio subsystem's toggle, unchanged.
    pub fn enable_remote_command(
        &self,
        name: impl AsRef<str>,
        enabled: bool,
        callback: Option<RemoteCommandCallback>,
    ) -> Result<Option<Box<dyn Subscription>>> {
        let name = name.as_ref();

        self.audio().enable_remote_command(name, enabled)?;
        debug!(command = name, enabled, "Remote command toggle forwarded");

        let callback = match callback {
            Some(callback) if enabled => callback,
            _ => return Ok(None),
        };

        let Some(channel) = event_channel_for(name) else {
            error!(command = name, "Unsupported RemoteControl action");
            return Ok(None);
        };

        let subscription = self.events().add_listener(channel, callback);
        debug!(command = name, channel, "Remote command listener registered");

        Ok(Some(subscription))
    }

    /// Enable `name` and register `callback` for it.
    pub fn on_remote_command<F>(
        &self,
        name: impl AsRef<str>,
        callback: F,
    ) -> Result<Option<Box<dyn Subscription>>>
    where
        F: Fn(Option<f64>) + Send + Sync + 'static,
    {
        self.enable_remote_command(name, true, Some(Arc::new(callback)))
    }

    /// Disable `name` on the audio subsystem.
    ///
    /// Listeners registered earlier stay registered until their
    /// subscriptions are removed.
    pub fn disable_remote_command(&self, name: impl AsRef<str>) -> Result<()> {
        self.enable_remote_command(name, false, None).map(|_| ())
    }
}
