//! Audio subsystem bridge and the now-playing types it consumes.
//!
//! The audio subsystem is the native component that owns the platform audio
//! session, the lock screen "now playing" surface and the remote-command
//! center. The core never talks to those platform APIs directly; it forwards
//! calls through [`AudioSubsystem`] and lets the host decide how to execute
//! them.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Playback state reported to the lock screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockScreenPlaybackState {
    #[serde(rename = "state_playing")]
    Playing,
    #[serde(rename = "state_paused")]
    Paused,
}

/// Now-playing metadata shown by the platform lock screen and control center.
///
/// The core passes this through unmodified; every field is optional and the
/// host decides what to render. Timing fields are in seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockScreenInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    /// Artwork location (remote URL or local file path).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_time: Option<f64>,
    /// Playback speed multiplier (1.0 = normal).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<LockScreenPlaybackState>,
    /// Host-specific fields the core does not interpret.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, String>,
}

impl LockScreenInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    pub fn with_artwork(mut self, artwork: impl Into<String>) -> Self {
        self.artwork = Some(artwork.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    pub fn with_elapsed_time(mut self, seconds: f64) -> Self {
        self.elapsed_time = Some(seconds);
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_state(mut self, state: LockScreenPlaybackState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Returns `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Native audio subsystem contract.
///
/// Implemented per platform:
/// - **iOS**: `AVAudioSession`, `MPNowPlayingInfoCenter`, `MPRemoteCommandCenter`
/// - **Android**: `AudioManager` plus a `MediaSession`
/// - **Desktop**: `bridge-desktop::DesktopAudioSubsystem` (in-memory shim)
///
/// All methods except [`get_device_preferred_sample_rate`] are one-way: the
/// core does not wait for the platform to apply them. Errors returned here
/// are propagated unchanged to the caller of the core operation.
///
/// [`get_device_preferred_sample_rate`]: AudioSubsystem::get_device_preferred_sample_rate
pub trait AudioSubsystem: Send + Sync {
    /// Publish now-playing metadata.
    fn set_lock_screen_info(&self, info: &LockScreenInfo) -> Result<()>;

    /// Clear any metadata previously published.
    fn reset_lock_screen_info(&self) -> Result<()>;

    /// Configure and (de)activate the audio session.
    ///
    /// Arguments arrive already normalized; empty strings and an empty option
    /// list mean "platform default".
    fn set_audio_session_options(
        &self,
        category: &str,
        mode: &str,
        options: &[String],
        active: bool,
    ) -> Result<()>;

    /// Sample rate (Hz) the current output device prefers.
    fn get_device_preferred_sample_rate(&self) -> Result<f64>;

    /// Enable or disable a remote transport command by its wire identifier.
    ///
    /// The identifier is passed through verbatim, even when the core does not
    /// recognize it.
    fn enable_remote_command(&self, name: &str, enabled: bool) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_screen_info_builder() {
        let info = LockScreenInfo::new()
            .with_title("Blue in Green")
            .with_artist("Miles Davis")
            .with_duration(337.0)
            .with_state(LockScreenPlaybackState::Playing)
            .with_extra("genre", "Jazz");

        assert_eq!(info.title.as_deref(), Some("Blue in Green"));
        assert_eq!(info.artist.as_deref(), Some("Miles Davis"));
        assert_eq!(info.duration, Some(337.0));
        assert_eq!(info.state, Some(LockScreenPlaybackState::Playing));
        assert_eq!(info.extra.get("genre").map(String::as_str), Some("Jazz"));
        assert!(!info.is_empty());
        assert!(LockScreenInfo::default().is_empty());
    }

    #[test]
    fn lock_screen_info_serializes_camel_case_and_skips_unset_fields() {
        let info = LockScreenInfo::new()
            .with_title("So What")
            .with_elapsed_time(12.5)
            .with_state(LockScreenPlaybackState::Paused);

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["title"], "So What");
        assert_eq!(json["elapsedTime"], 12.5);
        assert_eq!(json["state"], "state_paused");
        assert!(json.get("artist").is_none());
        assert!(json.get("extra").is_none());

        let back: LockScreenInfo = serde_json::from_value(json).unwrap();
        assert_eq!(back, info);
    }
}
