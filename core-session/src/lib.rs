//! # Audio Session Core
//!
//! Façade over a host's native audio subsystem:
//! - Configure the audio session (category, mode, options, active state)
//! - Publish and clear lock screen "now playing" metadata
//! - Query the output device's preferred sample rate
//! - Enable remote transport commands and route them to callbacks
//!
//! ## Overview
//!
//! [`AudioManager`] is built from two host bridges: an
//! [`AudioSubsystem`](bridge_traits::AudioSubsystem) that does the native
//! work, and an [`EventEmitter`](bridge_traits::EventEmitter) that delivers
//! remote command events. Everything except remote command routing is a
//! direct pass-through.
//!
//! ## Usage
//!
//! ```ignore
//! use core_session::{AudioManager, RemoteCommandName, SessionOptions};
//!
//! let manager = AudioManager::with_defaults()?;
//! manager.set_audio_session_options(
//!     &SessionOptions::new().with_category("playback").with_active(true),
//! )?;
//!
//! let subscription = manager.on_remote_command(RemoteCommandName::Play, |_| {
//!     println!("play pressed");
//! })?;
//! ```

pub mod error;
pub mod manager;
pub mod remote;
pub mod session;

pub use error::{Result, SessionError};
pub use manager::AudioManager;
pub use remote::{remote_command_for_channel, RemoteCommandName};
pub use session::{
    AudioSessionCategory, AudioSessionMode, AudioSessionOption, ResolvedSessionOptions,
    SessionOptions,
};

pub use bridge_traits::{
    LockScreenInfo, LockScreenPlaybackState, RemoteCommandCallback, Subscription,
};
pub use core_runtime::config::CoreConfig;

#[cfg(feature = "desktop-shims")]
pub use bridge_desktop::DesktopAudioSubsystem;
