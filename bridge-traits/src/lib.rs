//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the audio session core and
//! platform-specific implementations. Each trait represents a capability the
//! core requires but that must be implemented differently per platform
//! (desktop, iOS, Android).
//!
//! ## Traits
//!
//! ### Audio
//! - [`AudioSubsystem`](audio::AudioSubsystem) - Session options, lock screen
//!   metadata, device queries and remote-command toggles
//!
//! ### Events
//! - [`EventEmitter`](events::EventEmitter) - Registers listeners on named
//!   event channels
//! - [`Subscription`](events::Subscription) - Handle that unregisters one listener
//!
//! ### Utilities
//! - [`LoggerSink`](logging::LoggerSink) - Forward structured logs to host logging
//!
//! ## Platform Requirements
//!
//! | Platform | Implementation Crate | Status |
//! |----------|---------------------|--------|
//! | Desktop  | `bridge-desktop`    | ✅ In-memory shim |
//! | iOS      | TBD                 | 📋 Planned |
//! | Android  | TBD                 | 📋 Planned |
//!
//! ## Fail-Fast Strategy
//!
//! The core fails fast with descriptive errors when a required capability is
//! missing:
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//!
//! let config = CoreConfig::builder()
//!     .audio_subsystem(Arc::new(MyNativeAudio))
//!     .build()?; // CapabilityMissing without an AudioSubsystem
//! ```
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type. Platform
//! implementations should convert platform errors to `BridgeError` and use
//! [`BridgeError::InvalidState`] when the request is incompatible with the
//! current native state. The core propagates these errors unchanged.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` so a single implementation can be
//! shared behind an `Arc` by every component of the core.
//!
//! ## Examples
//!
//! ### Implementing AudioSubsystem
//!
//! ```ignore
//! use bridge_traits::audio::{AudioSubsystem, LockScreenInfo};
//! use bridge_traits::error::Result;
//!
//! pub struct AvAudioSession;
//!
//! impl AudioSubsystem for AvAudioSession {
//!     fn set_lock_screen_info(&self, info: &LockScreenInfo) -> Result<()> {
//!         // Write MPNowPlayingInfoCenter.default().nowPlayingInfo
//!         todo!()
//!     }
//!     // ...
//! }
//! ```

pub mod audio;
pub mod error;
pub mod events;
pub mod logging;

pub use error::BridgeError;

// Re-export commonly used types
pub use audio::{AudioSubsystem, LockScreenInfo, LockScreenPlaybackState};
pub use events::{EventEmitter, RemoteCommandCallback, Subscription};
pub use logging::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use error::Result;
