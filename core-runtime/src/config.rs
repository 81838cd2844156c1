//! # Core Configuration Module
//!
//! Provides configuration management for the audio session core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a `CoreConfig`
//! that holds the bridges the façade needs. It enforces fail-fast validation
//! so a missing native capability is reported at startup rather than on the
//! first lock screen update.
//!
//! ## Required Dependencies
//!
//! - `AudioSubsystem` - Native audio session, lock screen and remote-command center
//!
//! ## Optional Dependencies (with defaults)
//!
//! - `EventEmitter` - Event delivery for remote commands (default: [`LocalEventEmitter`])
//! - `LoggingConfig` - Logging settings applied when the façade is bootstrapped
//!
//! When the `desktop-shims` feature is enabled, `DesktopAudioSubsystem` is
//! injected automatically if no audio subsystem is provided.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//! use std::sync::Arc;
//!
//! let config = CoreConfig::builder()
//!     .audio_subsystem(Arc::new(MyNativeAudio::new()))
//!     .build()?;
//! ```
//!
//! ## Error Handling
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//!
//! // Without desktop-shims this fails with CapabilityMissing("AudioSubsystem")
//! let result = CoreConfig::builder().build();
//! ```

use crate::error::Result;
use crate::events::LocalEventEmitter;
use crate::logging::LoggingConfig;
use bridge_traits::{AudioSubsystem, EventEmitter};
use std::sync::Arc;

/// Core configuration for the audio session core.
///
/// Use [`CoreConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct CoreConfig {
    /// Native audio subsystem (required)
    pub audio_subsystem: Arc<dyn AudioSubsystem>,

    /// Event delivery collaborator shared by every remote-command registration
    pub event_emitter: Arc<dyn EventEmitter>,

    /// Logging settings installed by `init_logging` at bootstrap
    pub logging: LoggingConfig,
}

impl std::fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfig")
            .field("audio_subsystem", &"AudioSubsystem { ... }")
            .field("event_emitter", &"EventEmitter { ... }")
            .field("logging", &self.logging)
            .finish()
    }
}

impl CoreConfig {
    /// Creates a new builder for constructing a `CoreConfig`.
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }
}

#[cfg(not(feature = "desktop-shims"))]
fn audio_subsystem_missing_error() -> crate::error::Error {
    crate::error::Error::CapabilityMissing {
        capability: "AudioSubsystem".to_string(),
        message: "AudioSubsystem implementation is required for session, lock screen and remote command support. \
                 Desktop: ensure the 'desktop-shims' feature is enabled to use the default DesktopAudioSubsystem. \
                 Mobile: inject the platform-native audio bridge (AVAudioSession/MediaSession)."
            .to_string(),
    }
}

#[cfg(feature = "desktop-shims")]
fn provide_default_audio_subsystem() -> Result<Arc<dyn AudioSubsystem>> {
    use bridge_desktop::DesktopAudioSubsystem;

    let audio: Arc<dyn AudioSubsystem> = Arc::new(DesktopAudioSubsystem::new());
    Ok(audio)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_audio_subsystem() -> Result<Arc<dyn AudioSubsystem>> {
    Err(audio_subsystem_missing_error())
}

/// Builder for constructing [`CoreConfig`] instances.
#[derive(Default)]
pub struct CoreConfigBuilder {
    audio_subsystem: Option<Arc<dyn AudioSubsystem>>,
    event_emitter: Option<Arc<dyn EventEmitter>>,
    logging: Option<LoggingConfig>,
}

impl CoreConfigBuilder {
    /// Sets the native audio subsystem.
    ///
    /// If not provided, the desktop shim is used when the `desktop-shims`
    /// feature is enabled.
    pub fn audio_subsystem(mut self, audio: Arc<dyn AudioSubsystem>) -> Self {
        self.audio_subsystem = Some(audio);
        self
    }

    /// Sets the event delivery collaborator.
    ///
    /// Hosts whose native layer already owns an event emitter inject it here
    /// so remote commands and listeners share one stream.
    pub fn event_emitter(mut self, emitter: Arc<dyn EventEmitter>) -> Self {
        self.event_emitter = Some(emitter);
        self
    }

    /// Sets the logging configuration.
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Builds the final `CoreConfig` instance.
    ///
    /// # Errors
    ///
    /// Returns `CapabilityMissing` when no audio subsystem is available.
    pub fn build(self) -> Result<CoreConfig> {
        let audio_subsystem = match self.audio_subsystem {
            Some(audio) => audio,
            None => provide_default_audio_subsystem()?,
        };

        let event_emitter: Arc<dyn EventEmitter> = match self.event_emitter {
            Some(emitter) => emitter,
            None => Arc::new(LocalEventEmitter::new()),
        };

        Ok(CoreConfig {
            audio_subsystem,
            event_emitter,
            logging: self.logging.unwrap_or_default(),
        })
    }
}
