//! Audio manager façade.

use crate::error::Result;
use crate::session::SessionOptions;
use bridge_traits::{AudioSubsystem, EventEmitter, LockScreenInfo};
use core_runtime::config::CoreConfig;
use core_runtime::logging::{init_logging, strip_path};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Primary façade exposed to host applications.
///
/// Cheap to clone; clones share the same audio subsystem and event emitter.
/// Remote command routing lives in [`crate::remote`].
#[derive(Clone)]
pub struct AudioManager {
    audio: Arc<dyn AudioSubsystem>,
    events: Arc<dyn EventEmitter>,
}

impl AudioManager {
    /// Create a manager from explicit bridge handles.
    pub fn new(audio: Arc<dyn AudioSubsystem>, events: Arc<dyn EventEmitter>) -> Self {
        Self { audio, events }
    }

    /// Create a manager sharing the bridges held by `config`.
    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(
            Arc::clone(&config.audio_subsystem),
            Arc::clone(&config.event_emitter),
        )
    }

    /// Install `config.logging` as the global subscriber, then build the
    /// manager from `config`.
    ///
    /// Call once at startup; a second call fails because logging is
    /// already initialized.
    pub fn bootstrap(config: &CoreConfig) -> Result<Self> {
        init_logging(config.logging.clone())?;
        let manager = Self::from_config(config);
        debug!(?config, "Audio manager bootstrapped");
        Ok(manager)
    }

    /// Build a manager from the default configuration.
    ///
    /// Fails with a capability error unless a default audio subsystem is
    /// compiled in (the `desktop-shims` feature).
    pub fn with_defaults() -> Result<Self> {
        let config = CoreConfig::builder().build()?;
        Ok(Self::from_config(&config))
    }

    pub fn audio(&self) -> &Arc<dyn AudioSubsystem> {
        &self.audio
    }

    pub fn events(&self) -> &Arc<dyn EventEmitter> {
        &self.events
    }

    /// Publish now-playing metadata to the lock screen.
    pub fn set_lock_screen_info(&self, info: &LockScreenInfo) -> Result<()> {
        trace!(
            title = ?info.title,
            artwork = ?info.artwork.as_deref().map(strip_path),
            "Forwarding lock screen info"
        );
        self.audio.set_lock_screen_info(info)?;
        Ok(())
    }

    /// Clear any metadata shown on the lock screen.
    pub fn reset_lock_screen_info(&self) -> Result<()> {
        trace!("Resetting lock screen info");
        self.audio.reset_lock_screen_info()?;
        Ok(())
    }

    /// Configure the audio session, applying defaults for omitted fields.
    pub fn set_audio_session_options(&self, options: &SessionOptions) -> Result<()> {
        let resolved = options.resolve();
        debug!(
            category = %resolved.category,
            mode = %resolved.mode,
            options = ?resolved.options,
            active = resolved.active,
            "Forwarding audio session options"
        );
        self.audio.set_audio_session_options(
            &resolved.category,
            &resolved.mode,
            &resolved.options,
            resolved.active,
        )?;
        Ok(())
    }

    /// Preferred sample rate of the current output device, as reported.
    pub fn get_device_preferred_sample_rate(&self) -> Result<f64> {
        let rate = self.audio.get_device_preferred_sample_rate()?;
        trace!(rate, "Device preferred sample rate");
        Ok(rate)
    }
}

impl fmt::Debug for AudioManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioManager")
            .field("audio", &"<dyn AudioSubsystem>")
            .field("events", &"<dyn EventEmitter>")
            .finish()
    }
}
