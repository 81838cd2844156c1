//! In-memory audio subsystem for desktop hosts

use bridge_traits::{
    audio::{AudioSubsystem, LockScreenInfo},
    error::{BridgeError, Result},
};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Sample rate reported when none is configured.
pub const DEFAULT_PREFERRED_SAMPLE_RATE: f64 = 48_000.0;

/// Session configuration as last received from the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopSessionConfig {
    pub category: String,
    pub mode: String,
    pub options: Vec<String>,
    pub active: bool,
}

#[derive(Debug, Default)]
struct DesktopAudioState {
    session: Option<DesktopSessionConfig>,
    lock_screen: Option<LockScreenInfo>,
    remote_commands: BTreeMap<String, bool>,
    toggle_history: Vec<(String, bool)>,
}

/// Desktop audio subsystem implementation
///
/// Records requests instead of executing them:
/// - Session options and the active flag
/// - Lock screen metadata (cleared on reset)
/// - Remote command enabled state, including names it does not recognize
pub struct DesktopAudioSubsystem {
    state: Mutex<DesktopAudioState>,
    preferred_sample_rate: Option<f64>,
}

impl DesktopAudioSubsystem {
    /// Create a subsystem reporting [`DEFAULT_PREFERRED_SAMPLE_RATE`]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(DesktopAudioState::default()),
            preferred_sample_rate: Some(DEFAULT_PREFERRED_SAMPLE_RATE),
        }
    }

    /// Report `rate` as the output device's preferred sample rate
    pub fn with_preferred_sample_rate(mut self, rate: f64) -> Self {
        self.preferred_sample_rate = Some(rate);
        self
    }

    /// Simulate a machine with no output device; the sample rate query fails
    /// with [`BridgeError::InvalidState`].
    pub fn without_output_device(mut self) -> Self {
        self.preferred_sample_rate = None;
        self
    }

    /// Last session configuration applied, if any
    pub fn session_config(&self) -> Option<DesktopSessionConfig> {
        self.state.lock().session.clone()
    }

    /// Whether the last session configuration activated the session
    pub fn is_session_active(&self) -> bool {
        self.state
            .lock()
            .session
            .as_ref()
            .is_some_and(|session| session.active)
    }

    /// Metadata currently shown, `None` after a reset
    pub fn lock_screen_info(&self) -> Option<LockScreenInfo> {
        self.state.lock().lock_screen.clone()
    }

    /// Whether `name` is currently enabled
    pub fn is_remote_command_enabled(&self, name: &str) -> bool {
        self.state
            .lock()
            .remote_commands
            .get(name)
            .copied()
            .unwrap_or(false)
    }

    /// Names of all currently enabled remote commands, sorted
    pub fn enabled_remote_commands(&self) -> Vec<String> {
        self.state
            .lock()
            .remote_commands
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Every toggle received, in order
    pub fn toggle_history(&self) -> Vec<(String, bool)> {
        self.state.lock().toggle_history.clone()
    }
}

impl Default for DesktopAudioSubsystem {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSubsystem for DesktopAudioSubsystem {
    fn set_lock_screen_info(&self, info: &LockScreenInfo) -> Result<()> {
        debug!(
            title = ?info.title,
            artist = ?info.artist,
            has_artwork = info.artwork.is_some(),
            "Lock screen info updated"
        );
        self.state.lock().lock_screen = Some(info.clone());
        Ok(())
    }

    fn reset_lock_screen_info(&self) -> Result<()> {
        debug!("Lock screen info reset");
        self.state.lock().lock_screen = None;
        Ok(())
    }

    fn set_audio_session_options(
        &self,
        category: &str,
        mode: &str,
        options: &[String],
        active: bool,
    ) -> Result<()> {
        info!(category, mode, ?options, active, "Audio session configured");
        self.state.lock().session = Some(DesktopSessionConfig {
            category: category.to_string(),
            mode: mode.to_string(),
            options: options.to_vec(),
            active,
        });
        Ok(())
    }

    fn get_device_preferred_sample_rate(&self) -> Result<f64> {
        self.preferred_sample_rate
            .ok_or_else(|| BridgeError::InvalidState("No output device available".to_string()))
    }

    fn enable_remote_command(&self, name: &str, enabled: bool) -> Result<()> {
        debug!(command = name, enabled, "Remote command toggled");
        let mut state = self.state.lock();
        state.remote_commands.insert(name.to_string(), enabled);
        state.toggle_history.push((name.to_string(), enabled));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sample_rate() {
        let audio = DesktopAudioSubsystem::new();
        assert_eq!(
            audio.get_device_preferred_sample_rate().unwrap(),
            DEFAULT_PREFERRED_SAMPLE_RATE
        );

        let audio = DesktopAudioSubsystem::new().with_preferred_sample_rate(44_100.0);
        assert_eq!(audio.get_device_preferred_sample_rate().unwrap(), 44_100.0);
    }

    #[test]
    fn test_missing_output_device_is_invalid_state() {
        let audio = DesktopAudioSubsystem::new().without_output_device();
        let err = audio.get_device_preferred_sample_rate().unwrap_err();
        assert!(matches!(err, BridgeError::InvalidState(_)));
        assert_eq!(err.to_string(), "Invalid state: No output device available");
    }

    #[test]
    fn test_session_options_recorded() {
        let audio = DesktopAudioSubsystem::new();
        assert!(audio.session_config().is_none());
        assert!(!audio.is_session_active());

        audio
            .set_audio_session_options("playback", "spokenAudio", &["duckOthers".to_string()], true)
            .unwrap();

        assert_eq!(
            audio.session_config(),
            Some(DesktopSessionConfig {
                category: "playback".to_string(),
                mode: "spokenAudio".to_string(),
                options: vec!["duckOthers".to_string()],
                active: true,
            })
        );
        assert!(audio.is_session_active());
    }

    #[test]
    fn test_lock_screen_set_and_reset() {
        let audio = DesktopAudioSubsystem::new();
        let info = LockScreenInfo::new().with_title("Naima").with_artist("John Coltrane");

        audio.set_lock_screen_info(&info).unwrap();
        assert_eq!(audio.lock_screen_info(), Some(info));

        audio.reset_lock_screen_info().unwrap();
        assert_eq!(audio.lock_screen_info(), None);
    }

    #[test]
    fn test_remote_command_toggles() {
        let audio = DesktopAudioSubsystem::new();

        audio.enable_remote_command("play", true).unwrap();
        audio.enable_remote_command("seekForward", true).unwrap();
        audio.enable_remote_command("play", false).unwrap();
        audio.enable_remote_command("scrub", true).unwrap();

        assert!(!audio.is_remote_command_enabled("play"));
        assert!(audio.is_remote_command_enabled("seekForward"));
        assert!(audio.is_remote_command_enabled("scrub"));
        assert!(!audio.is_remote_command_enabled("stop"));
        assert_eq!(
            audio.enabled_remote_commands(),
            vec!["scrub".to_string(), "seekForward".to_string()]
        );
        assert_eq!(audio.toggle_history().len(), 4);
        assert_eq!(audio.toggle_history()[2], ("play".to_string(), false));
    }

    #[test]
    fn test_session_config_serialization() {
        let config = DesktopSessionConfig {
            category: "ambient".to_string(),
            mode: String::new(),
            options: Vec::new(),
            active: false,
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: DesktopSessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
