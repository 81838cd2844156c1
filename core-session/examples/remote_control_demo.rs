//! Remote control demonstration
//!
//! Configures a playback session on the desktop shim, publishes lock screen
//! metadata and simulates the host delivering remote commands.
//!
//! Run with:
//! ```bash
//! cargo run -p core-session --example remote_control_demo
//!
//! # JSON output, router internals at trace level
//! cargo run -p core-session --example remote_control_demo -- json "core_session=trace"
//! ```

use bridge_traits::{LockScreenInfo, LockScreenPlaybackState, LogLevel};
use core_runtime::events::LocalEventEmitter;
use core_runtime::logging::{LogFormat, LoggingConfig};
use core_session::{
    AudioManager, AudioSessionCategory, AudioSessionMode, AudioSessionOption, CoreConfig,
    DesktopAudioSubsystem, RemoteCommandName, SessionOptions,
};
use std::env;
use std::sync::Arc;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let format = match args.get(1).map(String::as_str) {
        Some("json") => LogFormat::Json,
        Some("compact") => LogFormat::Compact,
        _ => LogFormat::Pretty,
    };

    let mut logging = LoggingConfig::default()
        .with_format(format)
        .with_level(LogLevel::Debug)
        .with_target(true);
    if let Some(filter) = args.get(2) {
        logging = logging.with_filter(filter.clone());
    }

    let audio = Arc::new(DesktopAudioSubsystem::new().with_preferred_sample_rate(44_100.0));
    let events = Arc::new(LocalEventEmitter::default());
    let config = CoreConfig::builder()
        .audio_subsystem(audio.clone())
        .event_emitter(events.clone())
        .logging(logging)
        .build()?;
    let manager = AudioManager::bootstrap(&config)?;

    manager.set_audio_session_options(
        &SessionOptions::new()
            .with_category(AudioSessionCategory::Playback)
            .with_mode(AudioSessionMode::SpokenAudio)
            .with_option(AudioSessionOption::DuckOthers),
    )?;

    let rate = manager.get_device_preferred_sample_rate()?;
    info!(rate, "Output device ready");

    manager.set_lock_screen_info(
        &LockScreenInfo::new()
            .with_title("Episode 12: Ownership")
            .with_artist("The Borrow Checker")
            .with_artwork("/var/cache/podcasts/artwork/episode-12.png")
            .with_duration(1_820.0)
            .with_elapsed_time(0.0)
            .with_state(LockScreenPlaybackState::Playing),
    )?;

    let mut subscriptions = Vec::new();
    for command in [
        RemoteCommandName::Play,
        RemoteCommandName::Pause,
        RemoteCommandName::SkipForward,
        RemoteCommandName::ChangePlaybackPosition,
    ] {
        let subscription = manager.on_remote_command(command, move |value| {
            info!(%command, ?value, "Remote command received");
        })?;
        subscriptions.extend(subscription);
    }

    // Not a known command: toggled on the subsystem, logged, never routed.
    if manager.on_remote_command("likeTrack", |_| {})?.is_none() {
        warn!("likeTrack has no event channel");
    }

    info!(enabled = ?audio.enabled_remote_commands(), "Remote commands enabled");

    events.emit(RemoteCommandName::Pause.event_channel(), None);
    events.emit(RemoteCommandName::SkipForward.event_channel(), Some(15.0));
    events.emit(
        RemoteCommandName::ChangePlaybackPosition.event_channel(),
        Some(600.0),
    );

    for subscription in subscriptions.drain(..) {
        subscription.remove();
    }
    for command in RemoteCommandName::ALL {
        manager.disable_remote_command(command)?;
    }
    manager.reset_lock_screen_info()?;

    info!(
        listeners = events.channels().len(),
        lock_screen_cleared = audio.lock_screen_info().is_none(),
        "Demo complete"
    );

    Ok(())
}
