//! Bootstrapping the manager with host logging

use async_trait::async_trait;
use bridge_desktop::DesktopAudioSubsystem;
use bridge_traits::error::Result as SinkResult;
use bridge_traits::{LockScreenInfo, LogEntry, LogLevel, LoggerSink};
use core_runtime::logging::{LogFormat, LoggingConfig};
use core_session::{AudioManager, CoreConfig, SessionError};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingSink {
    entries: Mutex<Vec<LogEntry>>,
}

#[async_trait]
impl LoggerSink for RecordingSink {
    async fn log(&self, entry: LogEntry) -> SinkResult<()> {
        self.entries.lock().unwrap().push(entry);
        Ok(())
    }

    fn min_level(&self) -> LogLevel {
        LogLevel::Trace
    }
}

// Installs the global subscriber, so everything runs in one test.
#[test]
fn test_bootstrap_installs_configured_logging() {
    let sink = Arc::new(RecordingSink::default());
    let audio = Arc::new(DesktopAudioSubsystem::new());
    let config = CoreConfig::builder()
        .audio_subsystem(audio.clone())
        .logging(
            LoggingConfig::default()
                .with_format(LogFormat::Compact)
                .with_filter("warn,core_session=trace")
                .with_logger_sink(sink.clone()),
        )
        .build()
        .unwrap();

    let manager = AudioManager::bootstrap(&config).unwrap();

    manager
        .set_lock_screen_info(
            &LockScreenInfo::new()
                .with_title("So What")
                .with_artwork("/Users/miles/Music/Artwork/kind-of-blue.jpg"),
        )
        .unwrap();
    assert!(audio.lock_screen_info().is_some());

    {
        let entries = sink.entries.lock().unwrap();
        assert!(entries
            .iter()
            .any(|entry| entry.message == "Audio manager bootstrapped"));

        let forwarded = entries
            .iter()
            .find(|entry| entry.message == "Forwarding lock screen info")
            .expect("lock screen forwarding is traced");
        assert_eq!(forwarded.level, LogLevel::Trace);
        let artwork = forwarded.fields.get("artwork").unwrap();
        assert!(artwork.contains("kind-of-blue.jpg"));
        assert!(!artwork.contains("/Users/miles"));
    }

    let err = AudioManager::bootstrap(&config).unwrap_err();
    assert!(matches!(err, SessionError::Runtime(_)));
}
