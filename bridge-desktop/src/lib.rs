//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for desktop platforms
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! Desktop builds have no lock screen and no remote-command center the core
//! can drive directly, so this crate provides an in-memory
//! `AudioSubsystem` that records every request and logs it through
//! `tracing`:
//! - `DesktopAudioSubsystem` keeps the last session configuration, the
//!   current lock screen metadata and the enabled state of each remote command
//! - The preferred sample rate is configurable, or absent to simulate a
//!   machine with no output device
//!
//! It is the default bridge when the `desktop-shims` feature is enabled and
//! doubles as an inspectable fake in tests.
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::DesktopAudioSubsystem;
//! use std::sync::Arc;
//!
//! let audio = Arc::new(DesktopAudioSubsystem::new().with_preferred_sample_rate(44_100.0));
//! let config = CoreConfig::builder().audio_subsystem(audio.clone()).build()?;
//! ```

mod audio;

pub use audio::{DesktopAudioSubsystem, DesktopSessionConfig, DEFAULT_PREFERRED_SAMPLE_RATE};
