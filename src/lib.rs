//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the individual
//! workspace crates (`core-session`, `bridge-desktop`). Host applications can
//! depend on `audio-session-workspace` and enable `desktop-shims` (in-memory
//! audio subsystem for desktop and development) or `native` (bring your own
//! bridges) without wiring each crate individually.

#[cfg(any(feature = "native", feature = "desktop-shims"))]
pub use core_session::*;
