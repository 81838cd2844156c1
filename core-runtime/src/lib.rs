//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the audio session core:
//! - Logging and tracing infrastructure
//! - Configuration management
//! - In-process event delivery for remote commands
//!
//! ## Overview
//!
//! This crate contains the runtime utilities the façade depends on. It
//! establishes the logging conventions, the fail-fast configuration builder
//! and the default [`EventEmitter`](bridge_traits::EventEmitter)
//! implementation used when the host does not inject its own.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;

pub use error::{Error, Result};
