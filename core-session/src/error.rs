//! # Session Error Types

use thiserror::Error;

/// Errors surfaced by [`AudioManager`](crate::AudioManager) operations.
///
/// The façade never raises errors of its own for routing decisions; bridge
/// and runtime failures pass through with their original message.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Failure reported by the native audio subsystem.
    #[error(transparent)]
    Bridge(#[from] bridge_traits::BridgeError),

    /// Configuration or capability problem while wiring the façade.
    #[error(transparent)]
    Runtime(#[from] core_runtime::Error),

    /// A wire identifier that is not a known remote command.
    #[error("Unsupported remote command: {0}")]
    UnsupportedCommand(String),
}

pub type Result<T> = std::result::Result<T, SessionError>;
