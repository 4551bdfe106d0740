//! Error types for the client layer.

use std::time::Duration;
use thiserror::Error;

/// Errors produced while dialing or talking to a Hubble server.
///
/// These bubble up unchanged to `main`, which is the only place that
/// prints them and chooses the exit code.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured server address could not be understood.
    #[error("invalid server address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },

    /// The dial failed outright (refused, unreachable, permission).
    #[error("failed to connect to {address}: {source}")]
    Dial {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The dial did not complete within the configured timeout.
    #[error("timed out connecting to {address} after {timeout:?}")]
    DialTimeout { address: String, timeout: Duration },

    /// I/O failure on an established connection.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
