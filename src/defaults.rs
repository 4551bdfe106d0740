//! Compiled-in defaults shared by the flag registry and the client.

use std::time::Duration;

/// How long `observe`/`peer`/`status` wait for the server dial to complete
/// before giving up.
pub const DIAL_TIMEOUT: Duration = Duration::from_secs(5);

/// Default TCP port a Hubble server listens on.
pub const SERVER_PORT: u16 = 4245;

/// Default server address for this platform.
///
/// Unix platforms talk to the local server over its well-known socket;
/// elsewhere the TCP loopback endpoint is used.
#[cfg(unix)]
pub fn socket_path() -> String {
    "unix:///var/run/hubble.sock".to_string()
}

#[cfg(not(unix))]
pub fn socket_path() -> String {
    format!("tcp://127.0.0.1:{SERVER_PORT}")
}
