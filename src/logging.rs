//! Tracing setup.
//!
//! Diagnostics always go to stderr so primary output stays parseable.
//! `RUST_LOG` overrides the level derived from the debug setting.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Called once after configuration resolution, when the effective debug
/// flag is known. Returns an error if a subscriber is already installed.
pub fn init(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hubble={default_level}")));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
