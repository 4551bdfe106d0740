//! `hubble observe` - relay the server's traffic stream.
//!
//! The server owns flow decoding and formatting; this command opens the
//! connection and copies the stream to stdout until the server closes it.

use crate::client;
use crate::config::ConfigStore;
use anyhow::Result;

pub async fn run(store: &ConfigStore) -> Result<()> {
    let conn = client::dial(store).await?;
    let mut stdout = tokio::io::stdout();
    conn.request("observe", &mut stdout).await?;
    Ok(())
}
