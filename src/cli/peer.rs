//! `hubble peer` - list the peers the server is aware of.

use crate::client;
use crate::config::ConfigStore;
use anyhow::Result;

pub async fn run(store: &ConfigStore) -> Result<()> {
    let conn = client::dial(store).await?;
    let mut stdout = tokio::io::stdout();
    conn.request("peers", &mut stdout).await?;
    Ok(())
}
