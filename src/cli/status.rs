//! `hubble status` - server reachability check.

use crate::client;
use crate::config::ConfigStore;
use anyhow::Result;
use std::time::Instant;

pub async fn run(store: &ConfigStore) -> Result<()> {
    let started = Instant::now();
    let _conn = client::dial(store).await?;
    let elapsed = started.elapsed();

    println!("server: {}", store.server());
    println!("connected in: {}ms", elapsed.as_millis());
    Ok(())
}
