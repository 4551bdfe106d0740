//! `hubble version`.

use crate::config::{ConfigStore, PRODUCT};
use anyhow::Result;

/// Render `<name> v<version>`, omitting the name segment when empty.
pub fn render(name: &str, version: &str) -> String {
    if name.is_empty() {
        format!("v{version}")
    } else {
        format!("{name} v{version}")
    }
}

pub fn run(_store: &ConfigStore) -> Result<()> {
    println!("{}", render(PRODUCT, env!("CARGO_PKG_VERSION")));
    Ok(())
}
