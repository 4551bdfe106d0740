//! Process entry point.
//!
//! The command tree never prints errors itself; whatever `run` returns is
//! surfaced here, once, on stderr, and mapped to the exit code.

use anyhow::Result;
use clap::Parser;
use hubble::cli::{self, Cli};
use hubble::logging;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("hubble: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Phase one: resolution. The store is immutable from here on.
    let store = cli::resolve_config(&cli);
    logging::init(store.debug())?;

    // Phase two: dispatch to exactly one leaf command.
    cli::dispatch(&store, cli.command).await
}
