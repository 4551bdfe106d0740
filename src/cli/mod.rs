//! CLI command tree.
//!
//! The root command carries the global flags mirrored from the setting
//! registry; every subcommand is a self-contained module handed the shared
//! [`ConfigStore`]. Entry is two-phase: [`resolve_config`] builds the store
//! from all sources, then [`dispatch`] runs exactly one leaf command.
//! Errors are returned, never printed here; `main` owns surfacing them.

pub mod completion;
pub mod observe;
pub mod peer;
pub mod status;
pub mod version;

use crate::config::{self, ConfigStore, FlagOverrides, Resolver};
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::time::Duration;

const LONG_ABOUT: &str =
    "Hubble is a utility to observe and inspect recent traffic reported by a Hubble server.";

/// Root command with the global flags shared by every subcommand.
///
/// Every override field is an `Option`: `None` means the flag was not on
/// the command line, so lower-priority sources (file, environment) stay
/// visible to the resolver.
#[derive(Parser, Debug)]
#[command(
    name = "hubble",
    about = "CLI",
    long_about = LONG_ABOUT,
    version = concat!("v", env!("CARGO_PKG_VERSION")),
)]
pub struct Cli {
    /// Config file (default is $HOME/.hubble/config.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Enable debug messages
    #[arg(
        short = 'D',
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub debug: Option<bool>,

    /// Address of a Hubble server
    #[arg(long, global = true, value_name = "ADDRESS")]
    pub server: Option<String>,

    /// Hubble server dialing timeout
    #[arg(long, global = true, value_name = "DURATION", value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Flag values explicitly present on the command line.
    pub fn overrides(&self) -> FlagOverrides {
        FlagOverrides {
            config: self.config.clone(),
            debug: self.debug,
            server: self.server.clone(),
            timeout: self.timeout,
        }
    }
}

/// Subcommands attached to the root.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate shell completion scripts
    Completion(completion::CompletionArgs),
    /// Observe traffic reported by the server
    Observe,
    /// List the peers the server is aware of
    Peer,
    /// Check whether the server is reachable
    Status,
    /// Print version information
    Version,
}

/// Parses human-friendly duration strings (e.g. `30s`, `5m`, `1h`).
fn parse_duration(value: &str) -> Result<Duration, String> {
    humantime::parse_duration(value).map_err(|err| err.to_string())
}

/// Phase one: merge defaults, config file, environment, and flags into an
/// immutable store, and report the file outcome under debug mode.
pub fn resolve_config(cli: &Cli) -> ConfigStore {
    let store = Resolver::from_environment().resolve(&cli.overrides());
    config::report_file_status(&store);
    store
}

/// Phase two: run exactly one leaf command against the resolved store.
///
/// With no subcommand the root prints its help, matching a grouping-only
/// root node.
pub async fn dispatch(store: &ConfigStore, command: Option<Command>) -> Result<()> {
    match command {
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
        Some(Command::Completion(args)) => completion::run(store, &args),
        Some(Command::Observe) => observe::run(store).await,
        Some(Command::Peer) => peer::run(store).await,
        Some(Command::Status) => status::run(store).await,
        Some(Command::Version) => version::run(store),
    }
}
