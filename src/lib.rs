//! Hubble CLI library.
//!
//! Exports the configuration-resolution core and the command tree for
//! integration tests and for the `hubble` binary.

pub mod cli;
pub mod client;
pub mod config;
pub mod defaults;
pub mod error;
pub mod logging;
