//! Integration tests for configuration resolution.
//!
//! These drive the same path the binary uses: parse a command line with
//! clap, turn it into flag overrides, and resolve against an injected
//! search path and environment snapshot.

use clap::Parser;
use hubble::cli::Cli;
use hubble::config::{
    ConfigValue, FileStatus, FlagOverrides, Resolver, SearchPaths, Source, DEBUG, SERVER, TIMEOUT,
};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Resolver that finds no config file and sees no environment variables.
fn bare_resolver() -> Resolver {
    let nowhere = std::env::temp_dir().join("hubble-resolution-tests-nowhere");
    Resolver::new(SearchPaths::with_dirs(vec![nowhere]), HashMap::new())
}

fn overrides_for(argv: &[&str]) -> FlagOverrides {
    Cli::try_parse_from(argv).expect("argv should parse").overrides()
}

#[test]
fn all_sources_defined_highest_priority_wins() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.yaml"), "server: file-value\n").unwrap();

    let resolver = Resolver::new(
        SearchPaths::with_dirs(vec![temp.path().to_path_buf()]),
        HashMap::new(),
    )
    .with_env_var("HUBBLE_SERVER", "env-value");

    let flags = overrides_for(&["hubble", "--server", "flag-value", "status"]);
    let store = resolver.resolve(&flags);

    assert_eq!(store.get(SERVER), &ConfigValue::Str("flag-value".into()));
    assert_eq!(store.source(SERVER), Source::Flag);
}

#[test]
fn no_config_file_anywhere_is_not_an_error() {
    let store = bare_resolver().resolve(&overrides_for(&["hubble", "status"]));
    assert_eq!(store.file_status(), &FileStatus::NotFound);
    assert_eq!(store.source(SERVER), Source::Default);
    assert_eq!(store.timeout(), hubble::defaults::DIAL_TIMEOUT);
}

#[test]
fn nonexistent_explicit_config_path_behaves_as_absent() {
    let flags = overrides_for(&["hubble", "--config", "/x/y.yaml", "status"]);
    let store = bare_resolver().resolve(&flags);
    assert_eq!(store.file_status(), &FileStatus::NotFound);
    assert_eq!(store.source(SERVER), Source::Default);
}

#[test]
fn env_var_applies_when_no_flag_is_given() {
    let store = bare_resolver()
        .with_env_var("HUBBLE_SERVER", "unix:///tmp/s.sock")
        .resolve(&overrides_for(&["hubble", "status"]));
    assert_eq!(store.server(), "unix:///tmp/s.sock");
    assert_eq!(store.source(SERVER), Source::Environment);
}

#[test]
fn flag_beats_env_var() {
    let store = bare_resolver()
        .with_env_var("HUBBLE_SERVER", "env-value")
        .resolve(&overrides_for(&["hubble", "--server", "flag-value", "status"]));
    assert_eq!(store.server(), "flag-value");
}

#[test]
fn file_debug_true_applies_without_flag_or_env() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.yaml"), "debug: true\n").unwrap();

    let resolver = Resolver::new(
        SearchPaths::with_dirs(vec![temp.path().to_path_buf()]),
        HashMap::new(),
    );
    let store = resolver.resolve(&overrides_for(&["hubble", "status"]));
    assert!(store.debug());
    assert_eq!(store.source(DEBUG), Source::File);
}

#[test]
fn explicit_config_bypasses_the_search_list() {
    let searched = TempDir::new().unwrap();
    std::fs::write(searched.path().join("config.yaml"), "timeout: 1s\n").unwrap();
    let explicit_dir = TempDir::new().unwrap();
    let explicit = explicit_dir.path().join("mine.yml");
    std::fs::write(&explicit, "timeout: 9s\n").unwrap();

    let resolver = Resolver::new(
        SearchPaths::with_dirs(vec![searched.path().to_path_buf()]),
        HashMap::new(),
    );
    let flags = overrides_for(&[
        "hubble",
        "--config",
        explicit.to_str().unwrap(),
        "status",
    ]);
    let store = resolver.resolve(&flags);

    assert_eq!(store.timeout(), Duration::from_secs(9));
    assert_eq!(store.source(TIMEOUT), Source::File);
    assert_eq!(store.file_status(), &FileStatus::Loaded(explicit));
}

#[test]
fn malformed_file_yields_no_values_but_resolution_continues() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");
    std::fs::write(&path, ": not yaml : [\n").unwrap();

    let resolver = Resolver::new(
        SearchPaths::with_dirs(vec![temp.path().to_path_buf()]),
        HashMap::new(),
    );
    let store = resolver.resolve(&overrides_for(&["hubble", "-D", "status"]));

    assert!(matches!(store.file_status(), FileStatus::Malformed(p, _) if p == &path));
    assert_eq!(store.source(SERVER), Source::Default);
    // Debug came from the flag; the malformed file contributed nothing.
    assert!(store.debug());
    assert_eq!(store.source(DEBUG), Source::Flag);
}

#[test]
fn resolution_is_order_independent_across_sources() {
    // The same inputs assembled in different builder orders must resolve
    // identically.
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.yaml"), "server: file-value\n").unwrap();
    let search = SearchPaths::with_dirs(vec![temp.path().to_path_buf()]);
    let flags = overrides_for(&["hubble", "--timeout", "7s", "status"]);

    let a = Resolver::new(search.clone(), HashMap::new())
        .with_env_var("HUBBLE_DEBUG", "true")
        .resolve(&flags);
    let b = Resolver::new(
        SearchPaths::with_dirs(vec![PathBuf::from("/nonexistent")]),
        HashMap::from([("HUBBLE_DEBUG".to_string(), "true".to_string())]),
    )
    .with_search(search)
    .resolve(&flags);

    for name in [SERVER, DEBUG, TIMEOUT] {
        assert_eq!(a.get(name), b.get(name), "{name} resolved differently");
        assert_eq!(a.source(name), b.source(name));
    }
    assert_eq!(a.server(), "file-value");
    assert!(a.debug());
    assert_eq!(a.timeout(), Duration::from_secs(7));
}
