//! Configuration resolution.
//!
//! Settings come from four sources, merged in increasing priority:
//! 1. **Defaults** - declared in the registry
//! 2. **Config file** - first `config.yaml`/`config.yml` found in the
//!    working directory, the platform user-config directory, or `~/.hubble/`
//! 3. **Environment** - `HUBBLE_<SETTING>` variables
//! 4. **Flags** - values explicitly present on the command line
//!
//! An explicit `--config PATH` (or `HUBBLE_CONFIG`) replaces discovery with
//! that exact path. Missing and malformed files are never fatal; debug mode
//! reports what happened on stderr.

mod locator;
mod registry;
mod store;
mod types;

pub use locator::SearchPaths;
pub use registry::{CONFIG, DEBUG, ENV_PREFIX, PRODUCT, SERVER, TIMEOUT, env_key, settings};
pub use store::{ConfigStore, FileStatus, FlagOverrides, Resolver};
pub use types::{ConfigValue, Setting, SettingKind, Source};

/// Report the config file outcome on the diagnostic stream.
///
/// Only speaks when debug mode is on, and always to stderr so primary
/// output stays machine-parseable.
pub fn report_file_status(store: &ConfigStore) {
    if !store.debug() {
        return;
    }
    match store.file_status() {
        FileStatus::Loaded(path) => {
            eprintln!("Using config file: {}", path.display());
        }
        FileStatus::Malformed(path, reason) => {
            eprintln!(
                "Ignoring malformed config file {}: {}",
                path.display(),
                reason
            );
        }
        FileStatus::NotFound => {}
    }
    for note in store.notes() {
        eprintln!("{note}");
    }
}
