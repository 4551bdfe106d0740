//! Resolved configuration store.
//!
//! A [`Resolver`] gathers values from four sources and produces an
//! immutable [`ConfigStore`]. Precedence, lowest to highest:
//!
//! 1. built-in defaults from the registry
//! 2. the located config file (YAML)
//! 3. `HUBBLE_*` environment variables
//! 4. flags explicitly present on the command line
//!
//! The store is built once, before dispatch, and only read afterwards.

use super::locator::SearchPaths;
use super::registry::{self, CONFIG, DEBUG, SERVER, TIMEOUT};
use super::types::{ConfigValue, Setting, Source};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::time::Duration;

/// Outcome of the config file load, kept for diagnostics.
///
/// Absent and malformed files are deliberately distinct so that debug mode
/// can tell a user their file was ignored rather than silently dropping it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// No candidate file was found. Also used for an explicit `--config`
    /// path that does not exist, which is treated the same as absent.
    NotFound,
    /// File was found and parsed; its values populate the file layer.
    Loaded(PathBuf),
    /// File exists but could not be read or parsed; the file layer stays
    /// empty and resolution continues.
    Malformed(PathBuf, String),
}

/// Values explicitly supplied on the command line.
///
/// `None` means the flag was absent, so it must not shadow a file or
/// environment value of lower nominal rank. This is the explicit
/// presence-tracking the precedence contract requires.
#[derive(Debug, Clone, Default)]
pub struct FlagOverrides {
    pub config: Option<String>,
    pub debug: Option<bool>,
    pub server: Option<String>,
    pub timeout: Option<Duration>,
}

impl FlagOverrides {
    fn value_of(&self, name: &str) -> Option<ConfigValue> {
        match name {
            CONFIG => self.config.clone().map(ConfigValue::Str),
            DEBUG => self.debug.map(ConfigValue::Bool),
            SERVER => self.server.clone().map(ConfigValue::Str),
            TIMEOUT => self.timeout.map(ConfigValue::Duration),
            _ => None,
        }
    }
}

/// Per-setting value layers. Defaults always exist; the other layers are
/// present only when that source defined the setting.
#[derive(Debug, Clone)]
struct Layers {
    setting: Setting,
    file: Option<ConfigValue>,
    env: Option<ConfigValue>,
    flag: Option<ConfigValue>,
}

impl Layers {
    fn resolved(&self) -> (&ConfigValue, Source) {
        if let Some(v) = &self.flag {
            (v, Source::Flag)
        } else if let Some(v) = &self.env {
            (v, Source::Environment)
        } else if let Some(v) = &self.file {
            (v, Source::File)
        } else {
            (&self.setting.default, Source::Default)
        }
    }
}

/// The resolved configuration, shared by reference with every subcommand.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    layers: HashMap<&'static str, Layers>,
    file_status: FileStatus,
    notes: Vec<String>,
}

impl ConfigStore {
    /// Value of a setting from its highest-priority defined source.
    ///
    /// # Panics
    ///
    /// Panics on a name that was never registered; that is a programming
    /// error, not a runtime condition.
    pub fn get(&self, name: &str) -> &ConfigValue {
        match self.layers.get(name) {
            Some(layers) => layers.resolved().0,
            None => panic!("unknown setting: {name:?}"),
        }
    }

    /// Which source supplied the resolved value for a setting.
    ///
    /// # Panics
    ///
    /// Panics on an unregistered name, like [`ConfigStore::get`].
    pub fn source(&self, name: &str) -> Source {
        match self.layers.get(name) {
            Some(layers) => layers.resolved().1,
            None => panic!("unknown setting: {name:?}"),
        }
    }

    /// Server address to dial.
    pub fn server(&self) -> &str {
        self.get(SERVER).as_str().unwrap_or_default()
    }

    /// Dial timeout for the server connection.
    pub fn timeout(&self) -> Duration {
        self.get(TIMEOUT)
            .as_duration()
            .unwrap_or(crate::defaults::DIAL_TIMEOUT)
    }

    /// Whether diagnostic output is enabled.
    pub fn debug(&self) -> bool {
        self.get(DEBUG).as_bool().unwrap_or(false)
    }

    /// What happened to the config file during resolution.
    pub fn file_status(&self) -> &FileStatus {
        &self.file_status
    }

    /// Values that were dropped during resolution because they did not
    /// convert to the setting's declared type. Reported under debug mode.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }
}

/// Gathers the value sources and produces a [`ConfigStore`].
///
/// The search paths and environment snapshot are injectable so tests can
/// resolve hermetically; production code uses [`Resolver::from_environment`].
#[derive(Debug, Clone)]
pub struct Resolver {
    search: SearchPaths,
    env: HashMap<String, String>,
}

impl Resolver {
    /// Resolver backed by the discovered search paths and the process
    /// environment, snapshotted now so the store stays immutable.
    pub fn from_environment() -> Self {
        let mut env = HashMap::new();
        for setting in registry::settings() {
            let key = registry::env_key(setting.name);
            if let Ok(value) = std::env::var(&key) {
                env.insert(key, value);
            }
        }
        Self {
            search: SearchPaths::discover(),
            env,
        }
    }

    /// Resolver with explicit search paths and environment contents.
    pub fn new(search: SearchPaths, env: HashMap<String, String>) -> Self {
        Self { search, env }
    }

    /// Replace the search paths.
    pub fn with_search(mut self, search: SearchPaths) -> Self {
        self.search = search;
        self
    }

    /// Add one environment variable to the snapshot.
    pub fn with_env_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Merge all sources into an immutable store.
    ///
    /// File loading happens here, after flag parsing, so an explicit
    /// `--config` (or `HUBBLE_CONFIG`) can redirect discovery before any
    /// read occurs. A missing or malformed file never fails resolution.
    pub fn resolve(self, flags: &FlagOverrides) -> ConfigStore {
        let (file_values, file_status) = self.load_file(flags);
        let mut notes = Vec::new();

        let mut layers = HashMap::new();
        for setting in registry::settings() {
            let file = match file_values.get(setting.name) {
                Some(raw) => match ConfigValue::from_yaml(setting.kind, raw) {
                    Ok(value) => Some(value),
                    Err(reason) => {
                        notes.push(format!(
                            "ignoring config file value for {}: {reason}",
                            setting.name
                        ));
                        None
                    }
                },
                None => None,
            };

            let env_key = registry::env_key(setting.name);
            let env = match self.env.get(&env_key) {
                Some(raw) => match ConfigValue::parse(setting.kind, raw) {
                    Ok(value) => Some(value),
                    Err(reason) => {
                        notes.push(format!("ignoring {env_key}: {reason}"));
                        None
                    }
                },
                None => None,
            };

            let flag = flags.value_of(setting.name);

            layers.insert(
                setting.name,
                Layers {
                    setting,
                    file,
                    env,
                    flag,
                },
            );
        }

        ConfigStore {
            layers,
            file_status,
            notes,
        }
    }

    /// Locate and parse the config file, returning its top-level mapping.
    ///
    /// An explicit path (flag first, then `HUBBLE_CONFIG`) is used verbatim
    /// and bypasses the search list entirely.
    fn load_file(&self, flags: &FlagOverrides) -> (BTreeMap<String, serde_yaml::Value>, FileStatus) {
        let explicit = flags
            .config
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                self.env
                    .get(&registry::env_key(CONFIG))
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from)
            });

        let path = match explicit {
            Some(path) if path.is_file() => path,
            Some(_) => return (BTreeMap::new(), FileStatus::NotFound),
            None => match self.search.locate() {
                Some(path) => path,
                None => return (BTreeMap::new(), FileStatus::NotFound),
            },
        };

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => return (BTreeMap::new(), FileStatus::Malformed(path, e.to_string())),
        };

        match serde_yaml::from_str::<BTreeMap<String, serde_yaml::Value>>(&contents) {
            Ok(values) => (values, FileStatus::Loaded(path)),
            Err(e) => (BTreeMap::new(), FileStatus::Malformed(path, e.to_string())),
        }
    }
}
