//! Setting declarations and resolved values.
//!
//! Every global setting lives in a single flat namespace. A [`Setting`]
//! declares its name, semantic type, default value, and optional
//! single-character shorthand; the resolved value for a setting is a
//! [`ConfigValue`] of the matching kind.

use std::fmt;
use std::time::Duration;

/// Semantic type of a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// Free-form string (paths, addresses).
    Str,
    /// Boolean flag.
    Bool,
    /// Duration with human-friendly syntax (`5s`, `1m30s`).
    Duration,
}

/// A resolved setting value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Str(String),
    Bool(bool),
    Duration(Duration),
}

impl ConfigValue {
    /// Kind of this value.
    pub fn kind(&self) -> SettingKind {
        match self {
            ConfigValue::Str(_) => SettingKind::Str,
            ConfigValue::Bool(_) => SettingKind::Bool,
            ConfigValue::Duration(_) => SettingKind::Duration,
        }
    }

    /// String contents, or `None` for non-string values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            ConfigValue::Duration(d) => Some(*d),
            _ => None,
        }
    }

    /// Parse a raw string (environment variable, YAML scalar rendered as
    /// text) into a value of the given kind.
    pub fn parse(kind: SettingKind, raw: &str) -> Result<Self, String> {
        match kind {
            SettingKind::Str => Ok(ConfigValue::Str(raw.to_string())),
            SettingKind::Bool => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(ConfigValue::Bool(true)),
                "false" | "0" | "no" | "" => Ok(ConfigValue::Bool(false)),
                other => Err(format!("not a boolean: {other:?}")),
            },
            SettingKind::Duration => humantime::parse_duration(raw.trim())
                .map(ConfigValue::Duration)
                .map_err(|e| e.to_string()),
        }
    }

    /// Convert a YAML scalar into a value of the given kind.
    ///
    /// Accepts the natural YAML representation (`debug: true`,
    /// `timeout: 5s`) plus a bare integer for durations, interpreted as
    /// seconds. Mappings and sequences never convert.
    pub fn from_yaml(kind: SettingKind, value: &serde_yaml::Value) -> Result<Self, String> {
        use serde_yaml::Value;
        match (kind, value) {
            (SettingKind::Bool, Value::Bool(b)) => Ok(ConfigValue::Bool(*b)),
            (SettingKind::Duration, Value::Number(n)) => n
                .as_u64()
                .map(|secs| ConfigValue::Duration(Duration::from_secs(secs)))
                .ok_or_else(|| format!("not a whole number of seconds: {n}")),
            (_, Value::String(s)) => Self::parse(kind, s),
            (SettingKind::Str, Value::Number(n)) => Ok(ConfigValue::Str(n.to_string())),
            (SettingKind::Str, Value::Bool(b)) => Ok(ConfigValue::Str(b.to_string())),
            (kind, other) => Err(format!("cannot read {other:?} as {kind:?}")),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Str(s) => write!(f, "{s}"),
            ConfigValue::Bool(b) => write!(f, "{b}"),
            ConfigValue::Duration(d) => write!(f, "{}", humantime::format_duration(*d)),
        }
    }
}

/// Declaration of one global setting.
#[derive(Debug, Clone)]
pub struct Setting {
    /// Unique name within the flat namespace.
    pub name: &'static str,
    /// Semantic type; every source must produce a value of this kind.
    pub kind: SettingKind,
    /// Built-in default, the lowest-priority source.
    pub default: ConfigValue,
    /// Optional single-character flag shorthand.
    pub shorthand: Option<char>,
    /// Help text shown in `--help`.
    pub help: &'static str,
}

/// Where a resolved value came from. Sources are listed lowest priority
/// first; a higher variant always wins over a lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Source {
    /// Built-in default from the setting declaration.
    Default,
    /// Value read from the located config file.
    File,
    /// `HUBBLE_*` environment variable.
    Environment,
    /// Flag explicitly present on the command line.
    Flag,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Default => write!(f, "default"),
            Source::File => write!(f, "file"),
            Source::Environment => write!(f, "environment"),
            Source::Flag => write!(f, "flag"),
        }
    }
}
