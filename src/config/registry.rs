//! Global setting declarations.
//!
//! The registry is the single source of truth for which settings exist,
//! their types, and their defaults. The CLI layer derives its global flags
//! from the same table (see `cli::Cli`), so a new setting is added in one
//! place here plus one clap field there.

use super::types::{ConfigValue, Setting, SettingKind};
use crate::defaults;

/// Product name used for the root command, the config directory names, and
/// the environment prefix.
pub const PRODUCT: &str = "hubble";

/// Prefix for environment variable overrides (`HUBBLE_SERVER` etc.).
pub const ENV_PREFIX: &str = "HUBBLE";

/// Setting names. Lookups use these constants so a typo fails at compile
/// time instead of panicking at runtime.
pub const CONFIG: &str = "config";
pub const DEBUG: &str = "debug";
pub const SERVER: &str = "server";
pub const TIMEOUT: &str = "timeout";

/// All global settings, in declaration order.
pub fn settings() -> Vec<Setting> {
    vec![
        Setting {
            name: CONFIG,
            kind: SettingKind::Str,
            default: ConfigValue::Str(String::new()),
            shorthand: None,
            help: "Config file (default is $HOME/.hubble/config.yaml)",
        },
        Setting {
            name: DEBUG,
            kind: SettingKind::Bool,
            default: ConfigValue::Bool(false),
            shorthand: Some('D'),
            help: "Enable debug messages",
        },
        Setting {
            name: SERVER,
            kind: SettingKind::Str,
            default: ConfigValue::Str(defaults::socket_path()),
            shorthand: None,
            help: "Address of a Hubble server",
        },
        Setting {
            name: TIMEOUT,
            kind: SettingKind::Duration,
            default: ConfigValue::Duration(defaults::DIAL_TIMEOUT),
            shorthand: None,
            help: "Hubble server dialing timeout",
        },
    ]
}

/// Environment variable name for a setting: upper-cased and prefixed
/// (`server` -> `HUBBLE_SERVER`).
pub fn env_key(name: &str) -> String {
    format!("{ENV_PREFIX}_{}", name.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn setting_names_are_unique() {
        let all = settings();
        let names: HashSet<_> = all.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn env_key_is_prefixed_and_uppercased() {
        assert_eq!(env_key("server"), "HUBBLE_SERVER");
        assert_eq!(env_key("timeout"), "HUBBLE_TIMEOUT");
    }

    #[test]
    fn defaults_match_declared_kinds() {
        for setting in settings() {
            assert_eq!(
                setting.default.kind(),
                setting.kind,
                "default for {} has the wrong kind",
                setting.name
            );
        }
    }

    #[test]
    fn only_debug_has_a_shorthand() {
        for setting in settings() {
            if setting.name == DEBUG {
                assert_eq!(setting.shorthand, Some('D'));
            } else {
                assert_eq!(setting.shorthand, None, "{}", setting.name);
            }
        }
    }
}
