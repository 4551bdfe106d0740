//! Config file discovery.
//!
//! Builds the ordered list of directories probed for a `config.yaml` (or
//! `config.yml`). Directories that cannot be resolved on this machine are
//! skipped; a shorter candidate list is not an error.

use super::registry::PRODUCT;
use std::path::{Path, PathBuf};

/// Base name of the config file, tried with each recognized extension.
const FILE_STEM: &str = "config";

/// Recognized extensions, in preference order.
const EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Ordered list of directories searched for a config file.
#[derive(Debug, Clone)]
pub struct SearchPaths {
    dirs: Vec<PathBuf>,
}

impl SearchPaths {
    /// Discover the standard search paths for this platform:
    /// 1. the working directory
    /// 2. the platform user-config directory (`$XDG_CONFIG_HOME/hubble`,
    ///    `~/Library/Application Support/hubble`, ...)
    /// 3. `~/.hubble/`
    pub fn discover() -> Self {
        let mut dirs = vec![PathBuf::from(".")];
        if let Some(config_dir) = dirs::config_dir() {
            dirs.push(config_dir.join(PRODUCT));
        }
        if let Some(home_dir) = dirs::home_dir() {
            dirs.push(home_dir.join(format!(".{PRODUCT}")));
        }
        Self { dirs }
    }

    /// Search paths with an explicit directory list, highest priority first.
    pub fn with_dirs(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// Directories in probe order.
    pub fn dirs(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }

    /// Find the first existing config file, probing each directory in order
    /// and each extension within a directory.
    pub fn locate(&self) -> Option<PathBuf> {
        for dir in &self.dirs {
            for ext in EXTENSIONS {
                let candidate = dir.join(format!("{FILE_STEM}.{ext}"));
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }
        None
    }
}
