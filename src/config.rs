//! User configuration: `~/.lexpp/config.toml` unless `--config` is given.
//!
//! ```toml
//! defines = ["DEBUG", "UNICODE"]
//! output = "lex.yy.go"
//! pretty_errors = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexppConfig {
    /// Symbols defined for every run, ahead of any `-D` flags.
    #[serde(default)]
    pub defines: Vec<String>,
    /// Default for `-o`.
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub pretty_errors: bool,
}

impl LexppConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    /// An explicit path must exist; the default one is optional.
    pub fn load(cli_path: &Option<PathBuf>) -> Result<Self> {
        match resolve_config_path(cli_path) {
            Some(p) if cli_path.is_some() || p.exists() => Self::from_toml_file(&p),
            _ => Ok(Self::default()),
        }
    }
}

/// ~/.lexpp/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".lexpp").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}
