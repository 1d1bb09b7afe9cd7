//! Explorer configuration: TOML file loading and defaults.
//!
//! Resolution order (first found wins):
//! 1. An explicit path (`--config`), which must exist and parse
//! 2. `$FILETREE_CONFIG`
//! 3. Project-local `.filetree.toml` in the current working directory
//! 4. Global `<config dir>/filetree/config.toml`
//! 5. Built-in defaults

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::filter::{default_hidden_rules, HiddenRule};
use crate::root::ROOT;
use crate::store::TreeOptions;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "FILETREE_CONFIG";
/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = ".filetree.toml";

/// `[hidden]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HiddenConfig {
    /// Start from the built-in patterns.
    pub include_defaults: bool,
    /// Exact file names to hide.
    pub names: Vec<String>,
    /// Regular expressions matched against full paths.
    pub patterns: Vec<String>,
}

impl Default for HiddenConfig {
    fn default() -> Self {
        Self {
            include_defaults: true,
            names: Vec::new(),
            patterns: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub root_folder: Option<String>,
    pub hide_root: Option<bool>,
    pub hidden: HiddenConfig,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load `explicit` if given, otherwise the first readable candidate,
    /// otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::from_file(path);
        }
        Ok(candidate_paths()
            .iter()
            .find_map(|path| load_candidate(path))
            .unwrap_or_default())
    }

    /// Compile the hidden rules: defaults (if enabled), then names, then
    /// patterns.
    pub fn hidden_rules(&self) -> Result<Vec<HiddenRule>> {
        let mut rules = if self.hidden.include_defaults {
            default_hidden_rules()
        } else {
            Vec::new()
        };
        rules.extend(self.hidden.names.iter().map(HiddenRule::exact));
        for pattern in &self.hidden.patterns {
            rules.push(HiddenRule::pattern(pattern)?);
        }
        Ok(rules)
    }

    /// Build options from the configured root, leaving extra rules empty.
    pub fn tree_options(&self) -> TreeOptions {
        TreeOptions {
            root_folder: self.root_folder.clone().unwrap_or_else(|| ROOT.to_string()),
            hide_root: self.hide_root.unwrap_or(false),
            extra_hidden_rules: Vec::new(),
        }
    }
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        paths.push(PathBuf::from(env_path));
    }
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(LOCAL_CONFIG_FILE));
    }
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("filetree").join("config.toml"));
    }

    paths
}

/// Missing candidates are silently skipped; broken ones with a warning.
fn load_candidate(path: &Path) -> Option<Config> {
    let content = std::fs::read_to_string(path).ok()?;
    match Config::from_toml(&content) {
        Ok(config) => {
            debug!(path = %path.display(), "loaded config");
            Some(config)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable config file");
            None
        }
    }
}
