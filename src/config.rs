// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Built-in patterns, always synchronized first: environment files at
/// any depth, local overrides, local config variants, and the editor's
/// workspace settings file.
pub const DEFAULT_PATTERNS: &[&str] = &[
    "**/.env*",
    "**/*.local.*",
    "**/config.local.*",
    ".vscode/settings.json",
];

/// Name of the optional per-repository configuration file.
pub const CONFIG_FILE: &str = ".wtlocal.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Additional patterns appended after the built-in defaults.
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Loads `.wtlocal.toml` from `dir`. A missing file yields the default
/// (empty) configuration.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Built-in defaults followed by the user's patterns from `dir`, in
/// file order. A malformed config file is reported on stderr and
/// treated as empty; configuration problems never block a sync.
#[must_use]
pub fn effective_patterns(dir: &Path) -> Vec<String> {
    let user = load_config(dir).unwrap_or_else(|error| {
        eprintln!("Warning: {error:#}");
        Config::default()
    });

    DEFAULT_PATTERNS
        .iter()
        .map(|p| (*p).to_owned())
        .chain(user.patterns)
        .collect()
}
