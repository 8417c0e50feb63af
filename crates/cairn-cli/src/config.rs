//! User configuration: `.cairn/config.toml` in the working directory.
//!
//! Everything here is optional; a missing file or missing keys degrade to
//! defaults so `cn` works in a bare directory with just `--snapshot`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserConfig {
    /// Default snapshot file, relative to the working directory.
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
    /// Default viewer to ask as when `--as` is omitted.
    #[serde(default)]
    pub viewer: Option<String>,
    /// Default output mode: `pretty`, `text`, or `json`.
    #[serde(default)]
    pub output: Option<String>,
}

/// Load `.cairn/config.toml` from `root`, or defaults when absent.
///
/// # Errors
///
/// Returns an error only when the file exists but cannot be read or parsed.
pub fn load_user_config(root: &Path) -> Result<UserConfig> {
    let path = root.join(".cairn/config.toml");
    if !path.exists() {
        return Ok(UserConfig::default());
    }
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}
