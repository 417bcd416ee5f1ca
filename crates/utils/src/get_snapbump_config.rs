use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use snapbump_core::Config;
use tokio::fs::read_to_string;

const CONFIG_DIR: &str = ".snapbump";
const CONFIG_FILE: &str = "config.json";

#[must_use]
pub fn get_snapbump_dir(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR)
}

#[must_use]
pub fn get_snapbump_config_path(root: &Path) -> PathBuf {
    get_snapbump_dir(root).join(CONFIG_FILE)
}

/// Load `.snapbump/config.json` under `root`, or the defaults when it does not exist.
///
/// # Errors
/// Returns error if the file exists but cannot be read or is not valid JSON.
pub async fn get_snapbump_config(root: &Path) -> Result<Config> {
    let config_path = get_snapbump_config_path(root);
    if !config_path.is_file() {
        return Ok(Config::default());
    }
    let content = read_to_string(&config_path)
        .await
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid configuration in {}", config_path.display()))
}
