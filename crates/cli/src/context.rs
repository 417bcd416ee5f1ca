use anyhow::Result;
use snapbump_core::Config;
use snapbump_utils::get_snapbump_config;
use std::path::{Path, PathBuf};

/// Root directory and effective configuration shared by every command.
pub struct CommandContext {
    pub root: PathBuf,
    pub config: Config,
}

impl CommandContext {
    /// Resolve the root (`path`, or the working directory) and load its configuration.
    ///
    /// # Errors
    /// Returns error if the working directory is unavailable or the configuration is invalid.
    pub async fn new(path: Option<&Path>) -> Result<Self> {
        let root = match path {
            Some(path) => path.to_path_buf(),
            None => Self::current_dir()?,
        };
        let config = get_snapbump_config(&root).await?;
        Ok(Self { root, config })
    }

    /// Override the configured services when any are given on the command line
    #[must_use]
    pub fn with_services(mut self, services: &[String]) -> Self {
        if !services.is_empty() {
            self.config.services = services.to_vec();
        }
        self
    }

    /// # Errors
    /// Returns error if retrieving the current directory fails.
    pub fn current_dir() -> Result<PathBuf> {
        Ok(std::env::current_dir()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_command_context_defaults_without_config() {
        let temp_dir = TempDir::new().unwrap();
        let context = CommandContext::new(Some(temp_dir.path())).await.unwrap();
        assert_eq!(context.root, temp_dir.path());
        assert_eq!(context.config, Config::default());
    }

    #[tokio::test]
    async fn test_command_context_with_services() {
        let temp_dir = TempDir::new().unwrap();
        let context = CommandContext::new(Some(temp_dir.path()))
            .await
            .unwrap()
            .with_services(&["discovery".to_string()]);
        assert_eq!(context.config.services, vec!["discovery"]);
    }

    #[tokio::test]
    async fn test_command_context_empty_services_keeps_config() {
        let temp_dir = TempDir::new().unwrap();
        let context = CommandContext::new(Some(temp_dir.path()))
            .await
            .unwrap()
            .with_services(&[]);
        assert_eq!(context.config, Config::default());
    }
}
