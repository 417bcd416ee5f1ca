use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use snapbump_core::Config;
use snapbump_utils::{get_snapbump_config_path, get_snapbump_dir};
use tokio::fs::{create_dir_all, write};

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Write a default .snapbump/config.json")]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// If true, do not make any filesystem changes.
    #[arg(short, long, default_value = "false")]
    pub dry_run: bool,
}

/// Initialize snapbump configuration
///
/// # Errors
/// Returns error if the configuration already exists or cannot be written.
pub async fn handle_init(args: &InitArgs) -> Result<()> {
    let root = match &args.path {
        Some(path) => path.clone(),
        None => CommandContext::current_dir()?,
    };
    let snapbump_dir = get_snapbump_dir(&root);
    let config_file = get_snapbump_config_path(&root);
    if config_file.exists() {
        return Err(anyhow::anyhow!(
            "snapbump already initialized in {}",
            snapbump_dir.display()
        ));
    }

    if !args.dry_run {
        create_dir_all(&snapbump_dir).await?;
        write(
            &config_file,
            format!("{}\n", serde_json::to_string_pretty(&Config::default())?),
        )
        .await?;
    }

    println!("snapbump initialized in {}", snapbump_dir.display());
    Ok(())
}
