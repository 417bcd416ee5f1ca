use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Show the effective snapbump configuration")]
pub struct ConfigArgs {
    /// Directory holding .snapbump/config.json (default: current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,
}

/// Display snapbump configuration
///
/// # Errors
/// Returns error if reading the configuration fails.
pub async fn handle_config(args: &ConfigArgs) -> Result<()> {
    let context = CommandContext::new(args.path.as_deref()).await?;
    println!("{}", serde_json::to_string_pretty(&context.config)?);
    Ok(())
}
