use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::{
    commands::{
        BumpArgs, CheckArgs, ConfigArgs, InitArgs, handle_bump, handle_check, handle_config,
        handle_init,
    },
    options::FormatOptions,
};
pub mod commands;
mod context;
pub mod options;
pub mod prompter;

pub use prompter::UserCancelled;

#[derive(Parser, Debug)]
#[command(
    name = "snapbump",
    author,
    version,
    about = "Replace the snapshot version line in every service build file",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Current version; prompted for when omitted
    #[arg(long)]
    from: Option<String>,

    /// New version; prompted for when omitted
    #[arg(long)]
    to: Option<String>,

    /// Directory containing the service directories (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Service to bump; repeat to bump several (default: configured services)
    #[arg(short, long = "service")]
    services: Vec<String>,

    /// Keep bumping the remaining services after a file without the version line
    #[arg(short, long, default_value = "false")]
    keep_going: bool,

    /// Report what would change without writing any file
    #[arg(short, long, default_value = "false")]
    dry_run: bool,

    #[arg(long, default_value = "stdout")]
    format: FormatOptions,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Init(InitArgs),
    Check(CheckArgs),
    Config(ConfigArgs),
}

pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    if let Some(command) = cli.command {
        match command {
            Commands::Init(args) => handle_init(&args).await?,
            Commands::Check(args) => handle_check(&args).await?,
            Commands::Config(args) => handle_config(&args).await?,
        }
    } else {
        handle_bump(&BumpArgs {
            from: cli.from,
            to: cli.to,
            path: cli.path,
            services: cli.services,
            keep_going: cli.keep_going,
            dry_run: cli.dry_run,
            format: cli.format,
        })
        .await?;
    }
    Ok(())
}
