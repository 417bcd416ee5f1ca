use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use snapbump_core::{BumpOutcome, BumpReport, ServiceResult, format_version_line};
use snapbump_utils::{build_file_path, count_matching_lines};

use crate::{
    commands::bump::{CURRENT_VERSION_PROMPT, ask_version},
    context::CommandContext,
    options::FormatOptions,
    prompter::{InquirePrompter, Prompter},
};

#[derive(Args, Debug)]
#[command(about = "Check which services declare the current snapshot version")]
pub struct CheckArgs {
    /// Current version; prompted for when omitted
    #[arg(long)]
    pub from: Option<String>,

    /// Directory containing the service directories (default: current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Service to check; repeat to check several (default: configured services)
    #[arg(short, long = "service")]
    pub services: Vec<String>,

    #[arg(long, default_value = "stdout")]
    pub format: FormatOptions,
}

/// Report, without modifying anything, which build files contain the current version line
///
/// # Errors
/// Returns error if a prompt is cancelled or a build file cannot be read.
pub async fn handle_check(args: &CheckArgs) -> Result<()> {
    handle_check_with_prompter(args, &InquirePrompter).await?;
    Ok(())
}

/// # Errors
/// See [`handle_check`].
pub async fn handle_check_with_prompter(
    args: &CheckArgs,
    prompter: &dyn Prompter,
) -> Result<BumpReport> {
    let context = CommandContext::new(args.path.as_deref())
        .await?
        .with_services(&args.services);
    let current_version = ask_version(prompter, args.from.as_deref(), CURRENT_VERSION_PROMPT)?;
    let pattern = format_version_line(&context.config.template, &current_version);

    let mut report = BumpReport::new(pattern.clone(), None);
    for service in &context.config.services {
        let path = build_file_path(&context.root, service, &context.config.build_file);
        let matches = count_matching_lines(&path, &pattern)?;
        if let FormatOptions::Stdout = args.format {
            if matches > 0 {
                println!(
                    "{} {} ({} matching line{})",
                    "✓".green().bold(),
                    path.display().to_string().bright_white(),
                    matches,
                    if matches == 1 { "" } else { "s" }
                );
            } else {
                println!(
                    "{} {} not found in {}",
                    "✗".red().bold(),
                    pattern.yellow(),
                    path.display().to_string().bright_white()
                );
            }
        }
        let outcome = if matches > 0 {
            BumpOutcome::WouldUpdate
        } else {
            BumpOutcome::NotFound
        };
        report.push(ServiceResult::new(service.clone(), path, outcome));
    }

    match args.format {
        FormatOptions::Stdout => println!(
            "{} of {} services declare {}",
            report.count(BumpOutcome::WouldUpdate),
            report.results().len(),
            pattern.yellow()
        ),
        FormatOptions::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompter::MockPrompter;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        check: CheckArgs,
    }

    #[test]
    fn test_check_args_parsing() {
        let cli = TestCli::parse_from([
            "test", "--from", "1.0.0", "-s", "alchemy", "-s", "discovery",
        ]);
        assert_eq!(cli.check.from.as_deref(), Some("1.0.0"));
        assert_eq!(cli.check.services, vec!["alchemy", "discovery"]);
        assert!(matches!(cli.check.format, FormatOptions::Stdout));
    }

    #[tokio::test]
    async fn test_handle_check_reports_every_service() {
        let temp_dir = TempDir::new().unwrap();
        for (service, version) in [("alchemy", "0.9.0"), ("discovery", "1.0.0")] {
            fs::create_dir_all(temp_dir.path().join(service)).unwrap();
            fs::write(
                temp_dir.path().join(service).join("build.gradle"),
                format!("version = '{version}-SNAPSHOT'\n"),
            )
            .unwrap();
        }
        let prompter = MockPrompter::new(["1.0.0"]);
        let args = CheckArgs {
            from: None,
            path: Some(temp_dir.path().to_path_buf()),
            services: vec!["alchemy".to_string(), "discovery".to_string()],
            format: FormatOptions::Json,
        };

        let report = handle_check_with_prompter(&args, &prompter).await.unwrap();

        assert_eq!(report.results()[0].outcome(), BumpOutcome::NotFound);
        assert_eq!(report.results()[1].outcome(), BumpOutcome::WouldUpdate);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["pattern"], "version = '1.0.0-SNAPSHOT'");
        assert!(json.get("substitution").is_none());
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("alchemy/build.gradle")).unwrap(),
            "version = '0.9.0-SNAPSHOT'\n"
        );
    }
}
