use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use snapbump_core::{BumpOutcome, BumpReport, MissPolicy, ServiceResult, VersionChange};
use snapbump_utils::{
    build_file_path, count_matching_lines, display_service_result, display_summary,
    replace_in_file,
};

use crate::{
    context::CommandContext,
    options::FormatOptions,
    prompter::{InquirePrompter, Prompter},
};

pub const CURRENT_VERSION_PROMPT: &str = "Current version:";
pub const NEW_VERSION_PROMPT: &str = "New version:";

#[derive(Debug)]
pub struct BumpArgs {
    pub from: Option<String>,
    pub to: Option<String>,
    pub path: Option<PathBuf>,
    pub services: Vec<String>,
    pub keep_going: bool,
    pub dry_run: bool,
    pub format: FormatOptions,
}

/// Bump the snapshot version of every configured service
///
/// # Errors
/// Returns error if a prompt is cancelled, the configuration is invalid or a build file
/// cannot be read or replaced.
pub async fn handle_bump(args: &BumpArgs) -> Result<()> {
    handle_bump_with_prompter(args, &InquirePrompter).await?;
    Ok(())
}

/// # Errors
/// See [`handle_bump`].
pub async fn handle_bump_with_prompter(
    args: &BumpArgs,
    prompter: &dyn Prompter,
) -> Result<BumpReport> {
    let context = CommandContext::new(args.path.as_deref())
        .await?
        .with_services(&args.services);

    let current_version = ask_version(prompter, args.from.as_deref(), CURRENT_VERSION_PROMPT)?;
    let new_version = ask_version(prompter, args.to.as_deref(), NEW_VERSION_PROMPT)?;
    let change = VersionChange::new(&context.config.template, &current_version, &new_version);

    let policy = if args.keep_going {
        MissPolicy::Continue
    } else {
        context.config.on_miss
    };

    if let FormatOptions::Stdout = args.format {
        println!(
            "Bumping {} {} {}",
            change.pattern().yellow(),
            "→".bright_cyan(),
            change.substitution().bright_green()
        );
        if args.dry_run {
            println!("Dry run, no files will be modified");
        }
    }

    let report = bump_services(
        &context.root,
        &context.config.services,
        &context.config.build_file,
        &change,
        policy,
        args.dry_run,
        &args.format,
    )?;

    match args.format {
        FormatOptions::Stdout => println!("{}", display_summary(&report)),
        FormatOptions::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(report)
}

/// Use the version given on the command line, or ask for it.
///
/// The answer is taken verbatim; version strings are never validated.
///
/// # Errors
/// Returns error if the prompt is cancelled or fails.
pub fn ask_version(prompter: &dyn Prompter, given: Option<&str>, message: &str) -> Result<String> {
    match given {
        Some(version) => Ok(version.to_string()),
        None => prompter.text(message),
    }
}

/// Apply `change` to `<root>/<service>/<build_file>` for each service, in order.
///
/// With [`MissPolicy::Stop`] the loop ends at the first file lacking the pattern and
/// the remaining services are recorded as skipped without being opened. A file that
/// cannot be read or replaced aborts the whole run.
///
/// # Errors
/// Returns error if a build file cannot be read or replaced.
pub fn bump_services(
    root: &Path,
    services: &[String],
    build_file: &str,
    change: &VersionChange,
    policy: MissPolicy,
    dry_run: bool,
    format: &FormatOptions,
) -> Result<BumpReport> {
    let mut report = BumpReport::new(
        change.pattern().to_string(),
        Some(change.substitution().to_string()),
    );
    let mut stopped = false;

    for service in services {
        let path = build_file_path(root, service, build_file);
        let outcome = if stopped {
            BumpOutcome::Skipped
        } else if dry_run {
            if count_matching_lines(&path, change.pattern())? > 0 {
                BumpOutcome::WouldUpdate
            } else {
                BumpOutcome::NotFound
            }
        } else if replace_in_file(&path, change.pattern(), change.substitution())? {
            BumpOutcome::Updated
        } else {
            BumpOutcome::NotFound
        };

        if outcome == BumpOutcome::NotFound && policy == MissPolicy::Stop {
            stopped = true;
        }

        let result = ServiceResult::new(service.clone(), path, outcome);
        if let FormatOptions::Stdout = format {
            println!(
                "{}",
                display_service_result(&result, change.pattern(), change.substitution())
            );
        }
        report.push(result);
    }
    Ok(report)
}
