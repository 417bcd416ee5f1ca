use colored::Colorize;
use snapbump_core::{BumpOutcome, BumpReport, ServiceResult};

/// One console line describing what happened to a service's build file
#[must_use]
pub fn display_service_result(result: &ServiceResult, pattern: &str, substitution: &str) -> String {
    let path = result.path().display().to_string();
    match result.outcome() {
        BumpOutcome::Updated => format!(
            "{} Updated {} to {}",
            "✓".green().bold(),
            path.bright_white(),
            substitution.bright_green()
        ),
        BumpOutcome::WouldUpdate => format!(
            "{} Would update {} to {}",
            "•".cyan().bold(),
            path.bright_white(),
            substitution.bright_green()
        ),
        BumpOutcome::NotFound => format!(
            "{} {} not found in {}",
            "✗".red().bold(),
            pattern.yellow(),
            path.bright_white()
        ),
        BumpOutcome::Skipped => format!("{} Skipped {}", "-".bright_black(), path.bright_black()),
    }
}

/// Summary line, listing only the outcomes that occurred.
///
/// Marked with a green check when every service matched, a red cross otherwise.
#[must_use]
pub fn display_summary(report: &BumpReport) -> String {
    let parts = [
        BumpOutcome::Updated,
        BumpOutcome::WouldUpdate,
        BumpOutcome::NotFound,
        BumpOutcome::Skipped,
    ]
    .into_iter()
    .filter_map(|outcome| {
        let count = report.count(outcome);
        (count > 0).then(|| format!("{count} {outcome}"))
    })
    .collect::<Vec<_>>();

    if parts.is_empty() {
        "No services to bump".to_string()
    } else if report.is_complete() {
        format!("{} {}", "✓".green().bold(), parts.join(", "))
    } else {
        format!("{} {}", "✗".red().bold(), parts.join(", "))
    }
}
