use clap::ValueEnum;

/// CLI output format selection.
///
/// Controls whether commands print colored per-service lines or a single JSON report for CI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FormatOptions {
    /// JSON report for CI/CD pipelines
    #[value(name = "json")]
    Json,
    /// Human-readable colored terminal output
    #[default]
    #[value(name = "stdout")]
    Stdout,
}
