use std::fmt::Display;
use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// What happened to one service's build file during a run.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BumpOutcome {
    /// The version line was found and the file rewritten
    Updated,
    /// Dry run: the version line was found, nothing was written
    WouldUpdate,
    /// The file does not contain the current version line
    NotFound,
    /// Never opened because the run stopped at an earlier miss
    Skipped,
}

impl BumpOutcome {
    /// Whether the current version line was present in the file
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Updated | Self::WouldUpdate)
    }
}

impl Display for BumpOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Updated => "updated".green().bold(),
                Self::WouldUpdate => "would update".cyan().bold(),
                Self::NotFound => "not found".red().bold(),
                Self::Skipped => "skipped".bright_black(),
            }
        )
    }
}

/// Outcome for a single service directory.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResult {
    /// Service directory name as configured
    service: String,
    /// Build file that was (or would have been) patched
    path: PathBuf,
    outcome: BumpOutcome,
}

impl ServiceResult {
    #[must_use]
    pub const fn new(service: String, path: PathBuf, outcome: BumpOutcome) -> Self {
        Self {
            service,
            path,
            outcome,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn outcome(&self) -> BumpOutcome {
        self.outcome
    }
}

/// Ordered per-service results of one run, used for the summary and JSON output.
///
/// `substitution` is absent for read-only checks, which only search for `pattern`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BumpReport {
    pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    substitution: Option<String>,
    results: Vec<ServiceResult>,
}

impl BumpReport {
    #[must_use]
    pub const fn new(pattern: String, substitution: Option<String>) -> Self {
        Self {
            pattern,
            substitution,
            results: Vec::new(),
        }
    }

    pub fn push(&mut self, result: ServiceResult) {
        self.results.push(result);
    }

    #[must_use]
    pub fn results(&self) -> &[ServiceResult] {
        &self.results
    }

    #[must_use]
    pub fn count(&self, outcome: BumpOutcome) -> usize {
        self.results
            .iter()
            .filter(|result| result.outcome == outcome)
            .count()
    }

    /// True when every service matched the current version line
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.results.iter().all(|result| result.outcome.is_match())
    }
}
