use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Behaviour of the bump loop when a build file lacks the current version line.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MissPolicy {
    /// Halt at the first miss; later services are never opened
    #[default]
    Stop,
    /// Attempt every service and report the misses at the end
    Continue,
}

impl Display for MissPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Stop => "stop",
                Self::Continue => "continue",
            }
        )
    }
}
