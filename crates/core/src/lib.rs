//! # snapbump-core
//!
//! Shared types for snapbump: the run configuration, the version line pair
//! applied to every build file, and the per-service results of a run.

pub mod bump_result;
pub mod config;
pub mod miss_policy;
pub mod version_change;

pub use bump_result::{BumpOutcome, BumpReport, ServiceResult};
pub use config::Config;
pub use miss_policy::MissPolicy;
pub use version_change::{VersionChange, format_version_line};
