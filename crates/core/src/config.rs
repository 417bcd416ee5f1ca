use serde::{Deserialize, Serialize};

use crate::miss_policy::MissPolicy;

/// Service directories bumped when no configuration file names them.
pub const DEFAULT_SERVICES: &[&str] = &[
    "alchemy",
    "assistant",
    "common",
    "compare-comply",
    "conversation",
    "core",
    "dialog",
    "discovery",
    "document-conversion",
    "language-translator",
    "natural-language-classifier",
    "natural-language-understanding",
    "personality-insights",
    "retrieve-and-rank",
    "speech-to-text",
    "text-to-speech",
    "tone-analyzer",
    "tradeoff-analytics",
    "visual-recognition",
];

pub const DEFAULT_BUILD_FILE: &str = "build.gradle";

pub const DEFAULT_TEMPLATE: &str = "version = '{version}-SNAPSHOT'";

/// Loaded from `.snapbump/config.json`, controls which build files are bumped and how.
///
/// Every field is optional; missing fields fall back to the defaults above so an
/// empty `{}` behaves exactly like having no configuration file at all.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Service directories, visited in this order
    #[serde(default = "default_services")]
    pub services: Vec<String>,

    /// Build file name inside each service directory (default: "build.gradle")
    #[serde(default = "default_build_file")]
    pub build_file: String,

    /// Version line template; `{version}` is replaced with the raw version string
    #[serde(default = "default_template")]
    pub template: String,

    /// What to do when a build file does not contain the current version line
    #[serde(default)]
    pub on_miss: MissPolicy,
}

fn default_services() -> Vec<String> {
    DEFAULT_SERVICES.iter().map(ToString::to_string).collect()
}

fn default_build_file() -> String {
    DEFAULT_BUILD_FILE.to_string()
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            services: default_services(),
            build_file: default_build_file(),
            template: default_template(),
            on_miss: MissPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.services.len(), DEFAULT_SERVICES.len());
        assert_eq!(config.services[0], "alchemy");
        assert_eq!(config.build_file, "build.gradle");
        assert_eq!(config.template, "version = '{version}-SNAPSHOT'");
        assert_eq!(config.on_miss, MissPolicy::Stop);
    }

    #[test]
    fn test_config_empty_json_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_partial_json() {
        let config: Config =
            serde_json::from_str(r#"{"services": ["discovery", "alchemy"], "onMiss": "continue"}"#)
                .unwrap();
        assert_eq!(config.services, vec!["discovery", "alchemy"]);
        assert_eq!(config.on_miss, MissPolicy::Continue);
        assert_eq!(config.build_file, DEFAULT_BUILD_FILE);
    }

    #[test]
    fn test_config_serializes_camel_case() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert!(json.get("buildFile").is_some());
        assert!(json.get("onMiss").is_some());
        assert!(json.get("build_file").is_none());
    }

    #[test]
    fn test_config_rejects_unknown_policy() {
        let result: Result<Config, _> = serde_json::from_str(r#"{"onMiss": "retry"}"#);
        assert!(result.is_err());
    }
}
