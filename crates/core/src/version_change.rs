/// Placeholder substituted by the raw version string in a line template.
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Pattern/substitution pair applied uniformly to every build file of a run.
///
/// Both sides come from the same template, so `version = '{version}-SNAPSHOT'`
/// with `1.0.0` and `1.1.0` gives `version = '1.0.0-SNAPSHOT'` and
/// `version = '1.1.0-SNAPSHOT'`. Versions are used verbatim, never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionChange {
    pattern: String,
    substitution: String,
}

impl VersionChange {
    #[must_use]
    pub fn new(template: &str, current_version: &str, new_version: &str) -> Self {
        Self {
            pattern: format_version_line(template, current_version),
            substitution: format_version_line(template, new_version),
        }
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn substitution(&self) -> &str {
        &self.substitution
    }
}

/// Render `template` for one version string
#[must_use]
pub fn format_version_line(template: &str, version: &str) -> String {
    template.replace(VERSION_PLACEHOLDER, version)
}
