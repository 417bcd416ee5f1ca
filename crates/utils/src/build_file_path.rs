use std::path::{Path, PathBuf};

/// `<root>/<service>/<build_file>`
#[must_use]
pub fn build_file_path(root: &Path, service: &str, build_file: &str) -> PathBuf {
    root.join(service).join(build_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(".", "alchemy", "build.gradle", "./alchemy/build.gradle")]
    #[case("/repo", "speech-to-text", "build.gradle", "/repo/speech-to-text/build.gradle")]
    #[case("/repo", "core", "build.gradle.kts", "/repo/core/build.gradle.kts")]
    fn test_build_file_path(
        #[case] root: &str,
        #[case] service: &str,
        #[case] build_file: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(
            build_file_path(Path::new(root), service, build_file),
            PathBuf::from(expected)
        );
    }
}
