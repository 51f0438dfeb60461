//! Version string well-formedness helpers

use semver::Version;

/// Parse a version string into a `semver::Version`, normalizing partial
/// versions by padding with zeros.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "1.2" -> Version(1, 2, 0)
/// - "1.2.3" -> Version(1, 2, 3)
pub fn parse_version(version: &str) -> Option<Version> {
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", Some((1, 0, 0)))]
    #[case("1.2", Some((1, 2, 0)))]
    #[case("1.2.3", Some((1, 2, 3)))]
    #[case("0.3.2", Some((0, 3, 2)))]
    #[case("not-a-version", None)]
    #[case("", None)]
    fn parse_version_normalizes_partial_versions(
        #[case] input: &str,
        #[case] expected: Option<(u64, u64, u64)>,
    ) {
        let parsed = parse_version(input).map(|v| (v.major, v.minor, v.patch));
        assert_eq!(parsed, expected);
    }

    #[test]
    fn parse_version_accepts_prerelease_suffix() {
        let version = parse_version("1.2.3-rc.1").unwrap();
        assert_eq!(version.pre.as_str(), "rc.1");
    }
}
