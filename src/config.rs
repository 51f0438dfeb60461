//! Hard-coded check configuration
//!
//! The list of version declarations is fixed for the repository this tool
//! ships with. It is built here and injected into the checker so tests can
//! substitute synthetic sources.

use crate::check::version::VersionSource;

/// Ordered list of files declaring the project version.
///
/// The first entry provides the reference version; every later entry must
/// match it exactly.
pub fn version_sources() -> Vec<VersionSource> {
    vec![
        VersionSource::new("VERSION", "", ""),
        VersionSource::new(
            "cmake/PackageConfigVersion.cmake",
            "set(PACKAGE_VERSION \"",
            "\")",
        ),
        VersionSource::new("pyproject.toml", "version = \"", "\""),
        VersionSource::new("python/devcheck/__init__.py", "__version__ = '", "'"),
    ]
}
