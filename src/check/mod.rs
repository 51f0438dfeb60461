//! Repository check layer
//! - lint.rs: ruff lint check over the Python sources
//! - version.rs: version declaration consistency check
//! - semver.rs: version string well-formedness helpers

pub mod lint;
pub mod semver;
pub mod version;

pub use lint::LintError;
pub use version::{VersionChecker, VersionError, VersionSource};
