//! Version declaration consistency check
//!
//! The project version is declared in several files (plain `VERSION` file,
//! `pyproject.toml`, a CMake config-version file, the Python package
//! `__init__.py`). Each declaration is located by a pair of marker strings
//! and all extracted values must agree exactly.
//!
//! Marker matching is whitespace-insensitive: markers and candidate lines
//! are compared with every whitespace character removed, so a declaration
//! reformatted across lines or with extra spaces still matches.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

/// A configured location of a version declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSource {
    /// Path relative to the repository root
    pub relative_path: PathBuf,
    /// Marker the declaration line starts with (after whitespace discarding)
    pub prefix_marker: String,
    /// Marker the declaration line ends with (after whitespace discarding)
    pub suffix_marker: String,
}

impl VersionSource {
    pub fn new(
        relative_path: impl Into<PathBuf>,
        prefix_marker: impl Into<String>,
        suffix_marker: impl Into<String>,
    ) -> Self {
        Self {
            relative_path: relative_path.into(),
            prefix_marker: prefix_marker.into(),
            suffix_marker: suffix_marker.into(),
        }
    }
}

/// Error type for extracting a version from a single file's content
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// No line starts with the expected prefix marker
    #[error("no line starts with {marker:?}")]
    MarkerNotFound { marker: String },

    /// The prefix-matching line does not end with the expected suffix marker
    #[error("declaration {line:?} does not end with {suffix:?}")]
    MalformedDeclaration { line: String, suffix: String },

    /// The extracted value is empty after trimming
    #[error("extracted version is empty")]
    EmptyVersion,
}

/// Error type for the whole consistency check
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Extract {
        path: String,
        #[source]
        source: ExtractError,
    },

    /// Two sources disagree on the project version
    #[error("version mismatch: {path} declares {found:?}, expected {expected:?}")]
    Mismatch {
        path: String,
        expected: String,
        found: String,
    },

    #[error("no version sources configured")]
    NoSources,
}

/// Removes every whitespace character, including newlines.
fn discard_whitespace(s: &str) -> String {
    s.split_whitespace().collect()
}

/// Match a whitespace-discarded candidate against the markers.
///
/// `None` means the candidate does not start with the prefix; a matching
/// candidate yields the delimited value or a malformed/empty error.
fn split_value(candidate: &str, prefix: &str, suffix: &str) -> Option<Result<String, ExtractError>> {
    let rest = candidate.strip_prefix(prefix)?;
    let Some(value) = rest.strip_suffix(suffix) else {
        return Some(Err(ExtractError::MalformedDeclaration {
            line: candidate.to_string(),
            suffix: suffix.to_string(),
        }));
    };
    let value = value.trim();
    if value.is_empty() {
        return Some(Err(ExtractError::EmptyVersion));
    }
    Some(Ok(value.to_string()))
}

/// Extract the version value delimited by the given markers.
///
/// With both markers empty the whole content, trimmed, is the value.
/// Otherwise the first line whose whitespace-discarded form starts with the
/// whitespace-discarded prefix is the declaration line; the value is the
/// substring between prefix and suffix on that line. A declaration
/// reformatted across several lines has no single matching line, so when
/// the per-line scan finds nothing the whole content is retried in
/// whitespace-discarded form.
pub fn extract(
    content: &str,
    prefix_marker: &str,
    suffix_marker: &str,
) -> Result<String, ExtractError> {
    if prefix_marker.is_empty() && suffix_marker.is_empty() {
        let value = content.trim();
        if value.is_empty() {
            return Err(ExtractError::EmptyVersion);
        }
        return Ok(value.to_string());
    }

    let prefix = discard_whitespace(prefix_marker);
    let suffix = discard_whitespace(suffix_marker);

    for line in content.lines() {
        let stripped = discard_whitespace(line);
        if let Some(result) = split_value(&stripped, &prefix, &suffix) {
            return result;
        }
    }

    let whole = discard_whitespace(content);
    if let Some(result) = split_value(&whole, &prefix, &suffix) {
        return result;
    }

    Err(ExtractError::MarkerNotFound { marker: prefix })
}

/// Checks that every configured version declaration agrees
pub struct VersionChecker {
    sources: Vec<VersionSource>,
}

impl VersionChecker {
    /// Create a checker over an ordered list of sources. The first source
    /// provides the reference version all later sources must match.
    pub fn new(sources: Vec<VersionSource>) -> Self {
        Self { sources }
    }

    /// Check every source under `root` and return the agreed version.
    ///
    /// Sources are checked in order; the first failure (unreadable file,
    /// missing or malformed declaration, disagreeing value) aborts the check
    /// and no later source is read.
    pub fn check_all(&self, root: &Path) -> Result<String, VersionError> {
        info!("checking versions");

        let mut reference: Option<String> = None;
        for source in &self.sources {
            let display_path = source.relative_path.display().to_string();
            info!("extracting version from {display_path}");

            let path = root.join(&source.relative_path);
            let content = fs::read_to_string(&path).map_err(|e| VersionError::Io {
                path: display_path.clone(),
                source: e,
            })?;
            let version = extract(&content, &source.prefix_marker, &source.suffix_marker)
                .map_err(|e| VersionError::Extract {
                    path: display_path.clone(),
                    source: e,
                })?;
            info!("  .. got {version:?}");

            match &reference {
                None => reference = Some(version),
                Some(expected) if *expected != version => {
                    return Err(VersionError::Mismatch {
                        path: display_path,
                        expected: expected.clone(),
                        found: version,
                    });
                }
                Some(_) => {}
            }
        }

        let version = reference.ok_or(VersionError::NoSources)?;
        info!("checking versions .. done");
        Ok(version)
    }
}
