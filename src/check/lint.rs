//! Ruff lint check over the repository's Python sources
//!
//! Locates the `ruff` executable on PATH, collects every `*.py` file under
//! the repository root and runs `ruff check` over them as a subprocess.
//! Ruff's own diagnostics go straight to the user's terminal.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::info;
use walkdir::WalkDir;

/// Error type for the lint check
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("ruff command not available on PATH")]
    RuffNotFound,

    #[error("failed to run ruff: {0}")]
    Spawn(#[from] std::io::Error),

    /// Ruff reported violations (or otherwise exited non-zero)
    #[error("ruff check failed with status {status}")]
    RuffFailed { status: i32 },
}

/// Collect every `*.py` file under `root`, sorted for a stable invocation order.
pub fn collect_python_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| path.extension().is_some_and(|ext| ext == "py"))
        .collect();
    files.sort();
    files
}

/// Run `ruff check` over all Python files under `root`.
///
/// The collected paths keep `root` as given, so the command inherits the
/// caller's working directory. A repository without Python files passes
/// without spawning ruff at all.
pub fn check_ruff(root: &Path) -> Result<(), LintError> {
    info!("checking ruff");

    let ruff = which::which("ruff").map_err(|_| LintError::RuffNotFound)?;

    let files = collect_python_files(root);
    if files.is_empty() {
        info!("no python files found, nothing to lint");
        return Ok(());
    }
    info!("running ruff check over {} files", files.len());

    let status = Command::new(ruff).arg("check").args(&files).status()?;
    if !status.success() {
        return Err(LintError::RuffFailed {
            status: status.code().unwrap_or(1),
        });
    }

    info!("checking ruff .. done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn collect_python_files_finds_nested_files_sorted() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("pkg/sub")).unwrap();
        std::fs::write(dir.path().join("pkg/sub/b.py"), "").unwrap();
        std::fs::write(dir.path().join("pkg/a.py"), "").unwrap();
        std::fs::write(dir.path().join("README.md"), "").unwrap();

        let files = collect_python_files(dir.path());

        assert_eq!(
            files,
            vec![
                dir.path().join("pkg/a.py"),
                dir.path().join("pkg/sub/b.py"),
            ]
        );
    }

    #[test]
    fn collect_python_files_returns_empty_for_repo_without_python() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Cargo.toml"), "[package]\n").unwrap();

        assert!(collect_python_files(dir.path()).is_empty());
    }

    #[test]
    fn collect_python_files_ignores_directories_named_like_python_files() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("weird.py")).unwrap();
        std::fs::write(dir.path().join("weird.py/real.py"), "").unwrap();

        let files = collect_python_files(dir.path());
        assert_eq!(files, vec![dir.path().join("weird.py/real.py")]);
    }
}
