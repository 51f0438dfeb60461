use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use devcheck::check::semver::parse_version;
use devcheck::check::{lint, version::VersionChecker};
use devcheck::config;

#[derive(Parser)]
#[command(name = "devcheck")]
#[command(version, about = "Developer utility for repository consistency checks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Perform all code checks
    Check {
        /// Repository root to check
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check { root } => run_check(&root),
    }
}

fn run_check(root: &Path) -> anyhow::Result<()> {
    lint::check_ruff(root)?;

    let checker = VersionChecker::new(config::version_sources());
    let version = checker.check_all(root)?;
    info!("all version declarations agree on {version}");

    if parse_version(&version).is_none() {
        warn!("project version {version:?} is not a valid semver version");
    }
    Ok(())
}
