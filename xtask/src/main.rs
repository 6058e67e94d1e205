//! Project automation tasks.
//!
//! Run via `cargo xtask <command>`.

use std::{
    path::{Path, PathBuf},
    process,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use xshell::{Shell, cmd};

/// Command line interface for the `xtask` helper.
#[derive(Debug, Parser)]
#[command(name = "xtask")]
struct Cli {
    /// Task to run.
    #[command(subcommand)]
    command: CommandName,
}

/// Supported automation commands.
#[derive(Debug, Subcommand)]
enum CommandName {
    /// Format the workspace and run the linter.
    Tidy,
    /// Run tests using cargo nextest.
    Test,
    /// Run the benchmarks.
    Bench,
}

/// Locate the repository root from `CARGO_MANIFEST_DIR`.
fn repo_root() -> Result<PathBuf> {
    let xtask_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    Ok(xtask_dir
        .parent()
        .context("xtask crate must live at <repo>/xtask")?
        .to_path_buf())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

/// Dispatch the selected `xtask` command.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let sh = repo_shell(&repo_root()?)?;

    match cli.command {
        CommandName::Tidy => tidy(&sh),
        CommandName::Test => test(&sh),
        CommandName::Bench => bench(&sh),
    }
}

/// Run `cargo fmt` and the workspace linter.
fn tidy(sh: &Shell) -> Result<()> {
    format_workspace(sh)?;
    lint_workspace(sh)?;
    format_workspace(sh)?;
    Ok(())
}

/// Run tests using cargo nextest, then the doctests nextest skips.
fn test(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo nextest run --all").run()?;
    cmd!(sh, "cargo test --doc --all").run()?;
    Ok(())
}

/// Run the criterion benchmarks of the library crate.
fn bench(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo bench -p gilbert").run()?;
    Ok(())
}

/// Format the Rust workspace using rustfmt.
fn format_workspace(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo +nightly fmt --all").run()?;
    Ok(())
}

/// Run clippy across the workspace, applying safe fixes.
fn lint_workspace(sh: &Shell) -> Result<()> {
    cmd!(
        sh,
        "cargo clippy -q --fix --all --all-targets --all-features --allow-dirty --tests --examples"
    )
    .run()?;
    Ok(())
}

/// Create a verbose shell rooted at the repository root.
fn repo_shell(root: &Path) -> Result<Shell> {
    let sh = Shell::new()?;
    sh.change_dir(root);
    Ok(sh)
}
