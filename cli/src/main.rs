//! `skill-plotter` binary.
//!
//! ```bash
//! skill-plotter add Rust 8 -c languages
//! skill-plotter --columns 1 --file-type pdf
//! RUST_LOG=debug skill-plotter list-groups
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use skill_plotter_cli::{Cli, TerminalConsole, resolve_data_dir, run, version_text};
use skill_plotter_skills::SkillStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.version {
        println!("{}", version_text());
        return Ok(ExitCode::SUCCESS);
    }

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    debug!(data_dir = %data_dir.display(), "using data directory");
    let store = SkillStore::open(&data_dir)
        .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;
    let cwd = std::env::current_dir().context("failed to read the current directory")?;

    let mut console = TerminalConsole::new();
    run(&cli, &store, &mut console, &cwd).map(ExitCode::from)
}
