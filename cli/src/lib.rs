//! Command line for skill-plotter.
//!
//! Manages skill groups stored as JSON files and plots them as bar charts.
//!
//! # Usage
//!
//! ```bash
//! # Add skills to the default group
//! skill-plotter add Rust 8 --category languages
//! skill-plotter add German 10
//!
//! # Plot them into skills.png, two columns, rounded bars
//! skill-plotter --file-type png --style round
//!
//! # Work on a separate group
//! skill-plotter interactive-add -g hobbies
//! skill-plotter list-skills -g hobbies
//! ```
//!
//! Group files live in the platform config directory unless `--data-dir` or
//! `SKILL_PLOTTER_HOME` points elsewhere. Set `RUST_LOG=debug` to trace file
//! access on stderr.

mod args;
mod config;
mod dispatch;
mod terminal;

pub use args::{Cli, Command, PlotArgs};
pub use config::{APP_DIR, expand_tilde, resolve_data_dir};
pub use dispatch::{Outcome, run, version_text};
pub use terminal::{TerminalConsole, paint};
