//! Defines the command-line arguments for the goldcrest harness.
//!
//! This module uses the `clap` crate with its "derive" feature. The
//! subcommand is deliberately a plain string rather than a clap subcommand
//! enum: the one-time build step must run before dispatch, so an unknown
//! subcommand is only rejected *after* the project has been built. Missing
//! positional arguments, on the other hand, are rejected by clap up front,
//! before anything else happens.

use clap::Parser;
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "goldcrest",
    version,
    about = "A golden-file test harness for compiler executables."
)]
pub struct HarnessArgs {
    /// The mode to run in: `run` (check a fixture directory) or `update`
    /// (re-record one fixture's expectation).
    #[arg(required = true)]
    pub subcommand: String,

    /// Fixture directory (`run`) or fixture source file (`update`).
    #[arg(required = true)]
    pub path: PathBuf,
}
