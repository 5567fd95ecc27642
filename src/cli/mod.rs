//! The goldcrest command-line interface.
//!
//! This module is the entry point for the harness binary: it parses
//! arguments, runs the one-time project build, and dispatches to run or
//! update mode. All fatal conditions surface as a single `ERROR: ...` line
//! and a non-zero exit; assertion mismatches never terminate the process —
//! they accumulate into the report printed after all fixtures ran.

use std::ffi::OsStr;
use std::fs;
use std::process;

use clap::Parser;

use crate::cli::args::HarnessArgs;
use crate::cli::output::StdoutSink;
use crate::config::HarnessConfig;
use crate::errors::HarnessError;
use crate::exec;
use crate::suite;
use crate::update::{self, UpdateOutcome};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() -> ! {
    let args = HarnessArgs::parse();
    let config = HarnessConfig::from_env();

    match dispatch(&args, &config) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    }
}

fn dispatch(args: &HarnessArgs, config: &HarnessConfig) -> Result<(), HarnessError> {
    // The build runs before the subcommand is even validated; a broken
    // build aborts everything, including an `update` of a single fixture.
    build(config)?;

    let mut sink = StdoutSink;
    match args.subcommand.as_str() {
        "update" => {
            let outcome = update::update_fixture(config, &args.path, &mut sink)?;
            // The shared artifact is only left behind by run mode; a
            // successful update cleans it up. A rejected compile never
            // created one.
            if outcome == UpdateOutcome::Recorded {
                fs::remove_file(&config.artifact)
                    .map_err(|e| HarnessError::io(&config.artifact, e))?;
            }
            Ok(())
        }
        "run" => {
            let report = suite::run_suite(&args.path, config, &mut sink)?;
            output::print_summary(&report);
            output::print_failures(&report, config);
            Ok(())
        }
        other => Err(HarnessError::UnknownSubcommand(other.to_string())),
    }
}

/// Run the configured project build with the harness's own stdout/stderr
/// attached. An empty build command skips the step entirely.
fn build(config: &HarnessConfig) -> Result<(), HarnessError> {
    let Some((program, build_args)) = config.build_command.split_first() else {
        return Ok(());
    };
    let build_args: Vec<&OsStr> = build_args.iter().map(OsStr::new).collect();
    let code = exec::run_streamed(program, &build_args)?;
    if code != 0 {
        return Err(HarnessError::Build { code });
    }
    Ok(())
}
