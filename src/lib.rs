//! Goldcrest: a golden-file test harness for compiler executables.
//!
//! The harness compiles fixture source files with an external compiler, runs
//! the produced binaries, and compares the observed behavior (exit code,
//! stdout, stderr) against recorded expectations — or re-records them on
//! demand. See the `cli` module for the binary entry point and `suite` for
//! the comparison engine.

pub use crate::errors::HarnessError;
pub use crate::exec::ExecutionResult;

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod fixture;
pub mod pipeline;
pub mod record;
pub mod suite;
pub mod update;
