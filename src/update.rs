//! Update mode: capture a fixture's current behavior into its record file.
//!
//! Update is a best-effort "record what the program does today" operation,
//! not a validation step. If the compiler rejects the source, the update is
//! abandoned silently: no record is written, any pre-existing record stays
//! untouched, and no error surfaces. Launch failures and unwritable records
//! are still hard errors.

use std::fs;
use std::path::Path;

use crate::cli::output::ProgressSink;
use crate::config::HarnessConfig;
use crate::errors::HarnessError;
use crate::fixture;
use crate::pipeline::Pipeline;
use crate::record;

/// What an update attempt did, so the caller knows whether the shared
/// artifact needs cleaning up.
#[derive(Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The record file was written (created or overwritten).
    Recorded,
    /// The compiler rejected the source; nothing was written.
    CompileRejected,
}

/// Compile and run `source` once, then overwrite its record file with the
/// observed result. Echoes the written content back through `sink` for
/// operator confirmation.
pub fn update_fixture(
    config: &HarnessConfig,
    source: &Path,
    sink: &mut dyn ProgressSink,
) -> Result<UpdateOutcome, HarnessError> {
    let pipeline = Pipeline::new(config);
    let actual = match pipeline.compile_and_run(source) {
        Ok(actual) => actual,
        Err(HarnessError::Compile { .. }) => return Ok(UpdateOutcome::CompileRejected),
        Err(e) => return Err(e),
    };

    let record_path = fixture::record_path(source, &config.record_ext);
    let text = record::serialize(&actual, &record_path)?;
    fs::write(&record_path, &text).map_err(|e| HarnessError::io(&record_path, e))?;

    sink.line(&format!("Generated {}:", record_path.display()));
    sink.line(&text);
    Ok(UpdateOutcome::Recorded)
}
