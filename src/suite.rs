//! Per-fixture comparison and whole-suite execution.
//!
//! The comparator resolves a fixture's record, runs the pipeline, and
//! classifies the outcome by exact equality of all three result fields.
//! The suite runner applies it to every fixture in a directory, streaming a
//! `path ... OK|FAILED` line per fixture, and returns the aggregate as a
//! [`SuiteReport`] value so callers (and tests) never have to scrape the
//! printed text for counts.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::cli::output::ProgressSink;
use crate::config::{HarnessConfig, GREEN, RED};
use crate::errors::HarnessError;
use crate::exec::ExecutionResult;
use crate::fixture;
use crate::pipeline::Pipeline;
use crate::record;

/// Classification of a single fixture.
#[derive(Debug)]
pub enum CaseOutcome {
    Pass,
    Fail {
        expected: ExecutionResult,
        actual: ExecutionResult,
    },
}

/// One failing fixture, with both sides kept for the report.
#[derive(Debug)]
pub struct FailedCase {
    pub path: PathBuf,
    pub expected: ExecutionResult,
    pub actual: ExecutionResult,
}

/// Aggregate outcome of a run, finalized once all fixtures were attempted.
#[derive(Debug)]
pub struct SuiteReport {
    pub total: usize,
    pub failures: Vec<FailedCase>,
    pub elapsed: Duration,
}

impl SuiteReport {
    pub fn successful(&self) -> usize {
        self.total - self.failures.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Compare one fixture's recorded expectation against its current behavior.
///
/// A missing or malformed record is fatal (the record is the ground truth;
/// without it the suite is broken). A compile failure propagates as fatal
/// too — run mode never demotes a broken compile to a failing test.
pub fn check_fixture(
    pipeline: &Pipeline,
    config: &HarnessConfig,
    source: &Path,
) -> Result<CaseOutcome, HarnessError> {
    let record_path = fixture::record_path(source, &config.record_ext);
    let expected = record::parse_file(&record_path)?;
    let actual = pipeline.compile_and_run(source)?;
    if expected == actual {
        Ok(CaseOutcome::Pass)
    } else {
        Ok(CaseOutcome::Fail { expected, actual })
    }
}

/// Run every fixture in `dir` sequentially and aggregate the results.
///
/// Progress is streamed through `sink` as each fixture completes; the
/// returned report carries the counts, failure details, and elapsed
/// wall-clock time for the summary.
pub fn run_suite(
    dir: &Path,
    config: &HarnessConfig,
    sink: &mut dyn ProgressSink,
) -> Result<SuiteReport, HarnessError> {
    let start = Instant::now();
    let pipeline = Pipeline::new(config);
    let fixtures = fixture::discover(dir, &config.fixture_ext)?;

    sink.line(&format!("Running {} tests\n", fixtures.len()));

    let total = fixtures.len();
    let mut failures = Vec::new();
    for source in fixtures {
        sink.fragment(&format!("{} ... ", source.display()));
        match check_fixture(&pipeline, config, &source)? {
            CaseOutcome::Pass => sink.line(&config.colorize("OK", GREEN)),
            CaseOutcome::Fail { expected, actual } => {
                sink.line(&config.colorize("FAILED", RED));
                failures.push(FailedCase {
                    path: source,
                    expected,
                    actual,
                });
            }
        }
    }

    Ok(SuiteReport {
        total,
        failures,
        elapsed: start.elapsed(),
    })
}
