//! Handles all user-facing output for the CLI.
//!
//! Progress lines go through the [`ProgressSink`] trait so the suite runner
//! and update mode can be exercised in tests without scraping the process's
//! stdout; the report renderers below print the summary and per-failure
//! detail blocks.

use std::io::Write;

use difference::{Changeset, Difference};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::config::HarnessConfig;
use crate::suite::SuiteReport;

// ============================================================================
// OUTPUT SINKS
// ============================================================================

/// Destination for progress text emitted while fixtures are processed.
pub trait ProgressSink {
    /// Emit text without a trailing newline (e.g. `path ... ` before the
    /// verdict is known).
    fn fragment(&mut self, text: &str);
    /// Emit a full line.
    fn line(&mut self, text: &str);
}

/// StdoutSink: writes progress to stdout for CLI use.
pub struct StdoutSink;

impl ProgressSink for StdoutSink {
    fn fragment(&mut self, text: &str) {
        print!("{}", text);
        let _ = std::io::stdout().flush();
    }

    fn line(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// OutputBuffer: collects progress into a String for testing or
/// programmatic capture.
#[derive(Default)]
pub struct OutputBuffer {
    pub buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl ProgressSink for OutputBuffer {
    fn fragment(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn line(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }
}

// ============================================================================
// REPORT RENDERING
// ============================================================================

/// Print the run summary line. Two-decimal elapsed seconds.
pub fn print_summary(report: &SuiteReport) {
    println!(
        "\ntest result: {} successful; {} failed; finished in {:.2}s\n",
        report.successful(),
        report.failed(),
        report.elapsed.as_secs_f64()
    );
}

/// Print one detail block per failing fixture: the expected and actual
/// tuples, plus a line diff of whichever streams differ.
pub fn print_failures(report: &SuiteReport, config: &HarnessConfig) {
    if report.failures.is_empty() {
        return;
    }
    println!("Failures:\n");
    let mut stdout = StandardStream::stdout(if config.use_colors {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    });
    for failure in &report.failures {
        println!("---- {} ----", failure.path.display());
        println!("expected: {:?}", failure.expected);
        println!("actual: {:?}", failure.actual);
        if failure.expected.stdout != failure.actual.stdout {
            print_stream_diff(
                &mut stdout,
                "stdout",
                &failure.expected.stdout,
                &failure.actual.stdout,
            );
        }
        if failure.expected.stderr != failure.actual.stderr {
            print_stream_diff(
                &mut stdout,
                "stderr",
                &failure.expected.stderr,
                &failure.actual.stderr,
            );
        }
    }
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn print_stream_diff(stdout: &mut StandardStream, label: &str, expected: &[u8], actual: &[u8]) {
    println!("{} diff:", label);
    let expected = String::from_utf8_lossy(expected);
    let actual = String::from_utf8_lossy(actual);
    let changeset = Changeset::new(&expected, &actual, "\n");
    print_diff(stdout, &changeset.diffs);
    let _ = stdout.reset();
}

fn print_diff(stdout: &mut StandardStream, diffs: &[Difference]) {
    for diff in diffs {
        match diff {
            Difference::Same(ref x) => {
                let _ = stdout.reset();
                println!(" {}", x);
            }
            Difference::Add(ref x) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
                println!("+{}", x);
            }
            Difference::Rem(ref x) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
                println!("-{}", x);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_buffer_accumulates_fragments_and_lines() {
        let mut sink = OutputBuffer::new();
        sink.fragment("a.prl ... ");
        sink.line("OK");
        sink.line("done");
        assert_eq!(sink.as_str(), "a.prl ... OK\ndone\n");
    }
}
