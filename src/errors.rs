//! The unified error type for the harness.
//!
//! Every fatal condition funnels into [`HarnessError`]; the CLI renders it as
//! a single `ERROR: ...` line and exits non-zero. Assertion mismatches are
//! deliberately *not* represented here — a fixture whose actual behavior
//! differs from its record is a reportable outcome, not an error, and lives
//! in [`crate::suite::SuiteReport`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    /// The one-time project build step exited non-zero. Nothing runs after this.
    #[error("build command failed with exit code {code}")]
    Build { code: i32 },

    /// A child process (compiler or artifact) could not be started at all.
    /// Distinct from the child running and exiting non-zero, which is a
    /// normal captured outcome.
    #[error("failed to launch {program}: {source}")]
    Launch { program: String, source: io::Error },

    /// The compiler ran but rejected the fixture's source. Carries the
    /// compiler's stderr verbatim. Fatal in run mode, swallowed in update
    /// mode.
    #[error("failed to compile {}: {stderr}", path.display())]
    Compile { path: PathBuf, stderr: String },

    /// A fixture has no record file. A hard error, never a skip.
    #[error("No test {}", path.display())]
    MissingRecord { path: PathBuf },

    /// A record file exists but does not match the tagged-triple structure.
    #[error("failed to parse {}", path.display())]
    MalformedRecord { path: PathBuf },

    /// A captured stream contains bytes that cannot be written into the
    /// UTF-8 record format.
    #[error("captured {stream} of {} is not valid UTF-8", path.display())]
    NonUtf8Capture { path: PathBuf, stream: &'static str },

    #[error("failed to access {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("unknown subcommand `{0}`")]
    UnknownSubcommand(String),
}

impl HarnessError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
