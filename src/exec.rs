//! Child-process execution primitives.
//!
//! Two invocation styles exist: [`run_captured`] runs a program to completion
//! and captures its exit code, stdout, and stderr as raw bytes (used for the
//! compiler and for compiled artifacts), while [`run_streamed`] attaches the
//! child directly to the harness's own stdio (used for the one-time build
//! step). A non-zero exit is a normal, representable outcome at this layer;
//! the only error either function reports is failure to launch the program.

use std::ffi::OsStr;
use std::fmt;
use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};

use crate::errors::HarnessError;

/// The observed behavior of one completed child process. Equality across all
/// three fields is what decides pass/fail for a fixture.
#[derive(Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl fmt::Debug for ExecutionResult {
    // Rendered as a (code, stdout, stderr) tuple with the streams decoded
    // lossily, which is what failure reports print.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {:?}, {:?})",
            self.code,
            String::from_utf8_lossy(&self.stdout),
            String::from_utf8_lossy(&self.stderr)
        )
    }
}

/// Translate an [`ExitStatus`] into the recorded integer convention: the
/// plain exit code when the child exited, or the negated signal number when
/// it was killed by a signal.
fn exit_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        status
            .code()
            .or_else(|| status.signal().map(|sig| -sig))
            .unwrap_or(-1)
    }
    #[cfg(not(unix))]
    {
        status.code().unwrap_or(-1)
    }
}

fn launch_error(program: &OsStr, source: std::io::Error) -> HarnessError {
    HarnessError::Launch {
        program: program.to_string_lossy().into_owned(),
        source,
    }
}

/// Run `program` with `args`, optionally feeding `stdin` bytes, and capture
/// the full contents of both output streams. Blocks until the child exits.
pub fn run_captured(
    program: impl AsRef<OsStr>,
    args: &[&OsStr],
    stdin: Option<&[u8]>,
) -> Result<ExecutionResult, HarnessError> {
    let program = program.as_ref();
    let mut command = Command::new(program);
    command
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        });

    let mut child = command.spawn().map_err(|e| launch_error(program, e))?;

    // Stdin is fed from a separate thread while the main thread drains
    // stdout/stderr; writing it all up front can deadlock once the child
    // fills an output pipe while still blocked reading input. Dropping the
    // handle at the end of the thread gives the child EOF. A write error
    // (e.g. the child exits without reading) is a normal outcome, not a
    // launch failure.
    let feeder = stdin.map(|bytes| {
        let pipe = child.stdin.take();
        let bytes = bytes.to_vec();
        std::thread::spawn(move || {
            if let Some(mut pipe) = pipe {
                let _ = pipe.write_all(&bytes);
            }
        })
    });

    let output = child
        .wait_with_output()
        .map_err(|e| launch_error(program, e))?;

    if let Some(handle) = feeder {
        let _ = handle.join();
    }

    Ok(ExecutionResult {
        code: exit_code(output.status),
        stdout: output.stdout,
        stderr: output.stderr,
    })
}

/// Run `program` with `args` with stdout/stderr inherited from the harness
/// process, returning only the exit code. Used for the build step, whose
/// output should stream straight to the operator.
pub fn run_streamed(program: impl AsRef<OsStr>, args: &[&OsStr]) -> Result<i32, HarnessError> {
    let program = program.as_ref();
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| launch_error(program, e))?;
    Ok(exit_code(status))
}
