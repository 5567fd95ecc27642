//! The fixture record codec.
//!
//! A record file is the persisted expectation for one fixture: a UTF-8 text
//! file holding the exit code, stdout, and stderr of the last recorded run in
//! a line-oriented tagged format:
//!
//! ```text
//! [code] 0
//! [stdout] hello
//! [stderr]
//! ```
//!
//! Stream content is written verbatim after its tag with no escaping, so a
//! section runs until the next tag (or end of file) and may itself contain
//! newlines. Parsing is non-greedy on stdout and greedy on stderr; a stdout
//! that literally contains the text `[stderr] ` will therefore parse
//! incorrectly. That ambiguity is inherent to the unescaped format and is
//! kept as-is.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::HarnessError;
use crate::exec::ExecutionResult;

static RECORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[code\]\s*(\d+)\s*\[stdout\] (.*?)\[stderr\] (.*)").unwrap());

/// Render a result in the tagged-triple record format. Fails if either
/// stream holds bytes that are not valid UTF-8, since record files are text.
pub fn serialize(result: &ExecutionResult, path: &Path) -> Result<String, HarnessError> {
    let stream_text = |bytes: &[u8], stream: &'static str| {
        String::from_utf8(bytes.to_vec()).map_err(|_| HarnessError::NonUtf8Capture {
            path: path.to_path_buf(),
            stream,
        })
    };
    let stdout = stream_text(&result.stdout, "stdout")?;
    let stderr = stream_text(&result.stderr, "stderr")?;
    Ok(format!(
        "[code] {}\n[stdout] {}[stderr] {}",
        result.code, stdout, stderr
    ))
}

/// Match record text against the tagged-triple structure.
pub fn parse(text: &str) -> Option<ExecutionResult> {
    let caps = RECORD_RE.captures(text)?;
    let code = caps[1].parse::<i32>().ok()?;
    Some(ExecutionResult {
        code,
        stdout: caps[2].as_bytes().to_vec(),
        stderr: caps[3].as_bytes().to_vec(),
    })
}

/// Read and parse a record file. A missing file and a malformed file are
/// distinct fatal errors; both halt the whole run rather than skipping the
/// fixture.
pub fn parse_file(path: &Path) -> Result<ExecutionResult, HarnessError> {
    let text = fs::read_to_string(path).map_err(|_| HarnessError::MissingRecord {
        path: path.to_path_buf(),
    })?;
    parse(&text).ok_or_else(|| HarnessError::MalformedRecord {
        path: path.to_path_buf(),
    })
}
