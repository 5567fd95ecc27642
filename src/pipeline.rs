//! The two-stage compilation pipeline: compile a fixture source, then run
//! the produced artifact and capture its behavior.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::config::HarnessConfig;
use crate::errors::HarnessError;
use crate::exec::{self, ExecutionResult};

/// Drives `compiler <source> -o <artifact>` followed by `<artifact>` for one
/// fixture at a time. The artifact path is shared across fixtures, so a
/// pipeline must not be used from concurrent contexts; the suite runner is
/// strictly sequential.
pub struct Pipeline<'a> {
    config: &'a HarnessConfig,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a HarnessConfig) -> Self {
        Self { config }
    }

    /// Compile `source` and run the result with no arguments.
    ///
    /// A compiler exiting non-zero aborts with [`HarnessError::Compile`]
    /// carrying the compiler's stderr; the artifact (nonexistent or stale)
    /// is never run in that case. Failure to launch either child is a
    /// [`HarnessError::Launch`].
    pub fn compile_and_run(&self, source: &Path) -> Result<ExecutionResult, HarnessError> {
        let compile = exec::run_captured(
            &self.config.compiler,
            &[
                source.as_os_str(),
                OsStr::new("-o"),
                self.config.artifact.as_os_str(),
            ],
            None,
        )?;
        if compile.code != 0 {
            return Err(HarnessError::Compile {
                path: source.to_path_buf(),
                stderr: String::from_utf8_lossy(&compile.stderr).into_owned(),
            });
        }
        exec::run_captured(invocable(&self.config.artifact), &[], None)
    }
}

/// A bare filename like `out.a` would be resolved against `PATH` by the OS,
/// not the working directory; anchor it explicitly.
fn invocable(path: &Path) -> PathBuf {
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Path::new(".").join(path),
        _ => path.to_path_buf(),
    }
}
