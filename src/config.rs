//! Harness configuration.
//!
//! Defaults describe the conventional project layout (a cargo-built compiler
//! at `target/debug/prlc`, `.prl` fixture sources with `.test` records, and a
//! single shared `out.a` artifact). Environment overrides exist so the
//! harness can be pointed at a different toolchain — the integration tests
//! rely on this to substitute stub scripts for the real compiler.

use std::env;
use std::path::PathBuf;

pub const ENV_BUILD: &str = "GOLDCREST_BUILD";
pub const ENV_COMPILER: &str = "GOLDCREST_COMPILER";
pub const ENV_ARTIFACT: &str = "GOLDCREST_ARTIFACT";

// Color constants for terminal output
const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub struct HarnessConfig {
    /// The one-time project build command, run before any fixture work with
    /// the harness's own stdio attached.
    pub build_command: Vec<String>,
    /// The compiler under test, invoked as `compiler <source> -o <artifact>`.
    pub compiler: PathBuf,
    /// The single shared output path for compiled binaries. Reused across
    /// all fixtures in a run; safe only because execution is sequential.
    pub artifact: PathBuf,
    /// Extension marking a file as a fixture source.
    pub fixture_ext: String,
    /// Extension of the sibling record file holding the expectation.
    pub record_ext: String,
    pub use_colors: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            build_command: vec!["cargo".to_string(), "build".to_string()],
            compiler: PathBuf::from("target/debug/prlc"),
            artifact: PathBuf::from("out.a"),
            fixture_ext: "prl".to_string(),
            record_ext: "test".to_string(),
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl HarnessConfig {
    /// Defaults with environment overrides applied. The build override is
    /// split on whitespace; an empty value disables the build step entirely.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(build) = env::var(ENV_BUILD) {
            config.build_command = build.split_whitespace().map(str::to_string).collect();
        }
        if let Ok(compiler) = env::var(ENV_COMPILER) {
            config.compiler = PathBuf::from(compiler);
        }
        if let Ok(artifact) = env::var(ENV_ARTIFACT) {
            config.artifact = PathBuf::from(artifact);
        }
        config
    }

    /// Apply color formatting to text if colors are enabled.
    pub fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }
}
