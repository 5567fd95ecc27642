//! Shared test scaffolding: a throwaway workspace with a stub shell-script
//! compiler, so harness behavior can be exercised without a real toolchain.
//!
//! The stub "compiler" copies the fixture source (itself a shell script) to
//! the artifact path and marks it executable. A source containing the token
//! `REJECT` is refused with a message on stderr and a non-zero exit, which
//! is how tests provoke compile failures.

#![allow(dead_code)]
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use goldcrest::config::HarnessConfig;

const STUB_COMPILER: &str = r#"#!/bin/sh
src="$1"
out="$3"
if grep -q REJECT "$src"; then
    echo "cannot compile $src" >&2
    exit 1
fi
cp "$src" "$out"
chmod +x "$out"
"#;

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A unique temporary directory holding the stub compiler, fixtures, and
/// records for one test. Removed on drop.
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    pub fn new(tag: &str) -> Self {
        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let root = std::env::temp_dir().join(format!(
            "goldcrest-{}-{}-{}",
            tag,
            std::process::id(),
            id
        ));
        fs::create_dir_all(&root).unwrap();
        let workspace = Self { root };
        write_executable(&workspace.compiler(), STUB_COMPILER);
        workspace
    }

    pub fn compiler(&self) -> PathBuf {
        self.root.join("stub-compiler")
    }

    pub fn artifact(&self) -> PathBuf {
        self.root.join("out.a")
    }

    /// A config wired to this workspace: no build step, stub compiler,
    /// colors off so output is byte-stable.
    pub fn config(&self) -> HarnessConfig {
        HarnessConfig {
            build_command: Vec::new(),
            compiler: self.compiler(),
            artifact: self.artifact(),
            fixture_ext: "prl".to_string(),
            record_ext: "test".to_string(),
            use_colors: false,
        }
    }

    /// Write a fixture source: a shell script the stub compiler will turn
    /// into the artifact verbatim.
    pub fn write_fixture(&self, name: &str, script: &str) -> PathBuf {
        let path = self.root.join(format!("{}.prl", name));
        fs::write(&path, format!("#!/bin/sh\n{}\n", script)).unwrap();
        path
    }

    /// A fixture source the stub compiler refuses to compile.
    pub fn write_rejected_fixture(&self, name: &str) -> PathBuf {
        let path = self.root.join(format!("{}.prl", name));
        fs::write(&path, "#!/bin/sh\n# REJECT\n").unwrap();
        path
    }

    pub fn write_record(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(format!("{}.test", name));
        fs::write(&path, content).unwrap();
        path
    }

    pub fn record_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.test", name))
    }

    pub fn read_record(&self, name: &str) -> String {
        fs::read_to_string(self.record_path(name)).unwrap()
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

fn write_executable(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}
