#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use migcat::{errors::MigrationError, migrations::OperatorGate};

/// Gate that records how often it was asked to wait and, optionally, runs a
/// hook before returning, e.g. to tamper with files between migrations.
#[derive(Default)]
pub struct RecordingGate {
    pub waits: usize,
    pub on_wait: Option<Box<dyn FnMut(usize)>>,
}

impl RecordingGate {
    pub fn with_hook(hook: impl FnMut(usize) + 'static) -> Self {
        Self {
            waits: 0,
            on_wait: Some(Box::new(hook)),
        }
    }
}

impl OperatorGate for RecordingGate {
    fn wait(&mut self) -> Result<(), MigrationError> {
        self.waits += 1;
        if let Some(hook) = self.on_wait.as_mut() {
            hook(self.waits);
        }
        Ok(())
    }
}

pub fn write_migrations(dir: &Path, files: &[(&str, &str)]) {
    fs::create_dir_all(dir).unwrap();
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

/// Runs the compiled binary inside `cwd` with an empty environment, so no
/// developer `MIGCAT__*` or `RUST_LOG` settings leak into the transcript.
pub fn run_binary(cwd: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_migcat"))
        .args(args)
        .current_dir(cwd)
        .env_clear()
        .env("MIGCAT_ENV_FILE", cwd.join("missing.env"))
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The child may exit before consuming everything, e.g. on a read error
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());

    child.wait_with_output().unwrap()
}

pub fn default_migrations_dir(root: &Path) -> PathBuf {
    root.join("supabase").join("migrations")
}
