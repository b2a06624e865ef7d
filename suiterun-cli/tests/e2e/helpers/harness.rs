//! Launching the suiterun binary for E2E tests.
//!
//! Every invocation runs in its own temp directory (so no stray
//! `suiterun.toml` is picked up) with all suiterun env vars cleared.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Env vars that change the binary's entry path.
const SUITERUN_ENV: &[&str] = &[
    "SUITERUN_RECURSIVE",
    "SUITERUN_TEST",
    "SUITERUN_PROC_TYPE",
    "SUITERUN_PRIMARY_PID",
    "SUITERUN_GENERAL_LOG_LEVEL",
    "SUITERUN_GENERAL_LOG_FORMAT",
    "SUITERUN_HARNESS_RECURSIVE_ENV_VAR",
    "SUITERUN_HARNESS_TEST_ENV_VAR",
    "SUITERUN_HARNESS_PROMPT",
    "SUITERUN_HARNESS_COLOR",
    "RUST_LOG",
];

/// Captured result of one binary run.
#[derive(Debug)]
pub struct Outcome {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl Outcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// A prepared invocation of the binary.
pub struct Invocation {
    dir: TempDir,
    cmd: Command,
}

impl Invocation {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("should create temp dir");
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_suiterun"));
        cmd.current_dir(dir.path())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for var in SUITERUN_ENV {
            cmd.env_remove(var);
        }
        Self { dir, cmd }
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Write a config file into the invocation's directory.
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("should write config");
        path
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run with stdin closed.
    pub fn run(mut self) -> Outcome {
        self.cmd.stdin(Stdio::null());
        let output = self.cmd.output().expect("suiterun should start");
        Outcome {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Run with `input` written to stdin.
    pub fn run_with_input(mut self, input: &str) -> Outcome {
        self.cmd.stdin(Stdio::piped());
        let mut child = self.cmd.spawn().expect("suiterun should start");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("should write stdin");
        let output = child.wait_with_output().expect("suiterun should finish");
        Outcome {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

pub fn suiterun() -> Invocation {
    Invocation::new()
}
