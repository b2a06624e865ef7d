//! Built-in suites -- one module per suite, registered as shell commands

pub mod dispatch;
pub mod harness;
pub mod multiprocess;

use std::ffi::OsString;
use std::path::PathBuf;

use suiterun_core::dispatch::RecursiveCommand;
use suiterun_core::error::{CaseError, CaseResult};
use suiterun_core::suite::TestSuite;

use crate::platform::Platform;

/// A shell command that builds and runs one suite.
#[derive(Debug, Clone, Copy)]
pub struct SuiteCommand {
    pub name: &'static str,
    pub help: &'static str,
    pub build: fn(&Platform) -> TestSuite,
}

/// Every suite the binary ships, in registration order.
pub fn registry() -> Vec<SuiteCommand> {
    vec![
        SuiteCommand {
            name: harness::NAME,
            help: "in-process checks of the suite runner",
            build: harness::build,
        },
        SuiteCommand {
            name: dispatch::NAME,
            help: "re-executes suiterun for each recursive flag check",
            build: dispatch::build,
        },
        SuiteCommand {
            name: multiprocess::NAME,
            help: "launches secondary instances of suiterun",
            build: multiprocess::build,
        },
    ]
}

/// Spawns recursive children the same way for every suite.
#[derive(Debug, Clone)]
pub struct Launcher {
    program: Option<PathBuf>,
    env_var: String,
    args: Vec<OsString>,
}

impl Launcher {
    pub fn from_platform(platform: &Platform) -> Self {
        let mut args: Vec<OsString> = Vec::new();
        if let Some(path) = &platform.config_path {
            args.push("--config".into());
            args.push(path.into());
        }
        args.push("--log-level".into());
        args.push(platform.config.general.log_level.clone().into());

        Self {
            program: std::env::current_exe().ok(),
            env_var: platform.config.harness.recursive_env_var.clone(),
            args,
        }
    }

    /// Use a specific executable instead of the running one.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = Some(program.into());
        self
    }

    /// Case setup: the harness cannot re-execute itself without a program path.
    pub fn ensure_available(&self) -> CaseResult {
        match &self.program {
            Some(_) => Ok(()),
            None => Err(CaseError::Unsupported),
        }
    }

    pub fn command(&self, key: &str) -> Result<RecursiveCommand, CaseError> {
        let program = self.program.as_ref().ok_or(CaseError::Unsupported)?;
        let cmd = RecursiveCommand::new(program, &self.env_var, key)
            .map_err(|e| CaseError::failed(e.to_string()))?;
        Ok(self.args.iter().fold(cmd, |cmd, arg| cmd.arg(arg)))
    }
}

/// Run a prepared child and compare its exit status.
pub(crate) fn expect_status(cmd: &RecursiveCommand, expect_success: bool) -> CaseResult {
    let code = cmd
        .status()
        .map_err(|e| CaseError::failed(e.to_string()))?;
    match (expect_success, code == 0) {
        (true, true) | (false, false) => Ok(()),
        (true, false) => Err(CaseError::failed(format!(
            "child '{}' exited with {code}, expected success",
            cmd.key()
        ))),
        (false, true) => Err(CaseError::failed(format!(
            "child '{}' succeeded, expected failure",
            cmd.key()
        ))),
    }
}
