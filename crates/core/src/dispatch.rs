//! Recursive dispatch -- environment-keyed actions for isolated sub-processes
//!
//! A harness that needs a pristine process for one check re-executes itself
//! with [`RecursiveCommand`], setting an environment variable to the name of
//! the check. At startup the child looks that value up in its static
//! [`DispatchTable`] and exits with the action's result instead of running
//! any suite.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, info, warn};

use crate::error::{DispatchError, HarnessError, TEST_FAILED};

/// Status returned for a missing key or an unmatched action.
pub const DISPATCH_MISS: i32 = -1;

/// One table row: exact env value → action.
#[derive(Debug, Clone, Copy)]
pub struct DispatchEntry {
    pub key: &'static str,
    pub action: fn() -> i32,
}

impl DispatchEntry {
    pub const fn new(key: &'static str, action: fn() -> i32) -> Self {
        Self { key, action }
    }
}

/// Action for checks whose whole subject is process startup.
pub fn no_action() -> i32 {
    0
}

/// Static, ordered mapping from env value to action.
#[derive(Debug, Clone, Copy)]
pub struct DispatchTable {
    entries: &'static [DispatchEntry],
}

impl DispatchTable {
    pub const fn new(entries: &'static [DispatchEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [DispatchEntry] {
        self.entries
    }

    /// Find the first entry whose key matches exactly.
    pub fn lookup(&self, key: &str) -> Option<&'static DispatchEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Run the action bound to `key` and return its status.
    ///
    /// An absent or empty key returns [`DISPATCH_MISS`] without output; an
    /// unmatched key additionally prints a diagnostic to `out`.
    pub fn dispatch(&self, key: Option<&str>, out: &mut dyn Write) -> i32 {
        let Some(key) = key.filter(|k| !k.is_empty()) else {
            debug!("recursive dispatch entered without a key");
            return DISPATCH_MISS;
        };

        match self.lookup(key) {
            Some(entry) => {
                info!(key, "running recursive action");
                let status = (entry.action)();
                debug!(key, status, "recursive action finished");
                status
            }
            None => {
                warn!(key, "no recursive action registered");
                if let Err(e) = writeln!(out, "ERROR - missing action to take for {key}") {
                    warn!(error = %e, "failed to report missing recursive action");
                }
                DISPATCH_MISS
            }
        }
    }
}

/// Reads the dispatch key from the process environment.
///
/// Returns `None` when the variable is unset or empty, which means the
/// process is not a recursive child.
pub fn recursive_key(env_var: &str) -> Option<String> {
    std::env::var(env_var).ok().filter(|v| !v.is_empty())
}

// ─── RecursiveCommand ────────────────────────────────────────────────

/// Builder for a child invocation of the harness itself.
///
/// ```no_run
/// # fn example() -> Result<(), suiterun_core::error::HarnessError> {
/// use suiterun_core::dispatch::RecursiveCommand;
///
/// let status = RecursiveCommand::current_exe("SUITERUN_RECURSIVE", "test_misc_flags")?
///     .arg("--log-level")
///     .arg("error")
///     .status()?;
/// assert_eq!(status, 0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RecursiveCommand {
    program: PathBuf,
    env_var: String,
    key: String,
    args: Vec<OsString>,
    envs: Vec<(OsString, OsString)>,
}

impl RecursiveCommand {
    pub fn new(
        program: impl Into<PathBuf>,
        env_var: impl Into<String>,
        key: impl Into<String>,
    ) -> Result<Self, HarnessError> {
        let key = key.into();
        if key.is_empty() {
            return Err(DispatchError::EmptyKey.into());
        }
        Ok(Self {
            program: program.into(),
            env_var: env_var.into(),
            key,
            args: Vec::new(),
            envs: Vec::new(),
        })
    }

    /// Re-execute the running binary.
    pub fn current_exe(
        env_var: impl Into<String>,
        key: impl Into<String>,
    ) -> Result<Self, HarnessError> {
        let program = std::env::current_exe()?;
        Self::new(program, env_var, key)
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .envs(self.envs.iter().map(|(k, v)| (k, v)))
            .env(&self.env_var, &self.key);
        cmd
    }

    /// Run the child to completion and return its exit code.
    ///
    /// A child killed by a signal has no exit code and reports
    /// [`TEST_FAILED`].
    pub fn status(&self) -> Result<i32, HarnessError> {
        info!(
            program = %self.program.display(),
            key = %self.key,
            "launching recursive child"
        );
        let status = self
            .command()
            .status()
            .map_err(|source| DispatchError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        let code = match status.code() {
            Some(code) => code,
            None => {
                warn!(key = %self.key, %status, "recursive child terminated by signal");
                TEST_FAILED
            }
        };
        debug!(key = %self.key, code, "recursive child exited");
        Ok(code)
    }
}
