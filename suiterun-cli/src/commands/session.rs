//! Default session: one-shot input from the environment, else interactive

use std::io::{BufRead, Write};

use tracing::info;

use crate::error::CliError;
use crate::platform::Platform;
use crate::shell::Shell;
use crate::suites;

/// Where the session takes its input from.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionInput {
    /// A single command line, e.g. from `SUITERUN_TEST`
    OneShot(String),
    Interactive,
}

impl SessionInput {
    /// Choose the input mode from the configured test environment variable.
    pub fn from_env(platform: &Platform) -> Self {
        match std::env::var(&platform.config.harness.test_env_var) {
            Ok(line) if !line.is_empty() => Self::OneShot(line),
            _ => Self::Interactive,
        }
    }
}

/// Run the session and return the process exit code.
///
/// One-shot input returns the last suite's failed count; an interactive
/// session ends with 0 once input is exhausted or `quit` is entered.
pub fn execute<R: BufRead, W: Write>(
    platform: &Platform,
    input: SessionInput,
    stdin: R,
    out: W,
) -> Result<i32, CliError> {
    let mut shell = Shell::with_commands(platform, out, suites::registry())?;

    match input {
        SessionInput::OneShot(line) => {
            info!(line = %line, "running one-shot command");
            shell.feed_line(&line)?;
            Ok(shell.exit())
        }
        SessionInput::Interactive => {
            shell.interact(stdin)?;
            shell.exit();
            Ok(0)
        }
    }
}
