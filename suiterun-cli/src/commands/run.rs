//! `suiterun run` command handler

use std::io::Write;

use tracing::info;

use crate::cli::RunArgs;
use crate::error::CliError;
use crate::platform::Platform;
use crate::shell::Shell;
use crate::suites;

/// Run each named suite in order and return the last suite's failed count.
///
/// An unknown name stops the sequence with `CliError::Command`.
pub fn execute<W: Write>(args: RunArgs, platform: &Platform, out: W) -> Result<i32, CliError> {
    let mut shell = Shell::with_commands(platform, out, suites::registry())?;
    for name in &args.suites {
        info!(suite = %name, "run requested");
        shell.feed_line(name)?;
    }
    Ok(shell.exit())
}
