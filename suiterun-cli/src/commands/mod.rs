//! Command handlers -- one module per subcommand

pub mod config;
pub mod list;
pub mod run;
pub mod session;

/// Largest exit status a process can report.
const MAX_EXIT_STATUS: i32 = 255;

/// Map a command's result onto the process exit status.
///
/// Failed counts saturate at 255 so a multiple of 256 never reads as success.
pub fn exit_status(result: i32) -> i32 {
    result.min(MAX_EXIT_STATUS)
}
