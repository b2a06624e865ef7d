//! E2E test scenarios, one module per entry path.

mod config_error;
mod recursive;
mod run_command;
mod session;
