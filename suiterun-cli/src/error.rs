//! CLI-specific error types and exit code mapping

use suiterun_core::error::HarnessError;

/// CLI-specific error type.
///
/// The `exit_code()` method maps errors to process exit codes.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading or validation failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// A shell command could not be executed (unknown suite, bad arguments).
    #[error("{0}")]
    Command(String),

    /// Platform initialization failed.
    #[error("platform init failed: {0}")]
    Platform(String),

    /// The command shell could not be created.
    #[error("shell error: {0}")]
    Shell(String),

    /// IO error (stdin read, stdout write, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped error from suiterun-core.
    #[error("{0}")]
    Core(HarnessError),
}

impl From<HarnessError> for CliError {
    fn from(e: HarnessError) -> Self {
        match e {
            HarnessError::Config(c) => Self::Config(c.to_string()),
            HarnessError::Io(io) => Self::Io(io),
            other => Self::Core(other),
        }
    }
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                       |
    /// |------|-------------------------------|
    /// | 0    | Success                       |
    /// | 1    | Command / core error          |
    /// | 2    | Configuration error           |
    /// | 3    | Platform initialization error |
    /// | 4    | Shell unavailable             |
    /// | 10   | IO error                      |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Platform(_) => 3,
            Self::Shell(_) => 4,
            Self::Io(_) => 10,
            Self::Command(_) | Self::Core(_) => 1,
        }
    }
}
