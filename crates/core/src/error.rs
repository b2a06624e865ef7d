//! Error types -- harness-level errors and case outcomes

/// `ENOTSUP` as returned by integer-coded checks (Linux value).
pub const ENOTSUP: i32 = 95;

/// Integer code for a successful check.
pub const TEST_SUCCESS: i32 = 0;

/// Integer code for a failed check.
pub const TEST_FAILED: i32 = -1;

/// suiterun top-level error type
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// Configuration error
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Recursive dispatch / child launch error
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// I/O error (report output, config file)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file does not exist
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// TOML parsing failed
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// A field holds a value outside its allowed set
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Errors raised while launching or dispatching a recursive invocation
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Dispatch key was empty
    #[error("recursive dispatch key must not be empty")]
    EmptyKey,

    /// Child process could not be spawned
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of a case hook or body that did not succeed.
///
/// `Unsupported` is the "not applicable here" sentinel and is counted
/// separately from failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaseError {
    /// The check does not apply to the current environment
    #[error("unsupported")]
    Unsupported,

    /// The check ran and failed
    #[error("{0}")]
    Failed(String),

    /// Integer-coded failure
    #[error("check returned code {0}")]
    Code(i32),
}

impl CaseError {
    /// Shorthand for [`CaseError::Failed`].
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }

    /// Map an integer return code onto a case error.
    ///
    /// `-ENOTSUP` is unsupported; any other code is a failure. Callers
    /// should handle [`TEST_SUCCESS`] before reaching this, see
    /// [`case_result_from_code`].
    pub fn from_code(code: i32) -> Self {
        if code == -ENOTSUP {
            Self::Unsupported
        } else {
            Self::Code(code)
        }
    }

    /// Whether this is the unsupported sentinel.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported)
    }
}

/// Result returned by case setup hooks, bodies and suite setup hooks.
pub type CaseResult = Result<(), CaseError>;

/// Convert an integer-coded check result into a [`CaseResult`].
pub fn case_result_from_code(code: i32) -> CaseResult {
    if code == TEST_SUCCESS {
        Ok(())
    } else {
        Err(CaseError::from_code(code))
    }
}
