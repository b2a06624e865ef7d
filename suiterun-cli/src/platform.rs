//! Platform initialization -- runs once per process before any test activity.
//!
//! Loads the configuration, applies CLI overrides, starts logging and records
//! the process role. Any failure here is fatal for the process.

use std::path::PathBuf;
use std::sync::OnceLock;

use tracing::{debug, info};

use suiterun_core::config::{DEFAULT_CONFIG_FILE, HarnessConfig};

use crate::cli::Cli;
use crate::error::CliError;
use crate::logging;

/// Env var naming the role of this process (`primary` or `secondary`).
pub const PROC_TYPE_ENV: &str = "SUITERUN_PROC_TYPE";

/// Env var carrying the pid of the primary that launched a secondary.
pub const PRIMARY_PID_ENV: &str = "SUITERUN_PRIMARY_PID";

static PLATFORM: OnceLock<Platform> = OnceLock::new();

/// Role of this process in a multi-process check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessRole {
    Primary,
    Secondary,
}

impl ProcessRole {
    fn from_env() -> Result<Self, CliError> {
        match std::env::var(PROC_TYPE_ENV) {
            Err(_) => Ok(Self::Primary),
            Ok(val) => match val.as_str() {
                "" | "primary" => Ok(Self::Primary),
                "secondary" => Ok(Self::Secondary),
                other => Err(CliError::Platform(format!(
                    "invalid {PROC_TYPE_ENV} '{other}', expected 'primary' or 'secondary'"
                ))),
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

/// Process-wide state established by [`init`].
#[derive(Debug, Clone)]
pub struct Platform {
    /// Effective configuration
    pub config: HarnessConfig,
    /// Config file given on the command line, forwarded to recursive children
    pub config_path: Option<PathBuf>,
    pub role: ProcessRole,
    /// Pid of the launching primary, for secondaries
    pub primary_pid: Option<u32>,
    pub pid: u32,
}

impl Platform {
    /// Build platform state from an already-loaded config.
    ///
    /// Reads the role environment but does not register the platform
    /// process-wide nor start logging.
    pub fn from_config(
        config: HarnessConfig,
        config_path: Option<PathBuf>,
    ) -> Result<Self, CliError> {
        let role = ProcessRole::from_env()?;
        let primary_pid = match std::env::var(PRIMARY_PID_ENV) {
            Ok(val) if !val.is_empty() => Some(val.parse::<u32>().map_err(|e| {
                CliError::Platform(format!("invalid {PRIMARY_PID_ENV} '{val}': {e}"))
            })?),
            _ => None,
        };

        Ok(Self {
            config,
            config_path,
            role,
            primary_pid,
            pid: std::process::id(),
        })
    }
}

/// Load config for the given CLI arguments, with CLI overrides applied.
pub fn load_config(cli: &Cli) -> Result<HarnessConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => HarnessConfig::load(path)?,
        None => HarnessConfig::load_or_default(DEFAULT_CONFIG_FILE)?,
    };

    if let Some(level) = &cli.log_level {
        config.general.log_level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.general.log_format = format.clone();
    }
    config.validate()?;
    Ok(config)
}

/// Initialize the platform for this process.
///
/// Must be called once, before the recursive dispatch check and before any
/// shell or suite activity. A second call fails.
pub fn init(cli: &Cli) -> Result<&'static Platform, CliError> {
    if PLATFORM.get().is_some() {
        return Err(CliError::Platform("platform already initialized".to_owned()));
    }

    let config = load_config(cli)?;
    let platform = Platform::from_config(config, cli.config.clone())?;

    logging::init_tracing(&platform.config.general)
        .map_err(|e| CliError::Platform(e.to_string()))?;

    PLATFORM
        .set(platform)
        .map_err(|_| CliError::Platform("platform already initialized".to_owned()))?;
    let platform = PLATFORM
        .get()
        .ok_or_else(|| CliError::Platform("platform state unavailable".to_owned()))?;

    info!(
        pid = platform.pid,
        role = platform.role.as_str(),
        "platform initialized"
    );
    debug!(config = ?platform.config, "effective configuration");
    Ok(platform)
}

/// The platform registered by [`init`], if any.
pub fn get() -> Option<&'static Platform> {
    PLATFORM.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        // SAFETY: callers are #[serial]; no other thread reads the environment
        unsafe {
            std::env::remove_var(PROC_TYPE_ENV);
            std::env::remove_var(PRIMARY_PID_ENV);
        }
    }

    #[test]
    #[serial]
    fn default_role_is_primary() {
        clear_env();
        let platform =
            Platform::from_config(HarnessConfig::default(), None).expect("should build");
        assert_eq!(platform.role, ProcessRole::Primary);
        assert_eq!(platform.primary_pid, None);
        assert_eq!(platform.pid, std::process::id());
    }

    #[test]
    #[serial]
    fn secondary_role_reads_primary_pid() {
        clear_env();
        unsafe {
            std::env::set_var(PROC_TYPE_ENV, "secondary");
            std::env::set_var(PRIMARY_PID_ENV, "4242");
        }
        let platform = Platform::from_config(HarnessConfig::default(), None);
        clear_env();
        let platform = platform.expect("should build");
        assert_eq!(platform.role, ProcessRole::Secondary);
        assert_eq!(platform.primary_pid, Some(4242));
    }

    #[test]
    #[serial]
    fn invalid_role_is_fatal() {
        clear_env();
        unsafe { std::env::set_var(PROC_TYPE_ENV, "tertiary") };
        let result = Platform::from_config(HarnessConfig::default(), None);
        clear_env();
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    #[serial]
    fn invalid_primary_pid_is_fatal() {
        clear_env();
        unsafe { std::env::set_var(PRIMARY_PID_ENV, "not-a-pid") };
        let result = Platform::from_config(HarnessConfig::default(), None);
        clear_env();
        assert!(matches!(result, Err(CliError::Platform(_))));
    }

    #[test]
    #[serial]
    fn load_config_applies_cli_overrides() {
        use clap::Parser;

        let dir = tempfile::TempDir::new().expect("should create temp dir");
        let path = dir.path().join("suiterun.toml");
        std::fs::write(&path, "[general]\nlog_level = \"info\"\n").expect("should write config");

        let cli = Cli::try_parse_from([
            "suiterun",
            "--config",
            path.to_str().expect("utf-8 path"),
            "--log-level",
            "trace",
        ])
        .expect("should parse");
        let config = load_config(&cli).expect("should load");
        assert_eq!(config.general.log_level, "trace");
    }

    #[test]
    #[serial]
    fn load_config_rejects_bad_override() {
        use clap::Parser;

        let cli = Cli::try_parse_from(["suiterun", "--log-format", "xml"]).expect("should parse");
        let err = load_config(&cli).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    #[serial]
    fn explicit_missing_config_is_an_error() {
        use clap::Parser;

        let cli = Cli::try_parse_from(["suiterun", "-c", "/nonexistent/suiterun.toml"])
            .expect("should parse");
        assert!(matches!(load_config(&cli), Err(CliError::Config(_))));
    }
}
