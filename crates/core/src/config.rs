//! Configuration -- suiterun.toml parsing and runtime settings
//!
//! [`HarnessConfig`] is the top-level structure for every setting the harness
//! reads at startup.
//!
//! # Loading priority
//! 1. CLI arguments (highest)
//! 2. Environment variables (`SUITERUN_GENERAL_LOG_LEVEL=debug` form)
//! 3. Config file (`suiterun.toml`)
//! 4. Defaults (`Default` impls)
//!
//! # Example
//! ```no_run
//! # fn example() -> Result<(), suiterun_core::error::HarnessError> {
//! use suiterun_core::config::HarnessConfig;
//!
//! // File plus environment overrides
//! let config = HarnessConfig::load("suiterun.toml")?;
//!
//! // Directly from a TOML string
//! let config = HarnessConfig::parse("[general]\nlog_level = \"debug\"")?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, HarnessError};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "suiterun.toml";

/// suiterun configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// General settings (logging)
    #[serde(default)]
    pub general: GeneralConfig,
    /// Harness settings (env var names, shell prompt)
    #[serde(default)]
    pub harness: HarnessSection,
}

impl HarnessConfig {
    /// Load a TOML file, apply environment overrides and validate.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults
    /// (still subject to environment overrides).
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        let path = path.as_ref();
        let mut config = match Self::from_file(path) {
            Ok(config) => config,
            Err(HarnessError::Config(ConfigError::FileNotFound { .. })) => {
                tracing::debug!(path = %path.display(), "config file absent, using defaults");
                Self::default()
            }
            Err(e) => return Err(e),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file. Neither overrides nor validation are applied.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                HarnessError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                HarnessError::Io(e)
            }
        })?;
        Self::parse(&content)
    }

    /// Parse a TOML string.
    pub fn parse(toml_str: &str) -> Result<Self, HarnessError> {
        toml::from_str(toml_str).map_err(|e| {
            HarnessError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })
    }

    /// Override values from the environment.
    ///
    /// Naming: `SUITERUN_{SECTION}_{FIELD}`, e.g. `SUITERUN_HARNESS_PROMPT`.
    pub fn apply_env_overrides(&mut self) {
        override_string(&mut self.general.log_level, "SUITERUN_GENERAL_LOG_LEVEL");
        override_string(&mut self.general.log_format, "SUITERUN_GENERAL_LOG_FORMAT");

        override_string(
            &mut self.harness.recursive_env_var,
            "SUITERUN_HARNESS_RECURSIVE_ENV_VAR",
        );
        override_string(
            &mut self.harness.test_env_var,
            "SUITERUN_HARNESS_TEST_ENV_VAR",
        );
        override_string(&mut self.harness.prompt, "SUITERUN_HARNESS_PROMPT");
        override_bool(&mut self.harness.color, "SUITERUN_HARNESS_COLOR");
    }

    /// Validate field values.
    pub fn validate(&self) -> Result<(), HarnessError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.general.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_level".to_owned(),
                reason: format!("must be one of: {}", valid_levels.join(", ")),
            }
            .into());
        }

        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&self.general.log_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_format".to_owned(),
                reason: format!("must be one of: {}", valid_formats.join(", ")),
            }
            .into());
        }

        for (field, value) in [
            ("harness.recursive_env_var", &self.harness.recursive_env_var),
            ("harness.test_env_var", &self.harness.test_env_var),
        ] {
            if value.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_owned(),
                    reason: "environment variable name must not be empty".to_owned(),
                }
                .into());
            }
            if value.contains('=') || value.contains('\0') {
                return Err(ConfigError::InvalidValue {
                    field: field.to_owned(),
                    reason: "environment variable name must not contain '=' or NUL".to_owned(),
                }
                .into());
            }
        }

        if self.harness.recursive_env_var == self.harness.test_env_var {
            return Err(ConfigError::InvalidValue {
                field: "harness.test_env_var".to_owned(),
                reason: "must differ from harness.recursive_env_var".to_owned(),
            }
            .into());
        }

        Ok(())
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Log format (json, pretty)
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_owned(),
            log_format: "pretty".to_owned(),
        }
    }
}

/// Harness settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessSection {
    /// Env var whose value selects a recursive dispatch action
    pub recursive_env_var: String,
    /// Env var holding a one-shot shell command line
    pub test_env_var: String,
    /// Interactive shell prompt
    pub prompt: String,
    /// Colorize per-case status words
    pub color: bool,
}

impl Default for HarnessSection {
    fn default() -> Self {
        Self {
            recursive_env_var: "SUITERUN_RECURSIVE".to_owned(),
            test_env_var: "SUITERUN_TEST".to_owned(),
            prompt: "suiterun>> ".to_owned(),
            color: false,
        }
    }
}

fn override_string(target: &mut String, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = val;
    }
}

fn override_bool(target: &mut bool, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<bool>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse bool from env var, ignoring"
            ),
        }
    }
}
