//! `suiterun config` command handler

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use suiterun_core::config::{DEFAULT_CONFIG_FILE, HarnessConfig};
use suiterun_core::report::Render;

use crate::cli::{ConfigAction, ConfigArgs};
use crate::error::CliError;
use crate::output::OutputWriter;

/// Execute the `config` command.
///
/// Runs before platform initialization so that an invalid file can still be
/// reported on.
pub fn execute<W: Write>(
    args: ConfigArgs,
    config_path: Option<&Path>,
    writer: &mut OutputWriter<W>,
) -> Result<(), CliError> {
    match args.action {
        ConfigAction::Validate => execute_validate(config_path, writer),
        ConfigAction::Show { section } => execute_show(config_path, section, writer),
    }
}

fn load(config_path: Option<&Path>) -> Result<HarnessConfig, CliError> {
    match config_path {
        Some(path) => Ok(HarnessConfig::load(path)?),
        None => Ok(HarnessConfig::load_or_default(DEFAULT_CONFIG_FILE)?),
    }
}

fn source(config_path: Option<&Path>) -> String {
    config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
        .display()
        .to_string()
}

/// Load and validate the configuration, reporting any error.
///
/// # Errors
///
/// Returns `CliError::Config` if validation fails.
fn execute_validate<W: Write>(
    config_path: Option<&Path>,
    writer: &mut OutputWriter<W>,
) -> Result<(), CliError> {
    let source = source(config_path);
    info!(path = %source, "validating configuration");

    let report = match load(config_path) {
        Ok(_) => ConfigValidationReport {
            source,
            valid: true,
            errors: Vec::new(),
        },
        Err(e) => ConfigValidationReport {
            source,
            valid: false,
            errors: vec![e.to_string()],
        },
    };

    writer.render(&report)?;

    if !report.valid {
        return Err(CliError::Config("configuration is invalid".to_owned()));
    }

    Ok(())
}

/// Display the effective configuration (file + env overrides + defaults).
///
/// # Errors
///
/// Returns `CliError::Config` if loading fails or `CliError::Command` if the
/// section name is invalid.
fn execute_show<W: Write>(
    config_path: Option<&Path>,
    section: Option<String>,
    writer: &mut OutputWriter<W>,
) -> Result<(), CliError> {
    let config = load(config_path)?;

    let config_toml = match section.as_deref() {
        None => toml::to_string_pretty(&config),
        Some("general") => toml::to_string_pretty(&config.general),
        Some("harness") => toml::to_string_pretty(&config.harness),
        Some(other) => {
            return Err(CliError::Command(format!(
                "unknown section: {} (expected: general, harness)",
                other
            )));
        }
    }
    .unwrap_or_else(|e| format!("(serialization error: {})", e));

    writer.render(&ConfigReport {
        source: source(config_path),
        section,
        config_toml,
    })
}

/// Configuration display report.
pub struct ConfigReport {
    pub source: String,
    /// `None` means the full config
    pub section: Option<String>,
    pub config_toml: String,
}

impl Render for ConfigReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        match &self.section {
            Some(section) => writeln!(w, "# {} [{}]", self.source, section)?,
            None => writeln!(w, "# {}", self.source)?,
        }
        write!(w, "{}", self.config_toml)?;
        Ok(())
    }
}

/// Result of `config validate`.
pub struct ConfigValidationReport {
    pub source: String,
    pub valid: bool,
    pub errors: Vec<String>,
}

impl Render for ConfigValidationReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        if self.valid {
            writeln!(w, "{}: valid", self.source)?;
        } else {
            writeln!(w, "{}: invalid", self.source)?;
            for error in &self.errors {
                writeln!(w, "  - {}", error)?;
            }
        }
        Ok(())
    }
}
