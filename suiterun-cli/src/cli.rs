//! CLI argument parsing using clap derive API
//!
//! This module defines the command-line interface structure using clap's derive macros.
//! It is purely declarative with no side effects or I/O.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// suiterun -- sequential test-suite harness.
///
/// Without a subcommand the harness runs the command line held in the
/// `SUITERUN_TEST` environment variable, or opens an interactive shell.
#[derive(Parser, Debug)]
#[command(name = "suiterun", version, about, long_about = None)]
pub struct Cli {
    /// Path to the suiterun.toml configuration file.
    ///
    /// When omitted, `./suiterun.toml` is used if present, defaults otherwise.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Override log format (pretty, json).
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one or more suites in order.
    Run(RunArgs),

    /// List registered suites and their cases.
    List,

    /// Manage configuration.
    Config(ConfigArgs),
}

// ---- run ----

/// Run suites and exit with the last suite's failed count.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Suite commands to run, in order.
    #[arg(required = true)]
    pub suites: Vec<String>,
}

// ---- config ----

/// Manage suiterun configuration.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate the configuration file and report errors.
    Validate,
    /// Show the effective configuration (file + env overrides + defaults).
    Show {
        /// Show only a specific section (general, harness).
        #[arg(long)]
        section: Option<String>,
    },
}
