use std::io;

use clap::Parser;

use suiterun_cli::cli::{Cli, Commands, RunArgs};
use suiterun_cli::commands;
use suiterun_cli::commands::session::SessionInput;
use suiterun_cli::error::CliError;
use suiterun_cli::output::OutputWriter;
use suiterun_cli::{actions, platform};
use suiterun_core::dispatch;

/// Commands that need an initialized platform.
enum Action {
    Run(RunArgs),
    List,
    Session,
}

fn main() {
    let cli = Cli::parse();

    let code = match run(cli) {
        Ok(code) => commands::exit_status(code),
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn run(mut cli: Cli) -> Result<i32, CliError> {
    // Config inspection must work even when the config cannot initialize the platform.
    let action = match cli.command.take() {
        Some(Commands::Config(args)) => {
            let mut writer = OutputWriter::stdout();
            commands::config::execute(args, cli.config.as_deref(), &mut writer)?;
            return Ok(0);
        }
        Some(Commands::Run(args)) => Action::Run(args),
        Some(Commands::List) => Action::List,
        None => Action::Session,
    };

    let platform = platform::init(&cli)?;

    // A recursive child runs exactly one action and never reaches the shell.
    if let Some(key) = dispatch::recursive_key(&platform.config.harness.recursive_env_var) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        return Ok(actions::TABLE.dispatch(Some(&key), &mut handle));
    }

    match action {
        Action::Run(args) => commands::run::execute(args, platform, io::stdout()),
        Action::List => {
            commands::list::execute(platform, &mut OutputWriter::stdout())?;
            Ok(0)
        }
        Action::Session => {
            let input = SessionInput::from_env(platform);
            commands::session::execute(platform, input, io::stdin().lock(), io::stdout())
        }
    }
}
