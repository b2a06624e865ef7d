//! Command shell -- one registered command per suite
//!
//! The shell is the only path from user input to the suite runner. It keeps
//! the last suite's result and hands it back from every command, so whoever
//! owns the shell decides the process exit code.
//!
//! ```text
//! register(commands) → feed_line(line)* | interact(stdin) → exit() → last result
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use suiterun_core::suite::SuiteRunner;

use crate::error::CliError;
use crate::platform::Platform;
use crate::suites::SuiteCommand;

const BUILTINS: [&str; 4] = ["help", "list", "quit", "exit"];

/// Line-oriented command shell writing all output to `out`.
pub struct Shell<'p, W: Write> {
    platform: &'p Platform,
    commands: Vec<SuiteCommand>,
    out: W,
    prompt: String,
    last_result: i32,
    running: bool,
}

impl<'p, W: Write> Shell<'p, W> {
    pub fn new(platform: &'p Platform, out: W) -> Self {
        Self {
            platform,
            commands: Vec::new(),
            out,
            prompt: platform.config.harness.prompt.clone(),
            last_result: 0,
            running: true,
        }
    }

    /// Create a shell with the given commands registered.
    pub fn with_commands(
        platform: &'p Platform,
        out: W,
        commands: impl IntoIterator<Item = SuiteCommand>,
    ) -> Result<Self, CliError> {
        let mut shell = Self::new(platform, out);
        for command in commands {
            shell.register(command)?;
        }
        Ok(shell)
    }

    /// Register a suite command. Names must be unique and not shadow builtins.
    pub fn register(&mut self, command: SuiteCommand) -> Result<(), CliError> {
        if BUILTINS.contains(&command.name) {
            return Err(CliError::Shell(format!(
                "'{}' is a builtin command",
                command.name
            )));
        }
        if self.commands.iter().any(|c| c.name == command.name) {
            return Err(CliError::Shell(format!(
                "command '{}' registered twice",
                command.name
            )));
        }
        debug!(command = command.name, "command registered");
        self.commands.push(command);
        Ok(())
    }

    pub fn commands(&self) -> &[SuiteCommand] {
        &self.commands
    }

    /// Failed count of the most recent suite run (0 before any run).
    pub fn last_result(&self) -> i32 {
        self.last_result
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Execute one line of input and return the last result.
    pub fn feed_line(&mut self, line: &str) -> Result<i32, CliError> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(self.last_result);
        };
        if words.next().is_some() {
            return Err(CliError::Command(format!("bad arguments for '{word}'")));
        }

        match word {
            "help" => self.write_help()?,
            "list" => self.write_list()?,
            "quit" | "exit" => self.running = false,
            name => {
                let command = self
                    .commands
                    .iter()
                    .find(|c| c.name == name)
                    .copied()
                    .ok_or_else(|| CliError::Command(format!("command not found: {name}")))?;
                self.run_suite(command)?;
            }
        }
        Ok(self.last_result)
    }

    /// Read lines until EOF or `quit`, reporting command errors inline.
    pub fn interact<R: BufRead>(&mut self, mut input: R) -> Result<i32, CliError> {
        let mut line = String::new();
        while self.running {
            write!(self.out, "{}", self.prompt)?;
            self.out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(self.out)?;
                break;
            }
            if let Err(e) = self.feed_line(&line) {
                match e {
                    CliError::Command(msg) => writeln!(self.out, "{msg}")?,
                    other => return Err(other),
                }
            }
        }
        Ok(self.last_result)
    }

    /// End the session, returning the last result.
    pub fn exit(mut self) -> i32 {
        if let Err(e) = self.out.flush() {
            warn!(error = %e, "failed to flush shell output");
        }
        self.last_result
    }

    fn run_suite(&mut self, command: SuiteCommand) -> Result<(), CliError> {
        info!(command = command.name, "running suite command");
        let suite = (command.build)(self.platform);
        let summary = SuiteRunner::new(&mut self.out)
            .with_color(self.platform.config.harness.color)
            .run(&suite)?;
        self.last_result = summary.last_result();
        Ok(())
    }

    fn write_help(&mut self) -> Result<(), CliError> {
        writeln!(self.out, "Commands:")?;
        for command in &self.commands {
            writeln!(self.out, "  {:<24} {}", command.name, command.help)?;
        }
        writeln!(self.out, "  {:<24} list suites and their cases", "list")?;
        writeln!(self.out, "  {:<24} leave the shell", "quit")?;
        Ok(())
    }

    fn write_list(&mut self) -> Result<(), CliError> {
        for command in &self.commands {
            let suite = (command.build)(self.platform);
            writeln!(self.out, "{}", command.name)?;
            for (index, case) in suite.cases().iter().enumerate() {
                let state = if case.is_enabled() { "" } else { " (disabled)" };
                writeln!(self.out, "  [{index:2}] {}{state}", case.name())?;
            }
        }
        Ok(())
    }
}
