//! `suiterun list` command handler

use std::io::Write;

use suiterun_core::report::Render;

use crate::error::CliError;
use crate::output::OutputWriter;
use crate::platform::Platform;
use crate::suites::{self, SuiteCommand};

/// Execute the `list` command.
pub fn execute<W: Write>(platform: &Platform, writer: &mut OutputWriter<W>) -> Result<(), CliError> {
    let listing = build_listing(platform, &suites::registry());
    writer.render(&listing)
}

fn build_listing(platform: &Platform, commands: &[SuiteCommand]) -> SuiteListing {
    let suites = commands
        .iter()
        .map(|command| {
            let suite = (command.build)(platform);
            SuiteEntry {
                name: command.name.to_owned(),
                help: command.help.to_owned(),
                cases: suite
                    .cases()
                    .iter()
                    .map(|case| (case.name().to_owned(), case.is_enabled()))
                    .collect(),
            }
        })
        .collect();
    SuiteListing { suites }
}

pub struct SuiteListing {
    pub suites: Vec<SuiteEntry>,
}

pub struct SuiteEntry {
    pub name: String,
    pub help: String,
    /// (case name, enabled)
    pub cases: Vec<(String, bool)>,
}

impl Render for SuiteListing {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w, "{:<24} {:<6} Description", "Suite", "Cases")?;
        writeln!(w, "{}", "-".repeat(60))?;

        for suite in &self.suites {
            writeln!(w, "{:<24} {:<6} {}", suite.name, suite.cases.len(), suite.help)?;
            for (index, (name, enabled)) in suite.cases.iter().enumerate() {
                let state = if *enabled { "" } else { " (disabled)" };
                writeln!(w, "  [{index:2}] {name}{state}")?;
            }
        }

        Ok(())
    }
}
