//! Console report -- line-oriented, human-readable suite output
//!
//! Every line the runner prints goes through the helpers here so the report
//! layout stays in one place. [`Render`] is the text-rendering trait shared by
//! the summary and the CLI's listing/config reports.

use std::io::Write;

use colored::Colorize;

use crate::suite::{CaseStatus, SuiteSummary};

/// Horizontal rule framing banners and the summary block.
pub const SEPARATOR: &str = " + ------------------------------------------------------- +";

/// Trait for human-readable text rendering.
pub trait Render {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()>;
}

pub(crate) fn write_separator(w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "{SEPARATOR}")
}

pub(crate) fn write_banner(w: &mut dyn Write, name: &str) -> std::io::Result<()> {
    write_separator(w)?;
    writeln!(w, " + Test Suite : {name}")
}

pub(crate) fn write_case_line(
    w: &mut dyn Write,
    index: usize,
    name: &str,
    status: CaseStatus,
    color: bool,
) -> std::io::Result<()> {
    if color {
        let word = match status {
            CaseStatus::Succeeded => status.as_str().green(),
            CaseStatus::Unsupported => status.as_str().yellow(),
            CaseStatus::Failed => status.as_str().red().bold(),
        };
        writeln!(w, " + TestCase [{index:2}] : {name} {word}")
    } else {
        writeln!(w, " + TestCase [{index:2}] : {name} {status}")
    }
}

impl Render for SuiteSummary {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        write_separator(w)?;
        writeln!(w, " + Test Suite Summary ")?;
        writeln!(w, " + Tests Total :       {:2}", self.total)?;
        writeln!(w, " + Tests Skipped :     {:2}", self.skipped)?;
        writeln!(w, " + Tests Executed :    {:2}", self.executed)?;
        writeln!(w, " + Tests Unsupported:  {:2}", self.unsupported)?;
        writeln!(w, " + Tests Passed :      {:2}", self.succeeded)?;
        writeln!(w, " + Tests Failed :      {:2}", self.failed)?;
        write_separator(w)
    }
}
