//! Text output for non-suite commands
//!
//! Listing and config reports implement [`Render`] and are written to stdout
//! through [`OutputWriter`]; suite reports are written by the shell directly.

use std::io::Write;

use suiterun_core::report::Render;

use crate::error::CliError;

/// Writes rendered payloads to a sink, stdout by default.
pub struct OutputWriter<W: Write> {
    out: W,
}

impl OutputWriter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> OutputWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Render a payload and flush.
    pub fn render<T: Render>(&mut self, payload: &T) -> Result<(), CliError> {
        payload.render_text(&mut self.out)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
