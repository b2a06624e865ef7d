//! Suite runner -- case registration, execution state machine, aggregation
//!
//! A [`TestSuite`] owns an ordered list of [`TestCase`]s plus optional
//! suite-level hooks. [`SuiteRunner::run`] drives one suite through its
//! lifecycle and returns the [`SuiteSummary`].
//!
//! # Lifecycle
//! ```text
//! banner → suite setup ─ok─→ [case setup → body → case teardown]* → suite teardown → summary
//!                      └err─────────────────────────────────────────────────────────→ summary
//! ```
//!
//! When suite setup fails neither the cases nor the suite teardown run, and
//! since nothing was counted as failed the exit status is still 0.

use std::fmt;
use std::io::Write;

use tracing::{debug, info, warn};

use crate::error::{CaseResult, HarnessError};
use crate::report::{self, Render};

/// Setup hook or body of a case, or suite setup.
pub type CheckFn = Box<dyn Fn() -> CaseResult>;

/// Teardown hook; its outcome is never classified.
pub type TeardownFn = Box<dyn Fn()>;

// ─── CaseStatus ──────────────────────────────────────────────────────

/// Classified outcome of an executed case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStatus {
    Succeeded,
    Unsupported,
    Failed,
}

impl CaseStatus {
    /// Classify a setup or body result.
    pub fn classify(result: &CaseResult) -> Self {
        match result {
            Ok(()) => Self::Succeeded,
            Err(e) if e.is_unsupported() => Self::Unsupported,
            Err(_) => Self::Failed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Succeeded => "succeeded",
            Self::Unsupported => "unsupported",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── TestCase ────────────────────────────────────────────────────────

/// A single named check with optional setup/teardown.
pub struct TestCase {
    name: String,
    enabled: bool,
    setup: Option<CheckFn>,
    body: CheckFn,
    teardown: Option<TeardownFn>,
}

impl TestCase {
    /// Create an enabled case with the given body.
    pub fn new(name: impl Into<String>, body: impl Fn() -> CaseResult + 'static) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            setup: None,
            body: Box::new(body),
            teardown: None,
        }
    }

    /// Attach a setup hook. A failing setup replaces the body's result.
    pub fn setup(mut self, setup: impl Fn() -> CaseResult + 'static) -> Self {
        self.setup = Some(Box::new(setup));
        self
    }

    /// Attach a teardown hook. It runs after every execution of the case.
    pub fn teardown(mut self, teardown: impl Fn() + 'static) -> Self {
        self.teardown = Some(Box::new(teardown));
        self
    }

    /// Mark the case as disabled (counted as skipped, never executed).
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn enabled_if(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Run setup, then the body if setup succeeded, then teardown.
    fn execute(&self) -> CaseResult {
        let result = match &self.setup {
            Some(setup) => setup(),
            None => Ok(()),
        };
        let result = match result {
            Ok(()) => (self.body)(),
            Err(e) => {
                debug!(case = %self.name, error = %e, "case setup did not succeed, body skipped");
                Err(e)
            }
        };
        if let Some(teardown) = &self.teardown {
            teardown();
        }
        result
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("enabled", &self.enabled)
            .field("has_setup", &self.setup.is_some())
            .field("has_teardown", &self.teardown.is_some())
            .finish()
    }
}

// ─── TestSuite ───────────────────────────────────────────────────────

/// An ordered group of cases sharing optional suite-level hooks.
///
/// Case order is execution order.
#[derive(Default)]
pub struct TestSuite {
    name: Option<String>,
    setup: Option<CheckFn>,
    teardown: Option<TeardownFn>,
    cases: Vec<TestCase>,
}

impl TestSuite {
    /// Create a named suite. The name is printed as the suite banner.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Create a suite without a banner.
    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn setup(mut self, setup: impl Fn() -> CaseResult + 'static) -> Self {
        self.setup = Some(Box::new(setup));
        self
    }

    pub fn teardown(mut self, teardown: impl Fn() + 'static) -> Self {
        self.teardown = Some(Box::new(teardown));
        self
    }

    /// Append a case.
    pub fn case(mut self, case: TestCase) -> Self {
        self.cases.push(case);
        self
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Debug for TestSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestSuite")
            .field("name", &self.name)
            .field("has_setup", &self.setup.is_some())
            .field("has_teardown", &self.teardown.is_some())
            .field("cases", &self.cases)
            .finish()
    }
}

// ─── SuiteSummary ────────────────────────────────────────────────────

/// Counters for one suite run.
///
/// `total == skipped + executed` and
/// `executed == succeeded + failed + unsupported` always hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuiteSummary {
    pub total: u32,
    pub skipped: u32,
    pub executed: u32,
    pub succeeded: u32,
    pub failed: u32,
    pub unsupported: u32,
}

impl SuiteSummary {
    fn record_skipped(&mut self) {
        self.skipped += 1;
        self.total += 1;
    }

    fn record(&mut self, status: CaseStatus) {
        self.executed += 1;
        self.total += 1;
        match status {
            CaseStatus::Succeeded => self.succeeded += 1,
            CaseStatus::Unsupported => self.unsupported += 1,
            CaseStatus::Failed => self.failed += 1,
        }
    }

    /// Process exit status for this suite: -1 if any case failed, else 0.
    pub fn exit_status(&self) -> i32 {
        if self.failed > 0 { -1 } else { 0 }
    }

    /// Value the process reports after a one-shot command: the failed count.
    pub fn last_result(&self) -> i32 {
        i32::try_from(self.failed).unwrap_or(i32::MAX)
    }

    /// Whether both counter invariants hold.
    pub fn is_consistent(&self) -> bool {
        self.total == self.skipped + self.executed
            && self.executed == self.succeeded + self.failed + self.unsupported
    }
}

// ─── SuiteRunner ─────────────────────────────────────────────────────

/// Runs suites sequentially, writing the console report to `out`.
pub struct SuiteRunner<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> SuiteRunner<W> {
    pub fn new(out: W) -> Self {
        Self { out, color: false }
    }

    /// Colorize the status word of per-case lines.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Run one suite to completion.
    ///
    /// Case errors are classified and counted, never propagated; only a
    /// failure to write the report is returned as an error.
    pub fn run(&mut self, suite: &TestSuite) -> Result<SuiteSummary, HarnessError> {
        let mut summary = SuiteSummary::default();
        let suite_name = suite.name().unwrap_or("<unnamed>");

        if let Some(name) = suite.name() {
            report::write_banner(&mut self.out, name)?;
        }
        info!(suite = suite_name, cases = suite.cases.len(), "suite starting");

        let setup_ok = match &suite.setup {
            Some(setup) => match setup() {
                Ok(()) => true,
                Err(e) => {
                    warn!(suite = suite_name, error = %e, "suite setup failed, skipping cases");
                    false
                }
            },
            None => true,
        };

        if setup_ok {
            report::write_separator(&mut self.out)?;
            self.run_cases(suite, &mut summary)?;

            if let Some(teardown) = &suite.teardown {
                teardown();
            }
        }

        summary.render_text(&mut self.out)?;
        self.out.flush()?;

        info!(
            suite = suite_name,
            total = summary.total,
            skipped = summary.skipped,
            succeeded = summary.succeeded,
            unsupported = summary.unsupported,
            failed = summary.failed,
            "suite finished"
        );
        Ok(summary)
    }

    fn run_cases(
        &mut self,
        suite: &TestSuite,
        summary: &mut SuiteSummary,
    ) -> Result<(), HarnessError> {
        for (index, case) in suite.cases.iter().enumerate() {
            if !case.enabled {
                debug!(case = %case.name, index, "case disabled, skipped");
                summary.record_skipped();
                continue;
            }

            let result = case.execute();
            let status = CaseStatus::classify(&result);
            summary.record(status);

            match &result {
                Err(e) if status == CaseStatus::Failed => {
                    debug!(case = %case.name, index, error = %e, "case failed");
                }
                _ => debug!(case = %case.name, index, %status, "case finished"),
            }

            report::write_case_line(&mut self.out, index, &case.name, status, self.color)?;
        }
        Ok(())
    }
}
