//! `harness_autotest` -- the runner checking itself on synthetic suites

use std::cell::Cell;
use std::rc::Rc;

use suiterun_core::error::{CaseError, CaseResult};
use suiterun_core::suite::{SuiteRunner, SuiteSummary, TestCase, TestSuite};

use crate::actions;
use crate::platform::{Platform, ProcessRole};

pub const NAME: &str = "harness_autotest";

pub fn build(platform: &Platform) -> TestSuite {
    let role = platform.role;

    TestSuite::new(NAME)
        .case(TestCase::new("summary_invariants", summary_invariants))
        .case(TestCase::new("teardown_after_failure", teardown_after_failure))
        .case(TestCase::new("suite_setup_failure", suite_setup_failure))
        .case(TestCase::new("dispatch_miss", dispatch_miss))
        .case(TestCase::new("primary_process", move || {
            if role == ProcessRole::Primary {
                Ok(())
            } else {
                Err(CaseError::Unsupported)
            }
        }))
}

fn run_quiet(suite: &TestSuite) -> Result<SuiteSummary, CaseError> {
    SuiteRunner::new(std::io::sink())
        .run(suite)
        .map_err(|e| CaseError::failed(e.to_string()))
}

fn check(condition: bool, what: &str) -> CaseResult {
    if condition {
        Ok(())
    } else {
        Err(CaseError::failed(what))
    }
}

fn summary_invariants() -> CaseResult {
    let suite = TestSuite::unnamed()
        .case(TestCase::new("ok", || Ok(())))
        .case(TestCase::new("off", || Ok(())).disabled())
        .case(TestCase::new("na", || Err(CaseError::Unsupported)));
    let summary = run_quiet(&suite)?;

    check(summary.is_consistent(), "counter invariants violated")?;
    check(
        summary
            == SuiteSummary {
                total: 3,
                skipped: 1,
                executed: 2,
                succeeded: 1,
                failed: 0,
                unsupported: 1,
            },
        "unexpected counters for mixed suite",
    )?;
    check(summary.exit_status() == 0, "mixed suite should succeed")
}

fn teardown_after_failure() -> CaseResult {
    let teardowns = Rc::new(Cell::new(0u32));
    let t = Rc::clone(&teardowns);
    let suite = TestSuite::unnamed().case(
        TestCase::new("x", || Ok(()))
            .setup(|| Err(CaseError::failed("setup")))
            .teardown(move || t.set(t.get() + 1)),
    );
    let summary = run_quiet(&suite)?;

    check(teardowns.get() == 1, "case teardown should run exactly once")?;
    check(summary.failed == 1, "failed setup should count as failure")?;
    check(summary.exit_status() != 0, "failure should yield nonzero status")
}

fn suite_setup_failure() -> CaseResult {
    let torn_down = Rc::new(Cell::new(false));
    let td = Rc::clone(&torn_down);
    let suite = TestSuite::unnamed()
        .setup(|| Err(CaseError::failed("suite setup")))
        .teardown(move || td.set(true))
        .case(TestCase::new("never", || Err(CaseError::failed("ran"))));
    let summary = run_quiet(&suite)?;

    check(summary.executed == 0, "no case may execute")?;
    check(!torn_down.get(), "suite teardown must be skipped")?;
    check(summary.exit_status() == 0, "aborted suite reports success")
}

fn dispatch_miss() -> CaseResult {
    let mut out = Vec::new();
    let status = actions::TABLE.dispatch(Some("no_such_action"), &mut out);
    check(status != 0, "unknown key should fail")?;
    check(
        out.starts_with(b"ERROR - missing action to take for no_such_action"),
        "unknown key should be reported",
    )?;
    check(
        actions::TABLE.dispatch(None, &mut std::io::sink()) != 0,
        "absent key should fail",
    )
}
