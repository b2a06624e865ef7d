//! `suiterun run` and `suiterun list`.

use crate::helpers::harness::suiterun;

#[test]
fn test_e2e_run_harness_suite() {
    let outcome = suiterun().args(["run", "harness_autotest"]).run();

    assert!(outcome.success(), "{outcome:?}");
    assert!(outcome.stdout.contains(" + Test Suite : harness_autotest"));
    assert!(outcome.stdout.contains(" + TestCase [ 0] : summary_invariants succeeded"));
    assert!(outcome.stdout.contains(" + Tests Failed :       0"));
}

#[test]
fn test_e2e_run_dispatch_suite_reexecutes_binary() {
    let outcome = suiterun().args(["run", "dispatch_autotest"]).run();

    assert!(outcome.success(), "{outcome:?}");
    assert!(outcome.stdout.contains("test_no_huge_flag succeeded"));
    assert!(outcome.stdout.contains("unknown_key_rejected succeeded"));
    // The rejected child's diagnostic shares our stdout.
    assert!(outcome
        .stdout
        .contains("ERROR - missing action to take for test_unregistered_flag"));
    assert!(outcome.stdout.contains(" + Tests Passed :      13"));
}

#[test]
fn test_e2e_run_multiprocess_suite() {
    let outcome = suiterun().args(["run", "multiprocess_autotest"]).run();

    assert!(outcome.success(), "{outcome:?}");
    assert!(outcome.stdout.contains("secondary_instance succeeded"));
    assert!(outcome.stdout.contains(" + Tests Executed :     3"));
}

#[test]
fn test_e2e_run_several_suites_in_order() {
    let outcome = suiterun()
        .args(["run", "harness_autotest", "multiprocess_autotest"])
        .run();

    assert!(outcome.success(), "{outcome:?}");
    let first = outcome
        .stdout
        .find("Test Suite : harness_autotest")
        .expect("first suite ran");
    let second = outcome
        .stdout
        .find("Test Suite : multiprocess_autotest")
        .expect("second suite ran");
    assert!(first < second);
}

#[test]
fn test_e2e_run_unknown_suite_fails() {
    let outcome = suiterun().args(["run", "no_such_suite"]).run();

    assert_eq!(outcome.code, Some(1));
    assert!(outcome.stderr.contains("command not found: no_such_suite"));
}

#[test]
fn test_e2e_list_shows_suites() {
    let outcome = suiterun().args(["list"]).run();

    assert!(outcome.success(), "{outcome:?}");
    for name in ["harness_autotest", "dispatch_autotest", "multiprocess_autotest"] {
        assert!(outcome.stdout.contains(name), "missing {name}");
    }
    assert!(outcome.stdout.contains("  [ 0] test_missing_c_flag"));
}
