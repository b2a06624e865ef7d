//! Recursive entry path: the dispatch env var bypasses every suite.

use crate::helpers::harness::suiterun;

#[test]
fn test_e2e_noop_key_exits_zero_silently() {
    let outcome = suiterun().env("SUITERUN_RECURSIVE", "test_misc_flags").run();

    assert!(outcome.success(), "{outcome:?}");
    assert!(outcome.stdout.is_empty(), "no report: {}", outcome.stdout);
}

#[test]
fn test_e2e_unknown_key_reports_and_fails() {
    let outcome = suiterun().env("SUITERUN_RECURSIVE", "test_bogus").run();

    assert!(!outcome.success());
    assert_eq!(
        outcome.stdout,
        "ERROR - missing action to take for test_bogus\n"
    );
}

#[test]
fn test_e2e_recursive_key_wins_over_subcommand() {
    // The dispatch check happens before any command is looked at.
    let outcome = suiterun()
        .env("SUITERUN_RECURSIVE", "test_file_prefix")
        .args(["run", "harness_autotest"])
        .run();

    assert!(outcome.success(), "{outcome:?}");
    assert!(!outcome.stdout.contains("Test Suite"));
}

#[test]
fn test_e2e_empty_key_is_not_recursive() {
    let outcome = suiterun()
        .env("SUITERUN_RECURSIVE", "")
        .args(["run", "harness_autotest"])
        .run();

    assert!(outcome.success(), "{outcome:?}");
    assert!(outcome.stdout.contains(" + Test Suite : harness_autotest"));
}

#[test]
fn test_e2e_secondary_needs_primary_pid() {
    let outcome = suiterun()
        .env("SUITERUN_RECURSIVE", "run_secondary_instances")
        .env("SUITERUN_PROC_TYPE", "secondary")
        .run();
    assert!(!outcome.success(), "{outcome:?}");

    let outcome = suiterun()
        .env("SUITERUN_RECURSIVE", "run_secondary_instances")
        .env("SUITERUN_PROC_TYPE", "secondary")
        .env("SUITERUN_PRIMARY_PID", &u32::MAX.to_string())
        .run();
    assert!(outcome.success(), "{outcome:?}");
}

#[test]
fn test_e2e_configured_env_var_name_is_used() {
    let invocation = suiterun();
    let config = invocation.write_config(
        "custom.toml",
        "[harness]\nrecursive_env_var = \"MY_RECURSIVE\"\n",
    );
    let config = config.to_str().expect("utf-8 path").to_owned();

    let outcome = invocation
        .env("MY_RECURSIVE", "test_bogus")
        .args(["-c", &config, "list"])
        .run();

    assert!(!outcome.success());
    assert!(outcome.stdout.starts_with("ERROR - missing action to take for test_bogus"));
}
