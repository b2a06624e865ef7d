//! Invalid configuration is fatal before any suite runs.

use crate::helpers::harness::suiterun;

#[test]
fn test_e2e_invalid_log_level_is_fatal() {
    let invocation = suiterun();
    let config = invocation.write_config("bad.toml", "[general]\nlog_level = \"verbose\"\n");
    let config = config.to_str().expect("utf-8 path").to_owned();

    let outcome = invocation
        .args(["-c", &config, "run", "harness_autotest"])
        .run();

    assert_eq!(outcome.code, Some(2));
    assert!(outcome.stderr.contains("general.log_level"));
    assert!(outcome.stdout.is_empty(), "no suite report on fatal init");
}

#[test]
fn test_e2e_missing_explicit_config_is_fatal() {
    let outcome = suiterun()
        .args(["-c", "/nonexistent/suiterun.toml", "list"])
        .run();

    assert_eq!(outcome.code, Some(2));
    assert!(outcome.stderr.contains("config file not found"));
}

#[test]
fn test_e2e_invalid_process_role_is_fatal() {
    let outcome = suiterun()
        .env("SUITERUN_PROC_TYPE", "tertiary")
        .args(["run", "harness_autotest"])
        .run();

    assert_eq!(outcome.code, Some(3));
}

#[test]
fn test_e2e_config_validate_reports_invalid_file() {
    let invocation = suiterun();
    let config = invocation.write_config("bad.toml", "[general]\nlog_format = \"xml\"\n");
    let config = config.to_str().expect("utf-8 path").to_owned();

    let outcome = invocation.args(["-c", &config, "config", "validate"]).run();

    assert_eq!(outcome.code, Some(2));
    assert!(outcome.stdout.contains(": invalid"));
    assert!(outcome.stdout.contains("general.log_format"));
}

#[test]
fn test_e2e_config_show_skips_platform_init() {
    let outcome = suiterun()
        .env("SUITERUN_PROC_TYPE", "tertiary")
        .env("SUITERUN_RECURSIVE", "test_misc_flags")
        .args(["config", "show"])
        .run();

    assert_eq!(outcome.code, Some(0), "{outcome:?}");
    assert!(outcome.stdout.contains("log_level = \"warn\""));
}
