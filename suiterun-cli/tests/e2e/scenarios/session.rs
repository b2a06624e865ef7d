//! Default session: one-shot from SUITERUN_TEST, otherwise interactive.

use crate::helpers::harness::suiterun;

#[test]
fn test_e2e_one_shot_exits_with_failed_count() {
    let outcome = suiterun().env("SUITERUN_TEST", "harness_autotest").run();

    assert_eq!(outcome.code, Some(0), "{outcome:?}");
    assert!(outcome.stdout.contains(" + Test Suite Summary "));
    assert!(!outcome.stdout.contains("suiterun>> "), "one-shot shows no prompt");
}

#[test]
fn test_e2e_one_shot_unknown_command() {
    let outcome = suiterun().env("SUITERUN_TEST", "bogus_autotest").run();

    assert_eq!(outcome.code, Some(1));
    assert!(outcome.stderr.contains("command not found: bogus_autotest"));
}

#[test]
fn test_e2e_interactive_reads_until_quit() {
    let outcome = suiterun().run_with_input("help\nharness_autotest\nnope\nquit\n");

    assert_eq!(outcome.code, Some(0), "{outcome:?}");
    assert!(outcome.stdout.contains("suiterun>> "));
    assert!(outcome.stdout.contains("Commands:"));
    assert!(outcome.stdout.contains(" + Test Suite : harness_autotest"));
    assert!(outcome.stdout.contains("command not found: nope"));
}

#[test]
fn test_e2e_interactive_ends_at_eof() {
    let outcome = suiterun().run();

    assert_eq!(outcome.code, Some(0), "{outcome:?}");
    assert!(outcome.stdout.starts_with("suiterun>> "));
}

#[test]
fn test_e2e_prompt_from_config() {
    let invocation = suiterun();
    invocation.write_config("suiterun.toml", "[harness]\nprompt = \"RTE>>\"\n");
    assert!(invocation.dir().join("suiterun.toml").exists());

    let outcome = invocation.run_with_input("quit\n");

    assert_eq!(outcome.code, Some(0), "{outcome:?}");
    assert!(outcome.stdout.starts_with("RTE>>"));
}
