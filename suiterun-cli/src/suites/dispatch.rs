//! `dispatch_autotest` -- every recursive flag check, each in a fresh process

use suiterun_core::suite::{TestCase, TestSuite};

use super::{Launcher, expect_status};
use crate::actions;
use crate::platform::Platform;

pub const NAME: &str = "dispatch_autotest";

/// Key that no table entry matches.
pub const UNKNOWN_KEY: &str = "test_unregistered_flag";

pub fn build(platform: &Platform) -> TestSuite {
    let launcher = Launcher::from_platform(platform);
    let mut suite = TestSuite::new(NAME);

    for key in actions::flag_keys() {
        let setup = launcher.clone();
        let body = launcher.clone();
        suite = suite.case(
            TestCase::new(key, move || expect_status(&body.command(key)?, true))
                .setup(move || setup.ensure_available()),
        );
    }

    let setup = launcher.clone();
    suite.case(
        TestCase::new("unknown_key_rejected", move || {
            expect_status(&launcher.command(UNKNOWN_KEY)?, false)
        })
        .setup(move || setup.ensure_available()),
    )
}
