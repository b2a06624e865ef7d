//! `multiprocess_autotest` -- primary/secondary process checks

use suiterun_core::error::CaseError;
use suiterun_core::suite::{TestCase, TestSuite};

use super::{Launcher, expect_status};
use crate::actions::SECONDARY_KEY;
use crate::platform::{PRIMARY_PID_ENV, PROC_TYPE_ENV, Platform, ProcessRole};

pub const NAME: &str = "multiprocess_autotest";

pub fn build(platform: &Platform) -> TestSuite {
    let launcher = Launcher::from_platform(platform);
    let pid = platform.pid.to_string();
    let role = platform.role;

    let secondary = {
        let launcher = launcher.clone();
        let pid = pid.clone();
        move || {
            let cmd = launcher
                .command(SECONDARY_KEY)?
                .env(PROC_TYPE_ENV, "secondary")
                .env(PRIMARY_PID_ENV, &pid);
            expect_status(&cmd, true)
        }
    };

    let without_pid = {
        let launcher = launcher.clone();
        move || {
            let cmd = launcher
                .command(SECONDARY_KEY)?
                .env(PROC_TYPE_ENV, "secondary")
                .env(PRIMARY_PID_ENV, "");
            expect_status(&cmd, false)
        }
    };

    let as_primary = {
        let launcher = launcher.clone();
        move || {
            let cmd = launcher
                .command(SECONDARY_KEY)?
                .env(PROC_TYPE_ENV, "primary")
                .env(PRIMARY_PID_ENV, &pid);
            expect_status(&cmd, false)
        }
    };

    let setup = move || {
        // Secondaries must not launch further secondaries.
        if role != ProcessRole::Primary {
            return Err(CaseError::Unsupported);
        }
        launcher.ensure_available()
    };

    TestSuite::new(NAME)
        .setup(setup)
        .case(TestCase::new("secondary_instance", secondary))
        .case(TestCase::new("secondary_without_primary_pid", without_pid))
        .case(TestCase::new("secondary_started_as_primary", as_primary))
}
