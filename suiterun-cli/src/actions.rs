//! Recursive actions -- what a re-executed suiterun does instead of running suites.
//!
//! The flag checks only need the child to start up and exit, so they are bound
//! to [`no_action`]. `run_secondary_instances` verifies the child came up as a
//! fresh secondary of the process that launched it.

use tracing::{error, info};

use suiterun_core::dispatch::{DispatchEntry, DispatchTable, no_action};
use suiterun_core::error::{CaseError, CaseResult, TEST_FAILED, TEST_SUCCESS};

use crate::platform::{self, ProcessRole};

/// Key of the secondary-instance action.
pub const SECONDARY_KEY: &str = "run_secondary_instances";

static ENTRIES: &[DispatchEntry] = &[
    DispatchEntry::new(SECONDARY_KEY, run_secondary_instances),
    DispatchEntry::new("test_missing_c_flag", no_action),
    DispatchEntry::new("test_master_lcore_flag", no_action),
    DispatchEntry::new("test_invalid_n_flag", no_action),
    DispatchEntry::new("test_no_hpet_flag", no_action),
    DispatchEntry::new("test_whitelist_flag", no_action),
    DispatchEntry::new("test_invalid_b_flag", no_action),
    DispatchEntry::new("test_invalid_vdev_flag", no_action),
    DispatchEntry::new("test_invalid_r_flag", no_action),
    DispatchEntry::new("test_misc_flags", no_action),
    DispatchEntry::new("test_memory_flags", no_action),
    DispatchEntry::new("test_file_prefix", no_action),
    DispatchEntry::new("test_no_huge_flag", no_action),
];

/// The process-wide recursive dispatch table.
pub const TABLE: DispatchTable = DispatchTable::new(ENTRIES);

/// Keys bound to startup-only checks.
pub fn flag_keys() -> impl Iterator<Item = &'static str> {
    TABLE
        .entries()
        .iter()
        .map(|entry| entry.key)
        .filter(|key| *key != SECONDARY_KEY)
}

fn run_secondary_instances() -> i32 {
    match check_secondary(platform::get()) {
        Ok(()) => {
            info!("secondary instance check passed");
            TEST_SUCCESS
        }
        Err(e) => {
            error!(error = %e, "secondary instance check failed");
            TEST_FAILED
        }
    }
}

pub(crate) fn check_secondary(platform: Option<&platform::Platform>) -> CaseResult {
    let platform = platform.ok_or_else(|| CaseError::failed("platform is not initialized"))?;

    if platform.role != ProcessRole::Secondary {
        return Err(CaseError::failed(format!(
            "expected secondary role, running as {}",
            platform.role.as_str()
        )));
    }

    match platform.primary_pid {
        None => Err(CaseError::failed("secondary launched without a primary pid")),
        Some(pid) if pid == platform.pid => Err(CaseError::failed(
            "secondary shares its pid with the primary",
        )),
        Some(_) => Ok(()),
    }
}
