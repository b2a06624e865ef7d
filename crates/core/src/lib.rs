//! suiterun core: sequential suite runner, recursive dispatch table,
//! configuration and error types shared by the `suiterun-cli` binary.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod report;
pub mod suite;

// Re-export the types most callers need from the crate root.

// Errors
pub use error::{
    CaseError, CaseResult, ConfigError, DispatchError, HarnessError, case_result_from_code,
};

// Config
pub use config::HarnessConfig;

// Suite runner
pub use suite::{CaseStatus, SuiteRunner, SuiteSummary, TestCase, TestSuite};

// Recursive dispatch
pub use dispatch::{DispatchEntry, DispatchTable, RecursiveCommand};

// Report
pub use report::Render;
