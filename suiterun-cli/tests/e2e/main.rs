//! E2E tests for the suiterun binary.
//!
//! These tests launch the built executable and check exit codes and the
//! console report, including recursive re-execution of the harness.
//!
//! # Test Structure
//!
//! - `helpers/` -- Launching the binary with a clean environment
//! - `scenarios/` -- Test files organized by entry path
//!
//! # Running
//!
//! ```bash
//! cargo test -p suiterun-cli --test e2e
//! ```

mod helpers;
mod scenarios;
