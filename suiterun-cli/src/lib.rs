//! suiterun CLI library.
//!
//! Exposes the binary's modules for integration testing.
//! In production, `suiterun` is used as a binary (main.rs).

pub mod actions;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
pub mod platform;
pub mod shell;
pub mod suites;
