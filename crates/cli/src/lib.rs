//! # Duobank CLI
//!
//! The demonstration script behind the `duobank` binary: open a savings and
//! a current account, move money in, out and across, and print both after
//! every phase.

pub mod config;
pub mod script;

pub use config::{DriverConfig, TransferMode, DEFAULT_LOG_FILTER};
pub use script::{run, ScriptOutcome};
