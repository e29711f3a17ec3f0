//! Shared types for the CronParse crates: error type, configuration, and
//! structured trace events.

pub mod config;
pub mod error;
pub mod trace;

pub use error::{Error, Result};
