//! Command-line front end for schedule expansion.

pub mod cli;
pub mod output;
