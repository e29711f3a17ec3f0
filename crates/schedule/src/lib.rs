//! Cron-style schedule expansion.
//!
//! Turns the five time fields of a schedule line (`*/15 0 1,15 * 1-5`) into
//! explicit value lists:
//!
//! - [`bounds`] — field kinds and their legal ranges
//! - [`expand`] — the list/range/step/wildcard expansion engine
//! - [`field`] — per-kind expansion, including day-of-week normalization
//! - [`expression`] — full schedule lines with a trailing command

pub mod bounds;
pub mod error;
pub mod expand;
pub mod expression;
pub mod field;

pub use bounds::{Bounds, FieldKind};
pub use error::{ErrorKind, ExpandError, ExpressionError};
pub use expand::expand;
pub use expression::{split_fields, CronExpression};
pub use field::expand_field;
