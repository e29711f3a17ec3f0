use std::fmt;

use crate::bounds::FieldKind;

/// Broad class of an expansion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A token that should be an integer is not.
    MalformedToken,
    /// An integer or range outside the field's bounds, or an inverted range.
    OutOfRange,
    /// A step divisor that is zero, negative or non-numeric.
    InvalidInterval,
    /// Wrong arity around `/` or `-`, or an empty token.
    MalformedStructure,
    /// The bound pair itself is unusable (max < min, or negative).
    BoundsMisconfiguration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::MalformedToken => "malformed token",
            ErrorKind::OutOfRange => "out of range",
            ErrorKind::InvalidInterval => "invalid interval",
            ErrorKind::MalformedStructure => "malformed structure",
            ErrorKind::BoundsMisconfiguration => "bounds misconfiguration",
        };
        f.write_str(s)
    }
}

/// Failure to expand a single field. Messages quote the offending
/// comma-item verbatim.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    #[error("value cannot be empty in field '{field}'")]
    EmptyItem { field: String },

    #[error("invalid value: {item}")]
    NotANumber { item: String },

    #[error("invalid value: {item}, allowed range is {min}-{max}")]
    ValueOutOfRange { item: String, min: i32, max: i32 },

    #[error("invalid range field: {item}")]
    MalformedRange { item: String },

    #[error("invalid range values: {item}, allowed range is {min}-{max}")]
    RangeOutOfBounds { item: String, min: i32, max: i32 },

    #[error("invalid increment field: {item}")]
    MalformedIncrement { item: String },

    #[error("invalid interval value: {item}")]
    InvalidInterval { item: String },

    #[error("invalid base value: {item}")]
    InvalidBase { item: String },

    #[error("upper bound cannot be less than lower bound: {item}")]
    InvertedStep { item: String },

    #[error("upper bound cannot be less than lower bound (min {min}, max {max})")]
    InvertedBounds { min: i32, max: i32 },

    #[error("upper bound or lower bound cannot be less than 0 (min {min}, max {max})")]
    NegativeBound { min: i32, max: i32 },
}

impl ExpandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExpandError::NotANumber { .. } | ExpandError::InvalidBase { .. } => {
                ErrorKind::MalformedToken
            }
            ExpandError::ValueOutOfRange { .. }
            | ExpandError::RangeOutOfBounds { .. }
            | ExpandError::InvertedStep { .. } => ErrorKind::OutOfRange,
            ExpandError::InvalidInterval { .. } => ErrorKind::InvalidInterval,
            ExpandError::EmptyItem { .. }
            | ExpandError::MalformedRange { .. }
            | ExpandError::MalformedIncrement { .. } => ErrorKind::MalformedStructure,
            ExpandError::InvertedBounds { .. } | ExpandError::NegativeBound { .. } => {
                ErrorKind::BoundsMisconfiguration
            }
        }
    }
}

/// Failure to parse a full schedule line.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("incorrect input format: expected five fields followed by a command")]
    IncorrectFormat,

    #[error("invalid cron expression: expected 5 fields, got {0}")]
    FieldCount(usize),

    #[error("error in parsing {field} field '{raw}'")]
    Field {
        field: FieldKind,
        raw: String,
        #[source]
        source: ExpandError,
    },
}

impl ExpressionError {
    /// The field that failed to expand, if the failure was field-specific.
    pub fn field(&self) -> Option<FieldKind> {
        match self {
            ExpressionError::Field { field, .. } => Some(*field),
            _ => None,
        }
    }
}
