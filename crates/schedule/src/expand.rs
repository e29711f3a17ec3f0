//! Field expansion: wildcard, list, range and step syntax to explicit values.
//!
//! A field is split on `,` into comma-items which are expanded left to right
//! and concatenated without sorting or de-duplication. Each comma-item is
//! one of:
//!
//! - `base/step` — arithmetic progression; `base` is `*`, `lo-hi` or `lo`
//! - `start-end` — inclusive range
//! - `value` — a single number
//!
//! The first failing comma-item aborts the whole field.

use std::num::IntErrorKind;

use crate::bounds::Bounds;
use crate::error::ExpandError;

/// Expand `field` against the inclusive bounds `min..=max`.
///
/// Values are returned as canonical decimal strings (`"05"` becomes `"5"`).
pub fn expand(field: &str, min: i32, max: i32) -> Result<Vec<String>, ExpandError> {
    verify_bounds(min, max)?;
    let bounds = Bounds::new(min, max);

    if field == "*" {
        return Ok(all_values(bounds));
    }

    let mut result = Vec::new();
    for item in field.split(',') {
        if item.is_empty() {
            return Err(ExpandError::EmptyItem {
                field: field.to_string(),
            });
        }

        if item.contains('/') {
            result.extend(expand_steps(item, bounds)?);
        } else if item.contains('-') {
            result.extend(expand_range(item, bounds)?);
        } else {
            result.push(expand_single(item, bounds)?);
        }
    }

    tracing::trace!(field, min, max, values = result.len(), "expanded field");
    Ok(result)
}

/// Reject a bound pair that could never describe a field.
fn verify_bounds(min: i32, max: i32) -> Result<(), ExpandError> {
    if min < 0 || max < 0 {
        return Err(ExpandError::NegativeBound { min, max });
    }
    if max < min {
        return Err(ExpandError::InvertedBounds { min, max });
    }
    Ok(())
}

fn all_values(bounds: Bounds) -> Vec<String> {
    (bounds.min..=bounds.max).map(|v| v.to_string()).collect()
}

/// Why a token did not parse as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BadNumber {
    /// Digits, but too many of them for any field.
    TooLarge,
    /// Not an integer at all.
    Invalid,
}

fn parse_number(token: &str) -> Result<i32, BadNumber> {
    token.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => BadNumber::TooLarge,
        _ => BadNumber::Invalid,
    })
}

/// Parse both ends of `lo-hi`. Overflowing ends are out of range, anything
/// else that is not an integer is a malformed range.
fn parse_span(item: &str, span: &str, bounds: Bounds) -> Result<(i32, i32), ExpandError> {
    let ends: Vec<&str> = span.split('-').collect();
    let [lo, hi] = ends.as_slice() else {
        return Err(ExpandError::MalformedRange {
            item: item.to_string(),
        });
    };
    match (parse_number(lo), parse_number(hi)) {
        (Ok(lo), Ok(hi)) => Ok((lo, hi)),
        (Err(BadNumber::Invalid), _) | (_, Err(BadNumber::Invalid)) => {
            Err(ExpandError::MalformedRange {
                item: item.to_string(),
            })
        }
        _ => Err(out_of_bounds(item, bounds)),
    }
}

fn out_of_bounds(item: &str, bounds: Bounds) -> ExpandError {
    ExpandError::RangeOutOfBounds {
        item: item.to_string(),
        min: bounds.min,
        max: bounds.max,
    }
}

/// `*/s`, `lo-hi/s` or `lo/s`.
fn expand_steps(item: &str, bounds: Bounds) -> Result<Vec<String>, ExpandError> {
    let parts: Vec<&str> = item.split('/').collect();
    let [base, step] = parts.as_slice() else {
        return Err(ExpandError::MalformedIncrement {
            item: item.to_string(),
        });
    };

    let step = match parse_number(step) {
        Ok(step) if step > 0 => step,
        _ => {
            return Err(ExpandError::InvalidInterval {
                item: item.to_string(),
            })
        }
    };

    let (lower, upper) = if *base == "*" {
        (bounds.min, bounds.max)
    } else if base.contains('-') {
        parse_span(item, base, bounds)?
    } else {
        match parse_number(base) {
            Ok(lo) => (lo, bounds.max),
            Err(BadNumber::TooLarge) => return Err(out_of_bounds(item, bounds)),
            Err(BadNumber::Invalid) => {
                return Err(ExpandError::InvalidBase {
                    item: item.to_string(),
                })
            }
        }
    };

    generate_steps(item, step, lower, upper, bounds)
}

/// `lower, lower+step, …` up to and including `upper`, keeping only values
/// inside `bounds`.
///
/// The walk starts at the first progression value `>= bounds.min` and stops
/// at `bounds.max`, so its cost is bounded by the field width.
fn generate_steps(
    item: &str,
    step: i32,
    lower: i32,
    upper: i32,
    bounds: Bounds,
) -> Result<Vec<String>, ExpandError> {
    if lower < 0 || upper < 0 {
        return Err(ExpandError::NegativeBound {
            min: lower,
            max: upper,
        });
    }
    if upper < lower {
        return Err(ExpandError::InvertedStep {
            item: item.to_string(),
        });
    }

    let start = if lower < bounds.min {
        let gap = i64::from(bounds.min) - i64::from(lower);
        let skipped = (gap + i64::from(step) - 1) / i64::from(step);
        i64::from(lower) + skipped * i64::from(step)
    } else {
        i64::from(lower)
    };
    let end = i64::from(upper.min(bounds.max));

    let values: Vec<String> = (start..=end)
        .step_by(step as usize)
        .map(|v| v.to_string())
        .collect();

    if values.is_empty() {
        return Err(out_of_bounds(item, bounds));
    }
    Ok(values)
}

/// `start-end`, inclusive.
fn expand_range(item: &str, bounds: Bounds) -> Result<Vec<String>, ExpandError> {
    let (start, end) = parse_span(item, item, bounds)?;

    if start > end || !bounds.contains(start) || !bounds.contains(end) {
        return Err(out_of_bounds(item, bounds));
    }

    Ok((start..=end).map(|v| v.to_string()).collect())
}

fn expand_single(item: &str, bounds: Bounds) -> Result<String, ExpandError> {
    let out_of_range = || ExpandError::ValueOutOfRange {
        item: item.to_string(),
        min: bounds.min,
        max: bounds.max,
    };
    let value = match parse_number(item) {
        Ok(value) => value,
        Err(BadNumber::TooLarge) => return Err(out_of_range()),
        Err(BadNumber::Invalid) => {
            return Err(ExpandError::NotANumber {
                item: item.to_string(),
            })
        }
    };
    if !bounds.contains(value) {
        return Err(out_of_range());
    }
    Ok(value.to_string())
}
