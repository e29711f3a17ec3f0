//! Per-kind field expansion.

use crate::bounds::FieldKind;
use crate::error::ExpandError;
use crate::expand::expand;

impl FieldKind {
    /// Expand `field` using this kind's bounds.
    ///
    /// Day-of-week output is normalized so that Sunday appears once: `7` is
    /// dropped whenever `0` is also present.
    pub fn expand(self, field: &str) -> Result<Vec<String>, ExpandError> {
        let bounds = self.bounds();
        let values = expand(field, bounds.min, bounds.max)?;
        match self {
            FieldKind::DayOfWeek => Ok(collapse_sunday(values)),
            _ => Ok(values),
        }
    }
}

/// Expand a single field of the given kind.
pub fn expand_field(kind: FieldKind, field: &str) -> Result<Vec<String>, ExpandError> {
    kind.expand(field)
}

fn collapse_sunday(values: Vec<String>) -> Vec<String> {
    if !values.iter().any(|v| v == "0") {
        return values;
    }
    values.into_iter().filter(|v| v != "7").collect()
}
