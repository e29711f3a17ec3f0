//! Field kinds and their legal value ranges.

use std::fmt;
use std::str::FromStr;

/// Inclusive `(min, max)` range of legal values for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i32,
    pub max: i32,
}

impl Bounds {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies inside the inclusive range.
    pub const fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One of the five time-unit fields of a schedule expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldKind {
    /// All kinds, in expression order.
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Minute,
        FieldKind::Hour,
        FieldKind::DayOfMonth,
        FieldKind::Month,
        FieldKind::DayOfWeek,
    ];

    /// Legal values for this field.
    ///
    /// Day-of-week allows 7 as a second spelling of Sunday (0).
    pub const fn bounds(self) -> Bounds {
        match self {
            FieldKind::Minute => Bounds::new(0, 59),
            FieldKind::Hour => Bounds::new(0, 23),
            FieldKind::DayOfMonth => Bounds::new(1, 31),
            FieldKind::Month => Bounds::new(1, 12),
            FieldKind::DayOfWeek => Bounds::new(0, 7),
        }
    }

    /// Human-readable label, as printed next to the expanded values.
    pub const fn label(self) -> &'static str {
        match self {
            FieldKind::Minute => "minute",
            FieldKind::Hour => "hour",
            FieldKind::DayOfMonth => "day of month",
            FieldKind::Month => "month",
            FieldKind::DayOfWeek => "day of week",
        }
    }

    /// Kebab-case identifier accepted on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            FieldKind::Minute => "minute",
            FieldKind::Hour => "hour",
            FieldKind::DayOfMonth => "day-of-month",
            FieldKind::Month => "month",
            FieldKind::DayOfWeek => "day-of-week",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown field '{s}', expected one of: minute, hour, day-of-month, month, day-of-week"
                )
            })
    }
}
