//! Full schedule lines: five fields followed by a command.

use cp_domain::trace::TraceEvent;
use serde::Serialize;

use crate::bounds::FieldKind;
use crate::error::ExpressionError;

/// A schedule line with every field expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CronExpression {
    pub minute: Vec<String>,
    pub hour: Vec<String>,
    pub day_of_month: Vec<String>,
    pub month: Vec<String>,
    pub day_of_week: Vec<String>,
    pub command: String,
}

impl CronExpression {
    /// Parse `minute hour day-of-month month day-of-week command…`.
    ///
    /// The line is split on single spaces into at most six parts so the
    /// command keeps its own spaces. Fields are expanded in order and the
    /// first failure aborts the parse.
    pub fn parse(input: &str) -> Result<Self, ExpressionError> {
        let result = Self::parse_inner(input);
        match &result {
            Ok(expr) => TraceEvent::ExpressionParsed {
                expression: input.to_string(),
                command_chars: expr.command.chars().count(),
                total_values: expr.fields().iter().map(|(_, v)| v.len()).sum(),
            }
            .emit(),
            Err(e) => TraceEvent::ExpressionRejected {
                expression: input.to_string(),
                field: e.field().map(|f| f.label().to_string()),
                reason: error_chain(e),
            }
            .emit(),
        }
        result
    }

    fn parse_inner(input: &str) -> Result<Self, ExpressionError> {
        let parts: Vec<&str> = input.splitn(6, ' ').collect();
        if parts.len() != 6 {
            return Err(ExpressionError::IncorrectFormat);
        }

        let schedule = parts[..5].join(" ");
        let [minute, hour, day_of_month, month, day_of_week] = split_fields(&schedule)?;

        Ok(Self {
            minute: expand_one(FieldKind::Minute, minute)?,
            hour: expand_one(FieldKind::Hour, hour)?,
            day_of_month: expand_one(FieldKind::DayOfMonth, day_of_month)?,
            month: expand_one(FieldKind::Month, month)?,
            day_of_week: expand_one(FieldKind::DayOfWeek, day_of_week)?,
            command: parts[5].to_string(),
        })
    }

    /// The expanded fields, in expression order.
    pub fn fields(&self) -> [(FieldKind, &[String]); 5] {
        [
            (FieldKind::Minute, self.minute.as_slice()),
            (FieldKind::Hour, self.hour.as_slice()),
            (FieldKind::DayOfMonth, self.day_of_month.as_slice()),
            (FieldKind::Month, self.month.as_slice()),
            (FieldKind::DayOfWeek, self.day_of_week.as_slice()),
        ]
    }
}

/// Split a five-field schedule (no command) on whitespace.
pub fn split_fields(schedule: &str) -> Result<[&str; 5], ExpressionError> {
    let fields: Vec<&str> = schedule.split_whitespace().collect();
    match fields.as_slice() {
        [a, b, c, d, e] => Ok([*a, *b, *c, *d, *e]),
        _ => Err(ExpressionError::FieldCount(fields.len())),
    }
}

fn expand_one(kind: FieldKind, raw: &str) -> Result<Vec<String>, ExpressionError> {
    let values = kind.expand(raw).map_err(|source| ExpressionError::Field {
        field: kind,
        raw: raw.to_string(),
        source,
    })?;

    TraceEvent::FieldExpanded {
        field: kind.label().to_string(),
        raw: raw.to_string(),
        values: values.len(),
    }
    .emit();

    Ok(values)
}

fn error_chain(err: &ExpressionError) -> String {
    match err {
        ExpressionError::Field { source, .. } => format!("{err}: {source}"),
        _ => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ExpandError};

    fn strings(values: &[i32]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn range(lo: i32, hi: i32) -> Vec<String> {
        (lo..=hi).map(|v| v.to_string()).collect()
    }

    // ── Field splitting ──────────────────────────────────────────────

    #[test]
    fn split_accepts_five_fields() {
        assert_eq!(
            split_fields("*/15 0 1,15 * 1-5").unwrap(),
            ["*/15", "0", "1,15", "*", "1-5"]
        );
        assert!(split_fields("a b c d e").is_ok());
    }

    #[test]
    fn split_rejects_wrong_count() {
        for (input, count) in [("", 0), ("a b c", 3), ("a b c d e f", 6)] {
            let err = split_fields(input).unwrap_err();
            assert_eq!(err, ExpressionError::FieldCount(count));
            assert_eq!(
                err.to_string(),
                format!("invalid cron expression: expected 5 fields, got {count}")
            );
        }
    }

    // ── Parsing ──────────────────────────────────────────────────────

    #[test]
    fn parses_reference_line() {
        let expr = CronExpression::parse("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
        assert_eq!(expr.minute, strings(&[0, 15, 30, 45]));
        assert_eq!(expr.hour, strings(&[0]));
        assert_eq!(expr.day_of_month, strings(&[1, 15]));
        assert_eq!(expr.month, range(1, 12));
        assert_eq!(expr.day_of_week, strings(&[1, 2, 3, 4, 5]));
        assert_eq!(expr.command, "/usr/bin/find");
    }

    #[test]
    fn command_keeps_spaces() {
        let expr = CronExpression::parse("0 0 * * * /bin/echo hello world").unwrap();
        assert_eq!(expr.command, "/bin/echo hello world");
    }

    #[test]
    fn explicit_full_ranges() {
        let expr = CronExpression::parse("0-59 0-23 1-31 1-12 0-6 /command").unwrap();
        assert_eq!(expr.minute, range(0, 59));
        assert_eq!(expr.hour, range(0, 23));
        assert_eq!(expr.day_of_month, range(1, 31));
        assert_eq!(expr.month, range(1, 12));
        assert_eq!(expr.day_of_week, range(0, 6));
    }

    #[test]
    fn all_wildcards() {
        let expr = CronExpression::parse("* * * * * /command").unwrap();
        assert_eq!(expr.minute, range(0, 59));
        assert_eq!(expr.day_of_week, range(0, 6));
    }

    #[test]
    fn step_values() {
        let expr = CronExpression::parse("*/15 */6 */10 */2 */2 /command").unwrap();
        assert_eq!(expr.minute, strings(&[0, 15, 30, 45]));
        assert_eq!(expr.hour, strings(&[0, 6, 12, 18]));
        assert_eq!(expr.day_of_month, strings(&[1, 11, 21, 31]));
        assert_eq!(expr.month, strings(&[1, 3, 5, 7, 9, 11]));
        assert_eq!(expr.day_of_week, strings(&[0, 2, 4, 6]));
    }

    #[test]
    fn mixed_lists_and_ranges() {
        let expr = CronExpression::parse(
            "0,15-30,45 5,9-11,14 1-10,15,20-25 1,6-8,11 0,3-5,7 /command",
        )
        .unwrap();
        let mut minute = strings(&[0]);
        minute.extend(range(15, 30));
        minute.push("45".into());
        assert_eq!(expr.minute, minute);
        assert_eq!(expr.hour, strings(&[5, 9, 10, 11, 14]));
        let mut dom = range(1, 10);
        dom.push("15".into());
        dom.extend(range(20, 25));
        assert_eq!(expr.day_of_month, dom);
        assert_eq!(expr.month, strings(&[1, 6, 7, 8, 11]));
        assert_eq!(expr.day_of_week, strings(&[0, 3, 4, 5]));
    }

    #[test]
    fn stepped_ranges() {
        let expr = CronExpression::parse("0-59/20 0-23/8 1-30/10 1-12/4 0-6/2 /command").unwrap();
        assert_eq!(expr.minute, strings(&[0, 20, 40]));
        assert_eq!(expr.hour, strings(&[0, 8, 16]));
        assert_eq!(expr.day_of_month, strings(&[1, 11, 21]));
        assert_eq!(expr.month, strings(&[1, 5, 9]));
        assert_eq!(expr.day_of_week, strings(&[0, 2, 4, 6]));
    }

    // ── Failures ─────────────────────────────────────────────────────

    #[test]
    fn missing_command_is_incorrect_format() {
        let err = CronExpression::parse("* * * * *").unwrap_err();
        assert_eq!(err, ExpressionError::IncorrectFormat);
    }

    #[test]
    fn collapsed_fields_are_counted() {
        let err = CronExpression::parse("30  10  3 /command").unwrap_err();
        assert_eq!(err, ExpressionError::FieldCount(3));
    }

    #[test]
    fn reports_failing_field() {
        let err = CronExpression::parse("60 12 10 5 3 /command").unwrap_err();
        assert_eq!(err.field(), Some(FieldKind::Minute));
        assert_eq!(err.to_string(), "error in parsing minute field '60'");

        let err = CronExpression::parse("30 14 -1 6 4 /command").unwrap_err();
        assert_eq!(err.field(), Some(FieldKind::DayOfMonth));
    }

    #[test]
    fn first_failing_field_wins() {
        let err = CronExpression::parse("a b c d e /command").unwrap_err();
        match err {
            ExpressionError::Field { field, raw, source } => {
                assert_eq!(field, FieldKind::Minute);
                assert_eq!(raw, "a");
                assert_eq!(source, ExpandError::NotANumber { item: "a".into() });
                assert_eq!(source.kind(), ErrorKind::MalformedToken);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn fields_are_in_expression_order() {
        let expr = CronExpression::parse("1 2 3 4 5 cmd").unwrap();
        let kinds: Vec<FieldKind> = expr.fields().iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, FieldKind::ALL.to_vec());
    }

    #[test]
    fn serializes_to_json() {
        let expr = CronExpression::parse("0 0 1 1 0 /bin/true").unwrap();
        let json = serde_json::to_value(&expr).unwrap();
        assert_eq!(json["minute"], serde_json::json!(["0"]));
        assert_eq!(json["day_of_week"], serde_json::json!(["0"]));
        assert_eq!(json["command"], "/bin/true");
    }
}
