//! Rendering of expanded expressions.

use cp_domain::config::OutputConfig;
use cp_schedule::CronExpression;

/// One row per field plus a `command` row:
///
/// ```text
/// minute        0 15 30 45
/// hour          0
/// ```
pub fn render_table(expr: &CronExpression, cfg: &OutputConfig) -> String {
    let mut out = String::new();
    for (kind, values) in expr.fields() {
        push_row(&mut out, kind.label(), &values.join(cfg.separator.as_str()), cfg.label_width);
    }
    push_row(&mut out, "command", &expr.command, cfg.label_width);
    out
}

/// Pretty-printed JSON object keyed by field.
pub fn render_json(expr: &CronExpression) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(expr)? + "\n")
}

fn push_row(out: &mut String, label: &str, value: &str, width: usize) {
    out.push_str(&format!("{label:<width$}{value}\n"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> CronExpression {
        CronExpression::parse("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap()
    }

    #[test]
    fn table_matches_classic_layout() {
        let table = render_table(&reference(), &OutputConfig::default());
        let expected = "\
minute        0 15 30 45
hour          0
day of month  1 15
month         1 2 3 4 5 6 7 8 9 10 11 12
day of week   1 2 3 4 5
command       /usr/bin/find
";
        assert_eq!(table, expected);
    }

    #[test]
    fn table_honours_width_and_separator() {
        let cfg = OutputConfig {
            label_width: 16,
            separator: ",".into(),
            ..OutputConfig::default()
        };
        let table = render_table(&reference(), &cfg);
        assert!(table.starts_with("minute          0,15,30,45\n"));
        assert!(table.ends_with("command         /usr/bin/find\n"));
    }

    #[test]
    fn narrow_width_does_not_truncate_labels() {
        let cfg = OutputConfig {
            label_width: 4,
            ..OutputConfig::default()
        };
        let table = render_table(&reference(), &cfg);
        assert!(table.contains("day of month1 15\n"));
    }

    #[test]
    fn json_contains_every_field() {
        let json = render_json(&reference()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["minute"], serde_json::json!(["0", "15", "30", "45"]));
        assert_eq!(value["day_of_month"], serde_json::json!(["1", "15"]));
        assert_eq!(value["command"], "/usr/bin/find");
    }
}
