use serde::Serialize;

/// Structured trace events emitted across the CronParse crates.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum TraceEvent {
    FieldExpanded {
        field: String,
        raw: String,
        values: usize,
    },
    ExpressionParsed {
        expression: String,
        command_chars: usize,
        total_values: usize,
    },
    ExpressionRejected {
        expression: String,
        field: Option<String>,
        reason: String,
    },
}

impl TraceEvent {
    pub fn emit(&self) {
        let json = serde_json::to_string(self).unwrap_or_default();
        tracing::info!(trace_event = %json, "cp_event");
    }
}
