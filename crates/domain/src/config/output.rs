use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Output rendering configuration
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Length of the longest row label (`day of month`).
pub const MIN_LABEL_WIDTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `label values…` row per field.
    #[default]
    Table,
    /// A single JSON object.
    Json,
}

/// How expanded expressions are printed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Column the values start at in table output.
    #[serde(default = "d_label_width")]
    pub label_width: usize,
    /// Placed between expanded values in table output.
    #[serde(default = "d_separator")]
    pub separator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            label_width: d_label_width(),
            separator: d_separator(),
        }
    }
}

fn d_label_width() -> usize {
    14
}

fn d_separator() -> String {
    " ".into()
}
