use serde::{Deserialize, Serialize};

/// Log filtering for the CLI.
///
/// `filter` is an `EnvFilter` directive string (e.g. `"warn"` or
/// `"warn,cp_schedule=debug"`). A `RUST_LOG` environment variable takes
/// precedence over it. Logs always go to stderr.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "d_filter")]
    pub filter: String,
    /// Emit one JSON object per line instead of compact text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: d_filter(),
            json: false,
        }
    }
}

fn d_filter() -> String {
    "warn".into()
}
