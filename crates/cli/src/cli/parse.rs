use cp_domain::config::{Config, OutputFormat};
use cp_schedule::CronExpression;

use crate::output;

/// Expand a full schedule line and print it.
pub fn run(config: &Config, expression: &str, json: bool) -> anyhow::Result<()> {
    let expr = CronExpression::parse(expression)?;

    let format = if json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    let rendered = match format {
        OutputFormat::Table => output::render_table(&expr, &config.output),
        OutputFormat::Json => output::render_json(&expr)?,
    };
    print!("{rendered}");
    Ok(())
}
