use anyhow::Context;
use cp_domain::config::{Config, OutputFormat};
use cp_schedule::FieldKind;

/// Expand one field and print its values on a single line.
pub fn run(config: &Config, kind: FieldKind, field: &str, json: bool) -> anyhow::Result<()> {
    let values = kind
        .expand(field)
        .with_context(|| format!("error in parsing {kind} field '{field}'"))?;

    tracing::debug!(field = %kind, raw = field, values = values.len(), "expanded single field");

    if json || config.output.format == OutputFormat::Json {
        println!("{}", serde_json::to_string(&values)?);
    } else {
        println!("{}", values.join(config.output.separator.as_str()));
    }
    Ok(())
}
