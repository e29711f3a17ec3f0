pub mod config;
pub mod field;
pub mod parse;

use anyhow::Context;
use clap::{Parser, Subcommand};
use cp_domain::config::{Config, CONFIG_ENV, DEFAULT_CONFIG_PATH};
use cp_schedule::FieldKind;

/// Example invocation, printed when no expression is given.
pub const USAGE: &str = "Usage: cronparse \"*/15 0 1,15 * 1-5 /usr/bin/find\"";

/// cronparse — expand cron-style schedule expressions.
#[derive(Debug, Parser)]
#[command(name = "cronparse", version, about, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Schedule line: five fields followed by a command.
    pub expression: Option<String>,

    /// Output JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Expand a single field.
    Field {
        /// minute, hour, day-of-month, month or day-of-week.
        kind: FieldKind,
        /// Field expression, e.g. "*/15" or "1-5".
        #[arg(allow_hyphen_values = true)]
        field: String,
        /// Output a JSON array instead of a single line.
        #[arg(long)]
        json: bool,
    },
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any issues.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

// ── Config loading helper ─────────────────────────────────────────────

/// Load the configuration from the path in `CRONPARSE_CONFIG` (or
/// `cronparse.toml` by default). Returns the parsed [`Config`] and the
/// path that was used.
pub fn load_config() -> anyhow::Result<(Config, String)> {
    let config_path =
        std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());

    let config = Config::load(&config_path).with_context(|| format!("loading {config_path}"))?;

    Ok((config, config_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_expression_parses() {
        let cli = Cli::try_parse_from(["cronparse", "*/15 0 1,15 * 1-5 /usr/bin/find"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.expression.as_deref(), Some("*/15 0 1,15 * 1-5 /usr/bin/find"));
        assert!(!cli.json);
    }

    #[test]
    fn field_subcommand_accepts_hyphen_values() {
        let cli = Cli::try_parse_from(["cronparse", "field", "day-of-month", "-3"]).unwrap();
        match cli.command {
            Some(Command::Field { kind, field, json }) => {
                assert_eq!(kind, FieldKind::DayOfMonth);
                assert_eq!(field, "-3");
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_field_kind_is_rejected() {
        assert!(Cli::try_parse_from(["cronparse", "field", "second", "5"]).is_err());
    }

    #[test]
    fn config_subcommands_parse() {
        let cli = Cli::try_parse_from(["cronparse", "config", "show"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Config(ConfigCommand::Show))));
    }
}
