use clap::Parser;
use tracing_subscriber::EnvFilter;

use cp_cli::cli::{self, Cli, Command, ConfigCommand, USAGE};
use cp_domain::config::LoggingConfig;

fn main() {
    let args = Cli::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    match args.command {
        None => {
            let Some(expression) = args.expression else {
                eprintln!("{USAGE}");
                std::process::exit(1);
            };
            let (config, _) = cli::load_config()?;
            init_tracing(&config.logging);
            cli::parse::run(&config, &expression, args.json)
        }
        Some(Command::Field { kind, field, json }) => {
            let (config, _) = cli::load_config()?;
            init_tracing(&config.logging);
            cli::field::run(&config, kind, &field, json)
        }
        Some(Command::Config(ConfigCommand::Validate)) => {
            let (config, config_path) = cli::load_config()?;
            let report = cli::config::validate(&config, &config_path);
            print!("{}", report.render());
            if report.errors() > 0 {
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Command::Config(ConfigCommand::Show)) => {
            let (config, _) = cli::load_config()?;
            cli::config::show(&config)
        }
        Some(Command::Version) => {
            println!("cronparse {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Logging on stderr so stdout carries only results.
///
/// `RUST_LOG` wins over the configured filter; an unparsable configured
/// filter falls back to `warn`.
fn init_tracing(logging: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(&logging.filter).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}
