use std::fmt::Write as _;

use cp_domain::config::{Config, ConfigError, ConfigSeverity};

/// Outcome of `cronparse config validate`.
#[derive(Debug)]
pub struct ValidationReport {
    pub path: String,
    pub issues: Vec<ConfigError>,
}

impl ValidationReport {
    pub fn errors(&self) -> usize {
        self.count(ConfigSeverity::Error)
    }

    pub fn warnings(&self) -> usize {
        self.count(ConfigSeverity::Warning)
    }

    fn count(&self, severity: ConfigSeverity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    /// One block per config section, then a summary line:
    ///
    /// ```text
    /// output:
    ///   [ERROR] output.label_width: label width must be greater than 0
    /// logging: ok
    /// cronparse.toml: 1 error(s), 0 warning(s)
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        for section in Config::SECTIONS {
            let issues: Vec<&ConfigError> = self
                .issues
                .iter()
                .filter(|i| i.section() == section)
                .collect();
            if issues.is_empty() {
                let _ = writeln!(out, "{section}: ok");
                continue;
            }
            let _ = writeln!(out, "{section}:");
            for issue in issues {
                let _ = writeln!(out, "  {issue}");
            }
        }

        if self.issues.is_empty() {
            let _ = writeln!(out, "{}: valid", self.path);
        } else {
            let _ = writeln!(
                out,
                "{}: {} error(s), {} warning(s)",
                self.path,
                self.errors(),
                self.warnings()
            );
        }
        out
    }
}

/// Check the loaded config. Printing and the exit status are left to the
/// caller.
pub fn validate(config: &Config, config_path: &str) -> ValidationReport {
    ValidationReport {
        path: config_path.to_string(),
        issues: config.validate(),
    }
}

/// Dump the resolved config (with all defaults filled in) as TOML.
pub fn show(config: &Config) -> anyhow::Result<()> {
    let output = toml::to_string_pretty(config)
        .map_err(|e| anyhow::anyhow!("failed to serialize config: {e}"))?;
    print!("{output}");
    Ok(())
}
