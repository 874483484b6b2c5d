//! CLI configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// File looked up in the working directory when no config is given.
pub const DEFAULT_CONFIG_FILE: &str = "rsb.toml";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Published rate table (CSV)
    pub rates_file: Option<PathBuf>,

    /// Output format when `--format` is not given
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Decimal places for displayed amounts
    #[serde(default = "default_precision")]
    pub precision: u32,
}

fn default_precision() -> u32 {
    2
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            rates_file: None,
            default_format: OutputFormat::default(),
            precision: default_precision(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        if config.precision > 10 {
            return Err(CliError::Config(format!(
                "precision must be at most 10, got {}",
                config.precision
            )));
        }
        Ok(config)
    }

    /// Loads the explicit config if given, else `rsb.toml` in the working
    /// directory if present, else the defaults.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            info!("Loading configuration from {}", path.display());
            return Self::from_file(path);
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            info!("Loading configuration from {}", local.display());
            Self::from_file(local)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.precision, 2);
        assert_eq!(config.default_format, OutputFormat::Table);
    }

    #[test]
    fn test_parse_all_keys() {
        let config: CliConfig = toml::from_str(
            r#"
            rates_file = "data/rsb_rates.csv"
            default_format = "json"
            precision = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.rates_file, Some(PathBuf::from("data/rsb_rates.csv")));
        assert_eq!(config.default_format, OutputFormat::Json);
        assert_eq!(config.precision, 4);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(toml::from_str::<CliConfig>("colour = true").is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/rsb.toml"))).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
