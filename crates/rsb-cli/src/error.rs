//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Invalid rate override.
    #[error("Invalid rate: {0}%. Must be between 0 and 100.")]
    InvalidRate(String),

    /// No rate given and no rate file configured.
    #[error("No rate source: pass --rate <percent>, --rates <file> or set rates_file in the config")]
    MissingRateSource,

    /// Date window is empty.
    #[error("Invalid window: --from {from} is after --to {to}")]
    InvalidWindow {
        /// Window start.
        from: String,
        /// Window end.
        to: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CliError::InvalidDate("20/10/2023".into()).to_string(),
            "Invalid date format: 20/10/2023. Use YYYY-MM-DD."
        );
        assert!(CliError::MissingRateSource.to_string().contains("--rates"));
    }
}
