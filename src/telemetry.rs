//! Logging setup for the binary
//!
//! Logs go to stderr so stdout can carry the enriched CSV.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },

    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Build the log filter from `RUST_LOG`, falling back to `log_level`
pub fn env_filter(log_level: &str) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(log_level).map_err(|source| TelemetryError::EnvFilter {
            value: log_level.to_string(),
            source,
        }),
    }
}

/// Install the global fmt subscriber
pub fn init(log_level: &str) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_accepts_directives() {
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(env_filter("payroll_insurance_enricher=debug,warn").is_ok());
        }
    }

    #[test]
    fn test_env_filter_rejects_garbage() {
        if std::env::var_os("RUST_LOG").is_none() {
            let err = env_filter("payroll=loud").unwrap_err();
            assert!(err
                .to_string()
                .contains("invalid log level/filter 'payroll=loud'"));
        }
    }
}
