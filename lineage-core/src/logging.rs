//! Tracing subscriber setup

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `lineage_network=debug`
pub const LOG_ENV_VAR: &str = "LINEAGE_LOG";

/// Install the global tracing subscriber.
///
/// `LINEAGE_LOG` takes precedence over `config.level`. Returns `false` when a
/// subscriber was already installed, which callers may ignore.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    };

    match result {
        Ok(()) => {
            tracing::debug!("Logging initialized (level={}, json={})", config.level, config.json);
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_not_fatal() {
        let config = LoggingConfig::default();
        let _ = init_logging(&config);
        assert!(!init_logging(&config));
    }
}
