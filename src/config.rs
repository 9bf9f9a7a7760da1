//! Runtime configuration for the mailsort binary.

use crate::error::ConfigError;

/// Default number of messages fetched per run.
const DEFAULT_FETCH_LIMIT: usize = 15;

/// CLI settings, read from environment variables.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Maximum messages to fetch from the source per run.
    pub fetch_limit: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            fetch_limit: DEFAULT_FETCH_LIMIT,
        }
    }
}

impl CliConfig {
    /// Build config from environment variables.
    ///
    /// `MAILSORT_LIMIT` overrides the fetch limit; an unparsable value is an
    /// error rather than a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var("MAILSORT_LIMIT") {
            config.fetch_limit = parse_limit(&raw)?;
        }
        Ok(config)
    }
}

/// Parse a fetch-limit value. Zero is rejected: a run that can fetch
/// nothing is a misconfiguration, not a request.
fn parse_limit(raw: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| ConfigError::InvalidValue {
            key: "MAILSORT_LIMIT".into(),
            message: format!("expected a positive integer, got {raw:?}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limit() {
        assert_eq!(CliConfig::default().fetch_limit, 15);
    }

    #[test]
    fn parses_valid_limits() {
        assert_eq!(parse_limit("5").unwrap(), 5);
        assert_eq!(parse_limit(" 50 ").unwrap(), 50);
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert!(parse_limit("0").is_err());
        assert!(parse_limit("-3").is_err());
        assert!(parse_limit("many").is_err());
        assert!(parse_limit("").is_err());
    }
}
