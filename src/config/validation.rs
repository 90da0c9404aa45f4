use crate::config::types::{Config, CrawlerConfig, FilterConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_filter_config(&config.filter)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max-pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request-timeout-secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates filter configuration
fn validate_filter_config(config: &FilterConfig) -> Result<(), ConfigError> {
    for host in &config.denied_hosts {
        if host.trim().is_empty() {
            return Err(ConfigError::Validation(
                "denied-hosts entries cannot be empty".to_string(),
            ));
        }

        if host.contains(char::is_whitespace) {
            return Err(ConfigError::Validation(format!(
                "denied-hosts entry '{}' must not contain whitespace",
                host
            )));
        }
    }

    Ok(())
}
