use crate::chunk::ChunkOptions;
use crate::config::types::CrawlerConfig;
use crate::ConfigError;
use scraper::Selector;

/// Validates the entire configuration
pub fn validate(config: &CrawlerConfig) -> Result<(), ConfigError> {
    validate_timeouts(config)?;
    validate_selector(&config.content_selector)?;
    validate_user_agent(&config.user_agent)?;
    validate_chunking(&config.chunking)?;
    Ok(())
}

/// Validates timeout values
fn validate_timeouts(config: &CrawlerConfig) -> Result<(), ConfigError> {
    // max_pages needs no check; 0 means unlimited

    if config.fetch_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "fetch-timeout-secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "connect-timeout-secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates the content selector as a CSS selector
fn validate_selector(selector: &str) -> Result<(), ConfigError> {
    if selector.is_empty() {
        return Err(ConfigError::Validation(
            "content-selector cannot be empty".to_string(),
        ));
    }

    if Selector::parse(selector).is_err() {
        return Err(ConfigError::Validation(format!(
            "content-selector '{}' is not a valid CSS selector",
            selector
        )));
    }

    Ok(())
}

/// Validates the user agent string
fn validate_user_agent(user_agent: &str) -> Result<(), ConfigError> {
    if user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    // Header values must stay in the visible ASCII range
    if !user_agent
        .chars()
        .all(|c| c.is_ascii() && !c.is_ascii_control())
    {
        return Err(ConfigError::Validation(format!(
            "user-agent '{}' contains characters not allowed in a header value",
            user_agent
        )));
    }

    Ok(())
}

/// Validates chunking parameters
fn validate_chunking(options: &ChunkOptions) -> Result<(), ConfigError> {
    if options.chunk_size == 0 {
        return Err(ConfigError::Validation(
            "chunk-size must be >= 1".to_string(),
        ));
    }

    if options.chunk_overlap >= options.chunk_size {
        return Err(ConfigError::Validation(format!(
            "chunk-overlap must be smaller than chunk-size, got {} >= {}",
            options.chunk_overlap, options.chunk_size
        )));
    }

    Ok(())
}
