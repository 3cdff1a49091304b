use crate::config::types::{Config, LimitConfig, OutputConfig, SourceConfig};
use crate::navigator::SelectorSpec;
use crate::ConfigError;
use url::Url;

/// Upper bound accepted for the per-page row caps
const MAX_ROW_CAP: usize = 1000;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_source(&config.source)?;
    validate_selector("selectors.index-table", &config.selectors.index_table)?;
    validate_selector("selectors.detail-table", &config.selectors.detail_table)?;
    validate_limits(&config.limits)?;
    validate_output(&config.output)?;
    Ok(())
}

/// Validates the source index URL
fn validate_source(source: &SourceConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&source.index_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", source.index_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "index-url must use http or https, got scheme '{}'",
            url.scheme()
        )));
    }

    Ok(())
}

/// Validates a single selector descriptor
fn validate_selector(field: &str, selector: &SelectorSpec) -> Result<(), ConfigError> {
    match selector {
        SelectorSpec::Tag(tag) => {
            if tag.trim().is_empty() || tag.contains(char::is_whitespace) {
                return Err(ConfigError::InvalidSelector(format!(
                    "{}: tag name '{}' is not valid",
                    field, tag
                )));
            }
        }
        SelectorSpec::Class(class) => {
            if class.trim().is_empty() || class.contains(char::is_whitespace) {
                return Err(ConfigError::InvalidSelector(format!(
                    "{}: class name '{}' is not valid",
                    field, class
                )));
            }
        }
        SelectorSpec::Path(path) => {
            if scraper::Selector::parse(path).is_err() {
                return Err(ConfigError::InvalidSelector(format!(
                    "{}: '{}' is not a valid CSS path",
                    field, path
                )));
            }
        }
    }
    Ok(())
}

/// Validates row caps and pacing values
fn validate_limits(limits: &LimitConfig) -> Result<(), ConfigError> {
    if limits.max_index_rows < 1 || limits.max_index_rows > MAX_ROW_CAP {
        return Err(ConfigError::Validation(format!(
            "max-index-rows must be between 1 and {}, got {}",
            MAX_ROW_CAP, limits.max_index_rows
        )));
    }

    if limits.max_detail_rows < 1 || limits.max_detail_rows > MAX_ROW_CAP {
        return Err(ConfigError::Validation(format!(
            "max-detail-rows must be between 1 and {}, got {}",
            MAX_ROW_CAP, limits.max_detail_rows
        )));
    }

    if limits.readiness_timeout_ms == 0 {
        return Err(ConfigError::Validation(
            "readiness-timeout-ms must be greater than zero".to_string(),
        ));
    }

    if limits.readiness_poll_ms == 0 {
        return Err(ConfigError::Validation(
            "readiness-poll-ms must be greater than zero".to_string(),
        ));
    }

    if limits.readiness_poll_ms > limits.readiness_timeout_ms {
        return Err(ConfigError::Validation(format!(
            "readiness-poll-ms ({}) must not exceed readiness-timeout-ms ({})",
            limits.readiness_poll_ms, limits.readiness_timeout_ms
        )));
    }

    Ok(())
}

/// Validates the output configuration
fn validate_output(output: &OutputConfig) -> Result<(), ConfigError> {
    if output.dataset_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "dataset-path must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{HttpConfig, SelectorConfig};

    fn valid_config() -> Config {
        Config {
            source: SourceConfig {
                index_url: "https://example.com/index.htm".to_string(),
            },
            selectors: SelectorConfig {
                index_table: SelectorSpec::Class("statistics".to_string()),
                detail_table: SelectorSpec::Path("body > table".to_string()),
            },
            limits: LimitConfig::default(),
            http: HttpConfig::default(),
            output: OutputConfig {
                dataset_path: "./rates.csv".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = valid_config();
        config.source.index_url = "ftp://example.com/index.htm".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_url() {
        let mut config = valid_config();
        config.source.index_url = "not a url".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_rejects_zero_row_cap() {
        let mut config = valid_config();
        config.limits.max_index_rows = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_row_cap() {
        let mut config = valid_config();
        config.limits.max_detail_rows = 10_000;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_zero_readiness_timeout() {
        let mut config = valid_config();
        config.limits.readiness_timeout_ms = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_poll_longer_than_timeout() {
        let mut config = valid_config();
        config.limits.readiness_poll_ms = 5000;
        config.limits.readiness_timeout_ms = 1000;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_empty_class_selector() {
        let mut config = valid_config();
        config.selectors.index_table = SelectorSpec::Class("  ".to_string());
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidSelector(_))
        ));
    }

    #[test]
    fn test_rejects_bad_css_path() {
        let mut config = valid_config();
        config.selectors.detail_table = SelectorSpec::Path("body >>> table".to_string());
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidSelector(_))
        ));
    }

    #[test]
    fn test_rejects_empty_output_path() {
        let mut config = valid_config();
        config.output.dataset_path = "".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }
}
