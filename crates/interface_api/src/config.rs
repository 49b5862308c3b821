//! API configuration

use config::Environment;
use serde::Deserialize;

use core_kernel::{CoreError, Timezone};

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, for terminals
    #[default]
    Pretty,
    /// One JSON object per line, for log shippers
    Json,
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level or `EnvFilter` directive
    pub log_level: String,
    pub log_format: LogFormat,
    /// IANA name of the quoting timezone
    pub timezone: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            timezone: "UTC".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `QUOTE_`-prefixed environment variables
    pub fn from_env() -> Result<Self, CoreError> {
        Self::load(Environment::with_prefix("QUOTE"))
    }

    fn load(environment: Environment) -> Result<Self, CoreError> {
        config::Config::builder()
            .add_source(environment.try_parsing(true))
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|err| CoreError::configuration(err.to_string()))
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parses the configured quoting timezone
    pub fn quoting_timezone(&self) -> Result<Timezone, CoreError> {
        Ok(self.timezone.parse::<Timezone>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn try_load_from(vars: &[(&str, &str)]) -> Result<ApiConfig, CoreError> {
        let source = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::load(Environment::with_prefix("QUOTE").source(Some(source)))
    }

    fn load_from(vars: &[(&str, &str)]) -> ApiConfig {
        try_load_from(vars).unwrap()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load_from(&[]);
        assert_eq!(config.server_addr(), "0.0.0.0:8000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.quoting_timezone().unwrap(), Timezone::default());
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = load_from(&[
            ("QUOTE_PORT", "9090"),
            ("QUOTE_LOG_FORMAT", "json"),
            ("QUOTE_LOG_LEVEL", "debug"),
            ("QUOTE_TIMEZONE", "America/Chicago"),
        ]);

        assert_eq!(config.port, 9090);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.quoting_timezone().unwrap().to_string(), "America/Chicago");
    }

    #[test]
    fn test_unknown_timezone_is_temporal_error() {
        let config = ApiConfig {
            timezone: "Nowhere/Special".to_string(),
            ..ApiConfig::default()
        };
        assert!(matches!(config.quoting_timezone(), Err(CoreError::Temporal(_))));
    }

    #[test]
    fn test_unparseable_port_is_configuration_error() {
        let result = try_load_from(&[("QUOTE_PORT", "eighty")]);
        assert!(matches!(result, Err(CoreError::Configuration(_))));
    }
}
