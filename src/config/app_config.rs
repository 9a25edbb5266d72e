use serde::Deserialize;

/// Application configuration
///
/// Loaded from optional config files plus `APP`-prefixed environment
/// variables. Every section and field is optional; whatever a source
/// omits falls back to the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Listen address for the HTTP server
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Level and output format for the tracing subscriber
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert!(matches!(config.logging.format, LogFormat::Pretty));
    }

    #[test]
    fn test_empty_source_yields_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_section_keeps_remaining_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"server": {"port": 3000}, "logging": {"format": "json"}}"#)
                .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.level, "info");
        assert!(matches!(config.logging.format, LogFormat::Json));
    }

    #[test]
    fn test_log_format_deserialization() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert!(matches!(format, LogFormat::Json));

        let format: LogFormat = serde_json::from_str("\"pretty\"").unwrap();
        assert!(matches!(format, LogFormat::Pretty));
    }
}
