//! Tracing/logging initialization.
//!
//! `RUST_LOG` drives filtering; `BEAMLINE_LOG_FORMAT` picks the output format.

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "BEAMLINE_LOG_FORMAT";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parse a format name; unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "compact" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Filter used when `RUST_LOG` is unset or invalid.
    pub default_filter: String,
    /// Format value that could not be parsed, kept so it can be reported once
    /// a subscriber is installed.
    pub rejected_format: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            default_filter: "info".to_string(),
            rejected_format: None,
        }
    }
}

impl LogConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_format_value(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
    }

    /// Build a configuration from the raw `BEAMLINE_LOG_FORMAT` value.
    pub fn from_format_value(value: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = value {
            match LogFormat::parse(raw) {
                Some(format) => config.format = format,
                None => config.rejected_format = Some(raw.to_string()),
            }
        }
        config
    }

    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    // Logs go to stderr so reports written to stdout stay clean.
    let _ = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Text => builder.compact().try_init(),
    };

    if let Some(raw) = &config.rejected_format {
        ::tracing::warn!(value = %raw, "unknown {LOG_FORMAT_ENV}; using text logs");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!(LogFormat::parse("json"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse(" JSON "), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse("text"), Some(LogFormat::Text));
        assert_eq!(LogFormat::parse("xml"), None);
    }

    #[test]
    fn missing_value_uses_defaults() {
        assert_eq!(LogConfig::from_format_value(None), LogConfig::default());
    }

    #[test]
    fn unknown_value_falls_back_and_is_remembered() {
        let config = LogConfig::from_format_value(Some("yaml"));
        assert_eq!(config.format, LogFormat::Text);
        assert_eq!(config.rejected_format.as_deref(), Some("yaml"));
    }

    #[test]
    fn default_filter_can_be_raised() {
        let config = LogConfig::default().with_default_filter("debug");
        assert_eq!(config.default_filter, "debug");
    }

    #[test]
    fn init_twice_is_a_no_op() {
        let config = LogConfig::default();
        init(&config);
        init(&config);
    }
}
