use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("No snippet titled '{0}'")]
    UnknownSnippet(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ShowcaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ConfigError::Invalid("default_tab must name a tab".into());
        assert!(err.to_string().contains("default_tab"));

        let err = ShowcaseError::UnknownSnippet("Foo.java".into());
        assert_eq!(err.to_string(), "No snippet titled 'Foo.java'");
    }

    #[test]
    fn error_conversion() {
        let config_err = ConfigError::Invalid("test".into());
        let err: ShowcaseError = config_err.into();
        assert!(matches!(err, ShowcaseError::Config(_)));

        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "no tty");
        let err: ShowcaseError = io_err.into();
        assert!(matches!(err, ShowcaseError::Terminal(_)));
    }
}
