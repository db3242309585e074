use thiserror::Error;

/// Errors raised while interpreting export request parameters.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The request named a source platform this pipeline does not support.
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// The request named a language with no registered column labels.
    #[error("unsupported report language: {0}")]
    UnsupportedLanguage(String),

    /// The request carried an originator tag outside client/control.
    #[error("unsupported originator: {0}")]
    UnsupportedOriginator(String),
}

/// Errors raised while loading [`crate::AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
