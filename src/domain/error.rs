use std::io;

use thiserror::Error;

/// Library-wide error type for promptdeck operations.
///
/// Prompt assembly itself never fails; these errors come from loading topic
/// libraries, reading configuration and interpreting user input.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A topic `config.json` could not be parsed.
    #[error("Invalid topic config at {path}: {reason}")]
    InvalidTopicConfig { path: String, reason: String },

    /// An asset key does not follow the `./prompts/{topic}/{file}` layout.
    #[error("Invalid asset path '{0}': expected ./prompts/<topic>/<file>")]
    InvalidAssetPath(String),

    /// An asset is not valid UTF-8 text.
    #[error("Asset '{0}' is not valid UTF-8")]
    NonUtf8Asset(String),

    /// Topic not present in the registry.
    #[error("Topic '{0}' not found")]
    TopicNotFound(String),

    /// Prompt generation was requested without any topic.
    #[error("No topics selected")]
    NoTopicsSelected,

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) | AppError::NoTopicsSelected => io::ErrorKind::InvalidInput,
            AppError::TopicNotFound(_) => io::ErrorKind::NotFound,
            AppError::InvalidTopicConfig { .. }
            | AppError::InvalidAssetPath(_)
            | AppError::NonUtf8Asset(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidData,
        }
    }
}
