use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Date/time parse error: {0}")]
    TimeParseError(#[from] chrono::ParseError),

    #[error("Invalid JSON input")]
    InvalidJsonInput,

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ToolError>;
