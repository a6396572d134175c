use std::fmt;

#[derive(Debug, Clone)]
pub enum MockServerError {
    ConfigError(String),
    SignalError(String),
}

impl fmt::Display for MockServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MockServerError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            MockServerError::SignalError(msg) => write!(f, "Signal error: {}", msg),
        }
    }
}

impl std::error::Error for MockServerError {}

impl From<std::num::ParseIntError> for MockServerError {
    fn from(err: std::num::ParseIntError) -> Self {
        MockServerError::ConfigError(err.to_string())
    }
}
